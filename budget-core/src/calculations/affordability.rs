//! Rent-to-income affordability rule.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AffordabilityCheck, RentRule};

/// Checks whether gross annual income covers `rule.multiplier()` times the
/// monthly rent.
///
/// The verdict is unknown (and `is_valid` false) when either input is
/// missing, the income is zero, or the rent is zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::RentRule;
/// use budget_core::calculations::check_affordability;
///
/// let check = check_affordability(Some(dec!(90000)), Some(dec!(2000)), RentRule::ThirtyX);
/// assert!(check.is_valid);
/// ```
pub fn check_affordability(
    gross_annual_income: Option<Decimal>,
    monthly_rent: Option<Decimal>,
    rule: RentRule,
) -> AffordabilityCheck {
    let (Some(gross), Some(rent)) = (gross_annual_income, monthly_rent) else {
        return AffordabilityCheck::unknown(rule);
    };
    if gross.is_zero() || rent.is_zero() {
        return AffordabilityCheck::unknown(rule);
    }

    let Some(required_income) = rent.checked_mul(Decimal::from(rule.multiplier())) else {
        debug!(%rent, "required income overflowed");
        return AffordabilityCheck {
            is_valid: false,
            threshold_multiplier: rule.multiplier(),
            required_income: Some(Decimal::MAX),
        };
    };

    AffordabilityCheck {
        is_valid: gross >= required_income,
        threshold_multiplier: rule.multiplier(),
        required_income: Some(required_income),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn thirty_x_rule_satisfied() {
        let result = check_affordability(Some(dec!(90000)), Some(dec!(2000)), RentRule::ThirtyX);

        assert_eq!(
            result,
            AffordabilityCheck {
                is_valid: true,
                threshold_multiplier: 30,
                required_income: Some(dec!(60000)),
            }
        );
    }

    #[test]
    fn forty_x_rule_not_satisfied() {
        let result = check_affordability(Some(dec!(50000)), Some(dec!(2000)), RentRule::FortyX);

        assert!(!result.is_valid);
        assert!(result.is_known());
        assert_eq!(result.required_income, Some(dec!(80000)));
    }

    #[test]
    fn income_equal_to_threshold_is_satisfied() {
        let result = check_affordability(Some(dec!(60000)), Some(dec!(2000)), RentRule::ThirtyX);

        assert!(result.is_valid);
    }

    #[test]
    fn zero_rent_is_unknown() {
        for income in [Some(dec!(1000000)), Some(dec!(0)), None] {
            let result = check_affordability(income, Some(dec!(0)), RentRule::FortyX);

            assert_eq!(result, AffordabilityCheck::unknown(RentRule::FortyX));
        }
    }

    #[test]
    fn missing_inputs_are_unknown() {
        assert!(!check_affordability(None, Some(dec!(2000)), RentRule::ThirtyX).is_known());
        assert!(!check_affordability(Some(dec!(90000)), None, RentRule::ThirtyX).is_known());
    }

    #[test]
    fn zero_income_is_unknown() {
        let result = check_affordability(Some(dec!(0)), Some(dec!(2000)), RentRule::ThirtyX);

        assert!(!result.is_known());
        assert!(!result.is_valid);
    }

    #[test]
    fn verdict_message_names_the_rule() {
        let pass = check_affordability(Some(dec!(90000)), Some(dec!(2000)), RentRule::ThirtyX);
        let fail = check_affordability(Some(dec!(50000)), Some(dec!(2000)), RentRule::FortyX);

        assert_eq!(pass.to_string(), "Your income satisfies the 30x rule");
        assert_eq!(fail.to_string(), "Your income does not satisfy the 40x rule");
    }
}
