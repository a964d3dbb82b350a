use rust_decimal::Decimal;

use crate::calculations::common::months_per_year;

/// How often a line item's amount recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Annual,
    Monthly,
}

impl Period {
    pub fn from_monthly(is_monthly: bool) -> Self {
        if is_monthly { Self::Monthly } else { Self::Annual }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Monthly => "Monthly",
        }
    }

    /// Expresses an annual figure in this period.
    pub fn scale_annual(
        &self,
        annual: Decimal,
    ) -> Decimal {
        match self {
            Self::Annual => annual,
            Self::Monthly => annual / months_per_year(),
        }
    }
}

/// A single budget expense row.
///
/// `amount` is expressed in the item's own period (monthly or annual) and
/// `percentage` is the share of net annual income it represents. Either may
/// be absent while the row is being filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: u64,
    pub name: String,
    pub amount: Option<Decimal>,
    pub percentage: Option<Decimal>,
    pub is_monthly: bool,
}

impl LineItem {
    /// A freshly added, empty monthly row.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            amount: None,
            percentage: None,
            is_monthly: true,
        }
    }

    pub fn named(
        id: u64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ..Self::new(id)
        }
    }

    pub fn period(&self) -> Period {
        Period::from_monthly(self.is_monthly)
    }

    /// The amount as a monthly figure. Absent or non-positive amounts count as zero.
    pub fn monthly_amount(&self) -> Decimal {
        match self.amount {
            Some(amount) if amount > Decimal::ZERO => {
                if self.is_monthly {
                    amount
                } else {
                    amount / months_per_year()
                }
            }
            _ => Decimal::ZERO,
        }
    }
}

/// A single field edit applied to a [`LineItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemEdit {
    Name(String),
    /// New amount as typed; `None` when the input could not be parsed.
    Amount(Option<Decimal>),
    /// New percentage as typed; `None` when the input could not be parsed.
    Percentage(Option<Decimal>),
    IsMonthly(bool),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_item_is_empty_and_monthly() {
        let item = LineItem::new(7);

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "");
        assert_eq!(item.amount, None);
        assert_eq!(item.percentage, None);
        assert!(item.is_monthly);
    }

    #[test]
    fn monthly_amount_keeps_monthly_values() {
        let item = LineItem {
            amount: Some(dec!(250)),
            ..LineItem::new(1)
        };

        assert_eq!(item.monthly_amount(), dec!(250));
    }

    #[test]
    fn monthly_amount_divides_annual_values() {
        let item = LineItem {
            amount: Some(dec!(1200)),
            is_monthly: false,
            ..LineItem::new(1)
        };

        assert_eq!(item.monthly_amount(), dec!(100));
    }

    #[test]
    fn monthly_amount_ignores_absent_and_negative_values() {
        let absent = LineItem::new(1);
        let negative = LineItem {
            amount: Some(dec!(-40)),
            ..LineItem::new(2)
        };

        assert_eq!(absent.monthly_amount(), Decimal::ZERO);
        assert_eq!(negative.monthly_amount(), Decimal::ZERO);
    }

    #[test]
    fn period_scale_annual_divides_for_monthly() {
        assert_eq!(Period::Monthly.scale_annual(dec!(60000)), dec!(5000));
        assert_eq!(Period::Annual.scale_annual(dec!(60000)), dec!(60000));
    }
}
