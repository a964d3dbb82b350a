//! Net worth from asset and liability balances.

use rust_decimal::Decimal;

use crate::models::{Account, NetWorth};

pub fn net_worth(
    assets: &[Account],
    liabilities: &[Account],
) -> NetWorth {
    let total_assets = sum(assets);
    let total_liabilities = sum(liabilities);

    NetWorth {
        total_assets,
        total_liabilities,
        net_worth: total_assets.saturating_sub(total_liabilities),
    }
}

fn sum(accounts: &[Account]) -> Decimal {
    accounts
        .iter()
        .map(|account| account.value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn net_worth_subtracts_liabilities() {
        let assets = [
            Account::new("Checking", dec!(4200.50)),
            Account::new("Brokerage", dec!(18000)),
        ];
        let liabilities = [Account::new("Student loan", dec!(12500))];

        let result = net_worth(&assets, &liabilities);

        assert_eq!(
            result,
            NetWorth {
                total_assets: dec!(22200.50),
                total_liabilities: dec!(12500),
                net_worth: dec!(9700.50),
            }
        );
    }

    #[test]
    fn net_worth_can_be_negative() {
        let result = net_worth(&[], &[Account::new("Card", dec!(900))]);

        assert_eq!(result.net_worth, dec!(-900));
    }

    #[test]
    fn net_worth_of_nothing_is_zero() {
        assert_eq!(net_worth(&[], &[]), NetWorth::default());
    }
}
