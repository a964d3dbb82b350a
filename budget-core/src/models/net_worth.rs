use rust_decimal::Decimal;

/// A named asset or liability balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub value: Decimal,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetWorth {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
}
