use rust_decimal::Decimal;

/// Per-jurisdiction breakdown of the tax owed on a gross annual income.
///
/// `total_tax` is the sum of the three jurisdiction amounts and
/// `net_income` is `gross_income - total_tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaxResult {
    pub gross_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub local_tax: Decimal,
    pub total_tax: Decimal,
    pub net_income: Decimal,
}

impl TaxResult {
    /// The all-zero result returned for non-positive income.
    pub const ZERO: TaxResult = TaxResult {
        gross_income: Decimal::ZERO,
        federal_tax: Decimal::ZERO,
        state_tax: Decimal::ZERO,
        local_tax: Decimal::ZERO,
        total_tax: Decimal::ZERO,
        net_income: Decimal::ZERO,
    };

    /// Tax as a share of gross income, in percent. Zero when there is no income.
    pub fn effective_rate(&self) -> Decimal {
        if self.gross_income > Decimal::ZERO {
            self.total_tax / self.gross_income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}
