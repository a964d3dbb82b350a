use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rent-to-income rule: annual gross income must be at least this many
/// times the monthly rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RentRule {
    #[default]
    #[serde(rename = "30x")]
    ThirtyX,
    #[serde(rename = "40x")]
    FortyX,
}

impl RentRule {
    pub fn multiplier(&self) -> u32 {
        match self {
            Self::ThirtyX => 30,
            Self::FortyX => 40,
        }
    }

    pub fn from_multiplier(multiplier: u32) -> Option<Self> {
        match multiplier {
            30 => Some(Self::ThirtyX),
            40 => Some(Self::FortyX),
            _ => None,
        }
    }
}

impl fmt::Display for RentRule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

/// Outcome of a rent affordability check.
///
/// `required_income` is `None` when the inputs were missing or the rent was
/// zero, in which case the verdict is unknown and `is_valid` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffordabilityCheck {
    pub is_valid: bool,
    pub threshold_multiplier: u32,
    pub required_income: Option<Decimal>,
}

impl AffordabilityCheck {
    pub fn unknown(rule: RentRule) -> Self {
        Self {
            is_valid: false,
            threshold_multiplier: rule.multiplier(),
            required_income: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.required_income.is_some()
    }
}

impl fmt::Display for AffordabilityCheck {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let verdict = if self.is_valid { "satisfies" } else { "does not satisfy" };
        write!(
            f,
            "Your income {verdict} the {}x rule",
            self.threshold_multiplier
        )
    }
}
