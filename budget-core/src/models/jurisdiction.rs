use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// An independent taxing authority with its own bracket table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jurisdiction {
    Federal,
    State,
    Local,
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::State => "state",
            Self::Local => "local",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "federal" => Some(Self::Federal),
            "state" => Some(Self::State),
            "local" => Some(Self::Local),
            _ => None,
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single layer of a progressive tax table.
///
/// `upper_bound` is the *width* of the income layer taxed at `rate`, not an
/// absolute income ceiling. `None` marks the unbounded top layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl Bracket {
    pub const fn new(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Reasons a bracket table is rejected by [`JurisdictionTable::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("{0} table has no brackets")]
    Empty(Jurisdiction),

    #[error("{0} table must end with an unbounded bracket")]
    MissingUnboundedBracket(Jurisdiction),

    #[error("{jurisdiction} bracket {index} is unbounded but is not the last bracket")]
    UnboundedNotLast {
        jurisdiction: Jurisdiction,
        index: usize,
    },

    #[error("{jurisdiction} bracket {index} bound {bound} must be positive and above the previous bound")]
    BoundNotIncreasing {
        jurisdiction: Jurisdiction,
        index: usize,
        bound: Decimal,
    },

    #[error("{jurisdiction} bracket {index} rate {rate} is outside 0..=1")]
    RateOutOfRange {
        jurisdiction: Jurisdiction,
        index: usize,
        rate: Decimal,
    },
}

/// An ordered, immutable bracket table for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisdictionTable {
    jurisdiction: Jurisdiction,
    brackets: Cow<'static, [Bracket]>,
}

impl JurisdictionTable {
    /// Validates and wraps a bracket table.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if the table is empty, does not end with
    /// exactly one unbounded bracket, has bounds that are not strictly
    /// increasing, or has a rate outside `0..=1`.
    pub fn new(
        jurisdiction: Jurisdiction,
        brackets: impl Into<Cow<'static, [Bracket]>>,
    ) -> Result<Self, BracketTableError> {
        let brackets = brackets.into();
        validate(jurisdiction, &brackets)?;
        Ok(Self {
            jurisdiction,
            brackets,
        })
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }
}

fn validate(
    jurisdiction: Jurisdiction,
    brackets: &[Bracket],
) -> Result<(), BracketTableError> {
    let Some(last) = brackets.last() else {
        return Err(BracketTableError::Empty(jurisdiction));
    };
    if last.upper_bound.is_some() {
        return Err(BracketTableError::MissingUnboundedBracket(jurisdiction));
    }

    let mut previous = Decimal::ZERO;
    for (index, bracket) in brackets.iter().enumerate() {
        if !(Decimal::ZERO..=Decimal::ONE).contains(&bracket.rate) {
            return Err(BracketTableError::RateOutOfRange {
                jurisdiction,
                index,
                rate: bracket.rate,
            });
        }
        match bracket.upper_bound {
            None if index + 1 < brackets.len() => {
                return Err(BracketTableError::UnboundedNotLast {
                    jurisdiction,
                    index,
                });
            }
            None => {}
            Some(bound) if bound <= previous => {
                return Err(BracketTableError::BoundNotIncreasing {
                    jurisdiction,
                    index,
                    bound,
                });
            }
            Some(bound) => previous = bound,
        }
    }

    Ok(())
}
