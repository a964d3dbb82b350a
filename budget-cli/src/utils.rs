use budget_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Trims whitespace and strips a leading `$` and any thousands separators.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .replace(',', "")
}

/// Parses a command-line money value into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and a leading `$`.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses a form field into an optional amount.
///
/// Returns `None` for empty input and for anything that is not a finite
/// decimal number (partial entries such as `"-"`, or `"NaN"`), logging a
/// warning in the latter case.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::warn!(input = %s, "ignoring unparseable amount: {}", e);
                None
            },
            Some,
        )
    }
}

/// Formats money with exactly two decimal places.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Formats an optional value for display, using "—" when `None`.
pub fn opt_decimal_display(d: Option<Decimal>) -> String {
    d.map(format_money).unwrap_or_else(|| "—".to_string())
}
