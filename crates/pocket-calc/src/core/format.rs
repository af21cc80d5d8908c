//! Conversions between display text and numbers

use super::{CalcError, CalcResult, ERROR_MARKER};

/// Formats a result for the display.
///
/// Uses positional notation with the shortest digits that round-trip, so
/// the output only ever contains an optional minus sign, digits and at most
/// one decimal point. Negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Reads the display back as a number.
///
/// Returns `None` for the error marker or anything that is not a plain
/// decimal numeral. A numeral too large for `f64` gives
/// [`CalcError::Overflow`].
#[must_use]
pub fn parse_display(display: &str) -> Option<CalcResult<f64>> {
    let unsigned = display.strip_prefix('-').unwrap_or(display);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value = display.parse::<f64>().ok()?;
    if value.is_finite() {
        Some(Ok(value))
    } else {
        Some(Err(CalcError::Overflow))
    }
}
