//! Cell formatting for merge tokens.

use crate::dataset::CellValue;

/// Magnitude at or above which a numeric value is treated as an opaque
/// identifier rather than a quantity.
const IDENTIFIER_THRESHOLD: f64 = 1e12;
const IDENTIFIER_THRESHOLD_INT: u64 = 1_000_000_000_000;

/// Format one cell into its merge token.
///
/// Pure function from a single cell to a display string, no cross-row
/// state:
///
/// - empty cells produce empty text;
/// - numerics at identifier magnitude render as their full decimal digit
///   sequence (no grouping, no exponent, no fractional part);
/// - smaller numerics render as currency: `$` plus the value at exactly
///   two fractional digits, sign before the dollar sign, half-to-even
///   rounding;
/// - text that itself starts with `$` is re-parsed and normalized to the
///   same currency form when the remainder is a number;
/// - all other text passes through untouched, whitespace included.
pub fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Int(n) => {
            if n.unsigned_abs() >= IDENTIFIER_THRESHOLD_INT {
                n.to_string()
            } else {
                format_currency(*n as f64)
            }
        }
        CellValue::Number(x) => {
            if x.abs() >= IDENTIFIER_THRESHOLD {
                format!("{:.0}", x.trunc())
            } else {
                format_currency(*x)
            }
        }
        CellValue::Text(s) => format_text(s),
    }
}

/// Render a currency token: `$` plus the value at two fractional digits.
fn format_currency(value: f64) -> String {
    let magnitude = value.abs();
    if value < 0.0 {
        format!("-${:.2}", magnitude)
    } else {
        format!("${:.2}", magnitude)
    }
}

/// Re-parse `$`-prefixed text as a decimal number and normalize it.
/// Anything that does not parse to a finite number passes through as-is,
/// malformed amounts included.
fn format_text(text: &str) -> String {
    if let Some(rest) = text.trim_start().strip_prefix('$') {
        if let Ok(value) = rest.trim().parse::<f64>() {
            if value.is_finite() {
                return format_currency(value);
            }
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        assert_eq!(format_cell(&CellValue::Empty), "");
    }

    #[test]
    fn test_identifier_magnitude_integers() {
        assert_eq!(
            format_cell(&CellValue::Int(123456789012345)),
            "123456789012345"
        );
        assert_eq!(
            format_cell(&CellValue::Int(-123456789012345)),
            "-123456789012345"
        );
        // Exactly at the threshold counts as an identifier.
        assert_eq!(
            format_cell(&CellValue::Int(1_000_000_000_000)),
            "1000000000000"
        );
    }

    #[test]
    fn test_identifier_magnitude_floats_drop_the_fraction() {
        assert_eq!(
            format_cell(&CellValue::Number(1234567890123.75)),
            "1234567890123"
        );
        assert_eq!(
            format_cell(&CellValue::Number(-1234567890123.75)),
            "-1234567890123"
        );
    }

    #[test]
    fn test_currency_rounding() {
        assert_eq!(format_cell(&CellValue::Number(19.999)), "$20.00");
        assert_eq!(format_cell(&CellValue::Number(3.0)), "$3.00");
        assert_eq!(format_cell(&CellValue::Int(5)), "$5.00");
    }

    #[test]
    fn test_currency_rounds_half_to_even() {
        // 0.125 and 0.375 are exact in binary, so these pin the rounding
        // mode rather than binary representation noise.
        assert_eq!(format_cell(&CellValue::Number(0.125)), "$0.12");
        assert_eq!(format_cell(&CellValue::Number(0.375)), "$0.38");
    }

    #[test]
    fn test_negative_currency_sign_precedes_dollar() {
        assert_eq!(format_cell(&CellValue::Number(-3.1)), "-$3.10");
        assert_eq!(format_cell(&CellValue::Int(-2)), "-$2.00");
    }

    #[test]
    fn test_currency_text_is_normalized() {
        assert_eq!(format_cell(&CellValue::Text("$3.5".to_string())), "$3.50");
        assert_eq!(
            format_cell(&CellValue::Text("  $ 12.5".to_string())),
            "$12.50"
        );
        assert_eq!(
            format_cell(&CellValue::Text("$-3.1".to_string())),
            "-$3.10"
        );
    }

    #[test]
    fn test_malformed_currency_text_passes_through() {
        assert_eq!(format_cell(&CellValue::Text("$abc".to_string())), "$abc");
        assert_eq!(format_cell(&CellValue::Text("$".to_string())), "$");
        assert_eq!(
            format_cell(&CellValue::Text("$1,000".to_string())),
            "$1,000"
        );
        assert_eq!(format_cell(&CellValue::Text("$inf".to_string())), "$inf");
    }

    #[test]
    fn test_plain_text_keeps_whitespace() {
        assert_eq!(
            format_cell(&CellValue::Text("  hello ".to_string())),
            "  hello "
        );
    }
}
