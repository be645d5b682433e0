//! Number parsing and formatting
//!
//! Cells hold raw text; the resolver and the renderer both need to decide
//! whether a cell is numeric and how a number is written back out. Numbers
//! are single precision throughout.
//!
//! Formatting follows a fixed textual contract:
//! - whole numbers keep a trailing `.0` (`3.0`, not `3`)
//! - magnitudes in `[1e-3, 1e7)` are written in plain decimal (`11.25`)
//! - everything else uses scientific notation with an upper-case `E`
//!   (`1.0E7`, `2.5E-4`)
//! - non-finite values are `NaN`, `Infinity` and `-Infinity`

/// Parse a decimal floating-point literal.
///
/// Leading and trailing whitespace is ignored. A decimal may carry one type
/// suffix (`f`, `F`, `d` or `D`). Besides plain decimals and exponent forms,
/// only the exact spellings `NaN` and `Infinity` (optionally signed) are
/// accepted; words like `inf` or `nan` are treated as text.
///
/// ```
/// use pipesheet_core::number::parse_number;
///
/// assert_eq!(parse_number(" 1.5 "), Some(1.5));
/// assert_eq!(parse_number("2e3"), Some(2000.0));
/// assert_eq!(parse_number("3f"), Some(3.0));
/// assert_eq!(parse_number("Total:"), None);
/// assert_eq!(parse_number("inf"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f32> {
    let text = text.trim_matches(|c: char| c <= ' ');

    match text {
        "NaN" | "+NaN" | "-NaN" => return Some(f32::NAN),
        "Infinity" | "+Infinity" => return Some(f32::INFINITY),
        "-Infinity" => return Some(f32::NEG_INFINITY),
        _ => {}
    }

    let text = text
        .strip_suffix(|c: char| matches!(c, 'f' | 'F' | 'd' | 'D'))
        .unwrap_or(text);

    if text
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }

    text.parse().ok()
}

/// Format a number using the cell text convention.
///
/// ```
/// use pipesheet_core::number::format_number;
///
/// assert_eq!(format_number(3.0), "3.0");
/// assert_eq!(format_number(11.25), "11.25");
/// assert_eq!(format_number(1.0e7), "1.0E7");
/// ```
pub fn format_number(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1.0e-3..1.0e7).contains(&magnitude) {
        // Debug keeps the trailing ".0" on whole numbers
        return format!("{:?}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => formatted,
    }
}
