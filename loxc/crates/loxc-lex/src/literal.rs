//! Numeric literal decoding and display.
//!
//! Both functions are pure functions of their input so the widening and the
//! textual form of numbers can be checked without running the lexer.

/// Decodes a number lexeme into its `f64` value.
///
/// Accepts exactly what the lexer produces for numbers: one or more ASCII
/// digits, optionally followed by `.` and one or more ASCII digits. Anything
/// else (a leading or trailing `.`, signs, exponents) yields `None`.
///
/// # Examples
///
/// ```
/// use loxc_lex::literal::parse_number;
///
/// assert_eq!(parse_number("4"), Some(4.0));
/// assert_eq!(parse_number("123.45"), Some(123.45));
/// assert_eq!(parse_number("4."), None);
/// assert_eq!(parse_number(".5"), None);
/// ```
pub fn parse_number(lexeme: &str) -> Option<f64> {
    let (int_part, frac_part) = match lexeme.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (lexeme, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }

    lexeme.parse::<f64>().ok()
}

/// Formats a number literal value for token output.
///
/// Integral values keep a fractional part (`4` → `4.0`). Values at or above
/// `1e16` or below `1e-4` switch to scientific notation with a signed,
/// two-digit exponent (`1e+16`, `1e-05`).
///
/// # Examples
///
/// ```
/// use loxc_lex::literal::format_number;
///
/// assert_eq!(format_number(4.0), "4.0");
/// assert_eq!(format_number(123.45), "123.45");
/// assert_eq!(format_number(1e16), "1e+16");
/// ```
pub fn format_number(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        },
        None => text,
    }
}
