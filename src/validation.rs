//! Numeric token validation.
//!
//! A token is accepted only when the whole string parses as one finite
//! floating-point literal. Callers trim surrounding whitespace first.

/// Characters stripped from both ends of a source line before validation.
pub const LINE_TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Parses a trimmed token into a finite `f64`.
///
/// # Arguments
///
/// * `token` - Text already stripped of leading and trailing whitespace
///
/// # Returns
///
/// * `Option<f64>` - The value, or `None` when the token is empty, carries
///   trailing characters, holds more than one number, or is not finite
pub fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }

    // `f64::from_str` rejects leftovers such as "3.14abc" or "1 2" but
    // accepts "inf" and "NaN", and overflows "1e400" to infinity.
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns `true` if `token` is exactly one finite real number.
pub fn is_valid_number(token: &str) -> bool {
    parse_number(token).is_some()
}

/// Strips the characters in [`LINE_TRIM_CHARS`] from both ends of a line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(&LINE_TRIM_CHARS[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scientific_literals() {
        assert!(is_valid_number("1e10"));
        assert!(is_valid_number("-3.5"));
        assert!(is_valid_number("0"));
        assert!(is_valid_number("+7.25"));
        assert_eq!(parse_number("1e10"), Some(1e10));
    }

    #[test]
    fn accepts_padded_token_after_trim() {
        assert!(is_valid_number(trim_line(" 42 ")));
        assert!(is_valid_number(trim_line("\t42\r\n")));
        assert_eq!(parse_number(trim_line("  42  ")), Some(42.0));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("3.14abc"));
        assert!(!is_valid_number("1 2"));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number("12kg"));
    }

    #[test]
    fn rejects_untrimmed_token() {
        assert!(!is_valid_number(" 42 "));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(!is_valid_number("NaN"));
        assert!(!is_valid_number("inf"));
        assert!(!is_valid_number("-infinity"));
        assert!(!is_valid_number("1e400"));
    }

    #[test]
    fn trim_leaves_inner_whitespace() {
        assert_eq!(trim_line("  1 2 \n"), "1 2");
        assert_eq!(trim_line(" \t\r\n"), "");
    }
}
