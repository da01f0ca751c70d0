//! Numeric cleaning.
//!
//! Cleaning functions return the text left to parse. An empty result means
//! the field was blank; callers decide whether blank is zero or missing.

/// Parses a cleaned string as f64. `NaN` is rejected.
pub fn parse_f64(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|parsed| !parsed.is_nan())
}

/// `" 55.2% "` → `"55.2"`.
pub fn clean_percentage(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix('%')
        .map_or(trimmed, str::trim_end)
}

/// `"+3.2pp"` → `"3.2"`, `"-0.5pp"` → `"-0.5"`.
///
/// Drops the `pp` unit, then every character other than ASCII digits, `.`
/// and `-`.
pub fn clean_delta(raw: &str) -> String {
    raw.trim()
        .replace("pp", "")
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_strips_sign_and_whitespace() {
        assert_eq!(clean_percentage(" 55.2% "), "55.2");
        assert_eq!(clean_percentage("55.2 %"), "55.2");
        assert_eq!(clean_percentage("42"), "42");
        assert_eq!(clean_percentage("  "), "");
        assert_eq!(clean_percentage("%"), "");
    }

    #[test]
    fn delta_keeps_sign_digits_and_dot() {
        assert_eq!(clean_delta("+3.2pp"), "3.2");
        assert_eq!(clean_delta("-3.2pp"), "-3.2");
        assert_eq!(clean_delta(" 3pp "), "3");
        assert_eq!(clean_delta("pp"), "");
        assert_eq!(clean_delta("1,2pp"), "12");
    }

    #[test]
    fn parse_rejects_nan() {
        assert_eq!(parse_f64("1.5"), Some(1.5));
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("-"), None);
        assert_eq!(parse_f64(""), None);
    }
}
