//! Data parsing helpers.
//!
//! Provides functions to parse calendar keys and catalog fields from their
//! string representations.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Range checking is left to the
/// date constructor.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a weekday name case-insensitively, returning its ordinal
/// (1 = Monday … 7 = Sunday).
pub fn parse_weekday_ordinal(s: &str) -> Option<u8> {
    let n = match s.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => 1,
        "tuesday" | "tue" => 2,
        "wednesday" | "wed" => 3,
        "thursday" | "thu" => 4,
        "friday" | "fri" => 5,
        "saturday" | "sat" => 6,
        "sunday" | "sun" => 7,
        _ => return None,
    };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2019-12-25"), Some((2019, 12, 25)));
        assert_eq!(parse_iso_date(" 2020-04-12 "), Some((2020, 4, 12)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2019-12"), None);
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday_ordinal("Sunday"), Some(7));
        assert_eq!(parse_weekday_ordinal("wed"), Some(3));
        assert_eq!(parse_weekday_ordinal("someday"), None);
    }

    proptest! {
        #[test]
        fn iso_keys_split_into_components(y in 0u16..=9999, m in 1u8..=12, d in 1u8..=31) {
            let key = format!("{y:04}-{m:02}-{d:02}");
            prop_assert_eq!(parse_iso_date(&key), Some((y, m, d)));
        }

        #[test]
        fn parsing_never_panics(s in "\\PC*") {
            let _ = parse_iso_date(&s);
            let _ = parse_weekday_ordinal(&s);
        }
    }
}
