//! Creation-date parsing for the `DD.MM.YYYY` format.

use chrono::NaiveDate;

/// Format of the `created` field in the input file.
pub const CREATED_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `DD.MM.YYYY` creation date.
///
/// Returns `None` for anything that is not a real calendar date, including
/// text that is not UTF-8. Such values
/// are never reported as errors; the time comparator sorts them last.
///
/// # Examples
///
/// ```
/// use point_grouper::parsing::date::parse_created_date;
///
/// assert!(parse_created_date("29.02.2020").is_some());
/// assert!(parse_created_date("29.02.2021").is_none());
/// assert!(parse_created_date("2021-02-01").is_none());
/// assert!(parse_created_date(b"01.01.20\xFF").is_none());
/// ```
pub fn parse_created_date<T: AsRef<[u8]>>(value: T) -> Option<NaiveDate> {
    let text = std::str::from_utf8(value.as_ref()).ok()?;
    NaiveDate::parse_from_str(text.trim(), CREATED_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_created_date("05.11.2021").unwrap();
        assert_eq!(date.day(), 5);
        assert_eq!(date.month(), 11);
        assert_eq!(date.year(), 2021);
    }

    #[test]
    fn test_parse_single_digit_fields() {
        assert_eq!(
            parse_created_date("1.2.2020"),
            NaiveDate::from_ymd_opt(2020, 2, 1)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_created_date("").is_none());
        assert!(parse_created_date("yesterday").is_none());
        assert!(parse_created_date("32.01.2020").is_none());
        assert!(parse_created_date("01.13.2020").is_none());
    }
}
