//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Sun, 06 Nov 1994 08:49:37 GMT`
///
/// ## Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(), "Tue, 01 Jan 2019 00:00:00 GMT"; "new year")]
    #[test_case(Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap(), "Sun, 06 Nov 1994 08:49:37 GMT"; "rfc 7231 example")]
    fn test_format_http_date(input: DateTime, expected: &str) {
        assert_eq!(format_http_date(input), expected);
    }
}
