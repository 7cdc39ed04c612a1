//! Utility functions and types.

use std::fmt;

/// Redact wraps a secret so that it can be logged without leaking it.
///
/// - Empty input renders as `EMPTY`.
/// - Inputs shorter than 12 bytes render as `***`.
/// - Longer inputs keep their first and last three bytes, e.g. `LTA***xyz`.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        match s.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 || !s.is_char_boundary(3) || !s.is_char_boundary(n - 3) => {
                f.write_str("***")
            }
            n => write!(f, "{}***{}", &s[..3], &s[n - 3..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "EMPTY"; "empty")]
    #[test_case("secret", "***"; "short")]
    #[test_case("LTAI5tAbCdEfGhIj", "LTA***hIj"; "access key id")]
    #[test_case("ééééééééé", "***"; "non ascii boundary")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
        assert_eq!(Redact::from(input).to_string(), expected);
    }

    #[test]
    fn test_redact_option() {
        let token: Option<String> = None;
        assert_eq!(format!("{:?}", Redact::from(&token)), "EMPTY");
    }
}
