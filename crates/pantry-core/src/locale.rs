//! Parsing of locale-formatted numbers (`.` thousands, `,` decimal), as typed
//! into the registration form's income field.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Not a number: {input:?} (expected e.g. \"1.234,56\")")]
pub struct LocaleNumberError {
    pub input: String,
}

/// Parse `"1.234,56"` as `1234.56`.
///
/// Every `.` is dropped as a thousands separator and the `,` becomes the
/// decimal point. Surrounding whitespace is ignored.
pub fn parse_locale_number(input: &str) -> Result<f64, LocaleNumberError> {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    normalized
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| LocaleNumberError {
            input: input.to_owned(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn thousands_and_decimal() {
        assert_eq!(parse_locale_number("1.234,56").unwrap(), 1234.56);
    }

    #[test]
    fn millions() {
        assert_eq!(parse_locale_number("1.000.000,5").unwrap(), 1_000_000.5);
    }

    #[test]
    fn plain_integer_and_whitespace() {
        assert_eq!(parse_locale_number(" 2500 ").unwrap(), 2500.0);
        assert_eq!(parse_locale_number("0,75").unwrap(), 0.75);
    }

    #[test]
    fn dot_is_never_a_decimal_point() {
        assert_eq!(parse_locale_number("1.5").unwrap(), 15.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_locale_number("").is_err());
        assert!(parse_locale_number("abc").is_err());
        assert!(parse_locale_number("1,2,3").is_err());
        assert!(parse_locale_number("inf").is_err());
    }
}
