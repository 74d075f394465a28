//! Conversion between the two date shapes the remote API and the forms use:
//! `DD/MM/YYYY` and ISO-like `YYYY-MM-DD[Thh:mm:ss...]`.
//!
//! The conversion is purely textual. Components are moved, never parsed, so
//! no calendar validation happens and no timezone is considered.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("Date format is invalid: {input:?} contains neither '/' nor '-'")]
    NoSeparator { input: String },

    #[error("Date format is invalid: {input:?} has no {component} component")]
    MissingComponent {
        input: String,
        component: &'static str,
    },
}

/// Flip a date string between `DD/MM/YYYY` and `YYYY-MM-DD`.
///
/// Branch order matters for strings holding both separators:
///
/// 1. `strip_time` and a `-` present: ISO to `DD/MM/YYYY`, time dropped
/// 2. a `/` present: `DD/MM/YYYY` to `YYYY-MM-DD`
/// 3. a `-` present: ISO to `DD/MM/YYYY`, time dropped
/// 4. otherwise [`DateFormatError::NoSeparator`]
///
/// Branches 1 and 3 are the same conversion, so they are folded into one
/// test below. The ISO path always drops the time part, which makes
/// `strip_time` matter only when the input also contains a `/`.
///
/// ```
/// use pantry_core::normalize_date;
///
/// assert_eq!(normalize_date("2024-04-03", false).unwrap(), "03/04/2024");
/// assert_eq!(normalize_date("03/04/2024", false).unwrap(), "2024-04-03");
/// assert_eq!(normalize_date("2024-04-03T10:00:00Z", true).unwrap(), "03/04/2024");
/// assert!(normalize_date("20240403", false).is_err());
/// ```
pub fn normalize_date(input: &str, strip_time: bool) -> Result<String, DateFormatError> {
    let has_slash = input.contains('/');
    let has_hyphen = input.contains('-');

    if has_hyphen && (strip_time || !has_slash) {
        iso_to_display(input)
    } else if has_slash {
        display_to_iso(input)
    } else {
        Err(DateFormatError::NoSeparator {
            input: input.to_owned(),
        })
    }
}

/// `YYYY-MM-DD[T...]` to `DD/MM/YYYY`.
fn iso_to_display(input: &str) -> Result<String, DateFormatError> {
    let date_part = input.split('T').next().unwrap_or(input);
    let [year, month, day] = components(input, date_part, '-', ["year", "month", "day"])?;
    Ok(format!("{day}/{month}/{year}"))
}

/// `DD/MM/YYYY` to `YYYY-MM-DD`.
fn display_to_iso(input: &str) -> Result<String, DateFormatError> {
    let [day, month, year] = components(input, input, '/', ["day", "month", "year"])?;
    Ok(format!("{year}-{month}-{day}"))
}

/// First three `sep`-separated pieces of `part`; extra pieces are ignored.
fn components<'a>(
    input: &str,
    part: &'a str,
    sep: char,
    names: [&'static str; 3],
) -> Result<[&'a str; 3], DateFormatError> {
    let mut pieces = part.split(sep);
    let mut out = [""; 3];
    for (slot, name) in out.iter_mut().zip(names) {
        *slot = pieces.next().ok_or_else(|| DateFormatError::MissingComponent {
            input: input.to_owned(),
            component: name,
        })?;
    }
    Ok(out)
}
