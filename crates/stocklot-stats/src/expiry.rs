//! Parsing of the `"Mon-YY"` batch expiry notation.

use chrono::NaiveDate;

/// Parses a batch expiry string such as `"Feb-30"` into the first day of
/// that month (February 2030). Month abbreviations are case-exact; the
/// two-digit year is interpreted as `2000 + YY`. Returns `None` for
/// anything malformed.
pub fn parse_expiry(value: &str) -> Option<NaiveDate> {
    let (month, year) = value.split_once('-')?;
    let month = month_number(month)?;
    let year: i32 = year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, 1)
}

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}
