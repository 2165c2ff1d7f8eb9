use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};

lazy_static::lazy_static! {
    static ref EMAIL: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();
    static ref MOBILE: Regex = Regex::new(r"^1[0-9]{10}$").unwrap();
    static ref PHONE: Regex = Regex::new(r"^([0-9]{3,4}-)?[0-9]{7,8}$").unwrap();
    static ref URL: Regex = Regex::new(r"^https?://").unwrap();
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+\.?[0-9]*$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref DATE: Regex = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap();
    static ref DATE_TIME: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2})$"
    ).unwrap();
}

pub fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Eleven-digit mobile number starting with 1
pub fn is_mobile(s: &str) -> bool {
    MOBILE.is_match(s)
}

/// Landline number with an optional 3-4 digit area code (`0571-88886666`)
pub fn is_phone(s: &str) -> bool {
    PHONE.is_match(s)
}

/// Anything starting with `http://` or `https://`
pub fn is_url(s: &str) -> bool {
    URL.is_match(s)
}

/// Optionally negative decimal; a trailing dot is accepted (`12.`)
pub fn is_number(s: &str) -> bool {
    NUMBER.is_match(s)
}

pub fn is_integer(s: &str) -> bool {
    INTEGER.is_match(s)
}

/// `YYYY-MM-DD` naming a real calendar day
pub fn is_date(s: &str) -> bool {
    DATE.captures(s).is_some_and(|caps| calendar_date(&caps).is_some())
}

/// `YYYY-MM-DD HH:MM:SS` naming a real calendar day and time of day
pub fn is_date_time(s: &str) -> bool {
    DATE_TIME.captures(s).is_some_and(|caps| {
        calendar_date(&caps).is_some()
            && NaiveTime::from_hms_opt(number(&caps, 4), number(&caps, 5), number(&caps, 6))
                .is_some()
    })
}

/// Present and non-empty
pub fn has_length(s: Option<&str>) -> bool {
    s.is_some_and(|s| !s.is_empty())
}

/// Present and not only whitespace
pub fn has_text(s: Option<&str>) -> bool {
    s.is_some_and(|s| !s.trim().is_empty())
}

fn calendar_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year = number(caps, 1) as i32;
    if year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, number(caps, 2), number(caps, 3))
}

// Groups are fixed-width ASCII digits, so parsing cannot fail.
fn number(caps: &Captures<'_>, group: usize) -> u32 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(u32::MAX)
}
