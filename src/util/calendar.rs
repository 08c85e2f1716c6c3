use chrono::{Days, Local, NaiveDate};

/// Day key format used for storage and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Step `date` by `n` calendar days (negative steps go back).
/// Saturates at the ends of chrono's supported range.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    let step = Days::new(n.unsigned_abs());
    let stepped = if n >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    stepped.unwrap_or(date)
}

/// Whole days from `other` to `date` (positive when `date` is later)
pub fn diff_days(date: NaiveDate, other: NaiveDate) -> i64 {
    date.signed_duration_since(other).num_days()
}

pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Offset annotation relative to today: `(0)`, `(+3)`, `(-1)`
pub fn delta_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = diff_days(date, today);
    if diff > 0 {
        format!("(+{})", diff)
    } else {
        format!("({})", diff)
    }
}
