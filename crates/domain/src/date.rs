use chrono::NaiveDate;

/// Whole calendar days from `today` until `date`.
///
/// Both sides are calendar dates, so the value is what
/// `ceil((date at midnight - today at midnight) / 1 day)` gives and does not
/// depend on the time of day the caller looked at the clock. Negative when
/// `date` is in the past.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}
