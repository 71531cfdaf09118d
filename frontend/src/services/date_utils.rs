use chrono::{DateTime, NaiveDate, Utc};
use js_sys::Date;

/// Current instant from the browser clock
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Date::now() as i64).unwrap_or_default()
}

/// Today's calendar date in UTC, the day new entries default to
pub fn today() -> NaiveDate {
    now_utc().date_naive()
}
