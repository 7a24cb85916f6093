use std::time::{SystemTime, UNIX_EPOCH};

pub const DAY_IN_MILLIS: i64 = 24 * 60 * 60 * 1000;

pub fn current_time_in_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
