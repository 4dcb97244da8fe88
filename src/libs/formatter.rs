//! Display helpers for task listings.
//!
//! Day deltas use floor division of the elapsed seconds, so a task due in
//! three and a half days shows `-4` and one overdue by half a day shows `0`.
//!
//! Timestamps are stored as `YYYY-MM-DD HH:MM:SS` text and compared as text
//! inside SQL, which only orders correctly for four-digit years.

use chrono::{Datelike, NaiveDateTime, TimeDelta};

/// Timestamp layout used both for storage and for display.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_DAY: i64 = 86_400;

/// A task row with every column pre-rendered for the table view.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTask {
    pub id: i64,
    pub description: String,
    /// Whole days since the due date; negative while not yet due.
    pub days_due_elapsed: i64,
    /// `"<created> (<n> days)"`
    pub created: String,
    /// Completion timestamp, empty while open.
    pub completed: String,
    pub comments: String,
}

/// Whole days from `then` to `now`, rounded towards negative infinity.
pub fn days_between(now: NaiveDateTime, then: NaiveDateTime) -> i64 {
    (now - then).num_seconds().div_euclid(SECONDS_PER_DAY)
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Whether `timestamp` renders with a four-digit year.
pub fn is_storable(timestamp: &NaiveDateTime) -> bool {
    (0..=9999).contains(&timestamp.year())
}

/// Earliest creation time inside a window of `days` days ending at `now`.
///
/// `None` when the window reaches past the first storable timestamp, in
/// which case every stored task is inside it.
pub fn window_start(days: u32, now: NaiveDateTime) -> Option<NaiveDateTime> {
    TimeDelta::try_days(days.into())
        .and_then(|delta| now.checked_sub_signed(delta))
        .filter(is_storable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn whole_days_in_the_past() {
        let now = noon();
        assert_eq!(days_between(now, now - TimeDelta::days(2)), 2);
        assert_eq!(days_between(now, now - TimeDelta::hours(47)), 1);
        assert_eq!(days_between(now, now - TimeDelta::hours(1)), 0);
    }

    #[test]
    fn future_dates_round_down() {
        let now = noon();
        assert_eq!(days_between(now, now + TimeDelta::days(4)), -4);
        assert_eq!(days_between(now, now + TimeDelta::days(4) - TimeDelta::seconds(1)), -4);
        assert_eq!(days_between(now, now + TimeDelta::seconds(1)), -1);
    }

    #[test]
    fn timestamps_drop_fractional_seconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 678)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-02 03:04:05");
    }

    #[test]
    fn window_start_counts_back_from_now() {
        let now = noon();
        assert_eq!(window_start(0, now), Some(now));
        assert_eq!(window_start(3, now), Some(now - TimeDelta::days(3)));
    }

    #[test]
    fn huge_windows_are_unbounded() {
        let now = noon();
        assert!(window_start(700_000, now).is_some());
        assert_eq!(window_start(4_000_000, now), None);
        assert_eq!(window_start(u32::MAX, now), None);
    }

    #[test]
    fn storable_years_have_four_digits() {
        let far = NaiveDate::from_ymd_opt(10240, 7, 6).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let before = NaiveDate::from_ymd_opt(-1, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert!(is_storable(&noon()));
        assert!(!is_storable(&far));
        assert!(!is_storable(&before));
    }
}
