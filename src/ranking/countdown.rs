//! Time left until the weekly league reset (Monday 00:00 UTC).

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, NaiveTime, TimeDelta, Utc};
use serde::Serialize;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Whole days and hours until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
}

impl Display for Countdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}д {}ч", self.days, self.hours)
    }
}

/// The first Monday 00:00 UTC strictly after `now`.
///
/// On a Monday this is the following Monday, even at 00:00:00 exactly.
pub fn next_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    let weekday = i64::from(now.weekday().num_days_from_sunday());
    let mut offset = (1 + 7 - weekday) % 7;
    if offset == 0 {
        offset = 7;
    }

    let midnight = now.date_naive().and_time(NaiveTime::default()).and_utc();
    let mut target = midnight + TimeDelta::days(offset);
    if target <= now {
        target += TimeDelta::weeks(1);
    }
    target
}

/// Time until the next reset, rounded up to a whole hour.
///
/// Rounding up keeps "0д 0ч" off the screen while any time is left.
pub fn time_until_reset(now: DateTime<Utc>) -> Countdown {
    let millis = (next_reset(now) - now).num_milliseconds();
    let hours = (millis + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR;
    Countdown {
        days: hours / 24,
        hours: hours % 24,
    }
}

/// [`time_until_reset`] against the system clock.
pub fn time_until_reset_now() -> Countdown {
    time_until_reset(Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    // 2026-10-19 is a Monday.

    #[test]
    fn test_just_after_monday_midnight_is_a_full_week() {
        let now = at(2026, 10, 19, 0, 0, 1);
        assert_eq!(next_reset(now), at(2026, 10, 26, 0, 0, 0));
        assert_eq!(time_until_reset(now).to_string(), "7д 0ч");
    }

    #[test]
    fn test_exactly_monday_midnight_targets_next_week() {
        let now = at(2026, 10, 19, 0, 0, 0);
        assert_eq!(next_reset(now), at(2026, 10, 26, 0, 0, 0));
        assert_eq!(time_until_reset(now).to_string(), "7д 0ч");
    }

    #[test]
    fn test_sunday_late_evening() {
        let now = at(2026, 10, 18, 23, 0, 0);
        assert_eq!(next_reset(now), at(2026, 10, 19, 0, 0, 0));
        assert_eq!(time_until_reset(now).to_string(), "0д 1ч");
    }

    #[test]
    fn test_midweek() {
        let now = at(2026, 10, 21, 12, 30, 0);
        assert_eq!(next_reset(now), at(2026, 10, 26, 0, 0, 0));
        assert_eq!(
            time_until_reset(now),
            Countdown {
                days: 4,
                hours: 12
            }
        );
    }

    #[test]
    fn test_crosses_month_and_year() {
        // Thursday 2026-12-31.
        let now = at(2026, 12, 31, 6, 0, 0);
        assert_eq!(next_reset(now), at(2027, 1, 4, 0, 0, 0));
        assert_eq!(time_until_reset(now).to_string(), "3д 18ч");
    }

    #[test]
    fn test_reset_is_always_a_future_monday() {
        let start = at(2026, 10, 12, 0, 0, 0);
        for step in 0..(14 * 24 * 4) {
            let now = start + TimeDelta::minutes(15 * step);
            let reset = next_reset(now);
            assert!(reset > now);
            assert!(reset - now <= TimeDelta::weeks(1));
            assert_eq!(reset.weekday(), chrono::Weekday::Mon);
            assert_eq!(reset.time(), NaiveTime::default());
        }
    }

    #[test]
    fn test_same_instant_same_string() {
        let now = at(2026, 10, 22, 17, 45, 12);
        assert_eq!(
            time_until_reset(now).to_string(),
            time_until_reset(now).to_string()
        );
    }
}
