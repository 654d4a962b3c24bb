/// Countdown to the voting deadline
///
/// The snapshot is a pure decomposition of (deadline - now); the ticking
/// itself is driven by an iced time subscription in main.rs, which is only
/// returned while `is_running()` holds so the recurring trigger is released
/// as soon as the deadline passes.

use chrono::{DateTime, Utc};

/// Remaining time split into display units.
/// Hours stay in 0..24, minutes and seconds in 0..60; days are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownSnapshot {
    /// Decompose the remaining duration between `now` and `deadline`.
    /// A deadline in the past yields the all-zero snapshot, never
    /// negative components.
    pub fn between(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (deadline - now).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }

        CountdownSnapshot {
            days: remaining / 86_400,
            hours: (remaining / 3_600) % 24,
            minutes: (remaining / 60) % 60,
            seconds: remaining % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Ticking countdown state owned by the app
#[derive(Debug, Clone)]
pub struct Countdown {
    deadline: DateTime<Utc>,
    current: CountdownSnapshot,
}

impl Countdown {
    /// Start a countdown towards `deadline`, computing the first snapshot
    /// immediately so the display is never stale on first render.
    pub fn new(deadline: DateTime<Utc>) -> Self {
        Countdown {
            deadline,
            current: CountdownSnapshot::between(deadline, Utc::now()),
        }
    }

    /// Refresh the snapshot against the current wall clock
    pub fn tick(&mut self) {
        self.current = CountdownSnapshot::between(self.deadline, Utc::now());
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        self.current
    }

    /// Whether the one-second trigger should stay subscribed
    pub fn is_running(&self) -> bool {
        !self.current.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 20, 23, 59, 59).unwrap()
    }

    #[test]
    fn test_five_seconds_left() {
        let deadline = instant();
        let now = deadline - Duration::seconds(5);
        assert_eq!(
            CountdownSnapshot::between(deadline, now),
            CountdownSnapshot {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_full_decomposition() {
        // 90061 s = 1 day, 1 hour, 1 minute, 1 second
        let deadline = instant();
        let now = deadline - Duration::seconds(90_061);
        assert_eq!(
            CountdownSnapshot::between(deadline, now),
            CountdownSnapshot {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_past_deadline_clamps_to_zero() {
        let deadline = instant();
        let now = deadline + Duration::seconds(10);
        let snapshot = CountdownSnapshot::between(deadline, now);
        assert!(snapshot.is_zero());
    }

    #[test]
    fn test_exact_deadline_is_zero() {
        let deadline = instant();
        assert!(CountdownSnapshot::between(deadline, deadline).is_zero());
    }

    #[test]
    fn test_components_stay_in_range() {
        let deadline = instant();
        for offset in [1, 59, 60, 3_599, 3_600, 86_399, 86_400, 1_000_000] {
            let snapshot =
                CountdownSnapshot::between(deadline, deadline - Duration::seconds(offset));
            assert!((0..24).contains(&snapshot.hours));
            assert!((0..60).contains(&snapshot.minutes));
            assert!((0..60).contains(&snapshot.seconds));
            assert!(snapshot.days >= 0);
        }
    }

    #[test]
    fn test_running_stops_at_deadline() {
        let countdown = Countdown::new(Utc::now() - Duration::seconds(1));
        assert!(!countdown.is_running());

        let countdown = Countdown::new(Utc::now() + Duration::days(1));
        assert!(countdown.is_running());
    }
}
