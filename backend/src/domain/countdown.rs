//! Countdown to the goal deadline.
//!
//! The engine is pure: callers feed it the current time on every tick and the
//! frontend owns the actual interval timer, dropping it once the engine
//! reports [`CountdownState::Passed`].

use chrono::{DateTime, Utc};
use shared::CountdownValue;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Counting,
    /// Terminal: the deadline is behind us and ticking should stop
    Passed,
}

#[derive(Debug, Clone)]
pub struct CountdownEngine {
    target: DateTime<Utc>,
    state: CountdownState,
    current: CountdownValue,
}

impl CountdownEngine {
    /// Create an engine and compute its first value right away
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let current = calculate_time_remaining(target, now);
        let state = if current.passed {
            CountdownState::Passed
        } else {
            CountdownState::Counting
        };
        Self {
            target,
            state,
            current,
        }
    }

    /// Recompute the remaining time. Once passed, the engine stays passed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownState {
        if self.state == CountdownState::Passed {
            return self.state;
        }
        self.current = calculate_time_remaining(self.target, now);
        if self.current.passed {
            self.state = CountdownState::Passed;
        }
        self.state
    }

    pub fn current(&self) -> &CountdownValue {
        &self.current
    }

    pub fn is_passed(&self) -> bool {
        self.state == CountdownState::Passed
    }
}

/// Split the time left until `target` into zero-padded components
pub fn calculate_time_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownValue {
    let remaining = (target - now).num_milliseconds();
    if remaining < 0 {
        return CountdownValue::passed();
    }

    CountdownValue {
        days: pad(remaining / MS_PER_DAY),
        hours: pad((remaining % MS_PER_DAY) / MS_PER_HOUR),
        minutes: pad((remaining % MS_PER_HOUR) / MS_PER_MINUTE),
        seconds: pad((remaining % MS_PER_MINUTE) / MS_PER_SECOND),
        passed: false,
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_decomposition() {
        let now = at(1_000_000);
        let target = now + Duration::days(123) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);

        let value = calculate_time_remaining(target, now);
        assert_eq!(value.days, "123");
        assert_eq!(value.hours, "04");
        assert_eq!(value.minutes, "05");
        assert_eq!(value.seconds, "06");
        assert!(!value.passed);
    }

    #[test]
    fn test_exact_deadline_is_still_counting() {
        let value = calculate_time_remaining(at(500), at(500));
        assert_eq!(value.seconds, "00");
        assert!(!value.passed);
    }

    #[test]
    fn test_sub_second_remainder_is_truncated() {
        let now = at(0);
        let target = now + Duration::milliseconds(1_999);
        assert_eq!(calculate_time_remaining(target, now).seconds, "01");
    }

    #[test]
    fn test_ticks_until_passed() {
        let start = at(2_000_000);
        let target = start + Duration::seconds(10);
        let mut engine = CountdownEngine::new(target, start);
        assert_eq!(engine.current().seconds, "10");

        let mut states = Vec::new();
        for tick in 1..=11 {
            states.push(engine.tick(start + Duration::seconds(tick)));
        }

        assert!(states[..10].iter().all(|state| *state == CountdownState::Counting));
        assert_eq!(states[10], CountdownState::Passed);
        assert_eq!(engine.current(), &CountdownValue::passed());
    }

    #[test]
    fn test_passed_is_terminal() {
        let mut engine = CountdownEngine::new(at(100), at(200));
        assert!(engine.is_passed());
        assert_eq!(engine.current().days, "00");

        assert_eq!(engine.tick(at(50)), CountdownState::Passed);
        assert!(engine.current().passed);
    }
}
