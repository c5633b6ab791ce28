// ABOUTME: Daily food logging streak state and its transition outcomes
// ABOUTME: StreakState is the one mutable record, changed once per logging action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Persisted streak counters for one user
///
/// Callers persist this record and must serialize updates per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive days with at least one log, ending at `last_logged_date`
    pub current_streak: u32,
    /// Longest streak ever recorded, never below `current_streak`
    pub longest_streak: u32,
    /// Distinct calendar days with at least one log
    pub total_days_logged: u32,
    /// Last day a log was recorded
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_logged_date: Option<NaiveDate>,
}

impl StreakState {
    /// Apply one food logging action made on `date`
    ///
    /// Idempotent for repeated calls on the same day. Dates before the last
    /// logged day leave the state untouched.
    pub fn record_log_for_today(&mut self, date: NaiveDate) -> StreakTransition {
        let transition = match self.last_logged_date {
            None => StreakTransition::Started,
            Some(last) if date == last => return StreakTransition::AlreadyLogged,
            Some(last) if date < last => return StreakTransition::Ignored,
            Some(last) if date - last == Duration::days(1) => StreakTransition::Extended,
            Some(_) => StreakTransition::Restarted,
        };

        self.current_streak = match transition {
            StreakTransition::Extended => self.current_streak.saturating_add(1),
            _ => 1,
        };
        self.total_days_logged = self.total_days_logged.saturating_add(1);
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_logged_date = Some(date);

        transition
    }

    /// Whether the streak can still be extended on `today`
    ///
    /// True when the last log was today or yesterday. Does not modify the state.
    #[must_use]
    pub fn is_alive_on(&self, today: NaiveDate) -> bool {
        self.last_logged_date
            .is_some_and(|last| last <= today && today - last <= Duration::days(1))
    }
}

/// What a single `record_log_for_today` call did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// First log ever
    Started,
    /// A log was already recorded for this day, nothing changed
    AlreadyLogged,
    /// Logged the day after the previous log, streak grew by one
    Extended,
    /// Logged after missing at least one day, streak restarted at one
    Restarted,
    /// Date is earlier than the last logged day, nothing changed
    Ignored,
}

impl StreakTransition {
    /// Whether the state was modified and needs to be persisted
    #[must_use]
    pub const fn changed_state(self) -> bool {
        matches!(self, Self::Started | Self::Extended | Self::Restarted)
    }

    /// Identifier used in log events
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::AlreadyLogged => "already_logged",
            Self::Extended => "extended",
            Self::Restarted => "restarted",
            Self::Ignored => "ignored",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_first_log_starts_streak() {
        let mut state = StreakState::default();

        assert_eq!(state.record_log_for_today(day(1)), StreakTransition::Started);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 1);
        assert_eq!(state.total_days_logged, 1);
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let mut state = StreakState::default();
        state.record_log_for_today(day(1));
        let before = state;

        assert_eq!(state.record_log_for_today(day(1)), StreakTransition::AlreadyLogged);
        assert_eq!(state, before);
    }

    #[test]
    fn test_gap_restarts_and_keeps_longest() {
        let mut state = StreakState::default();
        for d in 1..=3 {
            state.record_log_for_today(day(d));
        }
        assert_eq!(state.current_streak, 3);

        assert_eq!(state.record_log_for_today(day(5)), StreakTransition::Restarted);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 3);
        assert_eq!(state.total_days_logged, 4);
    }

    #[test]
    fn test_earlier_date_is_ignored() {
        let mut state = StreakState::default();
        state.record_log_for_today(day(10));
        let before = state;

        assert_eq!(state.record_log_for_today(day(8)), StreakTransition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_is_alive_on() {
        let mut state = StreakState::default();
        assert!(!state.is_alive_on(day(1)));

        state.record_log_for_today(day(1));
        assert!(state.is_alive_on(day(1)));
        assert!(state.is_alive_on(day(2)));
        assert!(!state.is_alive_on(day(3)));
    }
}
