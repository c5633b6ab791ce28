// ABOUTME: Daily logging streak tracking over the persisted StreakState record
// ABOUTME: Records one transition per logging action and builds read-only streak views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak Tracker
//!
//! Streak decay is lazy: a missed day is only noticed when the user logs
//! again. Reading a streak never changes it.

use chrono::NaiveDate;
use nutrition_core::models::{StreakState, StreakTransition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Record a food logging action on `date`
///
/// Must be called exactly once per logging action, including batch logging
/// of a meal preset.
pub fn record_log(state: &mut StreakState, date: NaiveDate) -> StreakTransition {
    let transition = state.record_log_for_today(date);

    debug!(
        streak.transition = transition.as_str(),
        streak.current = state.current_streak,
        streak.longest = state.longest_streak,
        streak.total_days = state.total_days_logged,
        "Recorded food logging day"
    );

    transition
}

/// Display view of a streak as of a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStatus {
    /// Stored state, unchanged
    pub state: StreakState,
    /// Whether logging today keeps the streak going
    pub is_active: bool,
    /// Whether a log was already recorded today
    pub logged_today: bool,
}

/// Build the read-only view of `state` for `today`
#[must_use]
pub fn streak_status(state: &StreakState, today: NaiveDate) -> StreakStatus {
    StreakStatus {
        state: *state,
        is_active: state.is_alive_on(today),
        logged_today: state.last_logged_date == Some(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_preset_batch_counts_once() {
        let mut state = StreakState::default();

        // one action, several items: the caller records once
        record_log(&mut state, day(4));
        assert_eq!(record_log(&mut state, day(4)), StreakTransition::AlreadyLogged);

        assert_eq!(state.total_days_logged, 1);
        assert_eq!(state.current_streak, 1);
    }

    #[test]
    fn test_status_does_not_mutate() {
        let mut state = StreakState::default();
        record_log(&mut state, day(1));
        record_log(&mut state, day(2));
        let before = state;

        let status = streak_status(&state, day(9));

        assert!(!status.is_active);
        assert!(!status.logged_today);
        assert_eq!(status.state.current_streak, 2);
        assert_eq!(state, before);
    }
}
