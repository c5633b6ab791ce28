// ABOUTME: Caller-facing nutrition service combining the intelligence components
// ABOUTME: Validates stored profiles, supplies "now", records streaks, and logs domain events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition service
//!
//! Protocol-agnostic entry point used by route handlers. The service holds
//! configuration only: every record it reads is passed in by the caller, and
//! every record it changes is handed back for the caller to persist.

use super::profile_record::UserProfileRecord;
use crate::logging::NutritionLogger;
use chrono::{DateTime, NaiveDate, Utc};
use nutrition_core::errors::AppResult;
use nutrition_core::models::{
    dedupe_catalog, FoodItem, FoodLogEntry, MealPreset, MealType, NutrientTotals, NutritionTargets,
    StreakState, WeightLogEntry,
};
use nutrition_intelligence::config::intelligence::IntelligenceConfig;
use nutrition_intelligence::daily_aggregator::{
    calculate_remaining, daily_nutrient_progress, entries_for_day, summarize_day, DailySummary,
};
use nutrition_intelligence::food_logging::{self, LogUpdate};
use nutrition_intelligence::food_suggestions::{rank_foods, FoodSuggestion};
use nutrition_intelligence::nutrition_calculator::{
    calculate_calories_from_steps, calculate_nutrition_plan,
};
use nutrition_intelligence::streak_tracker::{record_log, streak_status, StreakStatus};
use nutrition_intelligence::weight_trend::{analyze_weight_trend, entries_in_lookback, WeightTrend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Request to log one food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogFoodRequest {
    /// User logging the food
    pub user_id: Uuid,
    /// Number of servings eaten
    pub servings: f64,
    /// Meal slot, unrecognized values are logged as snack
    pub meal_type: MealType,
    /// When the food was eaten, defaults to now
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

/// Nutrition planning and daily tracking service
#[derive(Debug, Clone)]
pub struct NutritionService {
    config: IntelligenceConfig,
}

impl Default for NutritionService {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().clone())
    }
}

// Every operation takes the service receiver so handlers call them uniformly
#[allow(clippy::unused_self)]
impl NutritionService {
    /// Create a service with explicit configuration
    #[must_use]
    pub const fn new(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Calculate nutrition targets for a stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is incomplete or invalid
    pub fn nutrition_plan(&self, record: &UserProfileRecord) -> AppResult<NutritionTargets> {
        let profile = record.to_physical_profile().inspect_err(|e| {
            NutritionLogger::log_profile_rejected(record.user_id, &e.message);
        })?;

        let targets = calculate_nutrition_plan(&profile, &self.config.nutrition);
        NutritionLogger::log_plan_calculated(
            record.user_id,
            profile.fitness_goal.as_str(),
            targets.target_calories,
        );

        Ok(targets)
    }

    /// Log one food and record the day in the user's streak
    ///
    /// # Errors
    ///
    /// Returns an error if the serving count is invalid; the streak is left
    /// untouched in that case
    pub fn log_food(
        &self,
        streak: &mut StreakState,
        food: &FoodItem,
        request: LogFoodRequest,
        now: DateTime<Utc>,
    ) -> AppResult<FoodLogEntry> {
        let entry = food_logging::log_food(
            food,
            request.servings,
            request.meal_type,
            request.logged_at,
            now,
        )?;

        NutritionLogger::log_food_logged(request.user_id, 1, entry.totals.calories);
        Self::record_streak(request.user_id, streak, now);

        Ok(entry)
    }

    /// Log every item of a meal preset as one logging action
    ///
    /// # Errors
    ///
    /// Returns an error if any preset item has an invalid serving count; no
    /// entries are created and the streak is left untouched in that case
    pub fn log_preset(
        &self,
        user_id: Uuid,
        streak: &mut StreakState,
        preset: &MealPreset,
        meal_type: MealType,
        logged_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<FoodLogEntry>> {
        let entries = food_logging::log_preset(preset, meal_type, logged_at, now)?;

        let calories: f64 = entries.iter().map(FoodLogEntry::total_calories).sum();
        NutritionLogger::log_food_logged(user_id, entries.len(), calories);
        if !entries.is_empty() {
            Self::record_streak(user_id, streak, now);
        }

        Ok(entries)
    }

    fn record_streak(user_id: Uuid, streak: &mut StreakState, now: DateTime<Utc>) {
        let transition = record_log(streak, now.date_naive());
        if transition.changed_state() {
            NutritionLogger::log_streak_transition(user_id, transition, streak.current_streak);
        }
    }

    /// Edit a log entry, re-snapshotting totals from `food` when servings change
    ///
    /// # Errors
    ///
    /// Returns an error if `food` is not the entry's food or the servings are invalid
    pub fn update_log(
        &self,
        entry: &FoodLogEntry,
        food: &FoodItem,
        update: LogUpdate,
    ) -> AppResult<FoodLogEntry> {
        let updated = food_logging::update_log(entry, food, update)?;
        NutritionLogger::log_entry_updated(
            updated.id,
            updated.servings,
            updated.totals != entry.totals,
        );
        Ok(updated)
    }

    /// Delete a log entry from a day's entries
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this id
    pub fn delete_log(&self, entries: &mut Vec<FoodLogEntry>, id: Uuid) -> AppResult<FoodLogEntry> {
        let removed = food_logging::delete_log(entries, id)?;
        NutritionLogger::log_entry_deleted(removed.id, entries.len());
        Ok(removed)
    }

    /// Targets for a profile when it is complete
    fn targets_for(&self, record: &UserProfileRecord) -> Option<NutritionTargets> {
        match record.to_physical_profile() {
            Ok(profile) => Some(calculate_nutrition_plan(&profile, &self.config.nutrition)),
            Err(e) => {
                debug!(user.id = %record.user_id, reason = %e.message, "No targets for profile");
                None
            }
        }
    }

    /// Summarize a calendar day (UTC) of food logging
    ///
    /// `entries` may span several days; only those inside the day are used.
    /// `remaining` is absent when there is no complete profile.
    #[must_use]
    pub fn daily_summary(
        &self,
        date: NaiveDate,
        entries: &[FoodLogEntry],
        profile: Option<&UserProfileRecord>,
    ) -> DailySummary {
        let day_entries = entries_for_day(date, entries);
        let targets = profile.and_then(|record| self.targets_for(record));
        summarize_day(date, &day_entries, targets.as_ref())
    }

    /// Percentage of each daily target reached on a day
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is incomplete or invalid
    pub fn nutrient_progress(
        &self,
        date: NaiveDate,
        entries: &[FoodLogEntry],
        profile: &UserProfileRecord,
    ) -> AppResult<BTreeMap<String, i32>> {
        let targets = self.nutrition_plan(profile)?;
        let summary = summarize_day(date, &entries_for_day(date, entries), Some(&targets));
        Ok(daily_nutrient_progress(&summary, &targets))
    }

    /// Record a body weight measurement
    ///
    /// When the new entry is the most recent one, the profile's current
    /// weight is updated as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a positive number
    pub fn log_weight(
        &self,
        profile: &mut UserProfileRecord,
        history: &[WeightLogEntry],
        weight_kg: f64,
        logged_at: DateTime<Utc>,
        note: Option<String>,
    ) -> AppResult<WeightLogEntry> {
        let entry = WeightLogEntry::new(weight_kg, logged_at, note)
            .map_err(|e| e.with_user_id(profile.user_id))?;

        let is_latest = history.iter().all(|prior| prior.logged_at <= entry.logged_at);
        if is_latest {
            profile.weight_kg = Some(entry.weight_kg);
        }

        NutritionLogger::log_weight_logged(profile.user_id, entry.weight_kg, is_latest);
        Ok(entry)
    }

    /// Analyze weight entries over a lookback window ending at `now`
    #[must_use]
    pub fn weight_trend(
        &self,
        entries: &[WeightLogEntry],
        now: DateTime<Utc>,
        lookback_days: Option<u32>,
    ) -> WeightTrend {
        let trend_config = &self.config.tracking.weight_trend;
        let lookback = lookback_days.unwrap_or(trend_config.default_lookback_days);
        let window = entries_in_lookback(entries, now, lookback);
        analyze_weight_trend(&window, now, trend_config)
    }

    /// Suggest foods that fit what is left of the day's budget
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is incomplete or invalid
    pub fn food_suggestions(
        &self,
        date: NaiveDate,
        entries: &[FoodLogEntry],
        profile: &UserProfileRecord,
        catalog: &[FoodItem],
        limit: Option<usize>,
    ) -> AppResult<Vec<FoodSuggestion>> {
        let targets = self.nutrition_plan(profile)?;
        let day_entries = entries_for_day(date, entries);
        let totals: NutrientTotals = day_entries.iter().map(|entry| &entry.totals).sum();
        let remaining = calculate_remaining(&targets, &totals);

        let suggestion_config = &self.config.tracking.suggestions;
        let candidates = dedupe_catalog(catalog.to_vec());
        Ok(rank_foods(
            &remaining,
            &candidates,
            limit.unwrap_or(suggestion_config.default_limit),
            suggestion_config,
        ))
    }

    /// Current streak state, unchanged
    #[must_use]
    pub const fn streak(&self, state: &StreakState) -> StreakState {
        *state
    }

    /// Read-only streak view for `today`
    #[must_use]
    pub fn streak_status(&self, state: &StreakState, today: NaiveDate) -> StreakStatus {
        streak_status(state, today)
    }

    /// Calories burned for a step count reported by a device
    #[must_use]
    pub fn calories_from_steps(&self, steps: u32, weight_kg: f64) -> i32 {
        calculate_calories_from_steps(steps, weight_kg, &self.config.nutrition.activity_energy)
    }
}
