// ABOUTME: Nutrition intelligence algorithms for planning and daily tracking
// ABOUTME: Metabolic calculator, daily aggregation, weight trends, streaks, and food suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Intelligence
//!
//! Pure computations over data the caller has already fetched. Nothing in
//! this crate performs I/O or reads the clock; "now" and calendar dates are
//! always arguments.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR, TDEE, goal calories, macros, micronutrients
//! - **`food_logging`**: create, edit and delete food log entries
//! - **`daily_aggregator`**: meal buckets, daily totals and remaining macros
//! - **`weight_trend`**: moving averages and trend classification
//! - **`streak_tracker`**: daily logging streak transitions
//! - **`food_suggestions`**: ranks foods against the remaining budget
//! - **config**: tunable constants with environment overrides

/// Intelligence configuration
pub mod config;

/// Daily aggregation of food log entries
pub mod daily_aggregator;

/// Food log entry creation, editing and deletion
pub mod food_logging;

/// Food suggestion scoring
pub mod food_suggestions;

/// Metabolic calculator
pub mod nutrition_calculator;

/// Daily logging streak tracking
pub mod streak_tracker;

/// Weight trend analysis
pub mod weight_trend;

pub use config::intelligence::{ConfigError, IntelligenceConfig};
pub use daily_aggregator::{
    calculate_remaining, daily_nutrient_progress, day_bounds, entries_for_day, summarize_day,
    DailySummary, MealBuckets,
};
pub use food_logging::{delete_log, log_food, log_preset, update_log, LogUpdate};
pub use food_suggestions::{rank_foods, score_food, FoodSuggestion};
pub use nutrition_calculator::{
    calculate_bmr, calculate_calories_from_steps, calculate_macros,
    calculate_micronutrient_targets, calculate_nutrient_percentages, calculate_nutrition_plan,
    calculate_target_calories, calculate_tdee,
};
pub use streak_tracker::{record_log, streak_status, StreakStatus};
pub use weight_trend::{analyze_weight_trend, entries_in_lookback, TrendDirection, WeightTrend};
