// ABOUTME: Integration tests for intelligence configuration loading and validation
// ABOUTME: Exercises environment overrides, validation failures, and their effect on plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, male_fat_loss_profile};
use pierre_nutrition::nutrition_intelligence::ConfigError;
use pierre_nutrition::services::NutritionService;
use pierre_nutrition::{AppError, ErrorCode, IntelligenceConfig};
use serial_test::serial;
use std::env;

fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    for (name, value) in vars {
        env::set_var(name, value);
    }
    let result = f();
    for (name, _) in vars {
        env::remove_var(name);
    }
    result
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = IntelligenceConfig::default();

    assert!(config.validate().is_ok());
    assert!((config.tracking.suggestions.weight_sum() - 1.0).abs() < 1e-9);
    assert_eq!(config.tracking.weight_trend.short_window_days, 7);
    assert_eq!(config.tracking.weight_trend.long_window_days, 30);
}

#[test]
fn test_validation_rejects_unordered_activity_factors() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.activity_factors.light = 1.9;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_validation_rejects_unbalanced_suggestion_weights() {
    let mut config = IntelligenceConfig::default();
    config.tracking.suggestions.calorie_weight = 0.9;

    let err = config.validate().unwrap_err();
    let app_error: AppError = err.into();

    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert_eq!(app_error.http_status(), 500);
}

#[test]
fn test_validation_rejects_inverted_weight_windows() {
    let mut config = IntelligenceConfig::default();
    config.tracking.weight_trend.short_window_days = 45;

    assert!(config.validate().is_err());
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[test]
#[serial]
fn test_env_override_changes_plan() {
    init_test_logging();

    let config = with_env(&[("NUTRITION_GOAL_FAT_LOSS_FACTOR", "0.85")], || {
        IntelligenceConfig::load().unwrap()
    });
    let service = NutritionService::new(config);

    let plan = service.nutrition_plan(&male_fat_loss_profile()).unwrap();

    assert_eq!(plan.tdee, 2595);
    assert_eq!(plan.target_calories, 2206);
    assert!(plan.explanation.calories.contains("15% calorie deficit"));
}

#[test]
#[serial]
fn test_env_override_suggestion_limit() {
    let config = with_env(&[("NUTRITION_SUGGESTION_DEFAULT_LIMIT", "3")], || {
        IntelligenceConfig::load().unwrap()
    });

    assert_eq!(config.tracking.suggestions.default_limit, 3);
}

#[test]
#[serial]
fn test_unparseable_env_value_is_rejected() {
    let result = with_env(&[("NUTRITION_PROTEIN_DEFAULT_G_PER_KG", "lots")], IntelligenceConfig::load);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_env_value_fails_validation() {
    let result = with_env(&[("NUTRITION_FAT_PERCENT_DEFAULT", "75")], IntelligenceConfig::load);

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_nan_env_values_are_rejected() {
    let goal = with_env(&[("NUTRITION_GOAL_FAT_LOSS_FACTOR", "NaN")], IntelligenceConfig::load);
    let weight = with_env(
        &[("NUTRITION_SUGGESTION_CALORIE_WEIGHT", "NaN")],
        IntelligenceConfig::load,
    );
    let activity = with_env(&[("NUTRITION_ACTIVITY_ACTIVE", "nan")], IntelligenceConfig::load);

    assert!(matches!(goal, Err(ConfigError::ValueOutOfRange(_))));
    assert!(matches!(weight, Err(ConfigError::InvalidWeights(_))));
    assert!(activity.is_err());
}

#[test]
#[serial]
fn test_env_override_protein_density_bonus() {
    let config = with_env(
        &[("NUTRITION_SUGGESTION_PROTEIN_DENSITY_BONUS", "0.1")],
        || IntelligenceConfig::load().unwrap(),
    );

    assert!((config.tracking.suggestions.protein_density_bonus - 0.1).abs() < f64::EPSILON);

    let out_of_range = with_env(
        &[("NUTRITION_SUGGESTION_PROTEIN_DENSITY_BONUS", "1.5")],
        IntelligenceConfig::load,
    );
    assert!(matches!(out_of_range, Err(ConfigError::ValueOutOfRange(_))));
}
