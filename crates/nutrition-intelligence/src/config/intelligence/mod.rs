// ABOUTME: Intelligence configuration root: nutrition constants and tracking thresholds
// ABOUTME: Loads defaults, applies NUTRITION_* environment overrides, and validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! Every numeric constant used by the calculator, the weight trend analyzer
//! and the suggestion scorer lives here. `IntelligenceConfig::default()` is
//! the reference configuration; deployments may override individual values
//! through `NUTRITION_*` environment variables.

/// Configuration error types
pub mod error;
/// Metabolic and macro calculation constants
pub mod nutrition;
/// Weight trend and suggestion scoring settings
pub mod tracking;

pub use error::ConfigError;
pub use nutrition::{
    ActivityEnergyConfig, ActivityFactorsConfig, BmrConfig, GoalCalorieFactorsConfig,
    MacronutrientConfig, MicronutrientConfig, NutritionConfig,
};
pub use tracking::{SuggestionConfig, TrackingConfig, WeightTrendConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Tolerance when checking that suggestion weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// NaN passes every range comparison below, so non-finite values are checked first
fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Nutrition planning constants
    pub nutrition: NutritionConfig,
    /// Daily tracking thresholds
    pub tracking: TrackingConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_tracking()
    }

    /// Validate nutrition configuration
    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        let bmr = &nutr.bmr;
        if !all_finite(&[
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
        ]) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR coefficients must be finite numbers",
            ));
        }
        if bmr.msj_weight_coef <= 0.0 || bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        let activity = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ];
        if !all_finite(&activity) || factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &nutr.goal_calorie_factors;
        let goal_factors = [
            goals.muscle_gain,
            goals.fat_loss,
            goals.endurance,
            goals.sport_specific,
            goals.maintenance,
        ];
        if !all_finite(&goal_factors) || goal_factors.iter().any(|f| *f <= 0.0 || *f > 2.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Goal calorie factors must be in (0, 2]",
            ));
        }

        let macros = &nutr.macronutrients;
        let protein = [
            macros.protein_muscle_gain_g_per_kg,
            macros.protein_fat_loss_g_per_kg,
            macros.protein_endurance_g_per_kg,
            macros.protein_sport_specific_g_per_kg,
            macros.protein_default_g_per_kg,
        ];
        if protein.iter().any(|p| !(0.5..=3.5).contains(p)) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein recommendations must be between 0.5 and 3.5 g/kg",
            ));
        }
        if !(10.0..=50.0).contains(&macros.fat_percent_default)
            || !(10.0..=50.0).contains(&macros.fat_percent_endurance)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Fat percentage must be between 10 and 50",
            ));
        }

        let per_step = nutr.activity_energy.kcal_per_step_per_kg;
        if !per_step.is_finite() || per_step < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calories per step must not be negative",
            ));
        }

        Ok(())
    }

    /// Validate tracking configuration
    fn validate_tracking(&self) -> Result<(), ConfigError> {
        let trend = &self.tracking.weight_trend;
        if trend.short_window_days == 0 || trend.long_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight trend windows must be at least one day",
            ));
        }
        if trend.short_window_days > trend.long_window_days {
            return Err(ConfigError::InvalidRange(
                "Short weight window must not exceed the long window",
            ));
        }
        if trend.default_lookback_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default weight lookback must be at least one day",
            ));
        }
        if !trend.stable_tolerance_kg.is_finite() || trend.stable_tolerance_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Stable weight tolerance must be a non-negative number",
            ));
        }

        let suggestions = &self.tracking.suggestions;
        if suggestions.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default suggestion limit must be at least 1",
            ));
        }
        let weights = [
            suggestions.calorie_weight,
            suggestions.protein_weight,
            suggestions.carbs_weight,
            suggestions.fat_weight,
        ];
        if !all_finite(&weights) || weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Suggestion weights must be non-negative numbers",
            ));
        }
        if (suggestions.weight_sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Suggestion weights must sum to 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&suggestions.protein_density_bonus)
            || !(0.0..=1.0).contains(&suggestions.high_protein_density)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Protein density settings must be between 0 and 1",
            ));
        }

        Ok(())
    }

    /// Apply a single environment variable override if present
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity multipliers
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("NUTRITION_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("NUTRITION_ACTIVITY_LIGHT", &mut factors.light)?;
        Self::apply_env_var("NUTRITION_ACTIVITY_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("NUTRITION_ACTIVITY_ACTIVE", &mut factors.active)?;
        Self::apply_env_var("NUTRITION_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;

        // Goal calorie factors
        let goals = &mut self.nutrition.goal_calorie_factors;
        Self::apply_env_var("NUTRITION_GOAL_MUSCLE_GAIN_FACTOR", &mut goals.muscle_gain)?;
        Self::apply_env_var("NUTRITION_GOAL_FAT_LOSS_FACTOR", &mut goals.fat_loss)?;
        Self::apply_env_var("NUTRITION_GOAL_ENDURANCE_FACTOR", &mut goals.endurance)?;
        Self::apply_env_var(
            "NUTRITION_GOAL_SPORT_SPECIFIC_FACTOR",
            &mut goals.sport_specific,
        )?;
        Self::apply_env_var("NUTRITION_GOAL_MAINTENANCE_FACTOR", &mut goals.maintenance)?;

        // Macro split
        let macros = &mut self.nutrition.macronutrients;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_MUSCLE_GAIN_G_PER_KG",
            &mut macros.protein_muscle_gain_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_FAT_LOSS_G_PER_KG",
            &mut macros.protein_fat_loss_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_ENDURANCE_G_PER_KG",
            &mut macros.protein_endurance_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_SPORT_SPECIFIC_G_PER_KG",
            &mut macros.protein_sport_specific_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_DEFAULT_G_PER_KG",
            &mut macros.protein_default_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_FAT_PERCENT_DEFAULT",
            &mut macros.fat_percent_default,
        )?;
        Self::apply_env_var(
            "NUTRITION_FAT_PERCENT_ENDURANCE",
            &mut macros.fat_percent_endurance,
        )?;

        Self::apply_env_var(
            "NUTRITION_KCAL_PER_STEP_PER_KG",
            &mut self.nutrition.activity_energy.kcal_per_step_per_kg,
        )?;

        // Weight trend
        let trend = &mut self.tracking.weight_trend;
        Self::apply_env_var(
            "NUTRITION_WEIGHT_SHORT_WINDOW_DAYS",
            &mut trend.short_window_days,
        )?;
        Self::apply_env_var(
            "NUTRITION_WEIGHT_LONG_WINDOW_DAYS",
            &mut trend.long_window_days,
        )?;
        Self::apply_env_var(
            "NUTRITION_WEIGHT_LOOKBACK_DAYS",
            &mut trend.default_lookback_days,
        )?;
        Self::apply_env_var(
            "NUTRITION_WEIGHT_STABLE_TOLERANCE_KG",
            &mut trend.stable_tolerance_kg,
        )?;

        // Suggestions
        let suggestions = &mut self.tracking.suggestions;
        Self::apply_env_var(
            "NUTRITION_SUGGESTION_DEFAULT_LIMIT",
            &mut suggestions.default_limit,
        )?;
        Self::apply_env_var(
            "NUTRITION_SUGGESTION_CALORIE_WEIGHT",
            &mut suggestions.calorie_weight,
        )?;
        Self::apply_env_var(
            "NUTRITION_SUGGESTION_PROTEIN_WEIGHT",
            &mut suggestions.protein_weight,
        )?;
        Self::apply_env_var(
            "NUTRITION_SUGGESTION_CARBS_WEIGHT",
            &mut suggestions.carbs_weight,
        )?;
        Self::apply_env_var("NUTRITION_SUGGESTION_FAT_WEIGHT", &mut suggestions.fat_weight)?;
        Self::apply_env_var(
            "NUTRITION_SUGGESTION_PROTEIN_DENSITY_BONUS",
            &mut suggestions.protein_density_bonus,
        )?;
        Self::apply_env_var(
            "NUTRITION_SUGGESTION_HIGH_PROTEIN_DENSITY",
            &mut suggestions.high_protein_density,
        )?;

        Ok(self)
    }
}
