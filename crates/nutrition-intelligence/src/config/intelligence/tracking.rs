// ABOUTME: Tracking configuration for weight trend analysis and food suggestion scoring
// ABOUTME: Window lengths, stable tolerance band, suggestion weights and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_core::constants::time::{LONG_WINDOW_DAYS, SHORT_WINDOW_DAYS};
use serde::{Deserialize, Serialize};

/// Daily tracking configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Weight trend analysis settings
    pub weight_trend: WeightTrendConfig,
    /// Food suggestion scoring settings
    pub suggestions: SuggestionConfig,
}

/// Weight trend analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTrendConfig {
    /// Short moving average window (days): 7
    pub short_window_days: u32,
    /// Long moving average window (days): 30
    pub long_window_days: u32,
    /// Lookback applied when the caller does not pick one (days): 30
    pub default_lookback_days: u32,
    /// Band around the comparison average treated as stable (kg): 0.2
    pub stable_tolerance_kg: f64,
}

impl Default for WeightTrendConfig {
    fn default() -> Self {
        Self {
            short_window_days: SHORT_WINDOW_DAYS,
            long_window_days: LONG_WINDOW_DAYS,
            default_lookback_days: LONG_WINDOW_DAYS,
            stable_tolerance_kg: 0.2,
        }
    }
}

/// Food suggestion scoring settings
///
/// The four fit weights must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Number of suggestions returned when the caller does not ask for a count: 5
    pub default_limit: usize,
    /// Weight of the calorie fit component: 0.40
    pub calorie_weight: f64,
    /// Weight of the protein fit component: 0.30
    pub protein_weight: f64,
    /// Weight of the carbohydrate fit component: 0.15
    pub carbs_weight: f64,
    /// Weight of the fat fit component: 0.15
    pub fat_weight: f64,
    /// Share of the score reserved for protein density when protein is still needed: 0.05
    pub protein_density_bonus: f64,
    /// Protein calories per food calorie at which a food counts as high protein: 0.30
    pub high_protein_density: f64,
}

impl SuggestionConfig {
    /// Sum of the four fit weights
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.calorie_weight + self.protein_weight + self.carbs_weight + self.fat_weight
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_limit: 5,
            calorie_weight: 0.40,
            protein_weight: 0.30,
            carbs_weight: 0.15,
            fat_weight: 0.15,
            protein_density_bonus: 0.05,
            high_protein_density: 0.30,
        }
    }
}
