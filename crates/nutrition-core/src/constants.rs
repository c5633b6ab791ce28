// ABOUTME: Constants shared across the nutrition engine
// ABOUTME: Energy density of macronutrients and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the logging layer
    pub const PIERRE_NUTRITION: &str = "pierre-nutrition";
}

/// Calendar constants
pub mod time {
    /// Days in the short weight trend window
    pub const SHORT_WINDOW_DAYS: u32 = 7;
    /// Days in the long weight trend window
    pub const LONG_WINDOW_DAYS: u32 = 30;
}
