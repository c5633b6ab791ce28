// ABOUTME: Calculated nutrition targets and the remaining macro budget for a day
// ABOUTME: NutritionTargets, MacroTargets, MicronutrientTargets, PlanExplanation, RemainingMacros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily macronutrient targets in whole grams plus their share of calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (grams)
    pub protein_g: i32,
    /// Carbohydrates (grams)
    pub carbs_g: i32,
    /// Fat (grams)
    pub fat_g: i32,
    /// Protein share of target calories (percent)
    pub protein_percent: i32,
    /// Carbohydrate share of target calories (percent)
    pub carbs_percent: i32,
    /// Fat share of target calories (percent, residual of the other two)
    pub fat_percent: i32,
}

/// Daily micronutrient reference intakes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicronutrientTargets {
    /// Vitamin A (mcg RAE)
    pub vitamin_a_mcg: u32,
    /// Vitamin C (mg)
    pub vitamin_c_mg: u32,
    /// Vitamin D (mcg)
    pub vitamin_d_mcg: u32,
    /// Calcium (mg)
    pub calcium_mg: u32,
    /// Iron (mg)
    pub iron_mg: u32,
    /// Potassium (mg)
    pub potassium_mg: u32,
    /// Sodium upper limit (mg)
    pub sodium_mg: u32,
}

impl MicronutrientTargets {
    /// Keyed view used by percentage calculations
    ///
    /// Keys match [`crate::models::NutrientTotals::as_map`] where both track the nutrient.
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<String, f64> {
        [
            ("vitamin_a", self.vitamin_a_mcg),
            ("vitamin_c", self.vitamin_c_mg),
            ("vitamin_d", self.vitamin_d_mcg),
            ("calcium", self.calcium_mg),
            ("iron", self.iron_mg),
            ("potassium", self.potassium_mg),
            ("sodium", self.sodium_mg),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), f64::from(value)))
        .collect()
    }
}

/// Human-readable explanation attached to every plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanExplanation {
    /// How the BMR was derived
    pub bmr: String,
    /// How activity scaled BMR into TDEE
    pub tdee: String,
    /// How the goal adjusted TDEE into target calories
    pub calories: String,
    /// How the macro split was chosen
    pub macros: String,
}

impl PlanExplanation {
    /// The four explanation lines in calculation order
    #[must_use]
    pub fn lines(&self) -> [&str; 4] {
        [&self.bmr, &self.tdee, &self.calories, &self.macros]
    }
}

/// Result of one nutrition plan calculation
///
/// Created fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i32,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: i32,
    /// Macronutrient targets
    pub macros: MacroTargets,
    /// Micronutrient targets
    pub micronutrients: MicronutrientTargets,
    /// Explanation strings
    pub explanation: PlanExplanation,
}

/// Calorie and macro budget left for the day (targets minus consumed)
///
/// Values are signed: a negative value means the user is over target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RemainingMacros {
    /// Remaining calories (kcal)
    pub calories: f64,
    /// Remaining protein (grams)
    pub protein_g: f64,
    /// Remaining carbohydrates (grams)
    pub carbs_g: f64,
    /// Remaining fat (grams)
    pub fat_g: f64,
}

impl RemainingMacros {
    /// True once the calorie target has been reached or exceeded
    #[must_use]
    pub fn is_over_calories(&self) -> bool {
        self.calories <= 0.0
    }
}
