// ABOUTME: Nutrition data models shared by the intelligence engine and its callers
// ABOUTME: Re-exports profile, target, food, food log, weight log, and streak types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models owned by the caller and handed to the engine.
//!
//! Everything here is plain data: the engine never fetches or persists these
//! records itself.

/// Food catalog items, food log entries and meal presets
pub mod food;
/// Physical profile and the enums that drive the metabolic calculator
pub mod profile;
/// Calculated nutrition targets and remaining macro budget
pub mod targets;
/// Daily logging streak state
pub mod streak;
/// Body weight log entries
pub mod weight;

pub use food::{
    dedupe_catalog, FoodItem, FoodLogEntry, MealPreset, MealType, NutrientTotals, PresetItem,
};
pub use profile::{ActivityLevel, FitnessGoal, Gender, PhysicalProfile};
pub use streak::{StreakState, StreakTransition};
pub use targets::{
    MacroTargets, MicronutrientTargets, NutritionTargets, PlanExplanation, RemainingMacros,
};
pub use weight::WeightLogEntry;
