// ABOUTME: Food log entry creation, editing and deletion with denormalized nutrient totals
// ABOUTME: Create snapshots catalog values once; edit re-snapshots when servings change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food logging
//!
//! Two write paths with deliberately different snapshot rules:
//!
//! - [`log_food`] copies the food's per-serving values into the entry once.
//!   Later catalog edits never reach existing entries.
//! - [`update_log`] recomputes the totals from the food passed in at edit
//!   time whenever `servings` changes, so an edit picks up current catalog
//!   values.

use chrono::{DateTime, Utc};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{FoodItem, FoodLogEntry, MealPreset, MealType, NutrientTotals};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Changes requested for an existing log entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LogUpdate {
    /// New serving count
    #[serde(default)]
    pub servings: Option<f64>,
    /// New meal slot
    #[serde(default)]
    pub meal_type: Option<MealType>,
    /// New timestamp
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

fn validate_servings(servings: f64) -> AppResult<()> {
    if servings.is_finite() && servings > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Servings must be a positive number, got {servings}"
        )))
    }
}

/// Resolve the stored meal slot, unrecognized values become snack
fn resolve_meal_type(meal_type: MealType) -> MealType {
    if meal_type == MealType::Other {
        warn!(
            meal_type = meal_type.as_str(),
            "Unrecognized meal type, logging as snack"
        );
    }
    meal_type.bucket()
}

/// Create a log entry for `servings` servings of `food`
///
/// The entry timestamp defaults to `now` when `logged_at` is absent.
///
/// # Errors
///
/// Returns an error if `servings` is not a positive, finite number
pub fn log_food(
    food: &FoodItem,
    servings: f64,
    meal_type: MealType,
    logged_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AppResult<FoodLogEntry> {
    validate_servings(servings)?;

    let entry = FoodLogEntry::snapshot(
        food,
        servings,
        resolve_meal_type(meal_type),
        logged_at.unwrap_or(now),
    );

    debug!(
        food.id = %food.id,
        food.name = %food.name,
        log.servings = servings,
        log.calories = entry.totals.calories,
        "Created food log entry"
    );

    Ok(entry)
}

/// Create one entry per preset item, all in the same meal slot and timestamp
///
/// # Errors
///
/// Returns an error if any preset item has invalid servings; no entries are
/// returned in that case
pub fn log_preset(
    preset: &MealPreset,
    meal_type: MealType,
    logged_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AppResult<Vec<FoodLogEntry>> {
    let when = logged_at.unwrap_or(now);
    preset
        .items
        .iter()
        .map(|item| log_food(&item.food, item.servings, meal_type, Some(when), now))
        .collect()
}

/// Apply an edit to an existing entry
///
/// When the serving count changes, every denormalized total is recomputed
/// from `food` as it is now. Otherwise the stored totals are kept as-is.
///
/// # Errors
///
/// Returns an error if `food` is not the entry's food or the new servings are invalid
pub fn update_log(entry: &FoodLogEntry, food: &FoodItem, update: LogUpdate) -> AppResult<FoodLogEntry> {
    if food.id != entry.food_id {
        return Err(AppError::invalid_input(format!(
            "Food {} does not match log entry food {}",
            food.id, entry.food_id
        )));
    }

    let mut updated = entry.clone();

    if let Some(servings) = update.servings {
        validate_servings(servings)?;
        if (servings - entry.servings).abs() > f64::EPSILON {
            updated.servings = servings;
            updated.food_name.clone_from(&food.name);
            updated.totals = NutrientTotals::for_servings(food, servings);
        }
    }
    if let Some(meal_type) = update.meal_type {
        updated.meal_type = resolve_meal_type(meal_type);
    }
    if let Some(logged_at) = update.logged_at {
        updated.logged_at = logged_at;
    }

    debug!(
        log.id = %entry.id,
        log.servings = updated.servings,
        log.calories = updated.totals.calories,
        "Updated food log entry"
    );

    Ok(updated)
}

/// Remove an entry from a day's log and return it
///
/// Other entries are left untouched.
///
/// # Errors
///
/// Returns an error if no entry has this id
pub fn delete_log(entries: &mut Vec<FoodLogEntry>, id: Uuid) -> AppResult<FoodLogEntry> {
    let index = entries
        .iter()
        .position(|entry| entry.id == id)
        .ok_or_else(|| AppError::not_found(format!("Food log entry {id}")))?;

    Ok(entries.remove(index))
}
