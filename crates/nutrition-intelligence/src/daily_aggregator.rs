// ABOUTME: Daily aggregation of food log entries into meal buckets, totals, and remaining macros
// ABOUTME: Sums denormalized entry totals and subtracts them from the calculated targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::nutrition_calculator::calculate_nutrient_percentages;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use nutrition_core::models::{
    FoodLogEntry, MealType, NutrientTotals, NutritionTargets, RemainingMacros,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A day's entries grouped by meal slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealBuckets {
    /// Breakfast entries
    pub breakfast: Vec<FoodLogEntry>,
    /// Lunch entries
    pub lunch: Vec<FoodLogEntry>,
    /// Dinner entries
    pub dinner: Vec<FoodLogEntry>,
    /// Snacks and entries with an unrecognized meal type
    pub snack: Vec<FoodLogEntry>,
}

impl MealBuckets {
    /// Place an entry in its bucket
    pub fn push(&mut self, entry: FoodLogEntry) {
        match entry.meal_type.bucket() {
            MealType::Breakfast => self.breakfast.push(entry),
            MealType::Lunch => self.lunch.push(entry),
            MealType::Dinner => self.dinner.push(entry),
            MealType::Snack | MealType::Other => self.snack.push(entry),
        }
    }

    /// Total number of entries across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snack.len()
    }

    /// True when no entries were logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derived view of one day of food logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    /// Entries grouped by meal slot
    pub meals: MealBuckets,
    /// Sum of every entry's denormalized totals
    pub totals: NutrientTotals,
    /// Targets minus totals, absent when the user has no targets
    pub remaining: Option<RemainingMacros>,
    /// Number of entries logged
    pub log_count: usize,
}

/// UTC bounds `[start, end)` of a calendar day
#[must_use]
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    (start, start + Duration::days(1))
}

/// Entries whose timestamp falls inside the given UTC day
#[must_use]
pub fn entries_for_day(date: NaiveDate, entries: &[FoodLogEntry]) -> Vec<FoodLogEntry> {
    let (start, end) = day_bounds(date);
    entries
        .iter()
        .filter(|entry| entry.logged_at >= start && entry.logged_at < end)
        .cloned()
        .collect()
}

/// Calorie and macro budget left after `totals`, signed
#[must_use]
pub fn calculate_remaining(targets: &NutritionTargets, totals: &NutrientTotals) -> RemainingMacros {
    RemainingMacros {
        calories: f64::from(targets.target_calories) - totals.calories,
        protein_g: f64::from(targets.macros.protein_g) - totals.protein_g,
        carbs_g: f64::from(targets.macros.carbs_g) - totals.carbs_g,
        fat_g: f64::from(targets.macros.fat_g) - totals.fat_g,
    }
}

/// Summarize an already-filtered day of entries
///
/// `remaining` is only computed when `targets` is present.
#[must_use]
pub fn summarize_day(
    date: NaiveDate,
    entries: &[FoodLogEntry],
    targets: Option<&NutritionTargets>,
) -> DailySummary {
    let totals: NutrientTotals = entries.iter().map(|entry| &entry.totals).sum();

    let mut meals = MealBuckets::default();
    for entry in entries {
        meals.push(entry.clone());
    }

    let remaining = targets.map(|t| calculate_remaining(t, &totals));

    debug!(
        day = %date,
        log_count = entries.len(),
        totals.calories = totals.calories,
        has_targets = remaining.is_some(),
        "Aggregated daily food log"
    );

    DailySummary {
        date,
        meals,
        totals,
        remaining,
        log_count: entries.len(),
    }
}

/// Percentage of each daily target reached
///
/// Covers calories, the three macros and the micronutrient targets.
#[must_use]
pub fn daily_nutrient_progress(
    summary: &DailySummary,
    targets: &NutritionTargets,
) -> BTreeMap<String, i32> {
    let mut target_map = targets.micronutrients.as_map();
    target_map.insert("calories".to_owned(), f64::from(targets.target_calories));
    target_map.insert("protein".to_owned(), f64::from(targets.macros.protein_g));
    target_map.insert("carbs".to_owned(), f64::from(targets.macros.carbs_g));
    target_map.insert("fat".to_owned(), f64::from(targets.macros.fat_g));

    calculate_nutrient_percentages(&summary.totals.as_map(), &target_map)
}
