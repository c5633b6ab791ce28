// ABOUTME: Benchmark fixtures for generating food catalogs, food logs, and weight histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic nutrition data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_nutrition::models::{
    ActivityLevel, FitnessGoal, FoodItem, FoodLogEntry, Gender, MealType, PhysicalProfile,
    WeightLogEntry,
};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset (10 items) - a light day or a tiny catalog
    Small,
    /// Medium dataset (100 items) - typical catalog page
    Medium,
    /// Large dataset (1000 items) - full seeded catalog
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

/// Fixed reference instant so runs are comparable
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

const fn meal_for(index: usize) -> MealType {
    match index % 4 {
        0 => MealType::Breakfast,
        1 => MealType::Lunch,
        2 => MealType::Dinner,
        _ => MealType::Snack,
    }
}

/// Profile used by plan benchmarks
#[must_use]
pub const fn reference_profile(goal: FitnessGoal) -> PhysicalProfile {
    PhysicalProfile {
        age: 34,
        gender: Gender::Female,
        weight_kg: 64.0,
        height_cm: 170.0,
        activity_level: ActivityLevel::Active,
        fitness_goal: goal,
    }
}

/// Generate one catalog food with varied macro profiles
#[allow(clippy::cast_precision_loss)]
fn generate_food(index: usize) -> FoodItem {
    let protein = ((index * 7) % 40) as f64;
    let carbs = ((index * 13) % 70) as f64;
    let fat = ((index * 5) % 30) as f64;
    let calories = fat.mul_add(9.0, (protein + carbs) * 4.0) + 10.0;

    FoodItem::new(format!("Bench food {index}"), calories, protein, carbs, fat)
        .with_category(match index % 3 {
            0 => "protein",
            1 => "grains",
            _ => "snacks",
        })
        .with_fiber_and_sugar(((index * 3) % 10) as f64, ((index * 11) % 25) as f64)
        .with_electrolytes(((index * 37) % 800) as f64, ((index * 53) % 600) as f64)
}

/// Generate a food catalog
#[must_use]
pub fn generate_catalog(size: BatchSize) -> Vec<FoodItem> {
    (0..size.count()).map(generate_food).collect()
}

/// Generate a day of food log entries on the base date
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_day_log(size: BatchSize) -> Vec<FoodLogEntry> {
    let day_start = base_time() - Duration::hours(20);
    (0..size.count())
        .map(|index| {
            let food = generate_food(index);
            let servings = (((index * 3) % 4) as f64).mul_add(0.5, 0.5);
            let logged_at = day_start + Duration::minutes((index * 7 % 1200) as i64);
            FoodLogEntry::snapshot(&food, servings, meal_for(index), logged_at)
        })
        .collect()
}

/// Generate one weight entry per day going back from the base time
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_weight_history(days: usize) -> Vec<WeightLogEntry> {
    (0..days)
        .filter_map(|index| {
            let weight = 0.03f64.mul_add(index as f64, 78.0) + ((index * 17) % 7) as f64 / 10.0;
            WeightLogEntry::new(weight, base_time() - Duration::days(index as i64), None).ok()
        })
        .collect()
}
