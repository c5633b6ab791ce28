// ABOUTME: Shared test utilities and fixtures for nutrition integration tests
// ABOUTME: Provides quiet test logging, profile records, catalog foods, and date helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_nutrition`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pierre_nutrition::models::FoodItem;
use pierre_nutrition::services::{NutritionService, UserProfileRecord};
use pierre_nutrition::IntelligenceConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, default is quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Service with the reference configuration
pub fn service() -> NutritionService {
    init_test_logging();
    NutritionService::new(IntelligenceConfig::default())
}

/// 25-year-old male, 70 kg, 175 cm, moderate activity, fat loss
pub fn male_fat_loss_profile() -> UserProfileRecord {
    UserProfileRecord {
        user_id: Uuid::new_v4(),
        age: Some(25),
        gender: Some("male".to_owned()),
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        activity_level: Some("moderate".to_owned()),
        fitness_goal: Some("fat_loss".to_owned()),
    }
}

/// 30-year-old female, 60 kg, 165 cm, light activity, general fitness
pub fn female_general_profile() -> UserProfileRecord {
    UserProfileRecord {
        user_id: Uuid::new_v4(),
        age: Some(30),
        gender: Some("female".to_owned()),
        weight_kg: Some(60.0),
        height_cm: Some(165.0),
        activity_level: Some("light".to_owned()),
        fitness_goal: Some("general_fitness".to_owned()),
    }
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// UTC timestamp helper
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub fn chicken_breast() -> FoodItem {
    FoodItem::new("Chicken breast", 165.0, 31.0, 0.0, 3.6)
        .with_category("protein")
        .with_serving(100.0, "g")
        .with_electrolytes(74.0, 256.0)
        .with_minerals(15.0, 29.0, 228.0, 1.0)
}

pub fn oatmeal() -> FoodItem {
    FoodItem::new("Oatmeal", 150.0, 5.0, 27.0, 3.0)
        .with_category("grains")
        .with_serving(40.0, "g")
        .with_fiber_and_sugar(4.0, 1.0)
        .with_minerals(21.0, 56.0, 180.0, 1.7)
}

pub fn banana() -> FoodItem {
    FoodItem::new("Banana", 105.0, 1.3, 27.0, 0.4)
        .with_category("fruit")
        .with_fiber_and_sugar(3.1, 14.4)
        .with_electrolytes(1.0, 422.0)
}

pub fn chocolate_cookie() -> FoodItem {
    FoodItem::new("Chocolate cookie", 165.0, 2.0, 22.0, 8.0)
        .with_brand("Bakery Co")
        .with_category("snacks")
        .with_fiber_and_sugar(1.0, 12.0)
}

pub fn greek_yogurt() -> FoodItem {
    FoodItem::new("Greek yogurt", 100.0, 17.0, 6.0, 0.7)
        .with_category("dairy")
        .with_serving(170.0, "g")
        .with_minerals(187.0, 19.0, 234.0, 0.1)
}

/// Small catalog used by suggestion tests
pub fn catalog() -> Vec<FoodItem> {
    vec![
        chicken_breast(),
        oatmeal(),
        banana(),
        chocolate_cookie(),
        greek_yogurt(),
        FoodItem::new("Double cheeseburger", 1250.0, 62.0, 80.0, 75.0),
    ]
}
