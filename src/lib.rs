// ABOUTME: Main library entry point for the Pierre nutrition planning engine
// ABOUTME: Re-exports the workspace crates and provides logging and the nutrition service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Nutrition
//!
//! Nutrition planning and daily tracking for the Pierre fitness platform.
//!
//! ## Features
//!
//! - **Nutrition plans**: BMR, TDEE, goal calories, macro and micronutrient targets
//! - **Daily tracking**: food logging with denormalized totals, meal buckets, remaining macros
//! - **Weight trends**: 7 and 30 day averages with an up/down/stable classification
//! - **Streaks**: consecutive logging days, evaluated lazily on the next log
//! - **Suggestions**: foods ranked by how well they fit the remaining budget
//!
//! ## Architecture
//!
//! - **`nutrition_core`**: errors, constants and data models
//! - **`nutrition_intelligence`**: the pure algorithms and their configuration
//! - **services**: caller-facing operations that validate stored records
//! - **logging**: subscriber setup and domain event helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use pierre_nutrition::services::{NutritionService, UserProfileRecord};
//! use pierre_nutrition::AppResult;
//! use uuid::Uuid;
//!
//! fn main() -> AppResult<()> {
//!     let service = NutritionService::default();
//!     let profile = UserProfileRecord {
//!         user_id: Uuid::new_v4(),
//!         age: Some(25),
//!         gender: Some("male".into()),
//!         weight_kg: Some(70.0),
//!         height_cm: Some(175.0),
//!         activity_level: Some("moderate".into()),
//!         fitness_goal: Some("fat_loss".into()),
//!     };
//!
//!     let plan = service.nutrition_plan(&profile)?;
//!     let today = service.daily_summary(Utc::now().date_naive(), &[], Some(&profile));
//!     println!("{} kcal target, {:?} remaining", plan.target_calories, today.remaining);
//!     Ok(())
//! }
//! ```

/// Structured logging configuration and domain event logging
pub mod logging;

/// Caller-facing nutrition services
pub mod services;

pub use nutrition_core;
pub use nutrition_core::errors::{AppError, AppResult, ErrorCode};
pub use nutrition_core::models;
pub use nutrition_intelligence;
pub use nutrition_intelligence::config::intelligence::IntelligenceConfig;
