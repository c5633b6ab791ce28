// ABOUTME: Domain service layer for nutrition planning and daily tracking
// ABOUTME: Protocol-agnostic operations reusable by REST, MCP, and A2A handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers fetch records, call into these services, and persist what
//! comes back. Services never hold a storage handle.

/// Nutrition planning, food logging, weight and streak operations
pub mod nutrition_service;

/// Stored user profile record and its validation
pub mod profile_record;

pub use nutrition_service::{LogFoodRequest, NutritionService};
pub use profile_record::UserProfileRecord;
