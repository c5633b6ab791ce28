// ABOUTME: Core types and constants for the Pierre nutrition planning engine
// ABOUTME: Foundation crate with error handling, constants, and nutrition data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! planning engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy conversion factors and service identifiers
//! - **models**: Profiles, targets, foods, food/weight logs and streak state

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrition data models (profile, targets, foods, logs, streaks)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
