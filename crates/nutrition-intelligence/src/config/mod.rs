// ABOUTME: Configuration module for nutrition-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (nutrition constants, tracking thresholds)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
