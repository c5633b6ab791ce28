// ABOUTME: Body weight log entry model
// ABOUTME: Append-only weight measurements with optional notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// When the measurement was taken
    pub logged_at: DateTime<Utc>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl WeightLogEntry {
    /// Create a weight entry
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a positive, finite number
    pub fn new(
        weight_kg: f64,
        logged_at: DateTime<Utc>,
        note: Option<String>,
    ) -> AppResult<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be a positive number of kilograms, got {weight_kg}"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            weight_kg,
            logged_at,
            note: note.filter(|text| !text.trim().is_empty()),
        })
    }
}
