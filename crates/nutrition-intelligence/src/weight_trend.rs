// ABOUTME: Weight trend analysis over logged body weight entries
// ABOUTME: Moving averages over short and long windows and an up/down/stable classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Trend Analyzer
//!
//! The latest weight is compared against the short-window average (falling
//! back to the long window, then to every supplied entry). Differences within
//! `stable_tolerance_kg` are `Stable`. Fewer than two entries is always
//! `InsufficientData`.

use crate::config::intelligence::WeightTrendConfig;
use chrono::{DateTime, Duration, Utc};
use nutrition_core::models::WeightLogEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of body weight relative to the recent average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Latest weight is above the average by more than the tolerance
    Up,
    /// Latest weight is below the average by more than the tolerance
    Down,
    /// Latest weight is within the tolerance of the average
    Stable,
    /// Fewer than two entries
    InsufficientData,
}

impl TrendDirection {
    /// Identifier as sent to clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

/// Result of a weight trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Most recent weight (kg)
    pub current: Option<f64>,
    /// Mean over the short window (kg)
    pub average_7_day: Option<f64>,
    /// Mean over the long window (kg)
    pub average_30_day: Option<f64>,
    /// Classification
    pub trend: TrendDirection,
    /// Latest weight minus the comparison average (kg, positive = gain)
    pub change: Option<f64>,
    /// Entries analyzed
    pub entry_count: usize,
    /// Stable band used for the classification (kg)
    pub tolerance_kg: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

/// Mean weight of entries dated within `days` days before `now`
fn window_average(entries: &[WeightLogEntry], now: DateTime<Utc>, days: u32) -> Option<f64> {
    let start = now - Duration::days(i64::from(days));
    mean(
        entries
            .iter()
            .filter(|e| e.logged_at >= start && e.logged_at <= now)
            .map(|e| e.weight_kg),
    )
}

/// Entries dated within the last `lookback_days` days up to `now`
#[must_use]
pub fn entries_in_lookback(
    entries: &[WeightLogEntry],
    now: DateTime<Utc>,
    lookback_days: u32,
) -> Vec<WeightLogEntry> {
    let start = now - Duration::days(i64::from(lookback_days));
    entries
        .iter()
        .filter(|e| e.logged_at >= start && e.logged_at <= now)
        .cloned()
        .collect()
}

/// Classify a signed difference against the tolerance band
#[must_use]
pub fn classify_change(change: f64, tolerance_kg: f64) -> TrendDirection {
    if change.abs() <= tolerance_kg {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    }
}

/// Analyze weight entries as of `now`
///
/// Entries may arrive in any order. Entries dated after `now` are ignored.
#[must_use]
pub fn analyze_weight_trend(
    entries: &[WeightLogEntry],
    now: DateTime<Utc>,
    config: &WeightTrendConfig,
) -> WeightTrend {
    let past: Vec<&WeightLogEntry> = entries.iter().filter(|e| e.logged_at <= now).collect();
    let current = past
        .iter()
        .max_by_key(|e| e.logged_at)
        .map(|e| e.weight_kg);

    let average_7_day = window_average(entries, now, config.short_window_days);
    let average_30_day = window_average(entries, now, config.long_window_days);

    let change = current.and_then(|latest| {
        average_7_day
            .or(average_30_day)
            .or_else(|| mean(past.iter().map(|e| e.weight_kg)))
            .map(|average| latest - average)
    });

    let trend = match change {
        Some(diff) if past.len() >= 2 => classify_change(diff, config.stable_tolerance_kg),
        _ => TrendDirection::InsufficientData,
    };

    debug!(
        weight.entries = past.len(),
        weight.trend = trend.as_str(),
        weight.change = change,
        "Analyzed weight trend"
    );

    WeightTrend {
        current,
        average_7_day,
        average_30_day,
        trend,
        change,
        entry_count: past.len(),
        tolerance_kg: config.stable_tolerance_kg,
    }
}
