// ABOUTME: Physical profile model and the enums used for metabolic calculations
// ABOUTME: Gender, ActivityLevel, and FitnessGoal with lenient parsing and explicit fallback arms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor equation and the DRI tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Gender {
    /// Lowercase identifier as stored by clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Invalid gender '{other}'. Must be 'male' or 'female'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level used to scale BMR into TDEE
///
/// Unrecognized values deserialize into [`ActivityLevel::Other`], which the
/// calculator treats as sedentary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Physical job or training twice a day
    VeryActive,
    /// Any value the client sent that is not one of the above
    #[serde(other)]
    Other,
}

impl ActivityLevel {
    /// Parse an activity level, mapping unknown input to [`ActivityLevel::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Other,
        }
    }

    /// Identifier as stored by clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fitness goal selecting the calorie adjustment and macro split
///
/// Unrecognized values deserialize into [`FitnessGoal::Other`], which is
/// planned like general fitness (maintenance).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric surplus for hypertrophy
    MuscleGain,
    /// Caloric deficit with elevated protein
    FatLoss,
    /// Slight surplus, carb-forward split
    Endurance,
    /// Maintenance calories
    GeneralFitness,
    /// Moderate surplus for competitive sport
    SportSpecific,
    /// Any value the client sent that is not one of the above
    #[serde(other)]
    Other,
}

impl FitnessGoal {
    /// Parse a goal, mapping unknown input to [`FitnessGoal::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "muscle_gain" => Self::MuscleGain,
            "fat_loss" => Self::FatLoss,
            "endurance" => Self::Endurance,
            "general_fitness" => Self::GeneralFitness,
            "sport_specific" => Self::SportSpecific,
            _ => Self::Other,
        }
    }

    /// Identifier as stored by clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MuscleGain => "muscle_gain",
            Self::FatLoss => "fat_loss",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
            Self::SportSpecific => "sport_specific",
            Self::Other => "other",
        }
    }

    /// Short human-readable label used in plan explanations
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MuscleGain => "muscle gain",
            Self::FatLoss => "fat loss",
            Self::Endurance => "endurance",
            Self::SportSpecific => "sport-specific performance",
            Self::GeneralFitness | Self::Other => "general fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated physical data for one nutrition plan calculation
///
/// The caller guarantees `weight_kg > 0` and `height_cm > 0`; the calculator
/// does not re-check these ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    /// Age in whole years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Fitness goal
    pub fitness_goal: FitnessGoal,
}
