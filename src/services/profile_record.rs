// ABOUTME: Stored user profile record and its conversion into a validated physical profile
// ABOUTME: Rejects incomplete profiles before they reach the metabolic calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{ActivityLevel, FitnessGoal, Gender, PhysicalProfile};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// User row as stored by the persistence layer
///
/// Every physical field is optional until the user completes onboarding.
/// Enum fields hold the raw strings clients sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfileRecord {
    /// User identifier
    pub user_id: Uuid,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// "male" or "female"
    #[serde(default)]
    pub gender: Option<String>,
    /// Current body weight (kg)
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height (cm)
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Activity level identifier
    #[serde(default)]
    pub activity_level: Option<String>,
    /// Fitness goal identifier
    #[serde(default)]
    pub fitness_goal: Option<String>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

impl UserProfileRecord {
    /// Names of the physical fields that are still empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("age", self.age.is_some()),
            ("gender", present(self.gender.as_deref()).is_some()),
            ("weight", self.weight_kg.is_some()),
            ("height", self.height_cm.is_some()),
            ("activity_level", present(self.activity_level.as_deref()).is_some()),
            ("fitness_goal", present(self.fitness_goal.as_deref()).is_some()),
        ];

        checks
            .into_iter()
            .filter_map(|(name, ok)| (!ok).then_some(name))
            .collect()
    }

    /// Whether every physical field is filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Validate the record into a [`PhysicalProfile`]
    ///
    /// Activity level and goal parse leniently; gender must be recognized.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing, the gender is unrecognized, or
    /// weight or height is not a positive number
    pub fn to_physical_profile(&self) -> AppResult<PhysicalProfile> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::missing_field(format!(
                "Please complete your profile (missing: {})",
                missing.join(", ")
            ))
            .with_user_id(self.user_id)
            .with_details(json!({ "missing_fields": missing })));
        }

        let (
            Some(age),
            Some(gender),
            Some(weight_kg),
            Some(height_cm),
            Some(activity_level),
            Some(fitness_goal),
        ) = (
            self.age,
            present(self.gender.as_deref()),
            self.weight_kg,
            self.height_cm,
            present(self.activity_level.as_deref()),
            present(self.fitness_goal.as_deref()),
        )
        else {
            return Err(AppError::internal("Profile completeness check out of sync"));
        };

        if !(weight_kg.is_finite() && weight_kg > 0.0 && height_cm.is_finite() && height_cm > 0.0) {
            return Err(AppError::value_out_of_range(format!(
                "Weight and height must be positive (weight: {weight_kg}, height: {height_cm})"
            ))
            .with_user_id(self.user_id));
        }

        let gender: Gender = gender
            .parse()
            .map_err(|e: AppError| e.with_user_id(self.user_id))?;

        Ok(PhysicalProfile {
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level: ActivityLevel::from_str_lossy(activity_level),
            fitness_goal: FitnessGoal::from_str_lossy(fitness_goal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_core::errors::ErrorCode;

    fn complete() -> UserProfileRecord {
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

    #[test]
    fn test_complete_record_converts() {
        let profile = complete().to_physical_profile().unwrap();

        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.fitness_goal, FitnessGoal::FatLoss);
    }

    #[test]
    fn test_missing_fields_listed_in_message() {
        let record = UserProfileRecord {
            height_cm: None,
            gender: Some("  ".to_owned()),
            ..complete()
        };

        let err = record.to_physical_profile().unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.http_status(), 400);
        assert!(err.message.contains("missing: gender, height"));
    }

    #[test]
    fn test_unknown_activity_is_lenient_but_gender_is_strict() {
        let lenient = UserProfileRecord {
            activity_level: Some("couch_potato".to_owned()),
            ..complete()
        };
        assert_eq!(
            lenient.to_physical_profile().unwrap().activity_level,
            ActivityLevel::Other
        );

        let strict = UserProfileRecord {
            gender: Some("robot".to_owned()),
            ..complete()
        };
        assert_eq!(
            strict.to_physical_profile().unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let record = UserProfileRecord {
            weight_kg: Some(0.0),
            ..complete()
        };

        assert_eq!(
            record.to_physical_profile().unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }
}
