// ABOUTME: Nutrition configuration for metabolic and macro target calculations
// ABOUTME: Configures BMR coefficients, activity and goal factors, macro splits, and DRI tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Planning Configuration
//!
//! Provides the constants used by the metabolic calculator. Defaults reproduce
//! the published reference values exactly; overriding them changes every
//! plan calculated afterwards.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Micronutrients: Institute of Medicine Dietary Reference Intakes

use nutrition_core::models::{ActivityLevel, FitnessGoal, Gender};
use serde::{Deserialize, Serialize};

/// Nutrition Planning Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers turning TDEE into target calories
    pub goal_calorie_factors: GoalCalorieFactorsConfig,
    /// Macronutrient distribution targets
    pub macronutrients: MacronutrientConfig,
    /// Micronutrient reference intakes
    pub micronutrients: MicronutrientConfig,
    /// Energy estimates for logged activity (steps)
    pub activity_energy: ActivityEnergyConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job or 2x/day training): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    ///
    /// Unrecognized levels use the sedentary multiplier.
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary | ActivityLevel::Other => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Goal multipliers applied to TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCalorieFactorsConfig {
    /// Muscle gain surplus: 1.15
    pub muscle_gain: f64,
    /// Fat loss deficit: 0.80
    pub fat_loss: f64,
    /// Endurance: 1.05
    pub endurance: f64,
    /// Sport specific: 1.10
    pub sport_specific: f64,
    /// General fitness and unrecognized goals (maintenance): 1.00
    pub maintenance: f64,
}

impl GoalCalorieFactorsConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn factor_for(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::FatLoss => self.fat_loss,
            FitnessGoal::Endurance => self.endurance,
            FitnessGoal::SportSpecific => self.sport_specific,
            FitnessGoal::GeneralFitness | FitnessGoal::Other => self.maintenance,
        }
    }
}

/// Macronutrient recommendation configuration
///
/// Protein is prescribed per kilogram of body weight, fat as a share of target
/// calories, and carbohydrates fill the remaining calories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Muscle gain protein (g/kg): 2.0
    pub protein_muscle_gain_g_per_kg: f64,
    /// Fat loss protein (g/kg): 2.3
    pub protein_fat_loss_g_per_kg: f64,
    /// Endurance protein (g/kg): 1.6
    pub protein_endurance_g_per_kg: f64,
    /// Sport specific protein (g/kg): 1.8
    pub protein_sport_specific_g_per_kg: f64,
    /// General fitness and unrecognized goals (g/kg): 1.6
    pub protein_default_g_per_kg: f64,
    /// Fat share of target calories for most goals (%): 25
    pub fat_percent_default: f64,
    /// Fat share of target calories for endurance (%): 20
    pub fat_percent_endurance: f64,
}

impl MacronutrientConfig {
    /// Protein prescription for a goal (g/kg)
    #[must_use]
    pub const fn protein_g_per_kg(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::MuscleGain => self.protein_muscle_gain_g_per_kg,
            FitnessGoal::FatLoss => self.protein_fat_loss_g_per_kg,
            FitnessGoal::Endurance => self.protein_endurance_g_per_kg,
            FitnessGoal::SportSpecific => self.protein_sport_specific_g_per_kg,
            FitnessGoal::GeneralFitness | FitnessGoal::Other => self.protein_default_g_per_kg,
        }
    }

    /// Fat share of target calories for a goal (percent)
    #[must_use]
    pub const fn fat_percent(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::Endurance => self.fat_percent_endurance,
            _ => self.fat_percent_default,
        }
    }
}

/// Micronutrient reference intakes (IOM Dietary Reference Intakes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicronutrientConfig {
    /// Vitamin A for men (mcg RAE): 900
    pub vitamin_a_male_mcg: u32,
    /// Vitamin A for women (mcg RAE): 700
    pub vitamin_a_female_mcg: u32,
    /// Vitamin C for men (mg): 90
    pub vitamin_c_male_mg: u32,
    /// Vitamin C for women (mg): 75
    pub vitamin_c_female_mg: u32,
    /// Vitamin D (mcg): 15
    pub vitamin_d_mcg: u32,
    /// Calcium up to the age threshold (mg): 1000
    pub calcium_mg: u32,
    /// Calcium above the age threshold (mg): 1200
    pub calcium_older_mg: u32,
    /// Iron for men and women above the age threshold (mg): 8
    pub iron_low_mg: u32,
    /// Iron for women up to the age threshold (mg): 18
    pub iron_high_mg: u32,
    /// Potassium (mg): 3400
    pub potassium_mg: u32,
    /// Sodium upper limit (mg): 2300
    pub sodium_limit_mg: u32,
    /// Age after which the older-adult values apply: 50
    pub older_adult_age: u32,
}

impl MicronutrientConfig {
    /// Whether the older-adult values apply at this age
    #[must_use]
    pub const fn is_older_adult(&self, age: u32) -> bool {
        age > self.older_adult_age
    }

    /// Vitamin A target for a gender
    #[must_use]
    pub const fn vitamin_a_for(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.vitamin_a_male_mcg,
            Gender::Female => self.vitamin_a_female_mcg,
        }
    }

    /// Vitamin C target for a gender
    #[must_use]
    pub const fn vitamin_c_for(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.vitamin_c_male_mg,
            Gender::Female => self.vitamin_c_female_mg,
        }
    }
}

/// Energy estimates for activity reported by device sensors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEnergyConfig {
    /// Calories burned per step per kilogram of body weight: 0.0005
    pub kcal_per_step_per_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalCalorieFactorsConfig {
    fn default() -> Self {
        Self {
            muscle_gain: 1.15,
            fat_loss: 0.80,
            endurance: 1.05,
            sport_specific: 1.10,
            maintenance: 1.0,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_muscle_gain_g_per_kg: 2.0,
            protein_fat_loss_g_per_kg: 2.3,
            protein_endurance_g_per_kg: 1.6,
            protein_sport_specific_g_per_kg: 1.8,
            protein_default_g_per_kg: 1.6,
            fat_percent_default: 25.0,
            fat_percent_endurance: 20.0,
        }
    }
}

impl Default for MicronutrientConfig {
    fn default() -> Self {
        Self {
            vitamin_a_male_mcg: 900,
            vitamin_a_female_mcg: 700,
            vitamin_c_male_mg: 90,
            vitamin_c_female_mg: 75,
            vitamin_d_mcg: 15,
            calcium_mg: 1000,
            calcium_older_mg: 1200,
            iron_low_mg: 8,
            iron_high_mg: 18,
            potassium_mg: 3400,
            sodium_limit_mg: 2300,
            older_adult_age: 50,
        }
    }
}

impl Default for ActivityEnergyConfig {
    fn default() -> Self {
        Self {
            kcal_per_step_per_kg: 0.0005,
        }
    }
}
