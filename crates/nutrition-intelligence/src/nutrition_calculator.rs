// ABOUTME: Metabolic calculator turning a physical profile into daily nutrition targets
// ABOUTME: BMR, TDEE, goal calories, macro split, micronutrient DRIs, and plan explanations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metabolic Calculator
//!
//! Pure pipeline from physical data to daily targets:
//! BMR → TDEE → target calories → macro grams → micronutrient targets.
//! Every intermediate value is rounded to a whole number before the next
//! step consumes it, so the order of calls below determines the outputs.
//!
//! Inputs are assumed validated by the caller (weight and height positive);
//! none of these functions fail.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::intelligence::{
    ActivityEnergyConfig, ActivityFactorsConfig, BmrConfig, GoalCalorieFactorsConfig,
    MacronutrientConfig, MicronutrientConfig, NutritionConfig,
};
use nutrition_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutrition_core::models::{
    ActivityLevel, FitnessGoal, Gender, MacroTargets, MicronutrientTargets, NutritionTargets,
    PhysicalProfile, PlanExplanation,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Round to the nearest whole kcal or gram
fn round_whole(value: f64) -> i32 {
    value.round() as i32
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula:
/// - Men: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age + 5
/// - Women: BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age - 161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &PhysicalProfile, config: &BmrConfig) -> i32 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    round_whole(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Total Daily Energy Expenditure: round(BMR x activity factor)
///
/// Unrecognized activity levels use the sedentary factor.
#[must_use]
pub fn calculate_tdee(bmr: i32, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> i32 {
    if activity_level == ActivityLevel::Other {
        warn!(
            activity_level = activity_level.as_str(),
            multiplier = config.sedentary,
            "Unrecognized activity level, using sedentary multiplier"
        );
    }

    round_whole(f64::from(bmr) * config.factor_for(activity_level))
}

/// Calculate goal-adjusted calories: round(TDEE x goal factor)
#[must_use]
pub fn calculate_target_calories(
    tdee: i32,
    goal: FitnessGoal,
    config: &GoalCalorieFactorsConfig,
) -> i32 {
    round_whole(f64::from(tdee) * config.factor_for(goal))
}

/// Calculate the macronutrient split for a calorie target
///
/// Protein comes from body weight, fat from a share of calories, and
/// carbohydrates fill whatever calories remain. Grams are rounded
/// independently, then percentages are derived from the rounded grams with
/// fat taking the residual so the three always sum to 100.
#[must_use]
pub fn calculate_macros(
    target_calories: i32,
    weight_kg: f64,
    goal: FitnessGoal,
    config: &MacronutrientConfig,
) -> MacroTargets {
    let calories = f64::from(target_calories);

    let protein = weight_kg * config.protein_g_per_kg(goal);
    let fat = calories * config.fat_percent(goal) / 100.0 / KCAL_PER_GRAM_FAT;
    let protein_kcal = protein * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = fat * KCAL_PER_GRAM_FAT;
    let carbs = (calories - protein_kcal - fat_kcal) / KCAL_PER_GRAM_CARBS;

    let protein_g = round_whole(protein);
    let carbs_g = round_whole(carbs);
    let fat_g = round_whole(fat);

    let (protein_percent, carbs_percent) = if target_calories > 0 {
        (
            round_whole(f64::from(protein_g) * KCAL_PER_GRAM_PROTEIN / calories * 100.0),
            round_whole(f64::from(carbs_g) * KCAL_PER_GRAM_CARBS / calories * 100.0),
        )
    } else {
        (0, 0)
    };

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
        protein_percent,
        carbs_percent,
        fat_percent: 100 - protein_percent - carbs_percent,
    }
}

/// Look up daily micronutrient reference intakes for age and gender
#[must_use]
pub fn calculate_micronutrient_targets(
    age: u32,
    gender: Gender,
    config: &MicronutrientConfig,
) -> MicronutrientTargets {
    let older = config.is_older_adult(age);

    let iron_mg = match gender {
        Gender::Male => config.iron_low_mg,
        Gender::Female if older => config.iron_low_mg,
        Gender::Female => config.iron_high_mg,
    };

    MicronutrientTargets {
        vitamin_a_mcg: config.vitamin_a_for(gender),
        vitamin_c_mg: config.vitamin_c_for(gender),
        vitamin_d_mcg: config.vitamin_d_mcg,
        calcium_mg: if older {
            config.calcium_older_mg
        } else {
            config.calcium_mg
        },
        iron_mg,
        potassium_mg: config.potassium_mg,
        sodium_mg: config.sodium_limit_mg,
    }
}

/// Calculate a complete nutrition plan for a profile
///
/// Runs BMR → TDEE → target calories → macros → micronutrients in that order
/// and attaches the four explanation lines.
#[must_use]
pub fn calculate_nutrition_plan(profile: &PhysicalProfile, config: &NutritionConfig) -> NutritionTargets {
    let bmr = calculate_bmr(profile, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let target_calories =
        calculate_target_calories(tdee, profile.fitness_goal, &config.goal_calorie_factors);
    let macros = calculate_macros(
        target_calories,
        profile.weight_kg,
        profile.fitness_goal,
        &config.macronutrients,
    );
    let micronutrients =
        calculate_micronutrient_targets(profile.age, profile.gender, &config.micronutrients);

    debug!(
        nutrition.bmr = bmr,
        nutrition.tdee = tdee,
        nutrition.target_calories = target_calories,
        nutrition.goal = profile.fitness_goal.as_str(),
        "Calculated nutrition plan"
    );

    NutritionTargets {
        bmr,
        tdee,
        target_calories,
        macros,
        micronutrients,
        explanation: explain_plan(profile, config, bmr, tdee, target_calories, &macros),
    }
}

/// Build the explanation lines for a plan
fn explain_plan(
    profile: &PhysicalProfile,
    config: &NutritionConfig,
    bmr: i32,
    tdee: i32,
    target_calories: i32,
    macros: &MacroTargets,
) -> PlanExplanation {
    let goal = profile.fitness_goal;
    let activity = profile.activity_level;
    let goal_factor = config.goal_calorie_factors.factor_for(goal);
    let adjustment = round_whole((goal_factor - 1.0) * 100.0);

    let calories = match adjustment {
        0 => format!(
            "For {}, your target matches your TDEE at {target_calories} kcal per day.",
            goal.label()
        ),
        pct if pct < 0 => format!(
            "For {}, a {}% calorie deficit sets your target at {target_calories} kcal per day.",
            goal.label(),
            -pct
        ),
        pct => format!(
            "For {}, a {pct}% calorie surplus sets your target at {target_calories} kcal per day.",
            goal.label()
        ),
    };

    PlanExplanation {
        bmr: format!(
            "Your BMR of {bmr} kcal is estimated with the Mifflin-St Jeor equation for a {}-year-old {}.",
            profile.age, profile.gender
        ),
        tdee: format!(
            "A {} activity level multiplies BMR by {} for a TDEE of {tdee} kcal.",
            activity.as_str().replace('_', " "),
            config.activity_factors.factor_for(activity)
        ),
        calories,
        macros: format!(
            "Protein is set at {} g per kg of body weight ({} g), fat at {}% of calories ({} g), and carbohydrates fill the remaining {} g.",
            config.macronutrients.protein_g_per_kg(goal),
            macros.protein_g,
            config.macronutrients.fat_percent(goal),
            macros.fat_g,
            macros.carbs_g
        ),
    }
}

/// Estimate calories burned from a step count: round(steps x kg x 0.0005)
#[must_use]
pub fn calculate_calories_from_steps(
    steps: u32,
    weight_kg: f64,
    config: &ActivityEnergyConfig,
) -> i32 {
    round_whole(f64::from(steps) * weight_kg * config.kcal_per_step_per_kg)
}

/// Percentage of each target reached by the consumed amounts
///
/// Only keys present in `targets` are reported. Missing consumed values count
/// as zero, non-positive targets report 0, and results are not clamped.
#[must_use]
pub fn calculate_nutrient_percentages(
    consumed: &BTreeMap<String, f64>,
    targets: &BTreeMap<String, f64>,
) -> BTreeMap<String, i32> {
    targets
        .iter()
        .map(|(key, target)| {
            let amount = consumed.get(key).copied().unwrap_or(0.0);
            let percent = if *target > 0.0 {
                round_whole(amount / target * 100.0)
            } else {
                0
            };
            (key.clone(), percent)
        })
        .collect()
}
