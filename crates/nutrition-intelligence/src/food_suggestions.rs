// ABOUTME: Food suggestion scoring against the remaining daily macro budget
// ABOUTME: Ranks catalog foods by calorie and macro fit with a protein density bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suggestion Scorer
//!
//! One serving of each candidate is compared with the remaining budget.
//!
//! - Calorie fit is 1.0 when the food uses exactly the remaining calories,
//!   falls to 0.5 for a zero-calorie food, and drops to 0 once the food is
//!   1.5x the remaining calories.
//! - Carb and fat fit is `1 - |remaining - food| / remaining` for a positive
//!   remaining amount. With nothing left, smaller amounts score higher.
//! - Protein fit is the share of the remaining protein one serving covers,
//!   capped at 1, so more protein never lowers the score while a deficit is
//!   open. Part of the score also rewards protein calories per food calorie.
//!
//! Scores are on a 0-100 scale. Over-target budgets still produce a ranked
//! list, led by the lightest foods.

use crate::config::intelligence::SuggestionConfig;
use nutrition_core::constants::energy::KCAL_PER_GRAM_PROTEIN;
use nutrition_core::models::{FoodItem, RemainingMacros};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Calorie fit given to a food when the calorie target is already reached,
/// scaled down as calories grow
const OVER_TARGET_CALORIE_FIT: f64 = 0.25;

/// Calories at which the over-target calorie fit is halved
const OVER_TARGET_HALF_KCAL: f64 = 100.0;

/// Grams at which a macro fit is halved when that macro's budget is used up
const EXHAUSTED_MACRO_HALF_G: f64 = 10.0;

/// A ranked food suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSuggestion {
    /// Suggested catalog food (one serving)
    pub food: FoodItem,
    /// Fit score, 0-100, one decimal
    pub score: f64,
    /// Human-readable reason
    pub reason: String,
}

fn round_to_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// How well one serving's calories fit the remaining calories (0-1)
#[must_use]
pub fn calorie_fit(food_calories: f64, remaining_calories: f64) -> f64 {
    let calories = food_calories.max(0.0);
    if remaining_calories <= 0.0 {
        return OVER_TARGET_CALORIE_FIT / (1.0 + calories / OVER_TARGET_HALF_KCAL);
    }

    let ratio = calories / remaining_calories;
    if ratio <= 1.0 {
        0.5f64.mul_add(ratio, 0.5)
    } else {
        2.0f64.mul_add(-(ratio - 1.0), 1.0).max(0.0)
    }
}

/// How well one serving's grams of a macro fit the remaining grams (0-1)
#[must_use]
pub fn macro_fit(food_grams: f64, remaining_grams: f64) -> f64 {
    let grams = food_grams.max(0.0);
    if remaining_grams > 0.0 {
        (1.0 - (remaining_grams - grams).abs() / remaining_grams).max(0.0)
    } else {
        1.0 / (1.0 + grams / EXHAUSTED_MACRO_HALF_G)
    }
}

/// How much of the open protein deficit one serving covers (0-1)
///
/// Never decreases as protein grams rise. Once the protein budget is used
/// up this behaves like [`macro_fit`].
#[must_use]
pub fn protein_fit(food_grams: f64, remaining_grams: f64) -> f64 {
    if remaining_grams > 0.0 {
        food_grams.clamp(0.0, remaining_grams) / remaining_grams
    } else {
        macro_fit(food_grams, remaining_grams)
    }
}

/// Share of a food's calories that come from protein (0-1)
#[must_use]
pub fn protein_density(food: &FoodItem) -> f64 {
    if food.calories > 0.0 {
        (food.protein_g.max(0.0) * KCAL_PER_GRAM_PROTEIN / food.calories).min(1.0)
    } else {
        0.0
    }
}

/// Score one serving of `food` against the remaining budget (0-100)
#[must_use]
pub fn score_food(food: &FoodItem, remaining: &RemainingMacros, config: &SuggestionConfig) -> f64 {
    let calorie = calorie_fit(food.calories, remaining.calories);
    let protein = protein_fit(food.protein_g, remaining.protein_g);
    let carbs = macro_fit(food.carbs_g, remaining.carbs_g);
    let fat = macro_fit(food.fat_g, remaining.fat_g);

    let base = config.calorie_weight.mul_add(
        calorie,
        config
            .protein_weight
            .mul_add(protein, config.carbs_weight.mul_add(carbs, config.fat_weight * fat)),
    );

    let bonus = if remaining.protein_g > 0.0 {
        config.protein_density_bonus * protein_density(food)
    } else {
        0.0
    };

    round_to_1(100.0 * (1.0 - config.protein_density_bonus).mul_add(base, bonus))
}

/// Explain why a food was suggested
#[must_use]
pub fn suggestion_reason(
    food: &FoodItem,
    remaining: &RemainingMacros,
    config: &SuggestionConfig,
) -> String {
    let mut parts = Vec::with_capacity(2);

    if remaining.protein_g > 0.0 && protein_density(food) >= config.high_protein_density {
        parts.push("high protein".to_owned());
    }

    if remaining.is_over_calories() {
        parts.push("a light option while you are over your calorie target".to_owned());
    } else if food.calories <= remaining.calories {
        parts.push("fits your remaining calories".to_owned());
    } else {
        let excess = (food.calories - remaining.calories).round();
        parts.push(format!("exceeds your remaining calories by {excess} kcal"));
    }

    capitalize(&parts.join(", "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Rank catalog foods against the remaining budget and keep the best `limit`
///
/// Ties are broken by food name. An empty catalog or a zero limit yields an
/// empty list.
#[must_use]
pub fn rank_foods(
    remaining: &RemainingMacros,
    catalog: &[FoodItem],
    limit: usize,
    config: &SuggestionConfig,
) -> Vec<FoodSuggestion> {
    let mut suggestions: Vec<FoodSuggestion> = catalog
        .iter()
        .map(|food| FoodSuggestion {
            food: food.clone(),
            score: score_food(food, remaining, config),
            reason: suggestion_reason(food, remaining, config),
        })
        .collect();

    suggestions.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.food.name.cmp(&b.food.name),
        other => other,
    });
    suggestions.truncate(limit);

    debug!(
        catalog.size = catalog.len(),
        suggestions.returned = suggestions.len(),
        remaining.calories = remaining.calories,
        "Ranked food suggestions"
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining() -> RemainingMacros {
        RemainingMacros {
            calories: 600.0,
            protein_g: 60.0,
            carbs_g: 70.0,
            fat_g: 20.0,
        }
    }

    #[test]
    fn test_exact_match_scores_near_maximum() {
        let budget = remaining();
        let exact = FoodItem::new("Exact", 600.0, 60.0, 70.0, 20.0);

        let score = score_food(&exact, &budget, &SuggestionConfig::default());

        assert!(score >= 95.0, "score was {score}");
    }

    #[test]
    fn test_large_overshoot_scores_lower_than_fit() {
        let budget = remaining();
        let config = SuggestionConfig::default();
        let fits = FoodItem::new("Salad bowl", 450.0, 35.0, 40.0, 15.0);
        let blowout = FoodItem::new("Pizza", 1800.0, 70.0, 200.0, 80.0);

        assert!(score_food(&fits, &budget, &config) > score_food(&blowout, &budget, &config));
    }

    #[test]
    fn test_protein_preferred_at_equal_calories() {
        let budget = remaining();
        let config = SuggestionConfig::default();
        let chicken = FoodItem::new("Chicken breast", 165.0, 31.0, 0.0, 3.6);
        let cookie = FoodItem::new("Cookie", 165.0, 2.0, 22.0, 8.0);

        assert!(score_food(&chicken, &budget, &config) > score_food(&cookie, &budget, &config));
        assert!(suggestion_reason(&chicken, &budget, &config).starts_with("High protein"));
    }

    #[test]
    fn test_protein_preferred_with_small_deficit() {
        let budget = RemainingMacros {
            protein_g: 5.0,
            ..remaining()
        };
        let config = SuggestionConfig::default();
        let chicken = FoodItem::new("Chicken breast", 165.0, 31.0, 0.0, 3.6);
        let cookie = FoodItem::new("Cookie", 165.0, 2.0, 22.0, 8.0);

        let ranked = rank_foods(&budget, &[cookie, chicken], 2, &config);

        assert_eq!(ranked[0].food.name, "Chicken breast");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_protein_fit_never_drops_with_more_protein() {
        let fits: Vec<f64> = [0.0, 2.0, 5.0, 31.0, 80.0]
            .iter()
            .map(|grams| protein_fit(*grams, 5.0))
            .collect();

        assert!(fits.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!((fits[4] - 1.0).abs() < f64::EPSILON);
        // exhausted budget still favours smaller amounts
        assert!(protein_fit(2.0, 0.0) > protein_fit(31.0, 0.0));
    }

    #[test]
    fn test_over_target_still_ranks() {
        let budget = RemainingMacros {
            calories: -250.0,
            protein_g: -10.0,
            carbs_g: -30.0,
            fat_g: -5.0,
        };
        let catalog = vec![
            FoodItem::new("Cucumber", 16.0, 0.7, 3.6, 0.1),
            FoodItem::new("Burger", 540.0, 25.0, 40.0, 30.0),
        ];

        let ranked = rank_foods(&budget, &catalog, 5, &SuggestionConfig::default());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].food.name, "Cucumber");
        assert!(ranked[0].reason.contains("over your calorie target"));
    }

    #[test]
    fn test_limit_and_empty_catalog() {
        let budget = remaining();
        let config = SuggestionConfig::default();
        let catalog: Vec<FoodItem> = (0..10)
            .map(|i| FoodItem::new(format!("Food {i}"), 100.0 + f64::from(i) * 20.0, 10.0, 10.0, 3.0))
            .collect();

        assert_eq!(rank_foods(&budget, &catalog, 3, &config).len(), 3);
        assert!(rank_foods(&budget, &catalog, 0, &config).is_empty());
        assert!(rank_foods(&budget, &[], 5, &config).is_empty());
    }

    #[test]
    fn test_reason_reports_excess() {
        let budget = remaining();
        let food = FoodItem::new("Pasta", 700.0, 20.0, 120.0, 10.0);

        let reason = suggestion_reason(&food, &budget, &SuggestionConfig::default());

        assert_eq!(reason, "Exceeds your remaining calories by 100 kcal");
    }
}
