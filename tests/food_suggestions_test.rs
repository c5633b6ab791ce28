// ABOUTME: Integration tests for food suggestions ranked against the remaining daily budget
// ABOUTME: Covers ordering, limits, catalog de-duplication, reasons, and over-target days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    at, catalog, chicken_breast, chocolate_cookie, date, male_fat_loss_profile, oatmeal, service,
};
use pierre_nutrition::models::{FoodItem, FoodLogEntry, MealType, StreakState};
use pierre_nutrition::services::{LogFoodRequest, UserProfileRecord};
use pierre_nutrition::ErrorCode;

fn burger() -> FoodItem {
    FoodItem::new("Double cheeseburger", 1250.0, 62.0, 80.0, 75.0)
}

fn eat(profile: &UserProfileRecord, food: &FoodItem, servings: f64) -> FoodLogEntry {
    service()
        .log_food(
            &mut StreakState::default(),
            food,
            LogFoodRequest {
                user_id: profile.user_id,
                servings,
                meal_type: MealType::Lunch,
                logged_at: Some(at(2025, 5, 2, 12)),
            },
            at(2025, 5, 2, 12),
        )
        .unwrap()
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_default_limit_and_descending_scores() {
    let profile = male_fat_loss_profile();

    let suggestions = service()
        .food_suggestions(date(2025, 5, 2), &[], &profile, &catalog(), None)
        .unwrap();

    assert_eq!(suggestions.len(), 5);
    assert!(suggestions
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
    assert!(suggestions
        .iter()
        .all(|s| (0.0..=100.0).contains(&s.score)));
}

#[test]
fn test_explicit_limit_and_zero_limit() {
    let profile = male_fat_loss_profile();
    let service = service();

    let two = service
        .food_suggestions(date(2025, 5, 2), &[], &profile, &catalog(), Some(2))
        .unwrap();
    let none = service
        .food_suggestions(date(2025, 5, 2), &[], &profile, &catalog(), Some(0))
        .unwrap();
    let all = service
        .food_suggestions(date(2025, 5, 2), &[], &profile, &catalog(), Some(50))
        .unwrap();

    assert_eq!(two.len(), 2);
    assert!(none.is_empty());
    assert_eq!(all.len(), catalog().len());
}

#[test]
fn test_duplicate_catalog_foods_suggested_once() {
    let profile = male_fat_loss_profile();
    let mut foods = catalog();
    foods.push(chicken_breast());
    foods.push(FoodItem::new("CHICKEN BREAST", 170.0, 32.0, 0.0, 4.0));

    let suggestions = service()
        .food_suggestions(date(2025, 5, 2), &[], &profile, &foods, Some(50))
        .unwrap();

    let chicken_count = suggestions
        .iter()
        .filter(|s| s.food.name.eq_ignore_ascii_case("chicken breast"))
        .count();
    assert_eq!(chicken_count, 1);
    assert_eq!(suggestions.len(), catalog().len());
}

#[test]
fn test_empty_catalog_gives_empty_list() {
    let suggestions = service()
        .food_suggestions(date(2025, 5, 2), &[], &male_fat_loss_profile(), &[], None)
        .unwrap();

    assert!(suggestions.is_empty());
}

// ============================================================================
// Budget Awareness
// ============================================================================

#[test]
fn test_food_larger_than_budget_is_explained_and_not_first() {
    let profile = male_fat_loss_profile();
    let entries = vec![eat(&profile, &burger(), 1.0), eat(&profile, &oatmeal(), 2.0)];

    let suggestions = service()
        .food_suggestions(date(2025, 5, 2), &entries, &profile, &catalog(), Some(50))
        .unwrap();

    assert_ne!(suggestions[0].food.name, "Double cheeseburger");
    let burger = suggestions
        .iter()
        .find(|s| s.food.name == "Double cheeseburger")
        .unwrap();
    assert_eq!(burger.reason, "Exceeds your remaining calories by 724 kcal");

    let chicken = suggestions
        .iter()
        .find(|s| s.food.name == "Chicken breast")
        .unwrap();
    assert!(chicken.reason.starts_with("High protein"));
    assert!(chicken.score > burger.score);
}

#[test]
fn test_high_protein_food_ranks_first_when_little_protein_is_left() {
    let profile = male_fat_loss_profile();
    // 5 x 31 g leaves 6 g of the 161 g protein target
    let entries = vec![eat(&profile, &chicken_breast(), 5.0)];
    let foods = vec![chocolate_cookie(), chicken_breast()];

    let suggestions = service()
        .food_suggestions(date(2025, 5, 2), &entries, &profile, &foods, None)
        .unwrap();

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].food.name, "Chicken breast");
    assert!(suggestions[0].score > suggestions[1].score);
    assert!(suggestions[0].reason.starts_with("High protein"));
}

#[test]
fn test_over_target_day_still_ranks_lightest_first() {
    let profile = male_fat_loss_profile();
    let entries = vec![eat(&profile, &burger(), 3.0)];

    let suggestions = service()
        .food_suggestions(date(2025, 5, 2), &entries, &profile, &catalog(), Some(50))
        .unwrap();

    assert_eq!(suggestions.len(), catalog().len());
    assert_eq!(
        suggestions.last().unwrap().food.name,
        "Double cheeseburger"
    );
    assert!(suggestions
        .iter()
        .all(|s| s.reason == "A light option while you are over your calorie target"));
}

#[test]
fn test_suggestions_need_complete_profile() {
    let record = UserProfileRecord {
        fitness_goal: None,
        ..male_fat_loss_profile()
    };

    let err = service()
        .food_suggestions(date(2025, 5, 2), &[], &record, &catalog(), None)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}
