// ABOUTME: Food catalog and food log models for daily intake tracking
// ABOUTME: FoodItem, NutrientTotals, MealType, FoodLogEntry, and MealPreset definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::iter::Sum;
use std::ops::AddAssign;
use uuid::Uuid;

/// Meal slot a food log entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unrecognized meal type sent by a client
    #[serde(other)]
    Other,
}

impl MealType {
    /// Parse meal type from string, unknown input becomes [`MealType::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// The meal bucket this entry is displayed and aggregated under
    ///
    /// Unrecognized meal types fall into the snack bucket.
    #[must_use]
    pub const fn bucket(self) -> Self {
        match self {
            Self::Other => Self::Snack,
            known => known,
        }
    }

    /// Identifier as stored by clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Other => "other",
        }
    }
}

/// Catalog food with nutrition values for one serving
///
/// Read-only reference data. Identity for de-duplication is the
/// case-insensitive name and brand pair, see [`FoodItem::identity_key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog identifier
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub brand: Option<String>,
    /// Catalog category (protein, grain, dairy, ...)
    pub category: String,
    /// Serving size amount
    pub serving_size: f64,
    /// Serving unit (g, ml, cup, piece, ...)
    pub serving_unit: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fat per serving (grams)
    pub fat_g: f64,
    /// Fiber per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fiber_g: Option<f64>,
    /// Sugar per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sugar_g: Option<f64>,
    /// Sodium per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sodium_mg: Option<f64>,
    /// Potassium per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub potassium_mg: Option<f64>,
    /// Calcium per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub calcium_mg: Option<f64>,
    /// Magnesium per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub magnesium_mg: Option<f64>,
    /// Phosphorus per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phosphorus_mg: Option<f64>,
    /// Iron per serving (mg)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub iron_mg: Option<f64>,
}

impl FoodItem {
    /// Create a food with macro values for a single generic serving
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: None,
            category: "general".to_owned(),
            serving_size: 1.0,
            serving_unit: "serving".to_owned(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: None,
            sugar_g: None,
            sodium_mg: None,
            potassium_mg: None,
            calcium_mg: None,
            magnesium_mg: None,
            phosphorus_mg: None,
            iron_mg: None,
        }
    }

    /// Set the brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the serving size and unit
    #[must_use]
    pub fn with_serving(mut self, size: f64, unit: impl Into<String>) -> Self {
        self.serving_size = size;
        self.serving_unit = unit.into();
        self
    }

    /// Set fiber and sugar per serving (grams)
    #[must_use]
    pub fn with_fiber_and_sugar(mut self, fiber_g: f64, sugar_g: f64) -> Self {
        self.fiber_g = Some(fiber_g);
        self.sugar_g = Some(sugar_g);
        self
    }

    /// Set the electrolyte values per serving (mg)
    #[must_use]
    pub fn with_electrolytes(mut self, sodium_mg: f64, potassium_mg: f64) -> Self {
        self.sodium_mg = Some(sodium_mg);
        self.potassium_mg = Some(potassium_mg);
        self
    }

    /// Set the mineral values per serving (mg)
    #[must_use]
    pub fn with_minerals(
        mut self,
        calcium_mg: f64,
        magnesium_mg: f64,
        phosphorus_mg: f64,
        iron_mg: f64,
    ) -> Self {
        self.calcium_mg = Some(calcium_mg);
        self.magnesium_mg = Some(magnesium_mg);
        self.phosphorus_mg = Some(phosphorus_mg);
        self.iron_mg = Some(iron_mg);
        self
    }

    /// Case-insensitive name + brand key used when seeding a catalog
    #[must_use]
    pub fn identity_key(&self) -> String {
        format!(
            "{}|{}",
            self.name.trim().to_lowercase(),
            self.brand.as_deref().unwrap_or("").trim().to_lowercase()
        )
    }
}

/// Drop catalog duplicates (same name and brand), keeping the first occurrence
#[must_use]
pub fn dedupe_catalog(foods: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut seen = HashSet::new();
    foods
        .into_iter()
        .filter(|food| seen.insert(food.identity_key()))
        .collect()
}

/// Macro and micronutrient amounts, either for one log entry or summed over a day
///
/// Optional food fields are counted as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
    /// Sugar (grams)
    pub sugar_g: f64,
    /// Sodium (mg)
    pub sodium_mg: f64,
    /// Potassium (mg)
    pub potassium_mg: f64,
    /// Calcium (mg)
    pub calcium_mg: f64,
    /// Magnesium (mg)
    pub magnesium_mg: f64,
    /// Phosphorus (mg)
    pub phosphorus_mg: f64,
    /// Iron (mg)
    pub iron_mg: f64,
}

impl NutrientTotals {
    /// Totals for `servings` servings of `food`
    #[must_use]
    pub fn for_servings(food: &FoodItem, servings: f64) -> Self {
        let scale = |value: Option<f64>| value.unwrap_or(0.0) * servings;
        Self {
            calories: food.calories * servings,
            protein_g: food.protein_g * servings,
            carbs_g: food.carbs_g * servings,
            fat_g: food.fat_g * servings,
            fiber_g: scale(food.fiber_g),
            sugar_g: scale(food.sugar_g),
            sodium_mg: scale(food.sodium_mg),
            potassium_mg: scale(food.potassium_mg),
            calcium_mg: scale(food.calcium_mg),
            magnesium_mg: scale(food.magnesium_mg),
            phosphorus_mg: scale(food.phosphorus_mg),
            iron_mg: scale(food.iron_mg),
        }
    }

    /// Keyed view used by percentage calculations
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<String, f64> {
        [
            ("calories", self.calories),
            ("protein", self.protein_g),
            ("carbs", self.carbs_g),
            ("fat", self.fat_g),
            ("fiber", self.fiber_g),
            ("sugar", self.sugar_g),
            ("sodium", self.sodium_mg),
            ("potassium", self.potassium_mg),
            ("calcium", self.calcium_mg),
            ("magnesium", self.magnesium_mg),
            ("phosphorus", self.phosphorus_mg),
            ("iron", self.iron_mg),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
    }
}

impl AddAssign<&Self> for NutrientTotals {
    fn add_assign(&mut self, other: &Self) {
        self.calories += other.calories;
        self.protein_g += other.protein_g;
        self.carbs_g += other.carbs_g;
        self.fat_g += other.fat_g;
        self.fiber_g += other.fiber_g;
        self.sugar_g += other.sugar_g;
        self.sodium_mg += other.sodium_mg;
        self.potassium_mg += other.potassium_mg;
        self.calcium_mg += other.calcium_mg;
        self.magnesium_mg += other.magnesium_mg;
        self.phosphorus_mg += other.phosphorus_mg;
        self.iron_mg += other.iron_mg;
    }
}

impl<'a> Sum<&'a Self> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, totals| {
            acc += totals;
            acc
        })
    }
}

/// One logged food with its denormalized nutrient totals
///
/// `totals` always equals `servings` times the food's per-serving values as
/// they were when the entry was written. Later edits to the catalog food do
/// not flow into existing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Catalog food this entry references
    pub food_id: Uuid,
    /// Food name at the time of logging
    pub food_name: String,
    /// Number of servings eaten
    pub servings: f64,
    /// Meal slot
    pub meal_type: MealType,
    /// When the food was eaten
    pub logged_at: DateTime<Utc>,
    /// Denormalized totals (`servings` x per-serving values)
    pub totals: NutrientTotals,
}

impl FoodLogEntry {
    /// Snapshot `food` into a new entry
    #[must_use]
    pub fn snapshot(
        food: &FoodItem,
        servings: f64,
        meal_type: MealType,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            food_id: food.id,
            food_name: food.name.clone(),
            servings,
            meal_type,
            logged_at,
            totals: NutrientTotals::for_servings(food, servings),
        }
    }

    /// Calories recorded on this entry
    #[must_use]
    pub const fn total_calories(&self) -> f64 {
        self.totals.calories
    }
}

/// Food and serving count inside a saved meal preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetItem {
    /// Catalog food
    pub food: FoodItem,
    /// Servings logged for this food
    pub servings: f64,
}

/// Saved combination of foods that can be logged in one action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPreset {
    /// Preset identifier
    pub id: Uuid,
    /// Preset name ("Usual breakfast")
    pub name: String,
    /// Foods in the preset
    pub items: Vec<PresetItem>,
}
