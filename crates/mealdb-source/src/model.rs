//! Normalized entity types.
//!
//! The upstream API returns flat records with type-prefixed keys (`strMeal`, `idMeal`) and a
//! fixed grid of 20 ingredient/measure slots. These types are the cleaned-up shapes the GraphQL
//! layer consumes; the reducers in [`crate::reduce`] produce them.

use serde::{Deserialize, Serialize};

/// A recipe, normalized from one upstream meal record.
///
/// `id` is `None` when the upstream identifier is missing or not numeric; it serializes to
/// `null` rather than failing the record it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub drink_alternate: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    /// Instruction lines in upstream order, blank lines removed.
    pub instructions: Vec<String>,
    pub thumbnail: Option<String>,
    /// Split from the comma-separated upstream field; `None` when that field is empty or absent.
    pub tags: Option<Vec<String>>,
    pub youtube: Option<String>,
    /// Ingredient/measure pairs in slot order. Every entry has a non-empty name.
    pub ingredients: Vec<MealIngredient>,
    pub source: Option<String>,
    pub date_modified: Option<String>,
}

/// One ingredient line of a meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealIngredient {
    pub name: String,
    /// Free-text measure ("1 tbsp"); `None` when the upstream slot is empty.
    pub amount: Option<String>,
}

/// A meal category, normalized from one upstream category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

/// One entry of the upstream ingredient listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
}
