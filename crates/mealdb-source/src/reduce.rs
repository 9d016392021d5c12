//! Reducers: pure projections from raw upstream JSON records to normalized entities.
//!
//! Upstream records are weakly typed, so reducers take `serde_json::Value` and validate
//! field-by-field. They never fail: a malformed record reduces to a mostly-empty entity
//! instead of aborting the batch it arrived in.

use crate::model::{Category, Ingredient, Meal, MealIngredient};
use serde_json::Value;

/// The upstream meal grid always carries this many ingredient/measure slot pairs.
const INGREDIENT_SLOTS: u32 = 20;

/// Apply `reduce` to every element of an array-shaped list value, in order.
///
/// The upstream API reports "no matches" as a `null` or missing list field rather than an
/// empty array, so any non-array input reduces to an empty vec instead of an error.
pub fn normalize<T>(list: &Value, reduce: fn(&Value) -> T) -> Vec<T> {
    match list.as_array() {
        Some(items) => items.iter().map(reduce).collect(),
        None => Vec::new(),
    }
}

/// Reduce one raw meal record.
pub fn reduce_meal(raw: &Value) -> Meal {
    Meal {
        id: parse_id(raw, "idMeal"),
        name: text(raw, "strMeal"),
        drink_alternate: text(raw, "strDrinkAlternate"),
        category: text(raw, "strCategory"),
        area: text(raw, "strArea"),
        instructions: instruction_lines(raw),
        thumbnail: text(raw, "strMealThumb"),
        tags: tag_list(raw),
        youtube: text(raw, "strYoutube"),
        ingredients: ingredient_pairs(raw),
        source: text(raw, "strSource"),
        date_modified: text(raw, "dateModified"),
    }
}

/// Reduce one raw category record. Field renames only.
pub fn reduce_category(raw: &Value) -> Category {
    Category {
        id: parse_id(raw, "idCategory"),
        name: text(raw, "strCategory"),
        thumbnail: text(raw, "strCategoryThumb"),
        description: text(raw, "strCategoryDescription"),
    }
}

/// Reduce one raw ingredient listing record. Field renames only.
pub fn reduce_ingredient(raw: &Value) -> Ingredient {
    Ingredient {
        id: parse_id(raw, "idIngredient"),
        name: text(raw, "strIngredient"),
        description: text(raw, "strDescription"),
        kind: text(raw, "strType"),
    }
}

/// String field passed through unchanged (`None` when absent or not a string).
fn text(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

/// String field with empty collapsed to `None`.
fn non_empty(raw: &Value, key: &str) -> Option<String> {
    text(raw, key).filter(|s| !s.is_empty())
}

/// Upstream ids arrive as strings ("52772"); tolerate a bare JSON number too. Anything else is
/// `None`, the no-throw sentinel: a malformed id must not fail the record.
fn parse_id(raw: &Value, key: &str) -> Option<i64> {
    match raw.get(key) {
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    }
}

/// Split the single instruction blob on CRLF, dropping blank lines and preserving order.
fn instruction_lines(raw: &Value) -> Vec<String> {
    raw.get("strInstructions")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-split tags; an empty or absent upstream field collapses to `None`.
fn tag_list(raw: &Value) -> Option<Vec<String>> {
    non_empty(raw, "strTags").map(|tags| tags.split(',').map(str::to_string).collect())
}

/// Pair the numbered ingredient/measure slots, keeping slot order and dropping pairs whose
/// ingredient name is empty. This is a filter, not a null-fill: unused slots disappear.
fn ingredient_pairs(raw: &Value) -> Vec<MealIngredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = non_empty(raw, &format!("strIngredient{slot}"))?;
            let amount = non_empty(raw, &format!("strMeasure{slot}"));
            Some(MealIngredient { name, amount })
        })
        .collect()
}
