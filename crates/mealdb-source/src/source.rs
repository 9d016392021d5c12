//! Fetch operations against the upstream recipe API.
//!
//! Each operation issues exactly one GET, destructures the `meals` list field out of the JSON
//! envelope and runs it through the matching reducer. Transport failures and non-2xx statuses
//! surface unchanged (no retries, no interpretation). A missing or non-array list field is
//! zero results, never an error.

use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::model::{Category, Ingredient, Meal};
use crate::reduce::{normalize, reduce_category, reduce_ingredient, reduce_meal};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Envelope field wrapping the record list. The upstream v1 API uses the same field for every
/// endpoint, categories and ingredient listings included.
const LIST_FIELD: &str = "meals";

/// Typed client for the upstream recipe API.
///
/// Cheap to clone and free of mutable state, so one instance can serve concurrent callers.
/// Operation parameters are embedded verbatim in the query string; callers own any escaping.
#[derive(Debug, Clone)]
pub struct MealDbSource {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbSource {
    /// Build a source from a config.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the composed base URL does not parse.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Self::with_base_url(config.base_url())
    }

    /// Build a source against an explicit keyed base URL (tests, proxies).
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `base_url` does not parse.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| SourceError::Config(format!("Invalid upstream base URL: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Search for a meal by name.
    pub async fn meal_by_name(&self, name: &str) -> Result<Option<Meal>> {
        let meals = self.fetch_meals(&format!("/search.php?s={name}")).await?;
        Ok(meals.into_iter().next())
    }

    /// List all meals whose name starts with a letter.
    pub async fn meals_by_first_letter(&self, letter: &str) -> Result<Vec<Meal>> {
        self.fetch_meals(&format!("/search.php?f={letter}")).await
    }

    /// Look up a meal by id.
    pub async fn meal_by_id(&self, id: i64) -> Result<Option<Meal>> {
        let meals = self.fetch_meals(&format!("/lookup.php?i={id}")).await?;
        Ok(meals.into_iter().next())
    }

    /// Fetch a single random meal.
    pub async fn random_meal(&self) -> Result<Option<Meal>> {
        Ok(self.fetch_meals("/random.php").await?.into_iter().next())
    }

    /// Fetch the upstream's selection of random meals.
    pub async fn random_meal_selection(&self) -> Result<Vec<Meal>> {
        self.fetch_meals("/randomselection.php").await
    }

    /// List all meal categories.
    pub async fn all_categories(&self) -> Result<Vec<Category>> {
        let list = self.fetch_list("/categories.php").await?;
        Ok(normalize(&list, reduce_category))
    }

    /// List all known ingredients.
    pub async fn all_ingredients(&self) -> Result<Vec<Ingredient>> {
        let list = self.fetch_list("/list.php?i=list").await?;
        Ok(normalize(&list, reduce_ingredient))
    }

    /// Fetch the most recently added meals.
    pub async fn latest_meals(&self) -> Result<Vec<Meal>> {
        self.fetch_meals("/latest.php").await
    }

    /// Filter meals by main ingredient.
    pub async fn meals_by_main_ingredient(&self, ingredient: &str) -> Result<Vec<Meal>> {
        self.fetch_meals(&format!("/filter.php?i={ingredient}"))
            .await
    }

    /// Filter meals by several ingredients at once, comma-joined into a single query.
    pub async fn meals_by_ingredients(&self, ingredients: &[&str]) -> Result<Vec<Meal>> {
        let joined = ingredients.join(",");
        self.fetch_meals(&format!("/filter.php?i={joined}")).await
    }

    /// Filter meals by category.
    pub async fn meals_by_category(&self, category: &str) -> Result<Vec<Meal>> {
        self.fetch_meals(&format!("/filter.php?c={category}")).await
    }

    /// Filter meals by area (Italian, Japanese, ...).
    pub async fn meals_by_area(&self, area: &str) -> Result<Vec<Meal>> {
        self.fetch_meals(&format!("/filter.php?a={area}")).await
    }

    async fn fetch_meals(&self, path_and_query: &str) -> Result<Vec<Meal>> {
        let list = self.fetch_list(path_and_query).await?;
        Ok(normalize(&list, reduce_meal))
    }

    /// GET an endpoint and pull the record list out of the JSON envelope.
    async fn fetch_list(&self, path_and_query: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(path = path_and_query, "fetching from upstream");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status });
        }

        let envelope: Value = response.json().await?;
        let list = envelope.get(LIST_FIELD).cloned().unwrap_or(Value::Null);
        if !list.is_array() && !list.is_null() {
            warn!(
                path = path_and_query,
                "upstream envelope list field is not an array; treating as zero results"
            );
        }
        Ok(list)
    }
}
