//! Command-line probe for the MealDB source.
//!
//! Runs one fetch operation against the live upstream API and prints the normalized result as
//! pretty JSON. Useful for eyeballing reducer output without wiring up the GraphQL layer.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use mealgraph_mealdb_source::config::{API_HOST_ENV, API_KEY_ENV, DEFAULT_API_HOST};
use mealgraph_mealdb_source::{MealDbSource, SourceConfig};

#[derive(Parser)]
#[command(
    name = "mealdb-probe",
    about = "Probe the upstream recipe API through the source"
)]
struct Args {
    /// Upstream access key (the public development key is "1").
    #[arg(long, env = API_KEY_ENV, default_value = "1")]
    api_key: String,

    /// Upstream host override.
    #[arg(long, env = API_HOST_ENV, default_value = DEFAULT_API_HOST)]
    api_host: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for a meal by name (first match).
    Search { name: String },
    /// List all meals whose name starts with a letter.
    Letter { letter: String },
    /// Look up a meal by id.
    Lookup { id: i64 },
    /// Fetch a single random meal.
    Random,
    /// Fetch the upstream's selection of random meals.
    RandomSelection,
    /// List all meal categories.
    Categories,
    /// List all known ingredients.
    Ingredients,
    /// Fetch the most recently added meals.
    Latest,
    /// Filter meals by main ingredient.
    ByIngredient { ingredient: String },
    /// Filter meals by several ingredients at once.
    ByIngredients { ingredients: Vec<String> },
    /// Filter meals by category.
    ByCategory { category: String },
    /// Filter meals by area.
    ByArea { area: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = SourceConfig::with_host(args.api_key, args.api_host);
    let source = MealDbSource::new(&config)?;

    let rendered = match args.command {
        Command::Search { name } => render(&source.meal_by_name(&name).await?)?,
        Command::Letter { letter } => render(&source.meals_by_first_letter(&letter).await?)?,
        Command::Lookup { id } => render(&source.meal_by_id(id).await?)?,
        Command::Random => render(&source.random_meal().await?)?,
        Command::RandomSelection => render(&source.random_meal_selection().await?)?,
        Command::Categories => render(&source.all_categories().await?)?,
        Command::Ingredients => render(&source.all_ingredients().await?)?,
        Command::Latest => render(&source.latest_meals().await?)?,
        Command::ByIngredient { ingredient } => {
            render(&source.meals_by_main_ingredient(&ingredient).await?)?
        }
        Command::ByIngredients { ingredients } => {
            let ingredients: Vec<&str> = ingredients.iter().map(String::as_str).collect();
            render(&source.meals_by_ingredients(&ingredients).await?)?
        }
        Command::ByCategory { category } => render(&source.meals_by_category(&category).await?)?,
        Command::ByArea { area } => render(&source.meals_by_area(&area).await?)?,
    };

    println!("{rendered}");
    Ok(())
}

fn render<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("serialize normalized result")
}
