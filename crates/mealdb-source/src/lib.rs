//! MealDB data source for the MealGraph GraphQL API.
//!
//! This crate is the data-access layer between the upstream recipe HTTP API and the GraphQL
//! resolvers that consume it: it fetches raw JSON, reshapes the type-prefixed upstream records
//! into the normalized entities of [`model`], and exposes one typed fetch operation per
//! upstream endpoint on [`source::MealDbSource`].
//!
//! It intentionally contains **no** caching, **no** retry policy and **no** resolver logic;
//! those belong to the layers around it.

pub mod config;
pub mod error;
pub mod model;
pub mod reduce;
pub mod source;

pub use config::SourceConfig;
pub use error::{Result, SourceError};
pub use source::MealDbSource;
