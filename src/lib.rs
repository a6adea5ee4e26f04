//! Recipe recommendations from scanned ingredients.
//!
//! Ingredient labels come from an image classifier running on the device;
//! this crate matches them against a recipe dataset, ranks the recipes that
//! use any of them and renders the result for a web view.
//!
//! ```
//! use recipe_recommender::{match_recipes, Recipe};
//!
//! let recipes = vec![
//!     Recipe::new("Pancake", "http://a", ["egg", "flour", "milk"]),
//!     Recipe::new("Salad", "http://c", ["lettuce"]),
//! ];
//! let results = match_recipes(&["Egg", "flour"], &recipes);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].missing_ingredients, vec!["milk"]);
//! ```

pub mod builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod matcher;
pub mod model;
pub mod recommendation;
pub mod render;
pub mod uniffi_bindings;

pub use builder::{Recommender, RecommenderBuilder};
pub use config::{RecommenderConfig, ShoppingConfig};
pub use dataset::{parse_dataset, DatasetLoader, DatasetSource};
pub use error::RecommendError;
pub use matcher::{match_recipes, match_recipes_with, TieBreak};
pub use model::{normalize_ingredient, DetectedIngredients, MatchResult, Recipe};
pub use recommendation::{recommend, Recommendation};
pub use render::{render_html, render_text};
