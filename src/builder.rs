use std::path::PathBuf;
use std::time::Duration;

use log::info;

use crate::dataset::DatasetSource;
use crate::matcher::TieBreak;
use crate::model::{DetectedIngredients, Recipe};
use crate::recommendation::{recommend, Recommendation};
use crate::RecommendError;

/// Recipes to match against: either already loaded or still to be loaded
#[derive(Debug, Clone)]
enum RecipeInput {
    Loaded(Vec<Recipe>),
    Source(DatasetSource),
}

/// Builder for configuring and running a recommendation
#[derive(Debug, Default)]
pub struct RecommenderBuilder {
    recipes: Option<RecipeInput>,
    detected: DetectedIngredients,
    tie_break: TieBreak,
    timeout: Option<Duration>,
}

impl RecommenderBuilder {
    /// Use dataset JSON that is already in memory
    ///
    /// # Example
    /// ```
    /// use recipe_recommender::Recommender;
    ///
    /// let builder = Recommender::builder()
    ///     .dataset_json(r#"[{"name": "Toast", "ingredients": ["bread"], "link": "http://t"}]"#);
    /// ```
    pub fn dataset_json(mut self, json: impl Into<String>) -> Self {
        self.recipes = Some(RecipeInput::Source(DatasetSource::Json(json.into())));
        self
    }

    /// Load the dataset from a local JSON file
    pub fn dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.recipes = Some(RecipeInput::Source(DatasetSource::Path(path.into())));
        self
    }

    /// Fetch the dataset from a URL
    ///
    /// # Example
    /// ```
    /// use recipe_recommender::Recommender;
    /// use std::time::Duration;
    ///
    /// let builder = Recommender::builder()
    ///     .dataset_url("https://example.com/dataset.json")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.recipes = Some(RecipeInput::Source(DatasetSource::Url(url.into())));
        self
    }

    /// Use any dataset source
    pub fn dataset(mut self, source: DatasetSource) -> Self {
        self.recipes = Some(RecipeInput::Source(source));
        self
    }

    /// Match against recipes that were loaded elsewhere
    pub fn recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Some(RecipeInput::Loaded(recipes));
        self
    }

    /// Replace the detected ingredients
    pub fn detected(mut self, detected: DetectedIngredients) -> Self {
        self.detected = detected;
        self
    }

    /// Append one detected ingredient label
    ///
    /// # Example
    /// ```
    /// use recipe_recommender::Recommender;
    ///
    /// let builder = Recommender::builder()
    ///     .ingredient("Egg")
    ///     .ingredient("flour");
    /// ```
    pub fn ingredient(mut self, label: impl AsRef<str>) -> Self {
        self.detected.record(label.as_ref());
        self
    }

    /// Ordering between recipes with the same match count
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Timeout for fetching a remote dataset
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Load the dataset (if needed) and compute the recommendation
    ///
    /// # Errors
    /// Returns `RecommendError` if:
    /// - No dataset was specified
    /// - The dataset cannot be read or fetched
    /// - The dataset fails validation
    ///
    /// # Example
    /// ```
    /// # use recipe_recommender::Recommender;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = Recommender::builder()
    ///     .dataset_json(r#"[{"name": "Toast", "ingredients": ["bread", "butter"], "link": "http://t"}]"#)
    ///     .ingredient("Bread")
    ///     .build()
    ///     .await?;
    /// assert_eq!(result.matches()[0].missing_ingredients, vec!["butter"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Recommendation, RecommendError> {
        let input = self.recipes.ok_or_else(|| {
            RecommendError::BuilderError(
                "No dataset specified. Use .dataset_path(), .dataset_url(), .dataset_json() or .recipes()"
                    .to_string(),
            )
        })?;

        let recipes = match input {
            RecipeInput::Loaded(recipes) => recipes,
            RecipeInput::Source(source) => {
                let loader = source.into_loader(self.timeout)?;
                let recipes = loader.load().await?;
                info!("Loaded {} recipes from {}", recipes.len(), loader.describe());
                recipes
            }
        };

        Ok(recommend(self.detected.as_slice(), &recipes, self.tie_break))
    }
}

/// Main entry point for the builder API
pub struct Recommender;

impl Recommender {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_recommender::Recommender;
    ///
    /// let builder = Recommender::builder();
    /// ```
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_without_dataset_fails() {
        let result = Recommender::builder().ingredient("egg").build().await;
        match result {
            Err(RecommendError::BuilderError(msg)) => assert!(msg.contains("No dataset")),
            other => panic!("Expected BuilderError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_build_with_loaded_recipes() {
        let result = Recommender::builder()
            .recipes(vec![Recipe::new("Toast", "http://t", ["bread"])])
            .ingredient(" BREAD ")
            .build()
            .await
            .unwrap();
        assert_eq!(result.matches().len(), 1);
    }

    #[tokio::test]
    async fn test_last_dataset_call_wins() {
        let result = Recommender::builder()
            .dataset_path("/definitely/not/here.json")
            .recipes(vec![Recipe::new("Toast", "http://t", ["bread"])])
            .ingredient("bread")
            .build()
            .await;
        assert!(result.is_ok());
    }
}
