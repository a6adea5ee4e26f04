//! Loading boundary for the recipe dataset.
//!
//! The dataset is a JSON array of `{name, ingredients, link}` objects. Every
//! record is validated here so that the matcher only ever sees well-formed
//! [`Recipe`] values; the first bad record fails the whole load.

mod file;
mod http;

pub use file::FileLoader;
pub use http::HttpLoader;

use async_trait::async_trait;
use log::debug;
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::RecommendError;
use crate::model::Recipe;

/// Where the recipe dataset comes from
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Dataset text already in memory (e.g. a packaged asset read by the host)
    Json(String),
    /// Local JSON file
    Path(PathBuf),
    /// JSON served over http(s)
    Url(String),
}

impl DatasetSource {
    /// Pick a source from a CLI-style argument: http(s) URLs are fetched,
    /// anything else is treated as a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            DatasetSource::Url(arg.to_string())
        } else {
            DatasetSource::Path(PathBuf::from(arg))
        }
    }

    pub fn into_loader(
        self,
        timeout: Option<Duration>,
    ) -> Result<Box<dyn DatasetLoader>, RecommendError> {
        Ok(match self {
            DatasetSource::Json(text) => Box::new(JsonLoader::new(text)),
            DatasetSource::Path(path) => Box::new(FileLoader::new(path)),
            DatasetSource::Url(url) => Box::new(HttpLoader::new(url, timeout)?),
        })
    }

    /// Load and validate the dataset from this source.
    pub async fn load(self, timeout: Option<Duration>) -> Result<Vec<Recipe>, RecommendError> {
        self.into_loader(timeout)?.load().await
    }
}

/// Something that can produce the validated recipe list
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Short description of the source, used in logs
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<Recipe>, RecommendError>;
}

/// Dataset held in memory as JSON text
pub struct JsonLoader {
    text: String,
}

impl JsonLoader {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl DatasetLoader for JsonLoader {
    fn describe(&self) -> String {
        format!("inline json ({} bytes)", self.text.len())
    }

    async fn load(&self) -> Result<Vec<Recipe>, RecommendError> {
        parse_dataset(&self.text)
    }
}

/// Wire shape of one dataset entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeRecord {
    name: String,
    ingredients: Vec<String>,
    link: String,
}

/// Decode and validate dataset JSON.
pub fn parse_dataset(json: &str) -> Result<Vec<Recipe>, RecommendError> {
    let records: Vec<RecipeRecord> = serde_json::from_str(json)?;

    let recipes = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} recipes", recipes.len());
    Ok(recipes)
}

fn validate_record(index: usize, record: RecipeRecord) -> Result<Recipe, RecommendError> {
    let invalid = |reason: String| RecommendError::InvalidRecipe { index, reason };

    let name = record.name.trim();
    if name.is_empty() {
        return Err(invalid("name is empty".to_string()));
    }

    let link = record.link.trim();
    let url = Url::parse(link)
        .map_err(|e| invalid(format!("link '{}' is not a URL: {}", link, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("link '{}' must use http or https", link)));
    }

    if let Some(position) = record.ingredients.iter().position(|i| i.trim().is_empty()) {
        return Err(invalid(format!("ingredient {} is empty", position)));
    }

    Ok(Recipe {
        name: name.to_string(),
        link: link.to_string(),
        ingredients: record.ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dataset() {
        let json = r#"[
            {"name": "Pancake", "ingredients": ["Egg", " flour", "milk"], "link": "http://a.example/pancake"},
            {"name": "Omelette", "ingredients": ["egg", "cheese"], "link": "https://b.example/omelette"}
        ]"#;

        let recipes = parse_dataset(json).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Pancake");
        // raw text is kept, normalization happens when matching
        assert_eq!(recipes[0].ingredients, vec!["Egg", " flour", "milk"]);
        assert_eq!(recipes[1].link, "https://b.example/omelette");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_dataset("[]").unwrap().is_empty());
    }

    #[test]
    fn test_recipe_without_ingredients_is_allowed() {
        let json = r#"[{"name": "Water", "ingredients": [], "link": "http://w"}]"#;
        let recipes = parse_dataset(json).unwrap();
        assert!(recipes[0].ingredients.is_empty());
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"[{"name": "Pancake", "ingredients": ["egg"]}]"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(matches!(err, RecommendError::DatasetError(_)));
        assert!(err.to_string().contains("link"));
    }

    #[test]
    fn test_unknown_field_fails() {
        let json = r#"[{"name": "P", "ingredients": [], "link": "http://a", "rating": 5}]"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn test_not_an_array_fails() {
        let json = r#"{"name": "P", "ingredients": [], "link": "http://a"}"#;
        assert!(matches!(
            parse_dataset(json),
            Err(RecommendError::DatasetError(_))
        ));
    }

    #[test]
    fn test_blank_name_reports_index() {
        let json = r#"[
            {"name": "Ok", "ingredients": ["egg"], "link": "http://a"},
            {"name": "  ", "ingredients": ["egg"], "link": "http://b"}
        ]"#;
        match parse_dataset(json) {
            Err(RecommendError::InvalidRecipe { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("name"));
            }
            other => panic!("Expected InvalidRecipe, got {:?}", other),
        }
    }

    #[test]
    fn test_relative_link_fails() {
        let json = r#"[{"name": "P", "ingredients": ["egg"], "link": "/recipes/p"}]"#;
        assert!(matches!(
            parse_dataset(json),
            Err(RecommendError::InvalidRecipe { index: 0, .. })
        ));
    }

    #[test]
    fn test_non_web_link_fails() {
        let json = r#"[{"name": "P", "ingredients": ["egg"], "link": "javascript:alert(1)"}]"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_blank_ingredient_fails() {
        let json = r#"[{"name": "P", "ingredients": ["egg", " "], "link": "http://a"}]"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(err.to_string().contains("ingredient 1 is empty"));
    }

    #[test]
    fn test_source_from_arg() {
        assert!(matches!(
            DatasetSource::from_arg("https://example.com/dataset.json"),
            DatasetSource::Url(_)
        ));
        assert!(matches!(
            DatasetSource::from_arg("data/dataset.json"),
            DatasetSource::Path(_)
        ));
    }

    #[tokio::test]
    async fn test_json_loader() {
        let loader =
            JsonLoader::new(r#"[{"name": "P", "ingredients": ["egg"], "link": "http://a"}]"#);
        assert!(loader.describe().starts_with("inline json"));
        let recipes = loader.load().await.unwrap();
        assert_eq!(recipes.len(), 1);
    }
}
