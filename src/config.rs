use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::dataset::DatasetSource;
use crate::matcher::TieBreak;
use crate::RecommendError;

/// Main recommender configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RecommenderConfig {
    /// Where to load the recipe dataset from
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Outbound shopping links for missing ingredients
    #[serde(default)]
    pub shopping: ShoppingConfig,
    /// Result ordering
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Request timeout in seconds for remote datasets
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            shopping: ShoppingConfig::default(),
            ranking: RankingConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Dataset location. `url` wins over `path` when both are set.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    pub url: Option<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            url: None,
        }
    }
}

impl DatasetConfig {
    pub fn source(&self) -> DatasetSource {
        match &self.url {
            Some(url) => DatasetSource::Url(url.clone()),
            None => DatasetSource::Path(self.path.clone().into()),
        }
    }
}

/// Search links rendered for each missing ingredient
#[derive(Debug, Deserialize, Clone)]
pub struct ShoppingConfig {
    /// Whether shopping links are rendered at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Store name used in the link text ("<label> Link for <ingredient>")
    #[serde(default = "default_shopping_label")]
    pub label: String,
    /// Search page of the store
    #[serde(default = "default_shopping_base_url")]
    pub base_url: String,
    /// Query parameter that carries the ingredient
    #[serde(default = "default_shopping_query_param")]
    pub query_param: String,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: default_shopping_label(),
            base_url: default_shopping_base_url(),
            query_param: default_shopping_query_param(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RankingConfig {
    #[serde(default)]
    pub tie_break: TieBreak,
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_dataset_path() -> String {
    "dataset.json".to_string()
}

fn default_shopping_label() -> String {
    "Zepto".to_string()
}

fn default_shopping_base_url() -> String {
    "https://www.zeptonow.com/search".to_string()
}

fn default_shopping_query_param() -> String {
    "query".to_string()
}

impl RecommenderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECOMMENDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECOMMENDER__SHOPPING__BASE_URL
    pub fn load() -> Result<Self, RecommendError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from `config.toml` (optional) and `RECOMMENDER__*`
/// environment variables.
pub fn load_config() -> Result<RecommenderConfig, RecommendError> {
    let builder = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECOMMENDER__DATASET__PATH
        .add_source(
            Environment::with_prefix("RECOMMENDER")
                .separator("__")
                .try_parsing(true),
        );

    build_config(builder)
}

fn build_config(
    builder: ConfigBuilder<DefaultState>,
) -> Result<RecommenderConfig, RecommendError> {
    Ok(builder.build()?.try_deserialize()?)
}
