//! UniFFI bindings for recipe-recommender
//!
//! FFI-compatible types and functions for the Android and iOS hosts. The host
//! owns the camera and the classifier; it passes the accumulated labels and
//! the packaged dataset text in, and gets ranked recipes or ready-to-load
//! HTML back. Calls that touch the network manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::config::ShoppingConfig;
use crate::matcher::TieBreak;
use crate::model::{DetectedIngredients, MatchResult};
use crate::recommendation::Recommendation;
use crate::RecommendError;

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible match result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMatchResult {
    pub name: String,
    pub link: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}

impl From<MatchResult> for FfiMatchResult {
    fn from(result: MatchResult) -> Self {
        FfiMatchResult {
            name: result.name,
            link: result.link,
            matched_ingredients: result.matched_ingredients,
            missing_ingredients: result.missing_ingredients,
        }
    }
}

impl From<FfiMatchResult> for MatchResult {
    fn from(ffi: FfiMatchResult) -> Self {
        MatchResult {
            name: ffi.name,
            link: ffi.link,
            matched_ingredients: ffi.matched_ingredients,
            missing_ingredients: ffi.missing_ingredients,
        }
    }
}

/// FFI-compatible recommendation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiRecommendation {
    NoIngredients,
    NoRecipes,
    NoMatches,
    Matches { recipes: Vec<FfiMatchResult> },
}

impl From<Recommendation> for FfiRecommendation {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::NoIngredients => FfiRecommendation::NoIngredients,
            Recommendation::NoRecipes => FfiRecommendation::NoRecipes,
            Recommendation::NoMatches => FfiRecommendation::NoMatches,
            Recommendation::Matches(results) => FfiRecommendation::Matches {
                recipes: results.into_iter().map(Into::into).collect(),
            },
        }
    }
}

impl From<FfiRecommendation> for Recommendation {
    fn from(ffi: FfiRecommendation) -> Self {
        match ffi {
            FfiRecommendation::NoIngredients => Recommendation::NoIngredients,
            FfiRecommendation::NoRecipes => Recommendation::NoRecipes,
            FfiRecommendation::NoMatches => Recommendation::NoMatches,
            FfiRecommendation::Matches { recipes } => {
                Recommendation::Matches(recipes.into_iter().map(Into::into).collect())
            }
        }
    }
}

/// FFI-compatible tie-break
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiTieBreak {
    InputOrder,
    Name,
}

impl From<FfiTieBreak> for TieBreak {
    fn from(tie_break: FfiTieBreak) -> Self {
        match tie_break {
            FfiTieBreak::InputOrder => TieBreak::InputOrder,
            FfiTieBreak::Name => TieBreak::Name,
        }
    }
}

/// Shopping link settings; unset fields keep the defaults
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiShoppingConfig {
    pub enabled: Option<bool>,
    pub label: Option<String>,
    pub base_url: Option<String>,
    pub query_param: Option<String>,
}

impl From<FfiShoppingConfig> for ShoppingConfig {
    fn from(ffi: FfiShoppingConfig) -> Self {
        let defaults = ShoppingConfig::default();
        ShoppingConfig {
            enabled: ffi.enabled.unwrap_or(defaults.enabled),
            label: ffi.label.unwrap_or(defaults.label),
            base_url: ffi.base_url.unwrap_or(defaults.base_url),
            query_param: ffi.query_param.unwrap_or(defaults.query_param),
        }
    }
}

/// Configuration for a recommendation request
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecommendConfig {
    /// Optional tie-break (input order if not specified)
    pub tie_break: Option<FfiTieBreak>,
    /// Optional timeout in seconds for remote datasets
    pub timeout_seconds: Option<u64>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecommendError {
    /// Failed to fetch or read the dataset
    LoadError { message: String },
    /// Dataset is malformed
    DatasetError { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecommendError::LoadError { message } => write!(f, "Load error: {}", message),
            FfiRecommendError::DatasetError { message } => {
                write!(f, "Dataset error: {}", message)
            }
            FfiRecommendError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiRecommendError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecommendError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecommendError {}

impl From<RecommendError> for FfiRecommendError {
    fn from(err: RecommendError) -> Self {
        let message = err.to_string();
        match err {
            RecommendError::FetchError(_)
            | RecommendError::HttpStatus { .. }
            | RecommendError::IoError(_) => FfiRecommendError::LoadError { message },
            RecommendError::DatasetError(_) | RecommendError::InvalidRecipe { .. } => {
                FfiRecommendError::DatasetError { message }
            }
            RecommendError::BuilderError(_) => FfiRecommendError::BuilderError { message },
            RecommendError::ConfigError(_) => FfiRecommendError::ConfigError { message },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecommendError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecommendError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Recommend recipes from dataset JSON the host already read
///
/// # Arguments
/// * `detected` - Classifier labels collected so far, in capture order
/// * `dataset_json` - Contents of the packaged dataset
/// * `tie_break` - Optional tie-break (input order if not specified)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recommend_from_json(
    detected: Vec<String>,
    dataset_json: String,
    tie_break: Option<FfiTieBreak>,
) -> Result<FfiRecommendation, FfiRecommendError> {
    let recipes = crate::parse_dataset(&dataset_json)?;
    let detected: DetectedIngredients = detected.into_iter().collect();
    let tie_break: TieBreak = tie_break.map(Into::into).unwrap_or_default();

    Ok(crate::recommend(detected.as_slice(), &recipes, tie_break).into())
}

/// Recommend recipes from a dataset served over http(s)
///
/// # Arguments
/// * `detected` - Classifier labels collected so far, in capture order
/// * `url` - Dataset URL
/// * `config` - Optional configuration for the request
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recommend_from_url(
    detected: Vec<String>,
    url: String,
    config: Option<FfiRecommendConfig>,
) -> Result<FfiRecommendation, FfiRecommendError> {
    let rt = create_runtime()?;
    rt.block_on(async { recommend_from_url_async(detected, &url, config).await })
}

async fn recommend_from_url_async(
    detected: Vec<String>,
    url: &str,
    config: Option<FfiRecommendConfig>,
) -> Result<FfiRecommendation, FfiRecommendError> {
    let config = config.unwrap_or_default();

    let mut builder = crate::Recommender::builder()
        .dataset_url(url)
        .detected(detected.into_iter().collect());

    if let Some(tie_break) = config.tie_break {
        builder = builder.tie_break(tie_break.into());
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    Ok(builder.build().await?.into())
}

/// Render a recommendation as an HTML fragment for a web view
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_recommendation_html(
    recommendation: FfiRecommendation,
    shopping: Option<FfiShoppingConfig>,
) -> String {
    let shopping: ShoppingConfig = shopping.unwrap_or_default().into();
    crate::render_html(&recommendation.into(), &shopping)
}

/// Normalize a classifier label the same way the matcher does
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_label(label: String) -> String {
    crate::normalize_ingredient(&label)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
