use thiserror::Error;

/// Errors that can occur while loading recipes or building a recommendation
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Failed to fetch the dataset from a URL
    #[error("Failed to fetch dataset: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Dataset server answered with a non-success status
    #[error("Dataset request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to read the dataset from disk
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset is not a JSON array of recipe records
    #[error("Failed to decode dataset: {0}")]
    DatasetError(#[from] serde_json::Error),

    /// A recipe record decoded but failed validation
    #[error("Invalid recipe at index {index}: {reason}")]
    InvalidRecipe { index: usize, reason: String },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
