use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;
use tokio::fs;

use super::{parse_dataset, DatasetLoader};
use crate::error::RecommendError;
use crate::model::Recipe;

/// Dataset stored as a JSON file on disk
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetLoader for FileLoader {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<Recipe>, RecommendError> {
        debug!("Reading dataset from {}", self.path.display());
        let json = fs::read_to_string(&self.path).await?;
        parse_dataset(&json)
    }
}
