use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::{parse_dataset, DatasetLoader};
use crate::error::RecommendError;
use crate::model::Recipe;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Dataset served as JSON over http(s)
pub struct HttpLoader {
    client: Client,
    url: String,
}

impl HttpLoader {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RecommendError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("recipe-recommender/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetLoader for HttpLoader {
    fn describe(&self) -> String {
        format!("url {}", self.url)
    }

    async fn load(&self) -> Result<Vec<Recipe>, RecommendError> {
        debug!("Fetching dataset from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let json = response.text().await?;
        parse_dataset(&json)
    }
}
