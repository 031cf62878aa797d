use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Prediction>;
}

/// Client for a hosted text-classification model.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url,
            api_token: config.api_token,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Picks the first candidate of the first result group.
pub fn top_prediction(body: &str) -> Result<Prediction> {
    let groups: ClassificationResponse = serde_json::from_str(body)
        .map_err(|e| Error::upstream(format!("Malformed provider response: {}", e)))?;

    groups
        .into_iter()
        .next()
        .and_then(|group| group.into_iter().next())
        .map(Prediction::from)
        .ok_or_else(|| Error::upstream("Malformed provider response: no classification result"))
}

#[async_trait]
impl SentimentProvider for HuggingFaceClient {
    async fn analyze(&self, text: &str) -> Result<Prediction> {
        debug!("Sending {} characters to {}", text.len(), self.api_url);

        let mut request = self
            .client
            .post(&self.api_url)
            .json(&ClassificationRequest { inputs: text });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!("Inference provider response status: {}", status);
        debug!("Inference provider response body: {}", body);

        if status != StatusCode::OK {
            return Err(Error::upstream(format!(
                "Inference provider returned {}",
                status
            )));
        }

        top_prediction(&body)
    }
}
