use super::types::AnalysisResponse;
use crate::{Error, Result, inference::SentimentProvider};
use std::sync::Arc;
use tracing::{info, warn};

pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Classifies one journal entry with the remote inference provider.
#[derive(Clone)]
pub struct MoodAnalyzer {
    provider: Arc<dyn SentimentProvider>,
    degrade_on_error: bool,
}

impl MoodAnalyzer {
    pub fn new(provider: Arc<dyn SentimentProvider>, degrade_on_error: bool) -> Self {
        Self {
            provider,
            degrade_on_error,
        }
    }

    /// Returns the provider's top label and score.
    ///
    /// Provider failures become `{mood: "Error", confidence: 0}` when degrading,
    /// otherwise they are returned as upstream errors.
    pub async fn analyze(&self, text: Option<&str>) -> Result<AnalysisResponse> {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(Error::validation(NO_TEXT_PROVIDED)),
        };

        match self.provider.analyze(text).await {
            Ok(prediction) => {
                info!(
                    "Classified entry as {} ({:.3})",
                    prediction.label, prediction.score
                );
                Ok(AnalysisResponse {
                    mood: prediction.label,
                    confidence: prediction.score,
                })
            }
            Err(e) if self.degrade_on_error && e.is_upstream() => {
                warn!("Inference failed, answering with degraded mood: {}", e);
                Ok(AnalysisResponse::degraded())
            }
            Err(e) => Err(e),
        }
    }
}
