use async_trait::async_trait;
use mood_journal::{
    Error, Result,
    inference::{Prediction, SentimentProvider},
    lexicon::PolarityScorer,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock inference provider for testing
#[derive(Debug)]
pub struct MockSentimentProvider {
    pub prediction: Option<Prediction>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockSentimentProvider {
    pub fn new() -> Self {
        Self {
            prediction: None,
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_prediction(mut self, label: &str, score: f64) -> Self {
        self.prediction = Some(Prediction {
            label: label.to_string(),
            score,
        });
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentProvider for MockSentimentProvider {
    async fn analyze(&self, text: &str) -> Result<Prediction> {
        self.requests.lock().unwrap().push(text.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        self.prediction
            .clone()
            .ok_or_else(|| Error::upstream("No mock prediction configured"))
    }
}

impl Default for MockSentimentProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Polarity scorer answering from a fixed table; unknown text is neutral.
#[derive(Debug, Default)]
pub struct StubScorer {
    pub polarities: HashMap<String, f64>,
}

impl StubScorer {
    pub fn with(mut self, text: &str, polarity: f64) -> Self {
        self.polarities.insert(text.to_string(), polarity);
        self
    }
}

impl PolarityScorer for StubScorer {
    fn score(&self, text: &str) -> f64 {
        self.polarities.get(text).copied().unwrap_or(0.0)
    }
}
