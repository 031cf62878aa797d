use crate::lexicon::Mood;
use serde::{Deserialize, Serialize};

/// Mood reported when the inference provider could not produce a result.
pub const ERROR_MOOD: &str = "Error";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub mood: String,
    pub confidence: f64,
}

impl AnalysisResponse {
    pub fn degraded() -> Self {
        Self {
            mood: ERROR_MOOD.to_string(),
            confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkRequest {
    #[serde(default)]
    pub entries: Option<Vec<BulkEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkEntry {
    #[serde(default)]
    pub text: Option<String>,
}

impl BulkEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResponse {
    pub overall_mood: Mood,
    pub confidence: f64,
}
