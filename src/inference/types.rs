use serde::{Deserialize, Serialize};

/// Body sent to the text-classification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRequest<'a> {
    pub inputs: &'a str,
}

/// One ranked candidate in a classification result group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationCandidate {
    pub label: String,
    pub score: f64,
}

/// Provider payload: one group per input, candidates ranked best first.
pub type ClassificationResponse = Vec<Vec<ClassificationCandidate>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

impl From<ClassificationCandidate> for Prediction {
    fn from(candidate: ClassificationCandidate) -> Self {
        Self {
            label: candidate.label,
            score: candidate.score,
        }
    }
}
