use super::types::{BulkEntry, BulkResponse};
use crate::{
    Error, Result,
    lexicon::{MoodTally, PolarityScorer, Thresholds},
};
use std::sync::Arc;
use tracing::{debug, warn};

pub const NO_ENTRIES_PROVIDED: &str = "No entries provided";
pub const NO_SCORABLE_ENTRIES: &str = "No scorable entries provided";

/// Aggregates lexicon polarity over a batch of journal entries.
#[derive(Clone)]
pub struct BulkAnalyzer {
    scorer: Arc<dyn PolarityScorer>,
    thresholds: Thresholds,
}

impl BulkAnalyzer {
    pub fn new(scorer: Arc<dyn PolarityScorer>, thresholds: Thresholds) -> Self {
        Self { scorer, thresholds }
    }

    /// Buckets every entry, returns the most frequent bucket and the mean
    /// absolute polarity. Entries without text score as empty text.
    pub fn analyze(&self, entries: Option<&[BulkEntry]>) -> Result<BulkResponse> {
        let entries = match entries {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(Error::validation(NO_ENTRIES_PROVIDED)),
        };

        let mut tally = MoodTally::default();
        let mut total_confidence = 0.0;
        let mut scored = 0usize;

        for (index, entry) in entries.iter().enumerate() {
            let text = entry.text.as_deref().unwrap_or_default();
            let polarity = self.scorer.score(text);
            if !polarity.is_finite() {
                warn!("Skipping entry {}: polarity is not computable", index);
                continue;
            }

            let polarity = polarity.clamp(-1.0, 1.0);
            let mood = self.thresholds.classify(polarity);
            debug!("Entry {} polarity {:.3} -> {}", index, polarity, mood);

            tally.record(mood);
            total_confidence += polarity.abs();
            scored += 1;
        }

        let overall_mood = tally
            .dominant()
            .ok_or_else(|| Error::validation(NO_SCORABLE_ENTRIES))?;

        Ok(BulkResponse {
            overall_mood,
            confidence: total_confidence / scored as f64,
        })
    }
}
