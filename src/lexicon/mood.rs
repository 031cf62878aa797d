use crate::config::BulkConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Neutral => "NEUTRAL",
            Self::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity cut-offs. Values strictly above `positive` or strictly below
/// `negative` leave the neutral bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl From<&BulkConfig> for Thresholds {
    fn from(config: &BulkConfig) -> Self {
        Self {
            positive: config.positive_threshold,
            negative: config.negative_threshold,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from(&BulkConfig::default())
    }
}

impl Thresholds {
    pub fn classify(&self, polarity: f64) -> Mood {
        if polarity > self.positive {
            Mood::Positive
        } else if polarity < self.negative {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }
}

/// Per-bucket counts kept in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct MoodTally {
    counts: Vec<(Mood, usize)>,
}

impl MoodTally {
    pub fn record(&mut self, mood: Mood) {
        match self.counts.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((mood, 1)),
        }
    }

    #[cfg(test)]
    fn count(&self, mood: Mood) -> usize {
        self.counts
            .iter()
            .find(|(m, _)| *m == mood)
            .map_or(0, |(_, count)| *count)
    }

    /// Most frequent bucket; ties go to the bucket recorded first.
    pub fn dominant(&self) -> Option<Mood> {
        let mut best: Option<(Mood, usize)> = None;
        for &(mood, count) in &self.counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }
}
