/// Largest absolute weight a single AFINN word carries.
const AFINN_MAX_WEIGHT: f64 = 5.0;

/// Maps text to a polarity in `[-1, 1]`.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Lexicon scorer backed by the AFINN word list.
///
/// Polarity is the mean weight of the sentiment-bearing words, scaled to
/// `[-1, 1]`. Text without any such word is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct AfinnScorer;

impl PolarityScorer for AfinnScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let analysis = sentiment::analyze(text.to_owned());
        let hits = analysis.positive.words.len() + analysis.negative.words.len();
        if hits == 0 {
            return 0.0;
        }

        let polarity = analysis.score as f64 / (AFINN_MAX_WEIGHT * hits as f64);
        polarity.clamp(-1.0, 1.0)
    }
}
