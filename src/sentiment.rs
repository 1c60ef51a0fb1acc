//! Sentiment scoring.
//!
//! The rest of the crate treats this as an opaque capability: text in,
//! polarity in [-1, 1] plus a tri-state classification out. The scorer here
//! averages lexicon hits; swapping in a model changes nothing outside this
//! module.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Positive,
    Negative,
    Neutral,
}

/// Polarity score and classification for one piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub classification: Classification,
}

const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "beautiful",
    "best",
    "enjoy",
    "excellent",
    "fantastic",
    "good",
    "great",
    "happy",
    "helpful",
    "love",
    "nice",
    "perfect",
    "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry",
    "awful",
    "bad",
    "boring",
    "broken",
    "disappointing",
    "hate",
    "horrible",
    "poor",
    "sad",
    "terrible",
    "ugly",
    "useless",
    "worst",
    "wrong",
];

/// Score `text` and classify by the sign of the polarity: positive above
/// zero, negative below, neutral at exactly zero.
pub fn analyze(text: &str) -> Sentiment {
    let mut hits = 0u32;
    let mut score = 0.0f64;
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let word = word.to_lowercase();
        if POSITIVE_WORDS.binary_search(&word.as_str()).is_ok() {
            score += 1.0;
            hits += 1;
        } else if NEGATIVE_WORDS.binary_search(&word.as_str()).is_ok() {
            score -= 1.0;
            hits += 1;
        }
    }

    // Average of +/-1 hits, so the result always lands in [-1, 1].
    let polarity = if hits == 0 { 0.0 } else { score / f64::from(hits) };
    let classification = if polarity > 0.0 {
        Classification::Positive
    } else if polarity < 0.0 {
        Classification::Negative
    } else {
        Classification::Neutral
    };

    Sentiment {
        polarity,
        classification,
    }
}
