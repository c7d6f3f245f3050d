//! Readability analysis of a single document.
//!
//! [`analyze`] runs the whole pipeline: trim, tokenize, estimate syllables,
//! then score. The returned [`ReadabilityReport`] is immutable and carries
//! every intermediate count alongside the four [`ScoreSet`] entries.
//!
//! ```
//! use readscore_core::readability;
//!
//! let report = readability::analyze("The cat sat. The dog ran.").unwrap();
//! assert_eq!(report.sentences, 2);
//! assert_eq!(report.words, 6);
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::scores::{Counts, Score, ScoreSet, Selection};
use crate::syllables::SyllableStats;
use crate::text::Document;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// The trimmed text that was scored.
    pub content: String,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Non-whitespace characters, punctuation included.
    pub characters: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Words estimated at more than two syllables.
    pub polysyllables: usize,
    /// All four indices with their reader ages.
    pub scores: ScoreSet,
}

impl ReadabilityReport {
    /// The aggregate counts the scores were computed from.
    pub const fn counts(&self) -> Counts {
        Counts {
            words: self.words,
            sentences: self.sentences,
            characters: self.characters,
            syllables: self.syllables,
            polysyllables: self.polysyllables,
        }
    }

    /// Restrict the report to a selection of indices.
    pub fn select(&self, selection: &Selection) -> SelectedScores {
        SelectedScores {
            scores: selection.pick(&self.scores),
            average_age: selection.average_age(&self.scores),
        }
    }
}

/// The indices a caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SelectedScores {
    /// Selected scores in report order.
    pub scores: Vec<Score>,
    /// Mean of all four ages; present only when `all` was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_age: Option<f64>,
}

/// Analyze text and compute every readability index.
///
/// Fails with [`AnalysisError::EmptyInput`] when the trimmed text is empty
/// or yields no sentences or no words.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> AnalysisResult<ReadabilityReport> {
    let document = Document::new(text);
    if document.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let sentences = document.sentences().len();
    let words = document.words();
    let characters = document.character_count();
    let stats = SyllableStats::from_words(words.iter().copied());

    let counts = Counts {
        words: words.len(),
        sentences,
        characters,
        syllables: stats.total,
        polysyllables: stats.polysyllables,
    };
    debug!(
        words = counts.words,
        sentences = counts.sentences,
        characters = counts.characters,
        syllables = counts.syllables,
        polysyllables = counts.polysyllables,
        "tokenized document"
    );

    let scores = ScoreSet::compute(counts)?;

    Ok(ReadabilityReport {
        content: document.content().to_string(),
        words: counts.words,
        sentences: counts.sentences,
        characters: counts.characters,
        syllables: counts.syllables,
        polysyllables: counts.polysyllables,
        scores,
    })
}
