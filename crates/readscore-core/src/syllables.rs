//! Heuristic syllable estimation.
//!
//! There is no dictionary here. Each word is normalized and its vowel
//! clusters counted, so results are approximate by nature. Every word
//! counts as at least one syllable.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Runs of two or more vowels, treated as a single syllable nucleus.
static VOWEL_CLUSTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{2,}").expect("valid regex"));

/// Words with more estimated syllables than this are polysyllables.
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllables in a single word token.
///
/// The word is lowercased, one trailing non `a`-`z` character is dropped,
/// trailing `e`s are dropped, vowel clusters collapse to one vowel, and the
/// remaining vowels are counted. Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let mut word = word.to_lowercase();

    if word.chars().last().is_some_and(|c| !c.is_ascii_lowercase()) {
        word.pop();
    }

    let stem = word.trim_end_matches('e');
    let collapsed = VOWEL_CLUSTER.replace_all(stem, "a");

    collapsed.chars().filter(|&c| is_vowel(c)).count().max(1)
}

/// Syllable totals for a sequence of words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SyllableStats {
    /// Sum of per-word estimates.
    pub total: usize,
    /// Words estimated at more than two syllables.
    pub polysyllables: usize,
}

impl SyllableStats {
    /// Aggregate estimates over `words`.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .map(count_syllables)
            .fold(Self::default(), |mut stats, syllables| {
                stats.total += syllables;
                if syllables > POLYSYLLABLE_THRESHOLD {
                    stats.polysyllables += 1;
                }
                stats
            })
    }
}
