//! The four readability indices and their reader-age mapping.
//!
//! | Index | Formula |
//! |-------|---------|
//! | ARI   | `4.71 * chars/words + 0.5 * words/sentences - 21.43` |
//! | FK    | `0.39 * words/sentences + 11.8 * syllables/words - 15.59` |
//! | SMOG  | `1.043 * sqrt(polysyllables * 30 / sentences) + 3.1291` |
//! | CL    | `0.0588 * L - 0.296 * S - 15.8` (per 100 words) |
//!
//! Each score rounds to a grade that [`age_for_score`] maps to a reader age.
//! Grades outside the table map to 0.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Reader ages for rounded scores 1 through 14.
const AGE_TABLE: [u32; 14] = [6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24, 25];

/// Age returned for scores outside the table.
pub const UNKNOWN_AGE: u32 = 0;

/// Map a score to an approximate reader age.
///
/// The score is rounded to the nearest integer. Anything outside 1–14 yields
/// [`UNKNOWN_AGE`].
pub fn age_for_score(score: f64) -> u32 {
    let grade = score.round();
    if !(1.0..=14.0).contains(&grade) {
        return UNKNOWN_AGE;
    }
    // Range-checked above, so the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = grade as usize - 1;
    AGE_TABLE[index]
}

/// One of the supported readability indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreKind {
    /// Automated Readability Index.
    Ari,
    /// Flesch–Kincaid Grade Level.
    Fk,
    /// Simple Measure of Gobbledygook.
    Smog,
    /// Coleman–Liau index.
    Cl,
}

impl ScoreKind {
    /// All indices in report order.
    pub const ALL: [Self; 4] = [Self::Ari, Self::Fk, Self::Smog, Self::Cl];

    /// Short selector name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::Fk => "FK",
            Self::Smog => "SMOG",
            Self::Cl => "CL",
        }
    }

    /// Human-readable index name.
    pub const fn long_name(&self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::Fk => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::Cl => "Coleman–Liau index",
        }
    }

    /// Compute this index from aggregate counts.
    pub fn compute(self, counts: &Counts) -> f64 {
        let words = counts.words as f64;
        let sentences = counts.sentences as f64;
        let characters = counts.characters as f64;
        let syllables = counts.syllables as f64;
        let polysyllables = counts.polysyllables as f64;

        match self {
            Self::Ari => 4.71f64.mul_add(characters / words, 0.5 * words / sentences) - 21.43,
            Self::Fk => 0.39f64.mul_add(words / sentences, 11.8 * syllables / words) - 15.59,
            Self::Smog => 1.043f64.mul_add((polysyllables * 30.0 / sentences).sqrt(), 3.1291),
            Self::Cl => {
                let letters_per_100 = characters * 100.0 / words;
                let sentences_per_100 = sentences * 100.0 / words;
                0.0588f64.mul_add(letters_per_100, -0.296 * sentences_per_100) - 15.8
            }
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counts the formulas are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    /// Word count. Must be non-zero.
    pub words: usize,
    /// Sentence count. Must be non-zero.
    pub sentences: usize,
    /// Non-whitespace character count.
    pub characters: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Words with more than two estimated syllables.
    pub polysyllables: usize,
}

impl Counts {
    /// Reject counts that would divide by zero.
    pub const fn validate(self) -> AnalysisResult<Self> {
        if self.words == 0 || self.sentences == 0 {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(self)
    }
}

/// A computed index and the reader age it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Score {
    /// Which index this is.
    pub kind: ScoreKind,
    /// Raw score.
    pub value: f64,
    /// Approximate reader age, 0 when out of range.
    pub age: u32,
}

impl Score {
    fn new(kind: ScoreKind, counts: &Counts) -> Self {
        let value = kind.compute(counts);
        Self {
            kind,
            value,
            age: age_for_score(value),
        }
    }
}

/// All four indices for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreSet {
    /// Automated Readability Index.
    pub ari: Score,
    /// Flesch–Kincaid Grade Level.
    pub fk: Score,
    /// Simple Measure of Gobbledygook.
    pub smog: Score,
    /// Coleman–Liau index.
    pub cl: Score,
}

impl ScoreSet {
    /// Compute every index. Fails on zero words or sentences.
    #[tracing::instrument(level = "debug", skip_all, fields(words = counts.words, sentences = counts.sentences))]
    pub fn compute(counts: Counts) -> AnalysisResult<Self> {
        let counts = counts.validate()?;
        Ok(Self {
            ari: Score::new(ScoreKind::Ari, &counts),
            fk: Score::new(ScoreKind::Fk, &counts),
            smog: Score::new(ScoreKind::Smog, &counts),
            cl: Score::new(ScoreKind::Cl, &counts),
        })
    }

    /// Look up one index.
    pub const fn get(&self, kind: ScoreKind) -> &Score {
        match kind {
            ScoreKind::Ari => &self.ari,
            ScoreKind::Fk => &self.fk,
            ScoreKind::Smog => &self.smog,
            ScoreKind::Cl => &self.cl,
        }
    }

    /// Iterate in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Score> {
        ScoreKind::ALL.into_iter().map(|kind| self.get(kind))
    }

    /// Unweighted mean of the four ages, zeros included.
    pub fn average_age(&self) -> f64 {
        let sum: u32 = self.iter().map(|s| s.age).sum();
        f64::from(sum) / ScoreKind::ALL.len() as f64
    }
}

/// A single selector token: one index, or every index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Selector {
    /// Automated Readability Index.
    #[serde(rename = "ARI")]
    #[cfg_attr(feature = "clap", value(name = "ARI"))]
    Ari,
    /// Flesch–Kincaid Grade Level.
    #[serde(rename = "FK")]
    #[cfg_attr(feature = "clap", value(name = "FK"))]
    Fk,
    /// Simple Measure of Gobbledygook.
    #[serde(rename = "SMOG")]
    #[cfg_attr(feature = "clap", value(name = "SMOG"))]
    Smog,
    /// Coleman–Liau index.
    #[serde(rename = "CL")]
    #[cfg_attr(feature = "clap", value(name = "CL"))]
    Cl,
    /// Every index, plus the average age.
    #[serde(rename = "all")]
    #[cfg_attr(feature = "clap", value(name = "all"))]
    All,
}

impl Selector {
    /// The single index this selects, or `None` for [`Selector::All`].
    pub const fn kind(self) -> Option<ScoreKind> {
        match self {
            Self::Ari => Some(ScoreKind::Ari),
            Self::Fk => Some(ScoreKind::Fk),
            Self::Smog => Some(ScoreKind::Smog),
            Self::Cl => Some(ScoreKind::Cl),
            Self::All => None,
        }
    }
}

/// Accepted selector spellings, in help order.
pub const SELECTOR_NAMES: &[&str] = &["ARI", "FK", "SMOG", "CL", "all"];

impl FromStr for Selector {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARI" => Ok(Self::Ari),
            "FK" => Ok(Self::Fk),
            "SMOG" => Ok(Self::Smog),
            "CL" => Ok(Self::Cl),
            "all" => Ok(Self::All),
            other => Err(AnalysisError::UnknownSelector {
                name: other.to_string(),
                available: SELECTOR_NAMES.join(", "),
            }),
        }
    }
}

/// Which indices to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    kinds: BTreeSet<ScoreKind>,
    all: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}

impl Selection {
    /// Select every index.
    pub fn all() -> Self {
        Self {
            kinds: ScoreKind::ALL.into_iter().collect(),
            all: true,
        }
    }

    /// Build a selection from selector tokens. Duplicates collapse.
    pub fn from_selectors<I>(selectors: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = Selector>,
    {
        let mut kinds = BTreeSet::new();
        let mut all = false;
        for selector in selectors {
            match selector.kind() {
                Some(kind) => {
                    kinds.insert(kind);
                }
                None => {
                    all = true;
                    kinds.extend(ScoreKind::ALL);
                }
            }
        }
        if kinds.is_empty() {
            return Err(AnalysisError::UnknownSelector {
                name: String::new(),
                available: SELECTOR_NAMES.join(", "),
            });
        }
        Ok(Self { kinds, all })
    }

    /// Parse a comma-separated selector list such as `"ARI,CL"` or `"all"`.
    pub fn parse(input: &str) -> AnalysisResult<Self> {
        let selectors = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Selector::from_str)
            .collect::<AnalysisResult<Vec<_>>>()?;
        if selectors.is_empty() {
            return Err(AnalysisError::UnknownSelector {
                name: input.to_string(),
                available: SELECTOR_NAMES.join(", "),
            });
        }
        Self::from_selectors(selectors)
    }

    /// Whether `all` was requested.
    pub const fn is_all(&self) -> bool {
        self.all
    }

    /// Whether `kind` is selected.
    pub fn contains(&self, kind: ScoreKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Selected indices in report order.
    pub fn kinds(&self) -> impl Iterator<Item = ScoreKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Pick the selected scores out of a full set.
    pub fn pick(&self, scores: &ScoreSet) -> Vec<Score> {
        self.kinds().map(|kind| *scores.get(kind)).collect()
    }

    /// Average age, only when `all` was requested.
    pub fn average_age(&self, scores: &ScoreSet) -> Option<f64> {
        self.all.then(|| scores.average_age())
    }
}

impl FromStr for Selection {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
