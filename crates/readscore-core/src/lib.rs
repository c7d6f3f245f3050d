//! Core library for readscore.
//!
//! Scores English text with four classic readability indices and maps each
//! score to an approximate reader age. Everything here is a pure function
//! of the input text.
//!
//! # Modules
//!
//! - [`text`] - Sentence, word, and character tokenization
//! - [`syllables`] - Heuristic syllable estimation
//! - [`scores`] - ARI, Flesch-Kincaid, SMOG, Coleman-Liau and the age table
//! - [`readability`] - The full analysis pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readscore_core::{Selection, readability};
//!
//! let report = readability::analyze("The cat sat. The dog ran fast.").unwrap();
//! let selected = report.select(&Selection::parse("FK,SMOG").unwrap());
//! for score in &selected.scores {
//!     println!("{}: {:.2} (about {} year olds)", score.kind, score.value, score.age);
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod readability;
pub mod scores;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{ReadabilityReport, SelectedScores, analyze};
pub use scores::{Score, ScoreKind, ScoreSet, Selection, Selector, age_for_score};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
