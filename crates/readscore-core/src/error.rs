//! Error types for readscore-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input is empty, or has no sentences or words to score.
    #[error("no scorable text in input")]
    EmptyInput,

    /// A score selector outside the recognized set was provided.
    #[error("unknown score selector: {name:?}. Use: {available}")]
    UnknownSelector {
        /// The selector that was requested.
        name: String,
        /// Comma-separated list of accepted selectors.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
