//! Error types for humanizer-core.

use thiserror::Error;

use crate::humanizer::Stage;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A rewrite probability fell outside `[0, 1]`.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidProbability {
        /// Name of the offending setting.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors reported by a [`Tagger`](crate::tagger::Tagger).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggerError {
    /// The tagger is not loaded.
    #[error("tagger is not available")]
    Unavailable,

    /// The tagger could not process its input.
    #[error("tagger failed: {0}")]
    Failed(String),
}

/// Result type alias using [`TaggerError`].
pub type TaggerResult<T> = Result<T, TaggerError>;

/// Reasons a humanization run returns its input unchanged.
#[derive(Error, Debug)]
pub enum HumanizeError {
    /// The natural-language tagger is not loaded.
    #[error("natural-language tagger is not available")]
    DependencyUnavailable,

    /// The tagger found no sentences in the input.
    #[error("no sentences found in input")]
    SegmentationEmpty,

    /// A single rewrite stage failed; the stage is skipped for that sentence.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// The stage that failed.
        stage: Stage,
        /// The underlying tagger error.
        #[source]
        source: TaggerError,
    },

    /// Processing failed outside any single stage.
    #[error("humanization failed: {0}")]
    Pipeline(#[source] TaggerError),
}

impl HumanizeError {
    /// Classify a tagger error raised while segmenting the input.
    pub fn from_segmentation(err: TaggerError) -> Self {
        match err {
            TaggerError::Unavailable => Self::DependencyUnavailable,
            other => Self::Pipeline(other),
        }
    }
}

/// Result type alias using [`HumanizeError`].
pub type HumanizeResult<T> = Result<T, HumanizeError>;
