use thiserror::Error;

use crate::error::ConfigError;

/// Failures of the context feature extractor.
///
/// Positions are 0-based: `sentence` indexes the corpus, `token` the sentence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("invalid extractor configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("sentence {sentence} is empty")]
    EmptySentence { sentence: usize },

    #[error("sentence {sentence}, token {token}: missing column `{column}`")]
    MissingColumn {
        sentence: usize,
        token: usize,
        column: String,
    },

    #[error("sentence {sentence}, token {token}: `{value}` is a boundary sentinel")]
    SentinelCollision {
        sentence: usize,
        token: usize,
        value: String,
    },

    #[error("expected {expected} predictions, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("extractor used before fit")]
    NotFitted,

    #[error("sentence {sentence}, token {token}: no prediction in `{column}`; annotate first")]
    NotAnnotated {
        sentence: usize,
        token: usize,
        column: String,
    },
}
