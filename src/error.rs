use thiserror::Error;

/// Invalid settings, reported when a component is built rather than mid-stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window width must be positive")]
    ZeroWidth,

    #[error("window width {width} exceeds the maximum of {max}")]
    WidthTooLarge { width: usize, max: usize },

    #[error("column name for {0} must not be empty")]
    EmptyColumn(&'static str),

    #[error("predicted column `{0}` must differ from the gold column")]
    PredictedIsGold(String),

    #[error("unknown tokenization policy: {0}")]
    UnknownPolicy(String),

    #[error("translation alphabets differ in length: {from} vs {to} characters")]
    AlphabetLength { from: usize, to: usize },

    #[error("character {0:?} appears twice in the source alphabet")]
    DuplicateSource(char),
}
