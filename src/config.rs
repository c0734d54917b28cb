// Configuration for the tokenizer, feature extractor and tagger.
// Defaults follow the course scripts: window width 2, Penn Treebank `pos` column.

use crate::tokenize::TokenizePolicy;

/// Sentinel written in place of tokens before the start of a sentence.
pub const BOS: &str = "<BOS>";

/// Sentinel written in place of tokens after the end of a sentence.
pub const EOS: &str = "<EOS>";

/// Padding values used at sentence boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    pub start: &'static str,
    pub end: &'static str,
}

impl Sentinels {
    pub fn contains(&self, value: &str) -> bool {
        value == self.start || value == self.end
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            start: BOS,
            end: EOS,
        }
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenizerConfig {
    /// Segmentation policy (default: punctuation-aware)
    pub policy: TokenizePolicy,
}

/// Context feature extractor configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Half-window size: number of tokens read on each side (default 2)
    pub width: usize,

    /// Column holding the word form (default `form`)
    pub input_column: String,

    /// Column holding the gold tag to predict (default `pos`)
    pub output_column: String,

    /// Column that receives predictions (default `ppos`)
    pub predicted_column: String,

    /// Window the gold tag column too when extracting training features (default true)
    pub window_tags: bool,

    /// Lowercase word values before they become feature values (default false)
    pub lowercase: bool,

    pub sentinels: Sentinels,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            width: 2,
            input_column: "form".to_string(),
            output_column: "pos".to_string(),
            predicted_column: "ppos".to_string(),
            window_tags: true,
            lowercase: false,
            sentinels: Sentinels::default(),
        }
    }
}

impl ExtractorConfig {
    /// Universal Dependencies corpora keep the coarse tag in `upos`.
    pub fn universal_dependencies() -> Self {
        Self {
            output_column: "upos".to_string(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_output_column(mut self, column: impl Into<String>) -> Self {
        self.output_column = column.into();
        self
    }

    pub fn with_window_tags(mut self, window_tags: bool) -> Self {
        self.window_tags = window_tags;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

/// Averaged perceptron configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronConfig {
    /// Passes over the training rows (default 5)
    pub epochs: usize,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self { epochs: 5 }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub extractor: ExtractorConfig,
    pub perceptron: PerceptronConfig,
}
