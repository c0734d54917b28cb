use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How raw text is cut into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizePolicy {
    /// Split wherever one or more non-letters occur.
    SplitOnNonLetters,
    /// Collect maximal runs of letters.
    FindLetterRuns,
    /// Keep words and isolate each punctuation character as its own token.
    #[default]
    PunctuationAware,
}

impl TokenizePolicy {
    pub const ALL: [TokenizePolicy; 3] = [
        TokenizePolicy::SplitOnNonLetters,
        TokenizePolicy::FindLetterRuns,
        TokenizePolicy::PunctuationAware,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenizePolicy::SplitOnNonLetters => "split-on-non-letters",
            TokenizePolicy::FindLetterRuns => "find-letter-runs",
            TokenizePolicy::PunctuationAware => "punctuation-aware",
        }
    }
}

impl fmt::Display for TokenizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenizePolicy {
    type Err = ConfigError;

    /// Accepts the short names `split`, `find`, `punct` and the full kebab-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split" | "split-on-non-letters" => Ok(TokenizePolicy::SplitOnNonLetters),
            "find" | "find-letter-runs" => Ok(TokenizePolicy::FindLetterRuns),
            "punct" | "punctuation-aware" => Ok(TokenizePolicy::PunctuationAware),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}
