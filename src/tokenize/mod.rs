//! Unicode-aware tokenizers.
//!
//! All three policies classify characters by Unicode general category
//! (`L` for letters, `P` for punctuation), so accented and non-Latin letters
//! are handled the same way as ASCII. None of them changes case.

pub mod policy;
pub mod rules;

pub use policy::TokenizePolicy;
pub use rules::{find_letter_runs, punctuation_aware, split_on_non_letters};

use crate::config::TokenizerConfig;

/// Breaks `text` into tokens with the given policy. Never yields empty tokens.
pub fn tokenize(text: &str, policy: TokenizePolicy) -> Vec<String> {
    match policy {
        TokenizePolicy::SplitOnNonLetters => split_on_non_letters(text),
        TokenizePolicy::FindLetterRuns => find_letter_runs(text),
        TokenizePolicy::PunctuationAware => punctuation_aware(text),
    }
}

/// A tokenizer bound to one policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    policy: TokenizePolicy,
}

impl Tokenizer {
    pub fn new(policy: TokenizePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self::new(config.policy)
    }

    pub fn policy(&self) -> TokenizePolicy {
        self.policy
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text, self.policy)
    }
}
