use std::collections::HashMap;

use crate::error::ConfigError;

/// Lowercase letters of the Swedish alphabet, in the order the course uses.
pub const SWEDISH_LOWERCASE: &str = "abcdefghijklmnopqrstuwvxyzäåö";

/// Character-for-character translation table, like `tr/abc/ABC/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    table: HashMap<char, char>,
}

impl Translation {
    /// Pairs the i-th character of `from` with the i-th character of `to`.
    pub fn new(from: &str, to: &str) -> Result<Self, ConfigError> {
        let from_len = from.chars().count();
        let to_len = to.chars().count();
        if from_len != to_len {
            return Err(ConfigError::AlphabetLength {
                from: from_len,
                to: to_len,
            });
        }

        let mut table = HashMap::with_capacity(from_len);
        for (source, target) in from.chars().zip(to.chars()) {
            if table.insert(source, target).is_some() {
                return Err(ConfigError::DuplicateSource(source));
            }
        }

        Ok(Self { table })
    }

    /// Maps the Swedish lowercase letters to their uppercase forms.
    pub fn swedish_uppercase() -> Self {
        let table = SWEDISH_LOWERCASE
            .chars()
            .filter_map(|c| {
                let mut upper = c.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(u), None) => Some((c, u)),
                    _ => None,
                }
            })
            .collect();
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Characters absent from the table are copied unchanged.
    pub fn translate(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.table.get(&c).copied().unwrap_or(c))
            .collect()
    }
}
