//! Annotated corpus structures: records, sentences and corpora.

use std::collections::BTreeMap;

/// One annotated word: named string columns such as `form` and `pos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRecord {
    columns: BTreeMap<String, String>,
}

/// Ordered records; the order defines left and right context.
pub type Sentence = Vec<TokenRecord>;

/// Ordered sentences. Context windows never cross from one sentence into the next.
pub type Corpus = Vec<Sentence>;

impl TokenRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Sets `column`, replacing any previous value. Returns the old value.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.columns.insert(column.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Number of tokens across all sentences.
pub fn token_count(corpus: &[Sentence]) -> usize {
    corpus.iter().map(Vec::len).sum()
}

/// Builds a sentence of `form`/`pos` records from `(form, pos)` pairs.
pub fn tagged_sentence(pairs: &[(&str, &str)]) -> Sentence {
    pairs
        .iter()
        .map(|&(form, pos)| TokenRecord::from_pairs([("form", form), ("pos", pos)]))
        .collect()
}
