use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::features::FeatureMap;

/// Binary feature vector: the sorted indices of the features that are on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseVector {
    indices: Vec<usize>,
}

impl SparseVector {
    pub fn from_indices(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Turns symbolic feature maps into numeric rows.
pub trait Vectorizer {
    /// Learns the feature space from `maps`.
    fn fit(&mut self, maps: &[FeatureMap]);

    /// Encodes one map. Features never seen by `fit` are dropped.
    fn transform(&self, map: &FeatureMap) -> SparseVector;

    fn fit_transform(&mut self, maps: &[FeatureMap]) -> Vec<SparseVector> {
        self.fit(maps);
        maps.iter().map(|map| self.transform(map)).collect()
    }

    /// Number of columns in the learned feature space.
    fn dimension(&self) -> usize;
}

/// One-hot encoder over `name=value` pairs, e.g. `word-1=the`.
#[derive(Debug, Clone, Default)]
pub struct DictVectorizer {
    vocabulary: HashMap<String, usize>,
    names: Vec<String>,
}

impl DictVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column names in index order.
    pub fn feature_names(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vocabulary.get(name).copied()
    }

    fn pairs(map: &FeatureMap) -> impl Iterator<Item = String> + '_ {
        map.iter().map(|(key, value)| format!("{key}={value}"))
    }
}

impl Vectorizer for DictVectorizer {
    /// Replaces any previous vocabulary. Columns are sorted by name.
    fn fit(&mut self, maps: &[FeatureMap]) {
        let names: BTreeSet<String> = maps.iter().flat_map(|map| Self::pairs(map)).collect();
        self.names = names.into_iter().collect();
        self.vocabulary = self
            .names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        debug!(rows = maps.len(), columns = self.names.len(), "dict vectorizer fitted");
    }

    fn transform(&self, map: &FeatureMap) -> SparseVector {
        SparseVector::from_indices(
            Self::pairs(map)
                .filter_map(|name| self.index_of(&name))
                .collect(),
        )
    }

    fn dimension(&self) -> usize {
        self.names.len()
    }
}
