use std::collections::BTreeMap;
use std::fmt;

/// Which column a windowed feature reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureKind {
    /// The word form column.
    Word,
    /// The tag column.
    Tag,
}

impl FeatureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FeatureKind::Word => "word",
            FeatureKind::Tag => "tag",
        }
    }
}

/// Name of one feature: a column kind plus a signed offset from the current token.
///
/// Renders as `word-2`, `word+0`, `tag+1`: the sign is always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureKey {
    pub kind: FeatureKind,
    pub offset: isize,
}

impl FeatureKey {
    pub fn word(offset: isize) -> Self {
        Self {
            kind: FeatureKind::Word,
            offset,
        }
    }

    pub fn tag(offset: isize) -> Self {
        Self {
            kind: FeatureKind::Tag,
            offset,
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}", self.kind.label(), self.offset)
    }
}

/// Symbolic features for one token position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureMap {
    features: BTreeMap<FeatureKey, String>,
}

impl FeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FeatureKey, value: impl Into<String>) {
        self.features.insert(key, value.into());
    }

    pub fn get(&self, key: FeatureKey) -> Option<&str> {
        self.features.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn count_kind(&self, kind: FeatureKind) -> usize {
        self.features.keys().filter(|key| key.kind == kind).count()
    }

    /// Features in key order: words before tags, then by offset.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &str)> {
        self.features.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

impl fmt::Display for FeatureMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        f.write_str("{")?;
        for (key, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_always_carry_a_sign() {
        assert_eq!(FeatureKey::word(-2).to_string(), "word-2");
        assert_eq!(FeatureKey::word(0).to_string(), "word+0");
        assert_eq!(FeatureKey::tag(1).to_string(), "tag+1");
    }

    #[test]
    fn test_iteration_orders_words_then_tags_by_offset() {
        let mut map = FeatureMap::new();
        map.insert(FeatureKey::tag(-1), "DT");
        map.insert(FeatureKey::word(1), "barks");
        map.insert(FeatureKey::word(-1), "the");
        let keys: Vec<String> = map.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(keys, vec!["word-1", "word+1", "tag-1"]);
    }

    #[test]
    fn test_display() {
        let mut map = FeatureMap::new();
        map.insert(FeatureKey::word(-1), "<BOS>");
        map.insert(FeatureKey::word(0), "Dogs");
        assert_eq!(map.to_string(), "{word-1: <BOS>, word+0: Dogs}");
    }
}
