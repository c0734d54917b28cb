use std::borrow::Cow;

use tracing::debug;

use super::error::FeatureError;
use super::feature_map::{FeatureKey, FeatureMap};
use super::window::{pad, window};
use crate::config::ExtractorConfig;
use crate::corpus::{token_count, Sentence};
use crate::error::ConfigError;

/// Feature maps, one per token in corpus order, and the matching gold labels.
///
/// Labels are `Some` in training mode and `None` in inference mode.
pub type Extraction = (Vec<FeatureMap>, Vec<Option<String>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorState {
    Configured,
    Fitted,
}

/// Turns tagged sentences into per-token context features.
///
/// Each token gets the word forms in a symmetric window of `width` positions
/// on each side. Positions outside the sentence read the boundary sentinels,
/// so windows never cross into a neighbouring sentence. In training mode the
/// gold tags can be windowed the same way and the gold tag is returned as the
/// label; in inference mode the gold column is never read.
///
/// Windowed training tags include the token's own gold tag (offset 0). That
/// feature is unavailable at inference time; leave `window_tags` off for a
/// model meant to tag unseen text.
#[derive(Debug, Clone)]
pub struct ContextExtractor {
    config: ExtractorConfig,
    state: ExtractorState,
}

/// Largest width whose padded length and signed offsets cannot overflow.
pub const MAX_WIDTH: usize = isize::MAX as usize / 2;

impl ContextExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, ConfigError> {
        if config.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if config.width > MAX_WIDTH {
            return Err(ConfigError::WidthTooLarge {
                width: config.width,
                max: MAX_WIDTH,
            });
        }
        if config.input_column.is_empty() {
            return Err(ConfigError::EmptyColumn("input"));
        }
        if config.output_column.is_empty() {
            return Err(ConfigError::EmptyColumn("output"));
        }
        if config.predicted_column.is_empty() {
            return Err(ConfigError::EmptyColumn("prediction"));
        }
        if config.predicted_column == config.output_column {
            return Err(ConfigError::PredictedIsGold(config.predicted_column));
        }

        Ok(Self {
            config,
            state: ExtractorState::Configured,
        })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: ExtractorConfig::default(),
            state: ExtractorState::Configured,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn state(&self) -> ExtractorState {
        self.state
    }

    pub fn is_fitted(&self) -> bool {
        self.state == ExtractorState::Fitted
    }

    /// Checks that `corpus` can be transformed in training mode.
    ///
    /// Nothing is learned beyond the configuration; fitting again is harmless.
    /// A failed fit leaves the state as it was.
    pub fn fit(&mut self, corpus: &[Sentence]) -> Result<&mut Self, FeatureError> {
        for (s, sentence) in corpus.iter().enumerate() {
            if sentence.is_empty() {
                return Err(FeatureError::EmptySentence { sentence: s });
            }
            self.read_column(s, sentence, &self.config.input_column)?;
            self.read_column(s, sentence, &self.config.output_column)?;
        }

        debug!(
            sentences = corpus.len(),
            tokens = token_count(corpus),
            "context extractor fitted"
        );
        self.state = ExtractorState::Fitted;
        Ok(self)
    }

    /// Fits on `corpus`, then transforms it in training mode.
    pub fn fit_transform(&mut self, corpus: &[Sentence]) -> Result<Extraction, FeatureError> {
        self.fit(corpus)?;
        self.transform(corpus, true)
    }

    /// Extracts one feature map per token of `corpus`, in corpus order.
    ///
    /// Any malformed sentence aborts the whole call; nothing partial is returned.
    pub fn transform(
        &self,
        corpus: &[Sentence],
        training_step: bool,
    ) -> Result<Extraction, FeatureError> {
        if !self.is_fitted() {
            return Err(FeatureError::NotFitted);
        }

        let total = token_count(corpus);
        let mut maps = Vec::with_capacity(total);
        let mut labels = Vec::with_capacity(total);

        for (s, sentence) in corpus.iter().enumerate() {
            self.extract_sentence(s, sentence, training_step, &mut maps, &mut labels)?;
        }

        debug!(
            sentences = corpus.len(),
            tokens = total,
            training_step,
            "context features extracted"
        );
        Ok((maps, labels))
    }

    /// Writes `predictions` into `sentence` under the predicted column.
    ///
    /// Existing predictions are overwritten; every other column is kept.
    pub fn annotate(
        &self,
        sentence: &mut Sentence,
        predictions: &[String],
    ) -> Result<(), FeatureError> {
        if sentence.len() != predictions.len() {
            return Err(FeatureError::LengthMismatch {
                expected: sentence.len(),
                found: predictions.len(),
            });
        }

        for (record, prediction) in sentence.iter_mut().zip(predictions) {
            record.insert(self.config.predicted_column.as_str(), prediction.as_str());
        }
        Ok(())
    }

    /// Compares the gold column with the predicted column over `corpus`.
    pub fn evaluate(&self, corpus: &[Sentence]) -> Result<(usize, usize), FeatureError> {
        super::evaluate(
            corpus,
            &self.config.output_column,
            &self.config.predicted_column,
        )
    }

    fn extract_sentence(
        &self,
        s: usize,
        sentence: &Sentence,
        training_step: bool,
        maps: &mut Vec<FeatureMap>,
        labels: &mut Vec<Option<String>>,
    ) -> Result<(), FeatureError> {
        if sentence.is_empty() {
            return Err(FeatureError::EmptySentence { sentence: s });
        }

        let width = self.config.width;
        let sentinels = self.config.sentinels;

        let forms = self.read_column(s, sentence, &self.config.input_column)?;
        let forms: Vec<Cow<'_, str>> = if self.config.lowercase {
            forms.iter().map(|f| Cow::Owned(f.to_lowercase())).collect()
        } else {
            forms.into_iter().map(Cow::Borrowed).collect()
        };
        let forms: Vec<&str> = forms.iter().map(|f| f.as_ref()).collect();
        let padded_forms = pad(&forms, width, sentinels);

        let tags = if training_step {
            Some(self.read_column(s, sentence, &self.config.output_column)?)
        } else {
            None
        };
        let padded_tags = match &tags {
            Some(tags) if self.config.window_tags => Some(pad(tags, width, sentinels)),
            _ => None,
        };

        for i in 0..sentence.len() {
            let mut map = FeatureMap::new();
            for (offset, form) in window(&padded_forms, i, width) {
                map.insert(FeatureKey::word(offset), form);
            }
            if let Some(padded_tags) = &padded_tags {
                for (offset, tag) in window(padded_tags, i, width) {
                    map.insert(FeatureKey::tag(offset), tag);
                }
            }
            maps.push(map);
            labels.push(tags.as_ref().map(|tags| tags[i].to_string()));
        }
        Ok(())
    }

    /// Reads `column` from every record, rejecting gaps and sentinel look-alikes.
    fn read_column<'s>(
        &self,
        s: usize,
        sentence: &'s Sentence,
        column: &str,
    ) -> Result<Vec<&'s str>, FeatureError> {
        sentence
            .iter()
            .enumerate()
            .map(|(t, record)| {
                let value = record.get(column).ok_or_else(|| FeatureError::MissingColumn {
                    sentence: s,
                    token: t,
                    column: column.to_string(),
                })?;
                if self.config.sentinels.contains(value) {
                    return Err(FeatureError::SentinelCollision {
                        sentence: s,
                        token: t,
                        value: value.to_string(),
                    });
                }
                Ok(value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{tagged_sentence, TokenRecord};
    use crate::features::FeatureKind;

    fn fitted(config: ExtractorConfig, corpus: &[Sentence]) -> ContextExtractor {
        let mut extractor = ContextExtractor::new(config).unwrap();
        extractor.fit(corpus).unwrap();
        extractor
    }

    fn sample() -> Vec<Sentence> {
        vec![
            tagged_sentence(&[("The", "DT"), ("dog", "NN"), ("barks", "VBZ")]),
            tagged_sentence(&[("Birds", "NNS"), ("sing", "VBP")]),
        ]
    }

    #[test]
    fn test_new_rejects_zero_width() {
        let result = ContextExtractor::new(ExtractorConfig::default().with_width(0));
        assert!(matches!(result, Err(ConfigError::ZeroWidth)));
    }

    #[test]
    fn test_new_rejects_overflowing_width() {
        let config = ExtractorConfig::default().with_width(usize::MAX / 2 + 1);
        assert!(matches!(
            ContextExtractor::new(config),
            Err(ConfigError::WidthTooLarge { max: MAX_WIDTH, .. })
        ));
        assert!(ContextExtractor::new(ExtractorConfig::default().with_width(MAX_WIDTH)).is_ok());
    }

    #[test]
    fn test_new_rejects_predicted_equal_to_gold() {
        let config = ExtractorConfig {
            predicted_column: "pos".to_string(),
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            ContextExtractor::new(config),
            Err(ConfigError::PredictedIsGold(_))
        ));
    }

    #[test]
    fn test_new_rejects_empty_column() {
        let config = ExtractorConfig {
            input_column: String::new(),
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            ContextExtractor::new(config),
            Err(ConfigError::EmptyColumn("input"))
        ));
    }

    #[test]
    fn test_transform_before_fit() {
        let extractor = ContextExtractor::with_default_config();
        assert_eq!(extractor.state(), ExtractorState::Configured);
        assert_eq!(
            extractor.transform(&sample(), true),
            Err(FeatureError::NotFitted)
        );
    }

    #[test]
    fn test_fit_is_idempotent() {
        let corpus = sample();
        let mut extractor = ContextExtractor::with_default_config();
        extractor.fit(&corpus).unwrap();
        let first = extractor.transform(&corpus, true).unwrap();
        extractor.fit(&corpus).unwrap();
        let second = extractor.transform(&corpus, true).unwrap();
        assert!(extractor.is_fitted());
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_fit_keeps_state() {
        let mut extractor = ContextExtractor::with_default_config();
        let bad = vec![vec![TokenRecord::from_pairs([("form", "hello")])]];
        assert!(extractor.fit(&bad).is_err());
        assert_eq!(extractor.state(), ExtractorState::Configured);
    }

    #[test]
    fn test_training_features_window_words_and_tags() {
        let corpus = sample();
        let extractor = fitted(ExtractorConfig::default(), &corpus);
        let (maps, labels) = extractor.transform(&corpus, true).unwrap();

        assert_eq!(maps.len(), 5);
        assert_eq!(labels[1].as_deref(), Some("NN"));

        let dog = &maps[1];
        assert_eq!(dog.count_kind(FeatureKind::Word), 5);
        assert_eq!(dog.count_kind(FeatureKind::Tag), 5);
        assert_eq!(dog.get(FeatureKey::word(-2)), Some("<BOS>"));
        assert_eq!(dog.get(FeatureKey::word(-1)), Some("The"));
        assert_eq!(dog.get(FeatureKey::word(0)), Some("dog"));
        assert_eq!(dog.get(FeatureKey::word(1)), Some("barks"));
        assert_eq!(dog.get(FeatureKey::word(2)), Some("<EOS>"));
        assert_eq!(dog.get(FeatureKey::tag(-1)), Some("DT"));
        assert_eq!(dog.get(FeatureKey::tag(2)), Some("<EOS>"));
    }

    #[test]
    fn test_windows_stop_at_sentence_walls() {
        let corpus = sample();
        let extractor = fitted(ExtractorConfig::default(), &corpus);
        let (maps, _) = extractor.transform(&corpus, true).unwrap();

        let barks = &maps[2];
        assert_eq!(barks.get(FeatureKey::word(1)), Some("<EOS>"));
        let birds = &maps[3];
        assert_eq!(birds.get(FeatureKey::word(-1)), Some("<BOS>"));
        assert_eq!(birds.get(FeatureKey::tag(-1)), Some("<BOS>"));
    }

    #[test]
    fn test_inference_omits_tags_and_labels() {
        let corpus = sample();
        let extractor = fitted(ExtractorConfig::default(), &corpus);
        let (maps, labels) = extractor.transform(&corpus, false).unwrap();

        assert_eq!(maps.len(), 5);
        assert!(labels.iter().all(Option::is_none));
        assert!(maps.iter().all(|m| m.count_kind(FeatureKind::Tag) == 0));
        assert!(maps.iter().all(|m| m.len() == 5));
    }

    #[test]
    fn test_inference_accepts_untagged_sentences() {
        let extractor = fitted(ExtractorConfig::default(), &sample());
        let untagged = vec![vec![
            TokenRecord::from_pairs([("form", "Cats")]),
            TokenRecord::from_pairs([("form", "purr")]),
        ]];
        let (maps, _) = extractor.transform(&untagged, false).unwrap();
        assert_eq!(maps[0].get(FeatureKey::word(1)), Some("purr"));
    }

    #[test]
    fn test_training_requires_output_column() {
        let extractor = fitted(ExtractorConfig::default(), &sample());
        let untagged = vec![vec![TokenRecord::from_pairs([("form", "Cats")])]];
        assert_eq!(
            extractor.transform(&untagged, true),
            Err(FeatureError::MissingColumn {
                sentence: 0,
                token: 0,
                column: "pos".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_sentence_aborts_transform() {
        let extractor = fitted(ExtractorConfig::default(), &sample());
        let mut corpus = sample();
        corpus.push(Vec::new());
        assert_eq!(
            extractor.transform(&corpus, false),
            Err(FeatureError::EmptySentence { sentence: 2 })
        );
    }

    #[test]
    fn test_sentinel_collision_is_rejected() {
        let corpus = vec![tagged_sentence(&[("<EOS>", "NN")])];
        let mut extractor = ContextExtractor::with_default_config();
        assert!(matches!(
            extractor.fit(&corpus),
            Err(FeatureError::SentinelCollision { sentence: 0, token: 0, .. })
        ));
    }

    #[test]
    fn test_words_without_tag_window() {
        let corpus = sample();
        let extractor = fitted(
            ExtractorConfig::default().with_window_tags(false).with_width(1),
            &corpus,
        );
        let (maps, labels) = extractor.transform(&corpus, true).unwrap();
        assert!(maps.iter().all(|m| m.len() == 3));
        assert_eq!(labels[4].as_deref(), Some("VBP"));
    }

    #[test]
    fn test_lowercase_words() {
        let corpus = sample();
        let extractor = fitted(ExtractorConfig::default().with_lowercase(true), &corpus);
        let (maps, labels) = extractor.transform(&corpus, true).unwrap();
        assert_eq!(maps[0].get(FeatureKey::word(0)), Some("the"));
        assert_eq!(labels[0].as_deref(), Some("DT"));
        assert_eq!(maps[0].get(FeatureKey::word(-1)), Some("<BOS>"));
    }

    #[test]
    fn test_transform_leaves_corpus_untouched() {
        let corpus = sample();
        let before = corpus.clone();
        let extractor = fitted(ExtractorConfig::default(), &corpus);
        extractor.transform(&corpus, true).unwrap();
        extractor.transform(&corpus, false).unwrap();
        assert_eq!(corpus, before);
    }

    #[test]
    fn test_annotate_writes_predicted_column() {
        let mut sentence = tagged_sentence(&[("The", "DT"), ("dog", "NN")]);
        let extractor = ContextExtractor::with_default_config();
        extractor
            .annotate(&mut sentence, &["DT".to_string(), "VB".to_string()])
            .unwrap();
        assert_eq!(sentence[1].get("ppos"), Some("VB"));
        assert_eq!(sentence[1].get("pos"), Some("NN"));
    }

    #[test]
    fn test_annotate_length_mismatch_writes_nothing() {
        let mut sentence = tagged_sentence(&[("The", "DT"), ("dog", "NN")]);
        let extractor = ContextExtractor::with_default_config();
        let result = extractor.annotate(&mut sentence, &["DT".to_string()]);
        assert_eq!(
            result,
            Err(FeatureError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
        assert!(sentence.iter().all(|record| !record.contains("ppos")));
    }
}
