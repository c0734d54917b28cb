use tracing::{debug, info};

use super::classifier::Classifier;
use super::error::ModelError;
use super::vectorizer::Vectorizer;
use crate::corpus::{token_count, Sentence};
use crate::features::ContextExtractor;

/// Part-of-speech tagger: context features, vectorized, fed to a classifier.
///
/// Each token is classified on its own; there is no sequence decoding.
#[derive(Debug, Clone)]
pub struct Tagger<V, C> {
    extractor: ContextExtractor,
    vectorizer: V,
    classifier: C,
}

impl<V: Vectorizer, C: Classifier> Tagger<V, C> {
    pub fn new(extractor: ContextExtractor, vectorizer: V, classifier: C) -> Self {
        Self {
            extractor,
            vectorizer,
            classifier,
        }
    }

    pub fn extractor(&self) -> &ContextExtractor {
        &self.extractor
    }

    pub fn vectorizer(&self) -> &V {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Fits the extractor, the vectorizer and the classifier on a gold corpus.
    pub fn fit(&mut self, corpus: &[Sentence]) -> Result<(), ModelError> {
        let (maps, labels) = self.extractor.fit_transform(corpus)?;
        if let Some(first) = maps.first() {
            debug!(features = %first, "first training example");
        }

        let labels: Vec<String> = labels.into_iter().flatten().collect();
        let rows = self.vectorizer.fit_transform(&maps);
        info!(
            examples = rows.len(),
            columns = self.vectorizer.dimension(),
            "training classifier"
        );
        self.classifier.fit(&rows, &labels)
    }

    /// Predicts one tag per token of `sentence` without modifying it.
    pub fn predict(&self, sentence: &Sentence) -> Result<Vec<String>, ModelError> {
        let (maps, _) = self
            .extractor
            .transform(std::slice::from_ref(sentence), false)?;
        maps.iter()
            .map(|map| self.classifier.predict(&self.vectorizer.transform(map)))
            .collect()
    }

    /// Predicts tags for `sentence` and stores them in the predicted column.
    pub fn tag(&self, sentence: &mut Sentence) -> Result<(), ModelError> {
        let predictions = self.predict(sentence)?;
        self.extractor.annotate(sentence, &predictions)?;
        Ok(())
    }

    pub fn tag_corpus(&self, corpus: &mut [Sentence]) -> Result<(), ModelError> {
        for sentence in corpus.iter_mut() {
            self.tag(sentence)?;
        }
        info!(
            sentences = corpus.len(),
            tokens = token_count(corpus),
            "corpus tagged"
        );
        Ok(())
    }

    /// `(matches, mismatches)` of the gold column against the predictions.
    pub fn evaluate(&self, corpus: &[Sentence]) -> Result<(usize, usize), ModelError> {
        Ok(self.extractor.evaluate(corpus)?)
    }
}
