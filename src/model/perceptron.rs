use std::collections::BTreeSet;

use tracing::{debug, info};

use super::classifier::{check_training_set, Classifier};
use super::error::ModelError;
use super::vectorizer::SparseVector;
use crate::config::PerceptronConfig;

/// Averaged multiclass perceptron over binary features.
///
/// One weight row per class plus a bias, laid out class-major:
/// `weights[class * dimension + feature]`. Training visits rows in the given
/// order, so results are reproducible. Ties go to the label that sorts first.
#[derive(Debug, Clone)]
pub struct Perceptron {
    config: PerceptronConfig,
    classes: Vec<String>,
    dimension: usize,
    weights: Vec<f64>,
    bias: Vec<f64>,
}

impl Perceptron {
    pub fn new(config: PerceptronConfig) -> Self {
        Self {
            config,
            classes: Vec::new(),
            dimension: 0,
            weights: Vec::new(),
            bias: Vec::new(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_trained(&self) -> bool {
        !self.classes.is_empty()
    }

    fn scores(&self, row: &SparseVector, weights: &[f64], bias: &[f64]) -> Vec<f64> {
        (0..self.classes.len())
            .map(|class| {
                let base = class * self.dimension;
                bias[class]
                    + row
                        .indices()
                        .iter()
                        .filter(|&&feature| feature < self.dimension)
                        .map(|&feature| weights[base + feature])
                        .sum::<f64>()
            })
            .collect()
    }

    fn best(scores: &[f64]) -> usize {
        let mut best = 0;
        for (class, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = class;
            }
        }
        best
    }

    fn update(
        weights: &mut [f64],
        bias: &mut [f64],
        base: usize,
        class: usize,
        row: &SparseVector,
        delta: f64,
    ) {
        for &feature in row.indices() {
            weights[base + feature] += delta;
        }
        bias[class] += delta;
    }
}

impl Default for Perceptron {
    fn default() -> Self {
        Self::new(PerceptronConfig::default())
    }
}

impl Classifier for Perceptron {
    fn fit(&mut self, rows: &[SparseVector], labels: &[String]) -> Result<(), ModelError> {
        check_training_set(rows, labels)?;

        self.classes = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        self.dimension = rows
            .iter()
            .filter_map(|row| row.indices().last())
            .max()
            .map_or(0, |&last| last + 1);

        let targets: Vec<usize> = labels
            .iter()
            .map(|label| self.classes.binary_search(label).unwrap_or(0))
            .collect();

        let size = self.classes.len() * self.dimension;
        let mut weights = vec![0.0; size];
        let mut bias = vec![0.0; self.classes.len()];
        // Step-weighted sums of the updates, used to average lazily.
        let mut totals = vec![0.0; size];
        let mut bias_totals = vec![0.0; self.classes.len()];
        let mut step = 1.0;

        for epoch in 0..self.config.epochs {
            let mut errors = 0usize;
            for (row, &target) in rows.iter().zip(&targets) {
                let guess = Self::best(&self.scores(row, &weights, &bias));
                if guess != target {
                    errors += 1;
                    let (t, g) = (target * self.dimension, guess * self.dimension);
                    Self::update(&mut weights, &mut bias, t, target, row, 1.0);
                    Self::update(&mut weights, &mut bias, g, guess, row, -1.0);
                    Self::update(&mut totals, &mut bias_totals, t, target, row, step);
                    Self::update(&mut totals, &mut bias_totals, g, guess, row, -step);
                }
                step += 1.0;
            }
            debug!(epoch, errors, rows = rows.len(), "perceptron epoch");
        }

        for (w, total) in weights.iter_mut().zip(&totals) {
            *w -= total / step;
        }
        for (b, total) in bias.iter_mut().zip(&bias_totals) {
            *b -= total / step;
        }
        self.weights = weights;
        self.bias = bias;

        info!(
            classes = self.classes.len(),
            dimension = self.dimension,
            epochs = self.config.epochs,
            "perceptron trained"
        );
        Ok(())
    }

    fn predict(&self, row: &SparseVector) -> Result<String, ModelError> {
        if !self.is_trained() {
            return Err(ModelError::NotTrained);
        }
        let best = Self::best(&self.scores(row, &self.weights, &self.bias));
        Ok(self.classes[best].clone())
    }
}
