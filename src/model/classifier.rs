use super::error::ModelError;
use super::vectorizer::SparseVector;

/// A trained model that maps encoded feature rows to labels.
///
/// Fitting failures are returned to the caller as they are; nothing is retried.
pub trait Classifier {
    fn fit(&mut self, rows: &[SparseVector], labels: &[String]) -> Result<(), ModelError>;

    fn predict(&self, row: &SparseVector) -> Result<String, ModelError>;

    fn predict_all(&self, rows: &[SparseVector]) -> Result<Vec<String>, ModelError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

/// Checks the shape shared by every `fit` implementation.
pub fn check_training_set(rows: &[SparseVector], labels: &[String]) -> Result<(), ModelError> {
    if rows.len() != labels.len() {
        return Err(ModelError::LengthMismatch {
            rows: rows.len(),
            labels: labels.len(),
        });
    }
    if rows.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }
    Ok(())
}
