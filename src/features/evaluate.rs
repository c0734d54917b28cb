use super::error::FeatureError;
use crate::corpus::Sentence;

/// Counts `(matches, mismatches)` between the gold and predicted columns.
///
/// Every record must carry both columns. A missing predicted column means
/// the corpus was never annotated and is reported as [`FeatureError::NotAnnotated`].
pub fn evaluate(
    corpus: &[Sentence],
    gold_column: &str,
    predicted_column: &str,
) -> Result<(usize, usize), FeatureError> {
    let mut matches = 0;
    let mut mismatches = 0;

    for (s, sentence) in corpus.iter().enumerate() {
        for (t, record) in sentence.iter().enumerate() {
            let predicted = record
                .get(predicted_column)
                .ok_or_else(|| FeatureError::NotAnnotated {
                    sentence: s,
                    token: t,
                    column: predicted_column.to_string(),
                })?;
            let gold = record
                .get(gold_column)
                .ok_or_else(|| FeatureError::MissingColumn {
                    sentence: s,
                    token: t,
                    column: gold_column.to_string(),
                })?;

            if gold == predicted {
                matches += 1;
            } else {
                mismatches += 1;
            }
        }
    }

    Ok((matches, mismatches))
}

/// Share of matches, or `None` when nothing was counted.
pub fn accuracy(matches: usize, mismatches: usize) -> Option<f64> {
    let total = matches + mismatches;
    if total == 0 {
        None
    } else {
        Some(matches as f64 / total as f64)
    }
}
