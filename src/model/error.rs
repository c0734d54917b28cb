use thiserror::Error;

use crate::features::FeatureError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error("{rows} feature rows but {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("cannot fit a classifier on an empty training set")]
    EmptyTrainingSet,

    #[error("classifier used before fit")]
    NotTrained,
}
