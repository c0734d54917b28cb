pub mod classifier;
pub mod error;
pub mod perceptron;
pub mod tagger;
pub mod vectorizer;

pub use classifier::Classifier;
pub use error::ModelError;
pub use perceptron::Perceptron;
pub use tagger::Tagger;
pub use vectorizer::{DictVectorizer, SparseVector, Vectorizer};
