//! Course tools for tokenizing text and tagging parts of speech.
//!
//! - `tokenize`: three Unicode-aware tokenizers
//! - `translate`: character-for-character translation (`tr`)
//! - `features`: context-window feature extraction for taggers
//! - `model`: vectorizer, classifier and tagger pipeline
//! - `input`: text, PDF, EPUB and CoNLL corpus loading

pub mod config;
pub mod corpus;
pub mod error;
pub mod features;
pub mod input;
pub mod model;
pub mod tokenize;
pub mod translate;

pub use config::{Config, ExtractorConfig, PerceptronConfig, TokenizerConfig};
pub use corpus::{Corpus, Sentence, TokenRecord};
pub use error::ConfigError;
pub use features::{ContextExtractor, FeatureError, FeatureKey, FeatureMap};
pub use model::{Classifier, DictVectorizer, ModelError, Perceptron, Tagger, Vectorizer};
pub use tokenize::{tokenize, TokenizePolicy, Tokenizer};
pub use translate::Translation;
