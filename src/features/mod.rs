pub mod error;
pub mod evaluate;
pub mod extractor;
pub mod feature_map;
pub mod window;

pub use error::FeatureError;
pub use evaluate::{accuracy, evaluate};
pub use extractor::{ContextExtractor, Extraction, ExtractorState, MAX_WIDTH};
pub use feature_map::{FeatureKey, FeatureKind, FeatureMap};
