pub mod classifier;
pub mod scaler;

pub use classifier::{ChurnLabel, Classifier, FeatureWeights};
pub use scaler::Scaler;
