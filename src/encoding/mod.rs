//! Turning a customer record into the vector a model was trained on.

mod plan;
mod vector;

pub use plan::EncodingPlan;
pub use vector::FeatureVector;
