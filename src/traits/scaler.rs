use crate::errors::ScalingError;

/// A fitted feature transform applied before the classifier sees the vector.
pub trait Scaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScalingError>;

    fn name(&self) -> &'static str;
}
