use serde::{Deserialize, Serialize};

use crate::errors::ScalingError;
use crate::traits::Scaler;

/// Fitted scaling transforms a model artifact can carry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerSpec {
    /// `(x - mean) / scale`. A zero scale marks a constant column and divides by one.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`, with `scale` and `min` as fitted.
    MinMax { min: Vec<f64>, scale: Vec<f64> },
    Identity,
}

fn check_width(expected: usize, features: &[f64]) -> Result<(), ScalingError> {
    if expected != features.len() {
        return Err(ScalingError::DimensionMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

impl Scaler for ScalerSpec {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScalingError> {
        let scaled: Vec<f64> = match self {
            ScalerSpec::Standard { mean, scale } => {
                check_width(mean.len(), features)?;
                check_width(scale.len(), features)?;
                features
                    .iter()
                    .zip(mean.iter().zip(scale))
                    .map(|(x, (m, s))| {
                        let s = if *s == 0.0 { 1.0 } else { *s };
                        (x - m) / s
                    })
                    .collect()
            }
            ScalerSpec::MinMax { min, scale } => {
                check_width(min.len(), features)?;
                check_width(scale.len(), features)?;
                features
                    .iter()
                    .zip(min.iter().zip(scale))
                    .map(|(x, (lo, s))| x * s + lo)
                    .collect()
            }
            ScalerSpec::Identity => features.to_vec(),
        };

        match scaled.iter().position(|x| !x.is_finite()) {
            Some(index) => Err(ScalingError::NonFinite { index }),
            None => Ok(scaled),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ScalerSpec::Standard { .. } => "standard",
            ScalerSpec::MinMax { .. } => "min_max",
            ScalerSpec::Identity => "identity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scaling() {
        let scaler = ScalerSpec::Standard {
            mean: vec![10.0, 0.5],
            scale: vec![2.0, 0.5],
        };
        assert_eq!(scaler.transform(&[14.0, 1.0]).unwrap(), vec![2.0, 1.0]);
    }

    #[test]
    fn test_standard_constant_column() {
        let scaler = ScalerSpec::Standard {
            mean: vec![3.0],
            scale: vec![0.0],
        };
        assert_eq!(scaler.transform(&[5.0]).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_min_max_scaling() {
        let scaler = ScalerSpec::MinMax {
            min: vec![0.0, -0.5],
            scale: vec![0.25, 0.5],
        };
        assert_eq!(scaler.transform(&[2.0, 1.0]).unwrap(), vec![0.5, 0.0]);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let scaler = ScalerSpec::Standard {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        };
        assert_eq!(
            scaler.transform(&[1.0, 2.0]).unwrap_err(),
            ScalingError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_non_finite_output_is_an_error() {
        let scaler = ScalerSpec::MinMax {
            min: vec![0.0],
            scale: vec![f64::INFINITY],
        };
        assert_eq!(
            scaler.transform(&[1.0]).unwrap_err(),
            ScalingError::NonFinite { index: 0 }
        );
    }

    #[test]
    fn test_identity_parses_without_fields() {
        let scaler: ScalerSpec = serde_json::from_str(r#"{"kind": "identity"}"#).unwrap();
        assert_eq!(scaler.transform(&[1.5, -2.0]).unwrap(), vec![1.5, -2.0]);
    }
}
