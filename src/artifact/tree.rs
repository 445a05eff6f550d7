//! Flattened decision trees as exported from a fitted tree estimator.
//!
//! Nodes live in one array and refer to their children by index. The walk
//! goes left when `x[feature] <= threshold`, matching the training library.

use serde::{Deserialize, Serialize};

use crate::errors::PredictionError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Class counts (or fractions) for `[retained, churned]`.
    Leaf { value: [f64; 2] },
}

/// Walk `nodes` from the root and return the churn share of the reached leaf.
///
/// A well-formed tree reaches a leaf in fewer steps than it has nodes, so the
/// walk is bounded by the node count and a longer path is reported as a cycle.
pub fn leaf_probability(nodes: &[TreeNode], features: &[f64]) -> Result<f64, PredictionError> {
    let mut index = 0;

    for _ in 0..nodes.len() {
        match nodes.get(index) {
            None => {
                return Err(PredictionError::MalformedTree(format!(
                    "node {} does not exist",
                    index
                )))
            }
            Some(TreeNode::Leaf { value }) => {
                let [retained, churned] = *value;
                let total = retained + churned;
                if retained < 0.0 || churned < 0.0 || !(total > 0.0) || !total.is_finite() {
                    return Err(PredictionError::MalformedTree(format!(
                        "leaf {} has invalid class values {:?}",
                        index, value
                    )));
                }
                return Ok(churned / total);
            }
            Some(TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            }) => {
                let x = features
                    .get(*feature)
                    .ok_or(PredictionError::FeatureOutOfRange {
                        feature: *feature,
                        len: features.len(),
                    })?;
                index = if *x <= *threshold { *left } else { *right };
            }
        }
    }

    if nodes.is_empty() {
        Err(PredictionError::MalformedTree("tree has no nodes".to_string()))
    } else {
        Err(PredictionError::MalformedTree(
            "path from the root never reaches a leaf".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Vec<TreeNode> {
        vec![
            TreeNode::Split {
                feature: 0,
                threshold: 10.0,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { value: [30.0, 10.0] },
            TreeNode::Leaf { value: [5.0, 15.0] },
        ]
    }

    #[test]
    fn test_walk_goes_left_on_equal_threshold() {
        let p = leaf_probability(&stump(), &[10.0]).unwrap();
        assert!((p - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_walk_goes_right_above_threshold() {
        let p = leaf_probability(&stump(), &[10.5]).unwrap();
        assert!((p - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_missing_child_is_malformed() {
        let nodes = vec![TreeNode::Split {
            feature: 0,
            threshold: 0.0,
            left: 7,
            right: 7,
        }];
        let err = leaf_probability(&nodes, &[1.0]).unwrap_err();
        assert!(matches!(err, PredictionError::MalformedTree(_)));
    }

    #[test]
    fn test_cycle_is_detected() {
        let nodes = vec![
            TreeNode::Split {
                feature: 0,
                threshold: 0.0,
                left: 1,
                right: 1,
            },
            TreeNode::Split {
                feature: 0,
                threshold: 0.0,
                left: 0,
                right: 0,
            },
        ];
        let err = leaf_probability(&nodes, &[1.0]).unwrap_err();
        assert_eq!(
            err,
            PredictionError::MalformedTree("path from the root never reaches a leaf".to_string())
        );
    }

    #[test]
    fn test_split_on_missing_feature() {
        let err = leaf_probability(&stump(), &[]).unwrap_err();
        assert_eq!(err, PredictionError::FeatureOutOfRange { feature: 0, len: 0 });
    }

    #[test]
    fn test_empty_leaf_is_rejected() {
        let nodes = vec![TreeNode::Leaf { value: [0.0, 0.0] }];
        assert!(leaf_probability(&nodes, &[]).is_err());
    }

    #[test]
    fn test_node_json_shape() {
        let json = r#"[
            {"type": "split", "feature": 0, "threshold": 10.0, "left": 1, "right": 2},
            {"type": "leaf", "value": [30.0, 10.0]},
            {"type": "leaf", "value": [5.0, 15.0]}
        ]"#;
        let nodes: Vec<TreeNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes, stump());
    }
}
