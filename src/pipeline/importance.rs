use serde::Serialize;

use crate::observability::messages::pipeline::ImportanceUnavailable;
use crate::observability::messages::StructuredLog;
use crate::traits::{Classifier, FeatureWeights};

/// Where a chart's scores came from, which decides how to read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceKind {
    /// Tree impurity importances. Larger means more influential.
    Importance,
    /// Linear coefficients. Positive raises churn risk, negative lowers it.
    Coefficient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureScore {
    pub feature: String,
    pub score: f64,
}

/// The top features of a model, highest score first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceChart {
    pub kind: ImportanceKind,
    pub scores: Vec<FeatureScore>,
}

impl ImportanceChart {
    /// Largest absolute score, used to size the bars.
    pub fn max_magnitude(&self) -> f64 {
        self.scores
            .iter()
            .map(|s| s.score.abs())
            .fold(0.0, f64::max)
    }
}

/// Pair a model's weights with its columns and keep the `top_n` largest.
///
/// Scores are ranked by signed value, so for coefficients the chart shows
/// the features that push hardest toward churn. Returns `None` when the model
/// exposes no weights or when they do not line up with `columns`.
pub fn rank_features(
    classifier: &dyn Classifier,
    columns: &[String],
    top_n: usize,
) -> Option<ImportanceChart> {
    let weights = classifier.feature_weights()?;
    let values = weights.values();
    if values.len() != columns.len() {
        ImportanceUnavailable {
            model: classifier.name(),
            weight_count: values.len(),
            column_count: columns.len(),
        }
        .log();
        return None;
    }

    let kind = match weights {
        FeatureWeights::Importances(_) => ImportanceKind::Importance,
        FeatureWeights::Coefficients(_) => ImportanceKind::Coefficient,
    };

    let mut scores: Vec<FeatureScore> = columns
        .iter()
        .zip(values)
        .filter(|(_, score)| score.is_finite())
        .map(|(feature, score)| FeatureScore {
            feature: feature.clone(),
            score: *score,
        })
        .collect();
    // Stable sort keeps column order among equal scores.
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(top_n);

    Some(ImportanceChart { kind, scores })
}
