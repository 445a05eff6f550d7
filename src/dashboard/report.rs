use serde::Serialize;

use crate::config::DisplayConfig;
use crate::errors::PredictionError;
use crate::pipeline::{ChurnPipeline, ImportanceChart, PredictionResult, RiskLevel};

/// State of the prediction section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing submitted yet.
    Pending,
    Predicted {
        prediction: PredictionResult,
        risk: RiskLevel,
    },
    /// The model rejected the input. Shown inline; the session goes on.
    Failed { error: String },
}

/// Everything one dashboard render needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub model: &'static str,
    pub risk_threshold: f64,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// `None` when the model exposes no usable weights.
    pub importance: Option<ImportanceChart>,
}

/// Display settings applied to every report of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dashboard {
    risk_threshold: f64,
    top_features: usize,
}

impl Dashboard {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            risk_threshold: display.get_risk_threshold(),
            top_features: display.get_top_features(),
        }
    }

    /// Build the report for one submission, or for none when `result` is `None`.
    pub fn report(
        &self,
        pipeline: &ChurnPipeline<'_>,
        result: Option<&Result<PredictionResult, PredictionError>>,
    ) -> Report {
        let outcome = match result {
            None => Outcome::Pending,
            Some(Ok(prediction)) => Outcome::Predicted {
                prediction: *prediction,
                risk: prediction.risk(self.risk_threshold),
            },
            Some(Err(error)) => Outcome::Failed {
                error: error.to_string(),
            },
        };

        Report {
            model: pipeline.model_name(),
            risk_threshold: self.risk_threshold,
            outcome,
            importance: pipeline.importance(self.top_features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ModelSpec;
    use crate::form::CustomerRecord;
    use crate::pipeline::stub::{telco_columns, FailingClassifier, StubClassifier, IDENTITY};
    use crate::traits::ChurnLabel;

    #[test]
    fn test_pending_report_still_carries_chart() {
        let columns = telco_columns();
        let model = ModelSpec::LogisticRegression {
            coef: (0..columns.len()).map(|i| i as f64).collect(),
            intercept: 0.0,
        };
        let pipeline = ChurnPipeline::from_parts(&model, &IDENTITY, &columns);
        let dashboard = Dashboard::new(&DisplayConfig {
            top_features: Some(3),
            ..Default::default()
        });

        let report = dashboard.report(&pipeline, None);
        assert_eq!(report.outcome, Outcome::Pending);
        assert_eq!(report.model, "logistic_regression");
        assert_eq!(report.importance.unwrap().scores.len(), 3);
    }

    #[test]
    fn test_risk_uses_configured_threshold() {
        let columns = telco_columns();
        let classifier = StubClassifier::with_probability(ChurnLabel::Churned, 0.55);
        let pipeline = ChurnPipeline::from_parts(&classifier, &IDENTITY, &columns);
        let result = pipeline.predict(&CustomerRecord::default());

        let lenient = Dashboard::new(&DisplayConfig::default());
        let strict = Dashboard::new(&DisplayConfig {
            risk_threshold: Some(0.6),
            ..Default::default()
        });

        let risk = |dashboard: Dashboard| match dashboard.report(&pipeline, Some(&result)).outcome {
            Outcome::Predicted { risk, .. } => risk,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(risk(lenient), RiskLevel::High);
        assert_eq!(risk(strict), RiskLevel::Low);
    }

    #[test]
    fn test_failure_is_reported_as_message() {
        let columns = telco_columns();
        let pipeline = ChurnPipeline::from_parts(&FailingClassifier, &IDENTITY, &columns);
        let result = pipeline.predict(&CustomerRecord::default());

        let report = Dashboard::new(&DisplayConfig::default()).report(&pipeline, Some(&result));
        match report.outcome {
            Outcome::Failed { error } => assert!(error.contains("Model expects 46 features")),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(report.importance.is_none());
    }
}
