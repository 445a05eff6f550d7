/// Integration tests running the bundled models end to end
#[cfg(test)]
mod tests {
    use crate::artifact::load_artifact;
    use crate::config::load_and_validate_config;
    use crate::form::CustomerRecord;
    use crate::pipeline::{ChurnPipeline, ImportanceKind, RiskLevel};
    use crate::traits::ChurnLabel;

    fn artifact_for(config: &str) -> (crate::config::Config, crate::artifact::ModelArtifact) {
        let config = load_and_validate_config(config).expect("Failed to load config");
        let artifact = load_artifact(config.artifact_path()).expect("Failed to load artifact");
        (config, artifact)
    }

    #[test]
    fn test_logistic_model_separates_reference_customers() {
        let (config, artifact) = artifact_for("configs/dashboard.yaml");
        let pipeline = ChurnPipeline::new(&artifact);
        let threshold = config.display.get_risk_threshold();

        let high = CustomerRecord::from_file("records/high_risk.yaml").unwrap();
        let result = pipeline.predict(&high).unwrap();
        assert_eq!(result.label, ChurnLabel::Churned);
        assert!(result.estimated);
        assert!(result.scaled);
        assert!(result.probability > 0.85, "got {}", result.probability);
        assert_eq!(result.risk(threshold), RiskLevel::High);

        let loyal = CustomerRecord::from_file("records/loyal.json").unwrap();
        let result = pipeline.predict(&loyal).unwrap();
        assert_eq!(result.label, ChurnLabel::Retained);
        assert!(result.probability < 0.05, "got {}", result.probability);
        assert_eq!(result.risk(threshold), RiskLevel::Low);
    }

    #[test]
    fn test_default_form_is_retained_by_logistic_model() {
        let (_, artifact) = artifact_for("configs/dashboard.yaml");
        let pipeline = ChurnPipeline::new(&artifact);

        let result = pipeline.predict(&CustomerRecord::default()).unwrap();
        assert_eq!(result.label, ChurnLabel::Retained);
        assert!(result.probability > 0.3 && result.probability < 0.5);
    }

    #[test]
    fn test_forest_model_agrees_on_reference_customers() {
        let (_, artifact) = artifact_for("configs/forest.yaml");
        let pipeline = ChurnPipeline::new(&artifact);

        let high = CustomerRecord::from_file("records/high_risk.yaml").unwrap();
        let result = pipeline.predict(&high).unwrap();
        assert_eq!(result.label, ChurnLabel::Churned);
        assert!(result.probability > 0.55);

        let loyal = CustomerRecord::from_file("records/loyal.json").unwrap();
        let result = pipeline.predict(&loyal).unwrap();
        assert_eq!(result.label, ChurnLabel::Retained);
        assert!(result.probability < 0.25);
    }

    #[test]
    fn test_logistic_chart_uses_coefficients() {
        let (config, artifact) = artifact_for("configs/dashboard.yaml");
        let pipeline = ChurnPipeline::new(&artifact);

        let chart = pipeline.importance(config.display.get_top_features()).unwrap();
        assert_eq!(chart.kind, ImportanceKind::Coefficient);
        assert_eq!(chart.scores.len(), 10);
        assert_eq!(chart.scores[0].feature, "MonthlyCharges");
        assert_eq!(chart.scores[1].feature, "Contract_Month-to-month");
    }

    #[test]
    fn test_forest_chart_uses_importances() {
        let (config, artifact) = artifact_for("configs/forest.yaml");
        let pipeline = ChurnPipeline::new(&artifact);

        let chart = pipeline.importance(config.display.get_top_features()).unwrap();
        assert_eq!(chart.kind, ImportanceKind::Importance);
        let names: Vec<_> = chart.scores.iter().map(|s| s.feature.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "tenure",
                "Contract_Month-to-month",
                "InternetService_Fiber optic",
                "TotalCharges",
                "PaymentMethod_Electronic check",
            ]
        );
    }

    #[test]
    fn test_bundled_models_map_every_form_choice() {
        for config in ["configs/dashboard.yaml", "configs/forest.yaml"] {
            let (_, artifact) = artifact_for(config);
            let pipeline = ChurnPipeline::new(&artifact);
            assert!(pipeline.plan().unmapped_choices().is_empty(), "{}", config);
        }
    }
}
