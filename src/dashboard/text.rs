use std::fmt::Write;

use super::report::{Outcome, Report};
use crate::pipeline::{ImportanceChart, ImportanceKind, RiskLevel};

const PROBABILITY_BAR_WIDTH: usize = 30;
const CHART_BAR_WIDTH: usize = 24;

/// Plain-language meaning of the features a user is most likely to ask about.
pub const FEATURE_DICTIONARY: &[(&str, &str)] = &[
    ("tenure", "How many months the customer has been subscribed."),
    ("MonthlyCharges", "Amount billed to the customer each month."),
    (
        "TotalCharges",
        "Total amount paid over the whole subscription so far.",
    ),
    ("Contract", "Type of subscription agreement (monthly or yearly)."),
    ("InternetService", "Kind of internet service the customer has."),
    ("PaymentMethod", "How the customer pays their bill."),
    (
        "OnlineSecurity, TechSupport, etc.",
        "Add-on services the customer has taken.",
    ),
];

/// Render the three-section terminal dashboard.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = write_dashboard(&mut out, report);
    out
}

fn write_dashboard(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "Customer Churn Prediction Dashboard")?;
    writeln!(
        out,
        "Predicts how likely a customer is to cancel their subscription from their profile and usage."
    )?;
    writeln!(out)?;

    writeln!(out, "== Prediction Result ==")?;
    write_outcome(out, &report.outcome, report.risk_threshold)?;
    writeln!(out)?;

    writeln!(out, "== Model Insight ({}) ==", report.model)?;
    writeln!(out, "Which features the model considers most important.")?;
    match &report.importance {
        Some(chart) => write_chart(out, chart)?,
        None => writeln!(
            out,
            "! This model does not support feature importance visualization."
        )?,
    }
    writeln!(out)?;

    writeln!(out, "== Feature Dictionary ==")?;
    for (feature, description) in FEATURE_DICTIONARY {
        writeln!(out, "  * {}: {}", feature, description)?;
    }
    Ok(())
}

fn write_outcome(out: &mut String, outcome: &Outcome, threshold: f64) -> std::fmt::Result {
    match outcome {
        Outcome::Pending => writeln!(
            out,
            "Fill in the customer form and submit it to see a prediction."
        ),
        Outcome::Failed { error } => writeln!(out, "! Prediction failed: {}", error),
        Outcome::Predicted { prediction, risk } => {
            if prediction.is_churn() {
                writeln!(out, "PREDICTION: CHURN")?;
                writeln!(
                    out,
                    "This customer is at high risk of cancelling their subscription."
                )?;
                writeln!(
                    out,
                    "Suggestion: offer an incentive or contact this customer soon."
                )?;
            } else {
                writeln!(out, "PREDICTION: NOT CHURN")?;
                writeln!(out, "This customer is expected to stay loyal.")?;
                writeln!(out, "Suggestion: maintain service quality.")?;
            }
            writeln!(out)?;

            let probability = prediction.probability;
            writeln!(out, "Churn probability: {:.2}%", probability * 100.0)?;
            let filled = ((probability * PROBABILITY_BAR_WIDTH as f64).round() as usize)
                .min(PROBABILITY_BAR_WIDTH);
            writeln!(
                out,
                "[{}{}]",
                "#".repeat(filled),
                "-".repeat(PROBABILITY_BAR_WIDTH - filled)
            )?;
            let caption = match risk {
                RiskLevel::High => "High risk",
                RiskLevel::Low => "Low risk",
            };
            writeln!(out, "{} (threshold {:.2})", caption, threshold)?;
            if !prediction.estimated {
                writeln!(out, "  (model has no probability estimator; showing its label)")?;
            }
            if !prediction.scaled {
                writeln!(out, "  (scaling failed; predicted on unscaled features)")?;
            }
            Ok(())
        }
    }
}

fn write_chart(out: &mut String, chart: &ImportanceChart) -> std::fmt::Result {
    let name_width = chart
        .scores
        .iter()
        .map(|s| s.feature.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.max_magnitude();

    for score in &chart.scores {
        let length = if max > 0.0 {
            ((score.score.abs() / max) * CHART_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = if score.score < 0.0 { "-" } else { "#" }.repeat(length);
        writeln!(
            out,
            "  {:<width$}  {:>+9.4}  {}",
            score.feature,
            score.score,
            bar,
            width = name_width
        )?;
    }

    let caption = match chart.kind {
        ImportanceKind::Importance => {
            "Features with the longest bars influence the model's decision the most."
        }
        ImportanceKind::Coefficient => {
            "Positive values raise the churn risk, negative values lower it."
        }
    };
    writeln!(out, "{}", caption)
}
