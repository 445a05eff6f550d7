// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::schema::{FieldKind, FieldSpec, FORM_FIELDS};
use crate::errors::FormError;

/// One customer as entered on the form.
///
/// Choice fields hold the selected value verbatim so the encoder sees exactly
/// what the user picked. Record files may use either the snake_case keys or
/// the column names the model was trained on (`MonthlyCharges`, `Contract`).
///
/// # Example
/// ```yaml
/// gender: Female
/// tenure: 12
/// Contract: Month-to-month
/// MonthlyCharges: 50.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomerRecord {
    pub gender: String,
    #[serde(alias = "SeniorCitizen")]
    pub senior_citizen: u8,
    #[serde(alias = "Partner")]
    pub partner: String,
    #[serde(alias = "Dependents")]
    pub dependents: String,
    pub tenure: u32,
    #[serde(alias = "PhoneService")]
    pub phone_service: String,
    #[serde(alias = "MultipleLines")]
    pub multiple_lines: String,
    #[serde(alias = "InternetService")]
    pub internet_service: String,
    #[serde(alias = "OnlineSecurity")]
    pub online_security: String,
    #[serde(alias = "OnlineBackup")]
    pub online_backup: String,
    #[serde(alias = "DeviceProtection")]
    pub device_protection: String,
    #[serde(alias = "TechSupport")]
    pub tech_support: String,
    #[serde(alias = "StreamingTV")]
    pub streaming_tv: String,
    #[serde(alias = "StreamingMovies")]
    pub streaming_movies: String,
    #[serde(alias = "Contract")]
    pub contract: String,
    #[serde(alias = "PaperlessBilling")]
    pub paperless_billing: String,
    #[serde(alias = "PaymentMethod")]
    pub payment_method: String,
    #[serde(alias = "MonthlyCharges")]
    pub monthly_charges: f64,
    /// `None` means "not entered": monthly charges times tenure is used instead.
    #[serde(alias = "TotalCharges", skip_serializing_if = "Option::is_none")]
    pub total_charges: Option<f64>,
}

impl Default for CustomerRecord {
    fn default() -> Self {
        let mut record = Self {
            gender: String::new(),
            senior_citizen: 0,
            partner: String::new(),
            dependents: String::new(),
            tenure: 12,
            phone_service: String::new(),
            multiple_lines: String::new(),
            internet_service: String::new(),
            online_security: String::new(),
            online_backup: String::new(),
            device_protection: String::new(),
            tech_support: String::new(),
            streaming_tv: String::new(),
            streaming_movies: String::new(),
            contract: String::new(),
            paperless_billing: String::new(),
            payment_method: String::new(),
            monthly_charges: 50.0,
            total_charges: None,
        };

        // Every choice starts on the first option, like an untouched select box.
        for spec in FORM_FIELDS {
            if let FieldKind::Choice { choices, .. } = spec.kind {
                if let Some(slot) = record.choice_mut(spec.key) {
                    *slot = choices[0].to_string();
                }
            }
        }
        record
    }
}

impl CustomerRecord {
    /// Read a record from a YAML or JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FormError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let record: CustomerRecord = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| FormError::Parse(e.to_string()))?
            }
            _ => serde_yaml::from_str(&content).map_err(|e| FormError::Parse(e.to_string()))?,
        };
        record.validate()?;
        Ok(record)
    }

    /// The selected value of a choice field.
    pub fn choice(&self, key: &str) -> Option<&str> {
        let value = match key {
            "gender" => &self.gender,
            "partner" => &self.partner,
            "dependents" => &self.dependents,
            "phone_service" => &self.phone_service,
            "multiple_lines" => &self.multiple_lines,
            "internet_service" => &self.internet_service,
            "online_security" => &self.online_security,
            "online_backup" => &self.online_backup,
            "device_protection" => &self.device_protection,
            "tech_support" => &self.tech_support,
            "streaming_tv" => &self.streaming_tv,
            "streaming_movies" => &self.streaming_movies,
            "contract" => &self.contract,
            "paperless_billing" => &self.paperless_billing,
            "payment_method" => &self.payment_method,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn choice_mut(&mut self, key: &str) -> Option<&mut String> {
        let value = match key {
            "gender" => &mut self.gender,
            "partner" => &mut self.partner,
            "dependents" => &mut self.dependents,
            "phone_service" => &mut self.phone_service,
            "multiple_lines" => &mut self.multiple_lines,
            "internet_service" => &mut self.internet_service,
            "online_security" => &mut self.online_security,
            "online_backup" => &mut self.online_backup,
            "device_protection" => &mut self.device_protection,
            "tech_support" => &mut self.tech_support,
            "streaming_tv" => &mut self.streaming_tv,
            "streaming_movies" => &mut self.streaming_movies,
            "contract" => &mut self.contract,
            "paperless_billing" => &mut self.paperless_billing,
            "payment_method" => &mut self.payment_method,
            _ => return None,
        };
        Some(value)
    }

    /// The value of a numeric field as the model sees it.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        match key {
            "senior_citizen" => Some(f64::from(self.senior_citizen)),
            "tenure" => Some(f64::from(self.tenure)),
            "monthly_charges" => Some(self.monthly_charges),
            "total_charges" => Some(self.effective_total_charges()),
            _ => None,
        }
    }

    /// Total charges as entered, or estimated from monthly charges and tenure.
    pub fn effective_total_charges(&self) -> f64 {
        self.total_charges
            .unwrap_or(self.monthly_charges * f64::from(self.tenure))
    }

    /// The current value of a field, formatted the way the form shows it.
    pub fn display_value(&self, spec: &FieldSpec) -> String {
        match spec.kind {
            FieldKind::Choice { .. } => self.choice(spec.key).unwrap_or_default().to_string(),
            FieldKind::Flag { .. } => {
                let shown = if self.senior_citizen == 1 { "Yes" } else { "No" };
                shown.to_string()
            }
            FieldKind::Integer { .. } => self.tenure.to_string(),
            FieldKind::Amount { .. } => {
                format!("{:.2}", self.numeric(spec.key).unwrap_or_default())
            }
        }
    }

    /// Apply one textual answer to a field.
    ///
    /// Choices accept the value in any letter case or its 1-based position in
    /// the list; flags accept yes/no or 1/0.
    pub fn set(&mut self, spec: &FieldSpec, answer: &str) -> Result<(), FormError> {
        let answer = answer.trim();
        match spec.kind {
            FieldKind::Choice { choices, .. } => {
                let selected = choices
                    .iter()
                    .find(|choice| choice.eq_ignore_ascii_case(answer))
                    .or_else(|| {
                        answer
                            .parse::<usize>()
                            .ok()
                            .and_then(|n| n.checked_sub(1))
                            .and_then(|i| choices.get(i))
                    })
                    .ok_or_else(|| FormError::InvalidChoice {
                        field: spec.label,
                        value: answer.to_string(),
                        allowed: choices,
                    })?;
                if let Some(slot) = self.choice_mut(spec.key) {
                    *slot = selected.to_string();
                }
            }
            FieldKind::Flag { .. } => {
                self.senior_citizen = match answer.to_ascii_lowercase().as_str() {
                    "1" | "y" | "yes" => 1,
                    "0" | "n" | "no" => 0,
                    _ => {
                        return Err(FormError::InvalidChoice {
                            field: spec.label,
                            value: answer.to_string(),
                            allowed: &["No", "Yes"],
                        })
                    }
                };
            }
            FieldKind::Integer { min, max, .. } => {
                let value: u32 = answer.parse().map_err(|_| FormError::NotANumber {
                    field: spec.label,
                    input: answer.to_string(),
                })?;
                if !(min..=max).contains(&value) {
                    return Err(FormError::OutOfRange {
                        field: spec.label,
                        value: f64::from(value),
                        min: f64::from(min),
                        max: f64::from(max),
                    });
                }
                self.tenure = value;
            }
            FieldKind::Amount { .. } => {
                let value: f64 = answer.parse().map_err(|_| FormError::NotANumber {
                    field: spec.label,
                    input: answer.to_string(),
                })?;
                check_amount(spec, value)?;
                match spec.key {
                    "monthly_charges" => self.monthly_charges = value,
                    _ => self.total_charges = Some(value),
                }
            }
        }
        Ok(())
    }

    /// Check every field against its domain or range.
    pub fn validate(&self) -> Result<(), FormError> {
        for spec in FORM_FIELDS {
            match spec.kind {
                FieldKind::Choice { choices, .. } => {
                    let value = self.choice(spec.key).unwrap_or_default();
                    if !choices.contains(&value) {
                        return Err(FormError::InvalidChoice {
                            field: spec.label,
                            value: value.to_string(),
                            allowed: choices,
                        });
                    }
                }
                FieldKind::Flag { .. } => {
                    if self.senior_citizen > 1 {
                        return Err(FormError::OutOfRange {
                            field: spec.label,
                            value: f64::from(self.senior_citizen),
                            min: 0.0,
                            max: 1.0,
                        });
                    }
                }
                FieldKind::Integer { min, max, .. } => {
                    if !(min..=max).contains(&self.tenure) {
                        return Err(FormError::OutOfRange {
                            field: spec.label,
                            value: f64::from(self.tenure),
                            min: f64::from(min),
                            max: f64::from(max),
                        });
                    }
                }
                FieldKind::Amount { .. } => {
                    let value = match spec.key {
                        "monthly_charges" => Some(self.monthly_charges),
                        _ => self.total_charges,
                    };
                    if let Some(value) = value {
                        check_amount(spec, value)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_amount(spec: &FieldSpec, value: f64) -> Result<(), FormError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FormError::InvalidAmount {
            field: spec.label,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::field;
    use std::io::Write;

    fn spec(key: &str) -> &'static FieldSpec {
        field(key).unwrap()
    }

    #[test]
    fn test_defaults_match_untouched_form() {
        let record = CustomerRecord::default();
        assert_eq!(record.gender, "Female");
        assert_eq!(record.partner, "No");
        assert_eq!(record.internet_service, "DSL");
        assert_eq!(record.contract, "Month-to-month");
        assert_eq!(record.payment_method, "Electronic check");
        assert_eq!(record.tenure, 12);
        assert_eq!(record.monthly_charges, 50.0);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_total_charges_estimated_when_missing() {
        let mut record = CustomerRecord::default();
        assert_eq!(record.effective_total_charges(), 600.0);

        record.total_charges = Some(123.5);
        assert_eq!(record.numeric("total_charges"), Some(123.5));
    }

    #[test]
    fn test_set_choice_by_name_and_position() {
        let mut record = CustomerRecord::default();

        record.set(spec("contract"), "two year").unwrap();
        assert_eq!(record.contract, "Two year");

        record.set(spec("internet_service"), "2").unwrap();
        assert_eq!(record.internet_service, "Fiber optic");

        let err = record.set(spec("contract"), "weekly").unwrap_err();
        assert!(err.to_string().contains("Month-to-month, One year, Two year"));

        assert!(record.set(spec("contract"), "0").is_err());
        assert!(record.set(spec("contract"), "4").is_err());
    }

    #[test]
    fn test_set_numbers() {
        let mut record = CustomerRecord::default();

        record.set(spec("senior_citizen"), "yes").unwrap();
        assert_eq!(record.senior_citizen, 1);

        record.set(spec("tenure"), "24").unwrap();
        assert_eq!(record.tenure, 24);
        assert!(matches!(
            record.set(spec("tenure"), "101"),
            Err(FormError::OutOfRange { .. })
        ));
        assert!(matches!(
            record.set(spec("tenure"), "two"),
            Err(FormError::NotANumber { .. })
        ));

        record.set(spec("monthly_charges"), "70.25").unwrap();
        assert_eq!(record.monthly_charges, 70.25);
        assert!(matches!(
            record.set(spec("total_charges"), "-1"),
            Err(FormError::InvalidAmount { field: "Total Charges", .. })
        ));
        assert!(record.set(spec("total_charges"), "NaN").is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_choice() {
        let record = CustomerRecord {
            gender: "Other".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            record.validate(),
            Err(FormError::InvalidChoice { field: "Gender", .. })
        ));
    }

    #[test]
    fn test_record_file_accepts_column_names() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "gender: Male\nSeniorCitizen: 1\ntenure: 3\nContract: One year\nMonthlyCharges: 80.5"
        )
        .unwrap();

        let record = CustomerRecord::from_file(file.path()).unwrap();
        assert_eq!(record.gender, "Male");
        assert_eq!(record.senior_citizen, 1);
        assert_eq!(record.contract, "One year");
        assert_eq!(record.monthly_charges, 80.5);
        assert_eq!(record.effective_total_charges(), 241.5);
        // Untouched fields keep their defaults.
        assert_eq!(record.payment_method, "Electronic check");
    }

    #[test]
    fn test_record_file_json_and_unknown_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"gender": "Female", "shoe_size": 42}}"#).unwrap();

        let err = CustomerRecord::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FormError::Parse(_)));
    }

    #[test]
    fn test_record_file_invalid_choice() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "contract: Lifetime").unwrap();

        let err = CustomerRecord::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FormError::InvalidChoice { field: "Contract", .. }));
    }

    #[test]
    fn test_display_value() {
        let record = CustomerRecord::default();
        assert_eq!(record.display_value(spec("senior_citizen")), "No");
        assert_eq!(record.display_value(spec("total_charges")), "600.00");
        assert_eq!(record.display_value(spec("contract")), "Month-to-month");
    }
}
