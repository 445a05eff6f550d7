//! The fixed set of customer fields the dashboard asks for.
//!
//! Order matters: the interactive form prompts in this order, grouped by
//! section. Choice fields name the column prefix their one-hot group was
//! trained under; numeric fields name the column they land in directly.

/// Headings the form groups its fields under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Demographics,
    Services,
    SecuritySupport,
    AccountBilling,
}

impl FormSection {
    pub fn title(&self) -> &'static str {
        match self {
            FormSection::Demographics => "Demographic profile",
            FormSection::Services => "Subscribed services",
            FormSection::SecuritySupport => "Security & support",
            FormSection::AccountBilling => "Account & billing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// One value out of `choices`, one-hot encoded under `prefix`.
    Choice {
        prefix: &'static str,
        choices: &'static [&'static str],
    },
    /// A 0/1 flag shown as No/Yes and stored as a number in `column`.
    Flag { column: &'static str },
    /// A whole number within `min..=max`.
    Integer {
        column: &'static str,
        min: u32,
        max: u32,
    },
    /// A non-negative amount of money.
    Amount { column: &'static str },
}

impl FieldKind {
    /// The column a numeric field is written to, if the field is numeric.
    pub fn numeric_column(&self) -> Option<&'static str> {
        match self {
            FieldKind::Choice { .. } => None,
            FieldKind::Flag { column }
            | FieldKind::Integer { column, .. }
            | FieldKind::Amount { column } => Some(*column),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub section: FormSection,
    pub kind: FieldKind,
}

const YES_NO: &[&str] = &["No", "Yes"];
const PHONE_ADDON: &[&str] = &["No", "Yes", "No phone service"];
const INTERNET_ADDON: &[&str] = &["No", "Yes", "No internet service"];

/// Upper bound of the tenure input, in months.
pub const MAX_TENURE_MONTHS: u32 = 100;

pub const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "gender",
        label: "Gender",
        section: FormSection::Demographics,
        kind: FieldKind::Choice {
            prefix: "gender",
            choices: &["Female", "Male"],
        },
    },
    FieldSpec {
        key: "senior_citizen",
        label: "Senior Citizen?",
        section: FormSection::Demographics,
        kind: FieldKind::Flag {
            column: "SeniorCitizen",
        },
    },
    FieldSpec {
        key: "partner",
        label: "Partner?",
        section: FormSection::Demographics,
        kind: FieldKind::Choice {
            prefix: "Partner",
            choices: YES_NO,
        },
    },
    FieldSpec {
        key: "dependents",
        label: "Dependents?",
        section: FormSection::Demographics,
        kind: FieldKind::Choice {
            prefix: "Dependents",
            choices: YES_NO,
        },
    },
    FieldSpec {
        key: "tenure",
        label: "Tenure (months)",
        section: FormSection::Services,
        kind: FieldKind::Integer {
            column: "tenure",
            min: 0,
            max: MAX_TENURE_MONTHS,
        },
    },
    FieldSpec {
        key: "phone_service",
        label: "Phone Service?",
        section: FormSection::Services,
        kind: FieldKind::Choice {
            prefix: "PhoneService",
            choices: YES_NO,
        },
    },
    FieldSpec {
        key: "multiple_lines",
        label: "Multiple Lines?",
        section: FormSection::Services,
        kind: FieldKind::Choice {
            prefix: "MultipleLines",
            choices: PHONE_ADDON,
        },
    },
    FieldSpec {
        key: "internet_service",
        label: "Internet Service?",
        section: FormSection::Services,
        kind: FieldKind::Choice {
            prefix: "InternetService",
            choices: &["DSL", "Fiber optic", "No"],
        },
    },
    FieldSpec {
        key: "online_security",
        label: "Online Security?",
        section: FormSection::SecuritySupport,
        kind: FieldKind::Choice {
            prefix: "OnlineSecurity",
            choices: INTERNET_ADDON,
        },
    },
    FieldSpec {
        key: "online_backup",
        label: "Online Backup?",
        section: FormSection::SecuritySupport,
        kind: FieldKind::Choice {
            prefix: "OnlineBackup",
            choices: INTERNET_ADDON,
        },
    },
    FieldSpec {
        key: "device_protection",
        label: "Device Protection?",
        section: FormSection::SecuritySupport,
        kind: FieldKind::Choice {
            prefix: "DeviceProtection",
            choices: INTERNET_ADDON,
        },
    },
    FieldSpec {
        key: "tech_support",
        label: "Tech Support?",
        section: FormSection::SecuritySupport,
        kind: FieldKind::Choice {
            prefix: "TechSupport",
            choices: INTERNET_ADDON,
        },
    },
    FieldSpec {
        key: "streaming_tv",
        label: "Streaming TV?",
        section: FormSection::SecuritySupport,
        kind: FieldKind::Choice {
            prefix: "StreamingTV",
            choices: INTERNET_ADDON,
        },
    },
    FieldSpec {
        key: "streaming_movies",
        label: "Streaming Movies?",
        section: FormSection::SecuritySupport,
        kind: FieldKind::Choice {
            prefix: "StreamingMovies",
            choices: INTERNET_ADDON,
        },
    },
    FieldSpec {
        key: "contract",
        label: "Contract",
        section: FormSection::AccountBilling,
        kind: FieldKind::Choice {
            prefix: "Contract",
            choices: &["Month-to-month", "One year", "Two year"],
        },
    },
    FieldSpec {
        key: "paperless_billing",
        label: "Paperless Billing?",
        section: FormSection::AccountBilling,
        kind: FieldKind::Choice {
            prefix: "PaperlessBilling",
            choices: YES_NO,
        },
    },
    FieldSpec {
        key: "payment_method",
        label: "Payment Method",
        section: FormSection::AccountBilling,
        kind: FieldKind::Choice {
            prefix: "PaymentMethod",
            choices: &[
                "Electronic check",
                "Mailed check",
                "Bank transfer (automatic)",
                "Credit card (automatic)",
            ],
        },
    },
    FieldSpec {
        key: "monthly_charges",
        label: "Monthly Charges",
        section: FormSection::AccountBilling,
        kind: FieldKind::Amount {
            column: "MonthlyCharges",
        },
    },
    FieldSpec {
        key: "total_charges",
        label: "Total Charges",
        section: FormSection::AccountBilling,
        kind: FieldKind::Amount {
            column: "TotalCharges",
        },
    },
];

/// Look up a field by its key.
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FORM_FIELDS.iter().find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_and_prefixes_are_unique() {
        let keys: HashSet<_> = FORM_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), FORM_FIELDS.len());

        let prefixes: Vec<_> = FORM_FIELDS
            .iter()
            .filter_map(|f| match f.kind {
                FieldKind::Choice { prefix, .. } => Some(prefix),
                _ => None,
            })
            .collect();
        let unique: HashSet<_> = prefixes.iter().collect();
        assert_eq!(unique.len(), prefixes.len());
        assert_eq!(prefixes.len(), 15);
    }

    #[test]
    fn test_numeric_columns() {
        let columns: Vec<_> = FORM_FIELDS
            .iter()
            .filter_map(|f| f.kind.numeric_column())
            .collect();
        assert_eq!(
            columns,
            vec!["SeniorCitizen", "tenure", "MonthlyCharges", "TotalCharges"]
        );
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(field("contract").map(|f| f.label), Some("Contract"));
        assert!(field("favourite_colour").is_none());
    }
}
