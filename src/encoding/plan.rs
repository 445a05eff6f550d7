use std::collections::HashMap;

use super::vector::FeatureVector;
use crate::form::{CustomerRecord, FieldKind, FORM_FIELDS};
use crate::observability::messages::encoding::{EncodingPlanResolved, UnmappedChoice};
use crate::observability::messages::StructuredLog;

/// Column a numeric field writes to.
#[derive(Debug, Clone)]
struct NumericSlot {
    key: &'static str,
    index: Option<usize>,
}

/// One categorical field and the column each of its choices activates.
#[derive(Debug, Clone)]
struct ChoiceGroup {
    key: &'static str,
    prefix: &'static str,
    slots: Vec<(&'static str, Option<usize>)>,
}

/// Form fields resolved against a model's column list.
///
/// Built once per artifact. Numeric fields map to the same-named column;
/// every (field, choice) pair maps to `{prefix}_{choice}` or, failing that,
/// `{prefix}{choice}`. A choice with neither column maps to nothing and
/// selecting it leaves the group's columns at zero.
#[derive(Debug, Clone)]
pub struct EncodingPlan<'a> {
    columns: &'a [String],
    column_index: HashMap<&'a str, usize>,
    numeric: Vec<NumericSlot>,
    groups: Vec<ChoiceGroup>,
}

impl<'a> EncodingPlan<'a> {
    pub fn new(columns: &'a [String]) -> Self {
        let mut column_index = HashMap::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            column_index.entry(column.as_str()).or_insert(index);
        }

        let mut numeric = Vec::new();
        let mut groups = Vec::new();
        for spec in FORM_FIELDS {
            match spec.kind {
                FieldKind::Choice { prefix, choices } => {
                    let slots = choices
                        .iter()
                        .map(|choice| (*choice, probe(&column_index, prefix, choice)))
                        .collect();
                    groups.push(ChoiceGroup {
                        key: spec.key,
                        prefix,
                        slots,
                    });
                }
                kind => {
                    if let Some(column) = kind.numeric_column() {
                        numeric.push(NumericSlot {
                            key: spec.key,
                            index: column_index.get(column).copied(),
                        });
                    }
                }
            }
        }

        let plan = Self {
            columns,
            column_index,
            numeric,
            groups,
        };
        plan.log_resolution();
        plan
    }

    fn log_resolution(&self) {
        let mut choices_mapped = 0;
        let mut choices_unmapped = 0;
        for group in &self.groups {
            for (value, index) in &group.slots {
                if index.is_some() {
                    choices_mapped += 1;
                } else {
                    choices_unmapped += 1;
                    UnmappedChoice {
                        field: group.key,
                        prefix: group.prefix,
                        value,
                    }
                    .log();
                }
            }
        }

        EncodingPlanResolved {
            column_count: self.columns.len(),
            numeric_mapped: self.numeric.iter().filter(|n| n.index.is_some()).count(),
            choices_mapped,
            choices_unmapped,
        }
        .log();
    }

    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    /// Column index a choice of the given field activates, if any.
    ///
    /// Choices outside the field's list are looked up directly with the same
    /// two-step naming rule.
    pub fn resolve(&self, key: &str, value: &str) -> Option<usize> {
        let group = self.groups.iter().find(|g| g.key == key)?;
        match group.slots.iter().find(|(choice, _)| *choice == value) {
            Some((_, index)) => *index,
            None => probe(&self.column_index, group.prefix, value),
        }
    }

    /// Choices of the form that have no column in this model.
    pub fn unmapped_choices(&self) -> Vec<(&'static str, &'static str)> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.slots
                    .iter()
                    .filter(|(_, index)| index.is_none())
                    .map(move |(value, _)| (g.key, *value))
            })
            .collect()
    }

    /// Encode a record into a vector over this plan's columns.
    ///
    /// Never fails: fields without a column are skipped.
    pub fn encode(&self, record: &CustomerRecord) -> FeatureVector<'a> {
        let mut vector = FeatureVector::zeros(self.columns);

        for slot in &self.numeric {
            if let (Some(index), Some(value)) = (slot.index, record.numeric(slot.key)) {
                vector.set(index, value);
            }
        }

        for group in &self.groups {
            let Some(value) = record.choice(group.key) else {
                continue;
            };
            if let Some(index) = self.resolve(group.key, value) {
                vector.set(index, 1.0);
            }
        }

        vector
    }
}

fn probe(column_index: &HashMap<&str, usize>, prefix: &str, value: &str) -> Option<usize> {
    column_index
        .get(format!("{}_{}", prefix, value).as_str())
        .or_else(|| column_index.get(format!("{}{}", prefix, value).as_str()))
        .copied()
}
