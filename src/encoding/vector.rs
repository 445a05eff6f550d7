/// One encoded customer: a value per model column, in the model's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<'a> {
    columns: &'a [String],
    values: Vec<f64>,
}

impl<'a> FeatureVector<'a> {
    /// An all-zero vector over `columns`.
    pub fn zeros(columns: &'a [String]) -> Self {
        Self {
            columns,
            values: vec![0.0; columns.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Value of the named column, if the model has such a column.
    pub fn value(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| self.values[index])
    }

    /// Columns holding a non-zero value, in column order.
    pub fn non_zero(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.columns
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| **value != 0.0)
            .map(|(column, value)| (column.as_str(), *value))
    }
}
