//! Per-model score samples.
//!
//! A [`SampleSet`] maps column names to row-aligned numeric samples: value `i`
//! of every column belongs to the same evaluated item, which is what makes the
//! paired tests meaningful.

use crate::errors::{AnalysisError, AnalysisResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named, ordered sequence of numeric samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as given in the table
    pub name: String,
    /// Samples in row order
    pub values: Vec<f64>,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of samples in the column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Table of columns keyed by name, preserving insertion order
///
/// Serialized as a plain JSON object: `{ "model_a": [0.1, 0.2], ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    columns: IndexMap<String, Vec<f64>>,
}

impl SampleSet {
    /// Create an empty sample set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a column
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.insert(name, values);
        self
    }

    /// Insert or replace a column, keeping its original position on replace
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.insert(name.into(), values);
    }

    /// Look up a column's samples
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Whether a column with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set holds no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Extract the named columns, enforcing the alignment invariant.
    ///
    /// Fails with [`AnalysisError::InvalidInput`] when a column is missing,
    /// empty, contains a non-finite value, or when the selected columns do not
    /// all share one length.
    pub fn aligned_columns(&self, names: &[String]) -> AnalysisResult<Vec<Column>> {
        let mut columns = Vec::with_capacity(names.len());
        let mut expected_len: Option<(usize, &str)> = None;

        for name in names {
            let values = self.get(name).ok_or_else(|| {
                AnalysisError::InvalidInput(format!("column '{}' not found", name))
            })?;

            if values.is_empty() {
                return Err(AnalysisError::InvalidInput(format!(
                    "column '{}' has no samples",
                    name
                )));
            }

            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::InvalidInput(format!(
                    "column '{}' has a non-finite value at row {}",
                    name, row
                )));
            }

            match expected_len {
                Some((len, first)) if len != values.len() => {
                    return Err(AnalysisError::InvalidInput(format!(
                        "columns are not row-aligned: '{}' has {} samples, '{}' has {}",
                        first,
                        len,
                        name,
                        values.len()
                    )));
                }
                None => expected_len = Some((values.len(), name.as_str())),
                _ => {}
            }

            columns.push(Column::new(name.clone(), values.to_vec()));
        }

        Ok(columns)
    }
}

impl FromIterator<(String, Vec<f64>)> for SampleSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
