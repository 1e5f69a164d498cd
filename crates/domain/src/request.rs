//! Analysis request: the table plus the run parameters.

use crate::sample::SampleSet;
use crate::test_type::CorrectionMethod;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One analysis invocation's complete input
///
/// Optional parameters fall back to the engine's configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Column name to numeric samples, all selected columns row-aligned
    pub data: SampleSet,

    /// Reference column every comparison column is tested against
    #[validate(length(min = 1, message = "baseline column is required"))]
    pub baseline: String,

    /// Columns to compare, in the order results should be reported
    #[serde(default)]
    pub data_columns: Vec<String>,

    /// Test identifier (`wilcoxon`, `ttest`, `mannwhitney`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,

    /// Significance threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1.0, message = "alpha must lie between 0 and 1"))]
    pub alpha: Option<f64>,

    /// Multiple-comparison correction, opt-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction: Option<CorrectionMethod>,

    /// Whether the baseline competes for best model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_baseline_in_ranking: Option<bool>,
}

impl AnalysisRequest {
    /// Create a request with engine defaults for every optional parameter
    pub fn new(data: SampleSet, baseline: impl Into<String>, data_columns: Vec<String>) -> Self {
        Self {
            data,
            baseline: baseline.into(),
            data_columns,
            test_type: None,
            alpha: None,
            correction: None,
            include_baseline_in_ranking: None,
        }
    }
}
