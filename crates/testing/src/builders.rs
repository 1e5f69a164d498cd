//! Fluent builder for constructing analysis requests.

use crate::fixtures::{create_reference_table, BASELINE, MODEL_A, MODEL_B};
use llm_significance_domain::{AnalysisRequest, CorrectionMethod, SampleSet};

/// Builder for creating AnalysisRequest test instances
///
/// Defaults to the reference table with `model_a` and `model_b` compared
/// against `baseline`, every optional parameter left unset.
#[derive(Clone)]
pub struct AnalysisRequestBuilder {
    data: SampleSet,
    baseline: String,
    data_columns: Vec<String>,
    test_type: Option<String>,
    alpha: Option<f64>,
    correction: Option<CorrectionMethod>,
    include_baseline_in_ranking: Option<bool>,
}

impl AnalysisRequestBuilder {
    pub fn new() -> Self {
        Self {
            data: create_reference_table(),
            baseline: BASELINE.to_string(),
            data_columns: vec![MODEL_A.to_string(), MODEL_B.to_string()],
            test_type: None,
            alpha: None,
            correction: None,
            include_baseline_in_ranking: None,
        }
    }

    pub fn with_data(mut self, data: SampleSet) -> Self {
        self.data = data;
        self
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.data.insert(name, values);
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.data_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_test_type(mut self, test_type: impl Into<String>) -> Self {
        self.test_type = Some(test_type.into());
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_correction(mut self, correction: CorrectionMethod) -> Self {
        self.correction = Some(correction);
        self
    }

    pub fn excluding_baseline_from_ranking(mut self) -> Self {
        self.include_baseline_in_ranking = Some(false);
        self
    }

    pub fn build(self) -> AnalysisRequest {
        AnalysisRequest {
            data: self.data,
            baseline: self.baseline,
            data_columns: self.data_columns,
            test_type: self.test_type,
            alpha: self.alpha,
            correction: self.correction,
            include_baseline_in_ranking: self.include_baseline_in_ranking,
        }
    }

    /// Request body as sent to `POST /api/analyze`
    pub fn build_json(self) -> serde_json::Value {
        serde_json::to_value(self.build()).unwrap_or_default()
    }
}

impl Default for AnalysisRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
