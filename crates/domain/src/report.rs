//! Analysis result types and the report wire schema.
//!
//! All of these are created fresh by one analysis run and never mutated
//! afterwards. Field names follow the JSON contract consumed by the report
//! renderer: camelCase at the report level, snake_case inside comparison rows.

use crate::test_type::CorrectionMethod;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of one column
///
/// `std` is the sample standard deviation (divisor N-1), defined as 0 for a
/// single sample. Quantiles use linear interpolation between order statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Column the statistics describe
    pub column: String,
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    /// 50th percentile
    pub median: f64,
    /// 25th percentile
    pub q25: f64,
    /// 75th percentile
    pub q75: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

/// Outcome of testing one unordered pair of comparison columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseResult {
    /// Earlier column in the comparison list
    pub model1: String,
    /// Later column in the comparison list
    pub model2: String,
    /// Mean of `model1`
    pub mean1: f64,
    /// Mean of `model2`
    pub mean2: f64,
    /// `mean1 - mean2`
    pub mean_diff: f64,
    /// Test statistic
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Whether the (adjusted) p-value is below alpha
    pub significant: bool,
    /// Present only when a multiple-comparison correction is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_p_value: Option<f64>,
}

/// Outcome of testing one comparison column against the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineResult {
    /// Comparison column
    pub model: String,
    /// Mean of the comparison column
    pub model_mean: f64,
    /// Mean of the baseline column
    pub baseline_mean: f64,
    /// `model_mean - baseline_mean`
    pub mean_diff: f64,
    /// Test statistic
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Whether the (adjusted) p-value is below alpha
    pub significant: bool,
    /// `significant && mean_diff > 0`
    pub better_than_baseline: bool,
    /// Present only when a multiple-comparison correction is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_p_value: Option<f64>,
}

/// The column with the highest mean score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestModel {
    /// Winning column
    pub name: String,
    /// Its mean score
    pub mean_score: f64,
}

/// Run parameters echoed back with the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataOverview {
    /// Rows per column
    pub sample_count: usize,
    /// Columns analysed, baseline included
    pub model_count: usize,
    /// Wire identifier of the test used
    pub test_type: String,
    /// Significance threshold used
    pub alpha: f64,
    /// Correction applied, omitted when none
    #[serde(default, skip_serializing_if = "is_uncorrected")]
    pub correction: CorrectionMethod,
}

fn is_uncorrected(method: &CorrectionMethod) -> bool {
    *method == CorrectionMethod::None
}

/// Complete result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Run parameters
    pub data_overview: DataOverview,
    /// Baseline first, then comparison columns in request order
    pub basic_stats: Vec<DescriptiveStats>,
    /// One row per unordered pair of comparison columns
    pub pairwise_comparison: Vec<PairwiseResult>,
    /// One row per comparison column
    pub baseline_comparison: Vec<BaselineResult>,
    /// Highest-mean column
    pub best_model: BestModel,
    /// Count of significant pairwise rows
    pub significant_pairs_count: usize,
}

impl AnalysisReport {
    /// Pairwise results flagged significant, in report order
    pub fn significant_pairs(&self) -> impl Iterator<Item = &PairwiseResult> {
        self.pairwise_comparison.iter().filter(|r| r.significant)
    }

    /// Number of comparison models that significantly beat the baseline
    pub fn models_beating_baseline(&self) -> usize {
        self.baseline_comparison
            .iter()
            .filter(|r| r.better_than_baseline)
            .count()
    }

    /// Descriptive statistics for a column, if it took part in the run
    pub fn stats_for(&self, column: &str) -> Option<&DescriptiveStats> {
        self.basic_stats.iter().find(|s| s.column == column)
    }
}
