//! Significance analyzer - runs the full analysis pipeline
//!
//! The analyzer validates the request, computes descriptive statistics for
//! the baseline and every comparison column, runs pairwise and baseline
//! comparisons with the selected test, applies the optional correction and
//! picks the best model. Any failure aborts the run; no partial report is
//! ever produced.

use super::{
    apply_baseline_correction, apply_pairwise_correction, describe, select_best_model,
    BaselineComparator, DescribedColumn, PairwiseComparator,
};
use crate::hypothesis::{
    HypothesisTest, MannWhitneyU, PairedTTest, WilcoxonSignedRank, DEFAULT_EXACT_THRESHOLD,
};
use llm_significance_domain::{
    AnalysisError, AnalysisReport, AnalysisRequest, AnalysisResult, CorrectionMethod,
    DataOverview, DescriptiveStats, TestType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Engine defaults, overridden per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Test used when the request does not name one
    pub test_type: TestType,
    /// Significance threshold used when the request does not set one
    pub alpha: f64,
    /// Multiple-comparison correction used when the request does not set one
    pub correction: CorrectionMethod,
    /// Whether the baseline competes for best model
    pub include_baseline_in_ranking: bool,
    /// Largest tie-free sample tested with the exact signed-rank distribution
    pub exact_threshold: usize,
    /// Continuity correction in the signed-rank normal approximation
    pub continuity_correction: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            test_type: TestType::default(),
            alpha: 0.05,
            correction: CorrectionMethod::None,
            include_baseline_in_ranking: true,
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            continuity_correction: false,
        }
    }
}

/// Parameters of one run after request overrides are applied
#[derive(Debug, Clone, Copy)]
struct RunParameters {
    test_type: TestType,
    alpha: f64,
    correction: CorrectionMethod,
    include_baseline_in_ranking: bool,
}

/// The main analysis engine
///
/// Holds no per-run state, so one instance can serve concurrent requests.
pub struct SignificanceAnalyzer {
    settings: AnalysisSettings,
    tests: HashMap<TestType, Arc<dyn HypothesisTest>>,
}

impl SignificanceAnalyzer {
    /// Create a new analyzer with the built-in tests registered
    pub fn new(settings: AnalysisSettings) -> Self {
        let mut analyzer = Self {
            settings,
            tests: HashMap::new(),
        };
        analyzer.register_default_tests();
        analyzer
    }

    fn register_default_tests(&mut self) {
        let exact_threshold = self.settings.exact_threshold;
        let continuity = self.settings.continuity_correction;

        self.register_test(Arc::new(WilcoxonSignedRank::new(exact_threshold, continuity)));
        self.register_test(Arc::new(PairedTTest));
        self.register_test(Arc::new(MannWhitneyU::default()));
    }

    /// Register a test, replacing any implementation of the same type
    pub fn register_test(&mut self, test: Arc<dyn HypothesisTest>) {
        self.tests.insert(test.test_type(), test);
    }

    /// Get the implementation registered for a test type
    pub fn get_test(&self, test_type: TestType) -> Option<Arc<dyn HypothesisTest>> {
        self.tests.get(&test_type).cloned()
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Run the full analysis for one request
    #[instrument(
        skip(self, request),
        fields(baseline = %request.baseline, columns = request.data_columns.len())
    )]
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisReport> {
        let params = self.resolve_parameters(request)?;
        let test = self
            .get_test(params.test_type)
            .ok_or_else(|| AnalysisError::UnsupportedTestType(params.test_type.to_string()))?;

        info!(
            test = test.name(),
            paired = params.test_type.is_paired(),
            alpha = params.alpha,
            "Starting significance analysis"
        );

        if !request.data.contains(&request.baseline) {
            return Err(AnalysisError::InvalidBaseline(request.baseline.clone()));
        }

        let comparison_names = comparison_columns(request);
        if comparison_names.is_empty() {
            return Err(AnalysisError::EmptyComparisonSet(format!(
                "no columns to compare against baseline '{}'",
                request.baseline
            )));
        }

        // baseline first, then comparison columns in request order
        let mut selected = Vec::with_capacity(comparison_names.len() + 1);
        selected.push(request.baseline.clone());
        selected.extend(comparison_names);

        let columns = request.data.aligned_columns(&selected)?;
        let stats = columns
            .iter()
            .map(describe)
            .collect::<AnalysisResult<Vec<DescriptiveStats>>>()?;

        let described: Vec<DescribedColumn<'_>> = columns
            .iter()
            .zip(&stats)
            .map(|(column, stats)| DescribedColumn::new(column, stats))
            .collect();
        let (baseline, comparisons) = (described[0], &described[1..]);

        let mut pairwise =
            PairwiseComparator::new(test.as_ref(), params.alpha).compare(comparisons)?;
        let mut against_baseline =
            BaselineComparator::new(test.as_ref(), params.alpha).compare(baseline, comparisons)?;

        apply_pairwise_correction(&mut pairwise, params.correction, params.alpha);
        apply_baseline_correction(&mut against_baseline, params.correction, params.alpha);

        let candidates = if params.include_baseline_in_ranking {
            &stats[..]
        } else {
            &stats[1..]
        };
        let best_model = select_best_model(candidates)?;

        let significant_pairs_count = pairwise.iter().filter(|r| r.significant).count();

        debug!(
            pairs = pairwise.len(),
            significant_pairs = significant_pairs_count,
            best_model = %best_model.name,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            data_overview: DataOverview {
                sample_count: columns[0].len(),
                model_count: columns.len(),
                test_type: params.test_type.as_str().to_string(),
                alpha: params.alpha,
                correction: params.correction,
            },
            basic_stats: stats,
            pairwise_comparison: pairwise,
            baseline_comparison: against_baseline,
            best_model,
            significant_pairs_count,
        })
    }

    fn resolve_parameters(&self, request: &AnalysisRequest) -> AnalysisResult<RunParameters> {
        let test_type = match request.test_type.as_deref() {
            Some(identifier) => identifier.parse::<TestType>()?,
            None => self.settings.test_type,
        };

        let alpha = request.alpha.unwrap_or(self.settings.alpha);
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(AnalysisError::InvalidInput(format!(
                "alpha must lie strictly between 0 and 1, got {}",
                alpha
            )));
        }

        Ok(RunParameters {
            test_type,
            alpha,
            correction: request.correction.unwrap_or(self.settings.correction),
            include_baseline_in_ranking: request
                .include_baseline_in_ranking
                .unwrap_or(self.settings.include_baseline_in_ranking),
        })
    }
}

impl Default for SignificanceAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisSettings::default())
    }
}

/// Requested comparison columns with duplicates and the baseline removed,
/// first occurrence kept
fn comparison_columns(request: &AnalysisRequest) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(request.data_columns.len());
    for name in &request.data_columns {
        if *name != request.baseline && !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}

/// Builder for SignificanceAnalyzer
pub struct SignificanceAnalyzerBuilder {
    settings: AnalysisSettings,
    custom_tests: Vec<Arc<dyn HypothesisTest>>,
}

impl SignificanceAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            settings: AnalysisSettings::default(),
            custom_tests: Vec::new(),
        }
    }

    pub fn settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn test_type(mut self, test_type: TestType) -> Self {
        self.settings.test_type = test_type;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.settings.alpha = alpha;
        self
    }

    pub fn correction(mut self, correction: CorrectionMethod) -> Self {
        self.settings.correction = correction;
        self
    }

    pub fn include_baseline_in_ranking(mut self, include: bool) -> Self {
        self.settings.include_baseline_in_ranking = include;
        self
    }

    pub fn exact_threshold(mut self, threshold: usize) -> Self {
        self.settings.exact_threshold = threshold;
        self
    }

    pub fn continuity_correction(mut self, enabled: bool) -> Self {
        self.settings.continuity_correction = enabled;
        self
    }

    pub fn test(mut self, test: Arc<dyn HypothesisTest>) -> Self {
        self.custom_tests.push(test);
        self
    }

    pub fn build(self) -> SignificanceAnalyzer {
        let mut analyzer = SignificanceAnalyzer::new(self.settings);

        // Custom tests replace the built-in ones
        for test in self.custom_tests {
            analyzer.register_test(test);
        }

        analyzer
    }
}

impl Default for SignificanceAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
