//! Comparison of every column against the designated baseline

use super::DescribedColumn;
use crate::hypothesis::HypothesisTest;
use llm_significance_domain::{AnalysisError, AnalysisResult, BaselineResult};
use tracing::{debug, warn};

/// Tests each comparison column against the baseline column
pub struct BaselineComparator<'t> {
    test: &'t dyn HypothesisTest,
    alpha: f64,
}

impl<'t> BaselineComparator<'t> {
    pub fn new(test: &'t dyn HypothesisTest, alpha: f64) -> Self {
        Self { test, alpha }
    }

    /// Compare `columns` against `baseline`, in input order.
    ///
    /// A column named like the baseline is skipped. Fails with
    /// [`AnalysisError::EmptyComparisonSet`] if nothing remains.
    pub fn compare(
        &self,
        baseline: DescribedColumn<'_>,
        columns: &[DescribedColumn<'_>],
    ) -> AnalysisResult<Vec<BaselineResult>> {
        let candidates: Vec<&DescribedColumn<'_>> = columns
            .iter()
            .filter(|c| c.name() != baseline.name())
            .collect();

        if candidates.is_empty() {
            return Err(AnalysisError::EmptyComparisonSet(format!(
                "no columns to compare against baseline '{}'",
                baseline.name()
            )));
        }

        candidates
            .into_iter()
            .map(|column| {
                let outcome = self
                    .test
                    .test(column.values(), baseline.values())
                    .inspect_err(|e| {
                        warn!(
                            model = column.name(),
                            baseline = baseline.name(),
                            error = %e,
                            "Comparison against baseline could not be tested"
                        )
                    })?;
                let mean_diff = column.mean() - baseline.mean();
                let significant = outcome.p_value < self.alpha;

                debug!(
                    model = column.name(),
                    baseline = baseline.name(),
                    p_value = outcome.p_value,
                    "baseline comparison"
                );

                Ok(BaselineResult {
                    model: column.name().to_string(),
                    model_mean: column.mean(),
                    baseline_mean: baseline.mean(),
                    mean_diff,
                    statistic: outcome.statistic,
                    p_value: outcome.p_value,
                    significant,
                    better_than_baseline: significant && mean_diff > 0.0,
                    adjusted_p_value: None,
                })
            })
            .collect()
    }
}
