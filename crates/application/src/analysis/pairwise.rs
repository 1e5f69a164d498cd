//! All-pairs comparison between the comparison columns

use super::DescribedColumn;
use crate::hypothesis::HypothesisTest;
use llm_significance_domain::{AnalysisResult, PairwiseResult};
use tracing::{debug, warn};

/// Runs the configured test on every unordered pair of columns
pub struct PairwiseComparator<'t> {
    test: &'t dyn HypothesisTest,
    alpha: f64,
}

impl<'t> PairwiseComparator<'t> {
    pub fn new(test: &'t dyn HypothesisTest, alpha: f64) -> Self {
        Self { test, alpha }
    }

    /// Compare every pair `(i, j)` with `i < j`, ordered by `i` then `j`.
    ///
    /// Fewer than two columns yield an empty list. The first failing test
    /// aborts the whole comparison.
    pub fn compare(&self, columns: &[DescribedColumn<'_>]) -> AnalysisResult<Vec<PairwiseResult>> {
        let pair_count = columns.len() * columns.len().saturating_sub(1) / 2;
        let mut results = Vec::with_capacity(pair_count);

        for (i, first) in columns.iter().enumerate() {
            for second in &columns[i + 1..] {
                let outcome = self
                    .test
                    .test(first.values(), second.values())
                    .inspect_err(|e| {
                        warn!(
                            model1 = first.name(),
                            model2 = second.name(),
                            error = %e,
                            "Pair could not be tested"
                        )
                    })?;

                debug!(
                    model1 = first.name(),
                    model2 = second.name(),
                    p_value = outcome.p_value,
                    "pairwise comparison"
                );

                results.push(PairwiseResult {
                    model1: first.name().to_string(),
                    model2: second.name().to_string(),
                    mean1: first.mean(),
                    mean2: second.mean(),
                    mean_diff: first.mean() - second.mean(),
                    statistic: outcome.statistic,
                    p_value: outcome.p_value,
                    significant: outcome.p_value < self.alpha,
                    adjusted_p_value: None,
                });
            }
        }

        Ok(results)
    }
}
