//! Wilcoxon signed-rank test

use super::{ensure_paired, rank_with_ties, two_sided_normal_p, HypothesisTest, TestOutcome};
use llm_significance_domain::{AnalysisError, AnalysisResult, TestType};
use tracing::trace;

/// Largest effective sample size tested with the exact null distribution
pub const DEFAULT_EXACT_THRESHOLD: usize = 25;

/// Paired, two-sided Wilcoxon signed-rank test
///
/// Exactly-zero differences are discarded, the remaining absolute differences
/// are ranked with mid-ranks for ties and the statistic is `min(W+, W-)`. Small
/// tie-free samples use the exact null distribution; everything else uses the
/// normal approximation with tie-corrected variance.
#[derive(Debug, Clone)]
pub struct WilcoxonSignedRank {
    /// Exact distribution is used when the effective sample size is at most this
    pub exact_threshold: usize,
    /// Shift `|W - mean|` towards zero by 0.5 in the normal approximation
    pub continuity_correction: bool,
}

impl WilcoxonSignedRank {
    pub fn new(exact_threshold: usize, continuity_correction: bool) -> Self {
        Self {
            exact_threshold,
            continuity_correction,
        }
    }

    fn normal_p(&self, n: usize, statistic: f64, tie_term: f64) -> AnalysisResult<f64> {
        let n = n as f64;
        let mean = n * (n + 1.0) / 4.0;
        let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_term / 48.0;
        if variance <= 0.0 {
            return Err(AnalysisError::UndefinedTest(
                "signed-rank statistic has zero variance".to_string(),
            ));
        }

        let mut deviation = (statistic - mean).abs();
        if self.continuity_correction {
            deviation = (deviation - 0.5).max(0.0);
        }
        two_sided_normal_p(deviation / variance.sqrt())
    }
}

impl Default for WilcoxonSignedRank {
    fn default() -> Self {
        Self::new(DEFAULT_EXACT_THRESHOLD, false)
    }
}

impl HypothesisTest for WilcoxonSignedRank {
    fn test_type(&self) -> TestType {
        TestType::WilcoxonSignedRank
    }

    fn test(&self, a: &[f64], b: &[f64]) -> AnalysisResult<TestOutcome> {
        ensure_paired(self.test_type(), a, b)?;

        let differences: Vec<f64> = a
            .iter()
            .zip(b)
            .map(|(x, y)| x - y)
            .filter(|d| *d != 0.0)
            .collect();

        if differences.is_empty() {
            return Err(AnalysisError::UndefinedTest(
                "all paired differences are zero".to_string(),
            ));
        }

        let magnitudes: Vec<f64> = differences.iter().map(|d| d.abs()).collect();
        let ranking = rank_with_ties(&magnitudes);

        let (w_plus, w_minus) = differences.iter().zip(&ranking.ranks).fold(
            (0.0, 0.0),
            |(plus, minus), (d, r)| {
                if *d > 0.0 {
                    (plus + r, minus)
                } else {
                    (plus, minus + r)
                }
            },
        );

        let n = differences.len();
        let statistic = w_plus.min(w_minus);
        let exact = n <= self.exact_threshold && !ranking.has_ties();

        let p_value = if exact {
            exact_p_value(n, statistic)
        } else {
            self.normal_p(n, statistic, ranking.tie_term())?
        };

        trace!(n, w_plus, w_minus, exact, p_value, "signed-rank test");
        Ok(TestOutcome::new(statistic, p_value))
    }
}

/// Two-sided exact p-value `min(1, 2 * P(W <= statistic))` for `n` tie-free
/// ranks, counting the subsets of `{1..n}` by their rank sum.
fn exact_p_value(n: usize, statistic: f64) -> f64 {
    let max_sum = n * (n + 1) / 2;
    let mut counts = vec![0.0_f64; max_sum + 1];
    counts[0] = 1.0;

    for rank in 1..=n {
        for sum in (rank..=max_sum).rev() {
            counts[sum] += counts[sum - rank];
        }
    }

    let threshold = (statistic.round() as usize).min(max_sum);
    let lower_tail: f64 = counts[..=threshold].iter().sum();
    let total = 2f64.powi(n as i32);

    (2.0 * lower_tail / total).min(1.0)
}
