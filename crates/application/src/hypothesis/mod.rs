//! Two-sample hypothesis tests
//!
//! Every test implements [`HypothesisTest`] and is looked up by
//! [`TestType`] in the analyzer's registry, so new tests can be plugged in
//! without touching the comparison logic.

mod mann_whitney;
mod paired_t;
mod ranking;
mod wilcoxon;

pub use mann_whitney::MannWhitneyU;
pub use paired_t::PairedTTest;
pub use ranking::{approx_eq, rank_with_ties, Ranking};
pub use wilcoxon::{WilcoxonSignedRank, DEFAULT_EXACT_THRESHOLD};

use llm_significance_domain::{AnalysisError, AnalysisResult, TestType};
use statrs::distribution::{ContinuousCDF, Normal};

/// Statistic and two-sided p-value of one test invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

impl TestOutcome {
    /// Create an outcome, clamping the p-value into [0, 1]
    pub fn new(statistic: f64, p_value: f64) -> Self {
        Self {
            statistic,
            p_value: p_value.clamp(0.0, 1.0),
        }
    }
}

/// Trait for two-sample significance tests
pub trait HypothesisTest: Send + Sync {
    /// The test variant this implementation provides.
    fn test_type(&self) -> TestType;

    /// Human-readable test name.
    fn name(&self) -> &'static str {
        self.test_type().display_name()
    }

    /// Test `a` against `b`.
    ///
    /// Paired tests require equal lengths; row `i` of `a` is matched with
    /// row `i` of `b`. Inputs on which the test is mathematically undefined
    /// fail with [`AnalysisError::UndefinedTest`].
    fn test(&self, a: &[f64], b: &[f64]) -> AnalysisResult<TestOutcome>;
}

pub(crate) fn ensure_paired(test: TestType, a: &[f64], b: &[f64]) -> AnalysisResult<()> {
    if a.len() != b.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "{} needs row-aligned samples, got {} and {} values",
            test,
            a.len(),
            b.len()
        )));
    }
    if a.len() < 2 {
        return Err(AnalysisError::UndefinedTest(format!(
            "{} needs at least 2 paired samples, got {}",
            test,
            a.len()
        )));
    }
    Ok(())
}

/// Two-sided p-value of a standard normal z score
pub(crate) fn two_sided_normal_p(z: f64) -> AnalysisResult<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AnalysisError::UndefinedTest(format!("normal distribution: {}", e)))?;
    Ok((2.0 * (1.0 - normal.cdf(z.abs()))).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_clamps_p_value() {
        assert_eq!(TestOutcome::new(1.0, 1.2).p_value, 1.0);
        assert_eq!(TestOutcome::new(1.0, -0.1).p_value, 0.0);
    }

    #[test]
    fn test_two_sided_normal_p() {
        assert!((two_sided_normal_p(0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((two_sided_normal_p(1.959964).unwrap() - 0.05).abs() < 1e-5);
        assert!((two_sided_normal_p(-1.959964).unwrap() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_ensure_paired() {
        assert!(ensure_paired(TestType::PairedTTest, &[1.0, 2.0], &[1.0, 2.0]).is_ok());
        assert!(matches!(
            ensure_paired(TestType::PairedTTest, &[1.0], &[1.0]),
            Err(AnalysisError::UndefinedTest(_))
        ));
        assert!(matches!(
            ensure_paired(TestType::PairedTTest, &[1.0, 2.0], &[1.0]),
            Err(AnalysisError::InvalidInput(_))
        ));
    }
}
