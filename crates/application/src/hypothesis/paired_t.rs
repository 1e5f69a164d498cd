//! Student's paired t-test

use super::{ensure_paired, HypothesisTest, TestOutcome};
use llm_significance_domain::{AnalysisError, AnalysisResult, TestType};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Paired, two-sided t-test on the row differences `a - b`
///
/// The statistic is signed: positive when `a` tends to exceed `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairedTTest;

impl HypothesisTest for PairedTTest {
    fn test_type(&self) -> TestType {
        TestType::PairedTTest
    }

    fn test(&self, a: &[f64], b: &[f64]) -> AnalysisResult<TestOutcome> {
        ensure_paired(self.test_type(), a, b)?;

        let differences: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
        let n = differences.len() as f64;
        let mean = differences.iter().sum::<f64>() / n;
        let variance = differences
            .iter()
            .map(|d| (d - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        let std_dev = variance.sqrt();

        if std_dev == 0.0 || !std_dev.is_finite() {
            return Err(AnalysisError::UndefinedTest(
                "paired differences have zero variance".to_string(),
            ));
        }

        let t = mean / (std_dev / n.sqrt());
        let distribution = StudentsT::new(0.0, 1.0, n - 1.0)
            .map_err(|e| AnalysisError::UndefinedTest(format!("t distribution: {}", e)))?;
        let p_value = 2.0 * (1.0 - distribution.cdf(t.abs()));

        Ok(TestOutcome::new(t, p_value))
    }
}
