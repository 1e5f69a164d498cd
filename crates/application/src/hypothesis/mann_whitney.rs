//! Mann-Whitney U test

use super::{rank_with_ties, two_sided_normal_p, HypothesisTest, TestOutcome};
use llm_significance_domain::{AnalysisError, AnalysisResult, TestType};

/// Two-sided Mann-Whitney U test treating the samples as independent
///
/// Reports `U` of the first sample. The p-value uses the normal
/// approximation with tie-corrected variance and, by default, a continuity
/// correction.
#[derive(Debug, Clone, Copy)]
pub struct MannWhitneyU {
    /// Shift `|U - mean|` towards zero by 0.5
    pub continuity_correction: bool,
}

impl MannWhitneyU {
    pub fn new(continuity_correction: bool) -> Self {
        Self {
            continuity_correction,
        }
    }
}

impl Default for MannWhitneyU {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HypothesisTest for MannWhitneyU {
    fn test_type(&self) -> TestType {
        TestType::MannWhitneyU
    }

    fn test(&self, a: &[f64], b: &[f64]) -> AnalysisResult<TestOutcome> {
        if a.len() < 2 || b.len() < 2 {
            return Err(AnalysisError::UndefinedTest(format!(
                "{} needs at least 2 samples per group, got {} and {}",
                self.test_type(),
                a.len(),
                b.len()
            )));
        }

        let n1 = a.len() as f64;
        let n2 = b.len() as f64;
        let pooled: Vec<f64> = a.iter().chain(b).copied().collect();
        let ranking = rank_with_ties(&pooled);

        let rank_sum: f64 = ranking.ranks[..a.len()].iter().sum();
        let u = rank_sum - n1 * (n1 + 1.0) / 2.0;

        let total = n1 + n2;
        let mean = n1 * n2 / 2.0;
        let variance =
            n1 * n2 / 12.0 * ((total + 1.0) - ranking.tie_term() / (total * (total - 1.0)));
        if variance <= 0.0 {
            return Err(AnalysisError::UndefinedTest(
                "all pooled values are tied".to_string(),
            ));
        }

        let mut deviation = (u - mean).abs();
        if self.continuity_correction {
            deviation = (deviation - 0.5).max(0.0);
        }
        let p_value = two_sided_normal_p(deviation / variance.sqrt())?;

        Ok(TestOutcome::new(u, p_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_separated_groups() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [6.0, 7.0, 8.0, 9.0, 10.0];

        // |U - 12.5| - 0.5 = 12 over sd sqrt(275 / 12)
        let outcome = MannWhitneyU::default().test(&a, &b).unwrap();
        assert_eq!(outcome.statistic, 0.0);
        assert!((outcome.p_value - 0.012186).abs() < 1e-5);

        let uncorrected = MannWhitneyU::new(false).test(&a, &b).unwrap();
        assert!((uncorrected.p_value - 0.009023).abs() < 1e-5);

        let reversed = MannWhitneyU::default().test(&b, &a).unwrap();
        assert_eq!(reversed.statistic, 25.0);
        assert!((reversed.p_value - outcome.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_ignores_row_order() {
        let a = [0.3, 0.1, 0.2, 0.5];
        let b = [0.4, 0.9, 0.6, 0.8];
        let shuffled = [0.9, 0.4, 0.8, 0.6];

        let test = MannWhitneyU::new(true);
        assert_eq!(test.test(&a, &b).unwrap(), test.test(&a, &shuffled).unwrap());
    }

    #[test]
    fn test_all_tied_is_undefined() {
        let a = [0.5, 0.5, 0.5];
        assert!(matches!(
            MannWhitneyU::default().test(&a, &a),
            Err(AnalysisError::UndefinedTest(_))
        ));
    }

    #[test]
    fn test_reports_display_name() {
        let test = MannWhitneyU::default();
        assert_eq!(test.name(), "Mann-Whitney U test");
        assert_eq!(test.test_type(), TestType::MannWhitneyU);
    }

    #[test]
    fn test_too_few_samples() {
        assert!(matches!(
            MannWhitneyU::default().test(&[1.0], &[2.0, 3.0]),
            Err(AnalysisError::UndefinedTest(_))
        ));
    }
}
