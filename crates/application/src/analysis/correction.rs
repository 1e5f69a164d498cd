//! Multiple-comparison correction within one family of tests

use llm_significance_domain::{BaselineResult, CorrectionMethod, PairwiseResult};

/// Adjusted p-values in input order, each capped at 1.
///
/// Holm's adjustment is made monotone over the ascending p-values.
pub fn adjust_p_values(p_values: &[f64], method: CorrectionMethod) -> Vec<f64> {
    let m = p_values.len() as f64;

    match method {
        CorrectionMethod::None => p_values.to_vec(),
        CorrectionMethod::Bonferroni => p_values.iter().map(|p| (p * m).min(1.0)).collect(),
        CorrectionMethod::Holm => {
            let mut order: Vec<usize> = (0..p_values.len()).collect();
            order.sort_by(|&i, &j| p_values[i].total_cmp(&p_values[j]));

            let mut adjusted = vec![0.0; p_values.len()];
            let mut running_max: f64 = 0.0;
            for (step, &idx) in order.iter().enumerate() {
                let scaled = ((m - step as f64) * p_values[idx]).min(1.0);
                running_max = running_max.max(scaled);
                adjusted[idx] = running_max;
            }
            adjusted
        }
    }
}

/// Attach adjusted p-values to the pairwise family and re-evaluate significance
pub fn apply_pairwise_correction(
    results: &mut [PairwiseResult],
    method: CorrectionMethod,
    alpha: f64,
) {
    if method == CorrectionMethod::None {
        return;
    }

    let raw: Vec<f64> = results.iter().map(|r| r.p_value).collect();
    for (result, adjusted) in results.iter_mut().zip(adjust_p_values(&raw, method)) {
        result.adjusted_p_value = Some(adjusted);
        result.significant = adjusted < alpha;
    }
}

/// Attach adjusted p-values to the baseline family and re-evaluate
/// significance and `better_than_baseline`
pub fn apply_baseline_correction(
    results: &mut [BaselineResult],
    method: CorrectionMethod,
    alpha: f64,
) {
    if method == CorrectionMethod::None {
        return;
    }

    let raw: Vec<f64> = results.iter().map(|r| r.p_value).collect();
    for (result, adjusted) in results.iter_mut().zip(adjust_p_values(&raw, method)) {
        result.adjusted_p_value = Some(adjusted);
        result.significant = adjusted < alpha;
        result.better_than_baseline = result.significant && result.mean_diff > 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_none_is_identity() {
        assert_close(&adjust_p_values(&[0.01, 0.2], CorrectionMethod::None), &[0.01, 0.2]);
    }

    #[test]
    fn test_bonferroni() {
        assert_close(
            &adjust_p_values(&[0.01, 0.02, 0.5], CorrectionMethod::Bonferroni),
            &[0.03, 0.06, 1.0],
        );
    }

    #[test]
    fn test_holm_step_down() {
        // sorted: 0.01*3, 0.02*2 = 0.04, 0.03*1 -> monotone max 0.04
        assert_close(
            &adjust_p_values(&[0.03, 0.01, 0.02], CorrectionMethod::Holm),
            &[0.04, 0.03, 0.04],
        );
    }

    #[test]
    fn test_baseline_correction_updates_flags() {
        let mut results = vec![BaselineResult {
            model: "a".to_string(),
            model_mean: 0.8,
            baseline_mean: 0.7,
            mean_diff: 0.1,
            statistic: 0.0,
            p_value: 0.03,
            significant: true,
            better_than_baseline: true,
            adjusted_p_value: None,
        }];
        results.push(BaselineResult {
            model: "b".to_string(),
            p_value: 0.04,
            ..results[0].clone()
        });

        apply_baseline_correction(&mut results, CorrectionMethod::Bonferroni, 0.05);

        assert_eq!(results[0].adjusted_p_value, Some(0.06));
        assert!(!results[0].significant);
        assert!(!results[0].better_than_baseline);
        assert_eq!(results[1].adjusted_p_value, Some(0.08));
    }
}
