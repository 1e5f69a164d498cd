//! Per-column descriptive statistics

use llm_significance_domain::{AnalysisError, AnalysisResult, Column, DescriptiveStats};

/// Summarize one column.
///
/// Fails with [`AnalysisError::InvalidInput`] for an empty column.
pub fn describe(column: &Column) -> AnalysisResult<DescriptiveStats> {
    if column.is_empty() {
        return Err(AnalysisError::InvalidInput(format!(
            "column '{}' has no samples",
            column.name
        )));
    }

    let mut sorted = column.values.clone();
    sorted.sort_by(f64::total_cmp);

    Ok(DescriptiveStats {
        column: column.name.clone(),
        count: column.len(),
        mean: mean(&column.values),
        std: sample_std_dev(&column.values),
        median: quantile(&sorted, 0.5),
        q25: quantile(&sorted, 0.25),
        q75: quantile(&sorted, 0.75),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (divisor N-1); 0 for fewer than two values
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Linearly interpolated quantile of an ascending slice.
///
/// The quantile `p` sits at position `(N-1) * p` between order statistics.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let position = (n - 1) as f64 * p.clamp(0.0, 1.0);
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            let fraction = position - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
        }
    }
}
