//! Sample tables with known statistical behaviour.

use llm_significance_domain::SampleSet;

/// Baseline column name used by the reference table
pub const BASELINE: &str = "baseline";
/// Clearly improved model in the reference table
pub const MODEL_A: &str = "model_a";
/// Model close to `model_a` in the reference table
pub const MODEL_B: &str = "model_b";

/// Baseline scores of the reference table
pub fn baseline_scores() -> Vec<f64> {
    vec![0.70, 0.72, 0.68, 0.71, 0.69]
}

/// Model A scores of the reference table; every row beats the baseline
pub fn model_a_scores() -> Vec<f64> {
    vec![0.85, 0.86, 0.84, 0.87, 0.85]
}

/// Model B scores of the reference table; interleaved with model A
pub fn model_b_scores() -> Vec<f64> {
    vec![0.86, 0.85, 0.83, 0.88, 0.87]
}

/// The reference table: baseline, model A and model B over five items
pub fn create_reference_table() -> SampleSet {
    SampleSet::new()
        .with_column(BASELINE, baseline_scores())
        .with_column(MODEL_A, model_a_scores())
        .with_column(MODEL_B, model_b_scores())
}

/// Reference table as the JSON object accepted by the API and CLI
pub fn reference_table_json() -> serde_json::Value {
    serde_json::to_value(create_reference_table()).unwrap_or_default()
}

/// Baseline plus an exact copy of it
pub fn create_identical_table() -> SampleSet {
    SampleSet::new()
        .with_column(BASELINE, baseline_scores())
        .with_column("copy", baseline_scores())
}

/// Baseline plus a column shifted up by the same amount on every row
pub fn create_constant_shift_table(shift: f64) -> SampleSet {
    let shifted = baseline_scores().iter().map(|v| v + shift).collect();
    SampleSet::new()
        .with_column(BASELINE, baseline_scores())
        .with_column("shifted", shifted)
}

/// Scores paired in the same order as [`pairing_reference`]
pub fn sorted_pairing() -> Vec<f64> {
    vec![0.58, 0.63, 0.62, 0.69, 0.68, 0.74, 0.73, 0.80]
}

/// Same multiset as [`sorted_pairing`], rows shuffled
pub fn shuffled_pairing() -> Vec<f64> {
    vec![0.74, 0.58, 0.80, 0.63, 0.69, 0.62, 0.73, 0.68]
}

/// Reference column for the pairing fixtures
pub fn pairing_reference() -> Vec<f64> {
    vec![0.61, 0.64, 0.66, 0.70, 0.73, 0.75, 0.78, 0.81]
}

/// Reference column plus the sorted and shuffled pairings
pub fn create_pairing_table() -> SampleSet {
    SampleSet::new()
        .with_column("reference", pairing_reference())
        .with_column("sorted", sorted_pairing())
        .with_column("shuffled", shuffled_pairing())
}
