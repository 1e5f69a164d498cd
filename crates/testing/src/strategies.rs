//! Proptest strategies for score tables.

use llm_significance_domain::SampleSet;
use proptest::collection::vec;
use proptest::prelude::*;

/// Scores on a coarse grid in [0, 1], so ties and zero differences occur
pub fn score() -> impl Strategy<Value = f64> {
    (0u32..=100).prop_map(|v| v as f64 / 100.0)
}

/// One column of `len` scores
pub fn column(len: usize) -> impl Strategy<Value = Vec<f64>> {
    vec(score(), len)
}

/// A row-aligned table with `models` comparison columns named `m0..` plus a
/// `baseline` column, between `min_rows` and `max_rows` rows each
pub fn aligned_table(
    models: std::ops::RangeInclusive<usize>,
    min_rows: usize,
    max_rows: usize,
) -> impl Strategy<Value = (SampleSet, Vec<String>)> {
    (models, min_rows..=max_rows).prop_flat_map(|(models, rows)| {
        vec(column(rows), models + 1).prop_map(|columns| {
            let mut names = Vec::with_capacity(columns.len() - 1);
            let mut table = SampleSet::new();
            for (i, values) in columns.into_iter().enumerate() {
                if i == 0 {
                    table.insert("baseline", values);
                } else {
                    let name = format!("m{}", i - 1);
                    names.push(name.clone());
                    table.insert(name, values);
                }
            }
            (table, names)
        })
    })
}
