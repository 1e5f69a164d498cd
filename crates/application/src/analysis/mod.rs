//! Analysis pipeline
//!
//! Descriptive statistics, pairwise and baseline comparisons, best-model
//! selection and the [`SignificanceAnalyzer`] that runs them in order and
//! assembles the report.

mod baseline;
mod best_model;
mod correction;
mod descriptive;
mod engine;
mod pairwise;
mod summary;

pub use baseline::BaselineComparator;
pub use best_model::select_best_model;
pub use correction::{adjust_p_values, apply_baseline_correction, apply_pairwise_correction};
pub use descriptive::{describe, mean, quantile, sample_std_dev};
pub use engine::{AnalysisSettings, SignificanceAnalyzer, SignificanceAnalyzerBuilder};
pub use pairwise::PairwiseComparator;
pub use summary::render_summary;

use llm_significance_domain::{Column, DescriptiveStats};

/// A column together with its already computed statistics
#[derive(Debug, Clone, Copy)]
pub struct DescribedColumn<'a> {
    pub column: &'a Column,
    pub stats: &'a DescriptiveStats,
}

impl<'a> DescribedColumn<'a> {
    pub fn new(column: &'a Column, stats: &'a DescriptiveStats) -> Self {
        Self { column, stats }
    }

    pub fn name(&self) -> &'a str {
        &self.column.name
    }

    pub fn values(&self) -> &'a [f64] {
        &self.column.values
    }

    pub fn mean(&self) -> f64 {
        self.stats.mean
    }
}
