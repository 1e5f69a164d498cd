//! Application layer for LLM Significance
//!
//! This crate holds the statistical engine: hypothesis tests, descriptive
//! statistics, pairwise and baseline comparisons, best-model selection and
//! the analyzer that assembles the report.
//!
//! ## Modules
//!
//! - `hypothesis` - Pluggable two-sample tests (Wilcoxon, paired t, Mann-Whitney)
//! - `analysis` - Comparison pipeline, [`SignificanceAnalyzer`] and text summary
//!
//! ## Usage
//!
//! ```rust
//! use llm_significance_application::SignificanceAnalyzer;
//! use llm_significance_domain::{AnalysisRequest, SampleSet};
//!
//! let data = SampleSet::new()
//!     .with_column("baseline", vec![0.70, 0.72, 0.68, 0.71, 0.69])
//!     .with_column("model_a", vec![0.85, 0.86, 0.84, 0.87, 0.85]);
//! let request = AnalysisRequest::new(data, "baseline", vec!["model_a".to_string()]);
//!
//! let report = SignificanceAnalyzer::default().analyze(&request).unwrap();
//! assert_eq!(report.best_model.name, "model_a");
//! ```

pub mod analysis;
pub mod hypothesis;

// Re-export commonly used types
pub use analysis::{
    render_summary, AnalysisSettings, SignificanceAnalyzer, SignificanceAnalyzerBuilder,
};
pub use hypothesis::{HypothesisTest, MannWhitneyU, PairedTTest, TestOutcome, WilcoxonSignedRank};
