//! LLM Significance Domain Types
//!
//! This crate provides the core data model for comparing model score samples:
//! row-aligned sample tables, descriptive statistics, pairwise and baseline
//! test outcomes, the aggregated report and the error kinds a run can fail with.
//!
//! ## Architecture
//!
//! - **sample**: Named columns and the row-aligned [`SampleSet`] table
//! - **test_type**: The closed set of supported tests and correction modes
//! - **request**: One analysis invocation's input
//! - **report**: Result records and the report wire schema
//! - **errors**: Analysis error kinds and the `{ error }` wire body
//!
//! ## Usage
//!
//! ```rust
//! use llm_significance_domain::{SampleSet, TestType};
//!
//! let table = SampleSet::new()
//!     .with_column("baseline", vec![0.70, 0.72, 0.68])
//!     .with_column("candidate", vec![0.85, 0.86, 0.84]);
//! assert_eq!(table.len(), 2);
//!
//! let test: TestType = "wilcoxon".parse().unwrap();
//! assert_eq!(test, TestType::WilcoxonSignedRank);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod report;
pub mod request;
pub mod sample;
pub mod test_type;

// Re-export commonly used types
pub use errors::{AnalysisError, AnalysisResult, ErrorResponse};
pub use report::{
    AnalysisReport, BaselineResult, BestModel, DataOverview, DescriptiveStats, PairwiseResult,
};
pub use request::AnalysisRequest;
pub use sample::{Column, SampleSet};
pub use test_type::{CorrectionMethod, TestType};
