//! Testing utilities for LLM Significance
//!
//! This crate provides:
//! - Sample tables with known statistical behaviour
//! - A fluent builder for analysis requests
//! - Proptest strategies for row-aligned score tables
//!
//! # Examples
//!
//! ```
//! use llm_significance_testing::{fixtures::*, builders::*};
//!
//! let request = AnalysisRequestBuilder::new()
//!     .with_data(create_reference_table())
//!     .with_baseline(BASELINE)
//!     .with_columns(&[MODEL_A])
//!     .with_test_type("wilcoxon")
//!     .build();
//! assert_eq!(request.data_columns, vec![MODEL_A.to_string()]);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use proptest;
