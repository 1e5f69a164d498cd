//! Hypothesis test selection and multiple-comparison correction modes.

use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported two-sample tests
///
/// Serialized under the same identifiers accepted in `testType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestType {
    /// Wilcoxon signed-rank test on paired differences
    #[serde(rename = "wilcoxon")]
    WilcoxonSignedRank,
    /// Student's paired t-test on paired differences
    #[serde(rename = "ttest", alias = "paired_ttest")]
    PairedTTest,
    /// Mann-Whitney U test treating the samples as independent
    #[serde(rename = "mannwhitney")]
    MannWhitneyU,
}

impl TestType {
    /// All supported test types
    pub const ALL: [TestType; 3] = [
        TestType::WilcoxonSignedRank,
        TestType::PairedTTest,
        TestType::MannWhitneyU,
    ];

    /// Canonical wire identifier, as accepted in `testType`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WilcoxonSignedRank => "wilcoxon",
            Self::PairedTTest => "ttest",
            Self::MannWhitneyU => "mannwhitney",
        }
    }

    /// Human-readable name used in logs and summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::WilcoxonSignedRank => "Wilcoxon signed-rank test",
            Self::PairedTTest => "Paired t-test",
            Self::MannWhitneyU => "Mann-Whitney U test",
        }
    }

    /// Whether the test relies on row alignment between the two samples
    pub fn is_paired(&self) -> bool {
        !matches!(self, Self::MannWhitneyU)
    }
}

impl Default for TestType {
    fn default() -> Self {
        Self::WilcoxonSignedRank
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wilcoxon" => Ok(Self::WilcoxonSignedRank),
            "ttest" | "paired_ttest" => Ok(Self::PairedTTest),
            "mannwhitney" => Ok(Self::MannWhitneyU),
            other => Err(AnalysisError::UnsupportedTestType(other.to_string())),
        }
    }
}

/// Multiple-comparison correction applied within one family of tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMethod {
    /// Flat per-test significance at the nominal alpha
    #[default]
    None,
    /// Multiply every p-value by the family size
    Bonferroni,
    /// Holm's step-down procedure
    Holm,
}

impl CorrectionMethod {
    /// Wire identifier, as accepted in `correction`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bonferroni => "bonferroni",
            Self::Holm => "holm",
        }
    }
}

impl fmt::Display for CorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionMethod {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "bonferroni" => Ok(Self::Bonferroni),
            "holm" => Ok(Self::Holm),
            other => Err(AnalysisError::InvalidInput(format!(
                "unknown correction method '{}'",
                other
            ))),
        }
    }
}
