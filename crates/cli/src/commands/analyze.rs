//! Analyze command: run the significance engine over a local score table

use anyhow::{Context, Result};
use llm_significance_domain::{AnalysisReport, AnalysisRequest, CorrectionMethod, SampleSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::CommandContext;

/// Options of one `analyze` invocation
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// JSON file holding an object of column name to numbers, `-` for stdin
    pub input: PathBuf,
    pub baseline: String,
    pub columns: Vec<String>,
    pub test_type: Option<String>,
    pub alpha: Option<f64>,
    pub correction: Option<CorrectionMethod>,
    pub exclude_baseline_from_ranking: bool,
}

/// Load a score table from a JSON file, or from stdin when the path is `-`
pub fn load_table(path: &Path) -> Result<SampleSet> {
    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read score table from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read score table {}", path.display()))?
    };

    parse_table(&contents)
}

/// Parse a score table: a JSON object mapping column names to number arrays
pub fn parse_table(contents: &str) -> Result<SampleSet> {
    serde_json::from_str(contents)
        .context("Score table must be a JSON object of column name to numbers")
}

/// Assemble the engine request; unset options fall back to the engine defaults
pub fn build_request(data: SampleSet, options: &AnalyzeOptions) -> AnalysisRequest {
    let mut request = AnalysisRequest::new(data, options.baseline.clone(), options.columns.clone());
    request.test_type = options.test_type.clone();
    request.alpha = options.alpha;
    request.correction = options.correction;
    if options.exclude_baseline_from_ranking {
        request.include_baseline_in_ranking = Some(false);
    }
    request
}

/// Load the table and run the analysis
pub fn analyze(ctx: &CommandContext, options: &AnalyzeOptions) -> Result<AnalysisReport> {
    let data = load_table(&options.input)?;
    debug!(
        columns = data.len(),
        baseline = %options.baseline,
        "Loaded score table"
    );

    let request = build_request(data, options);
    Ok(ctx.analyzer.analyze(&request)?)
}

/// Run the analysis and print the report
pub fn run(ctx: &CommandContext, options: AnalyzeOptions) -> Result<()> {
    let report = analyze(ctx, &options)?;
    println!("{}", ctx.render(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use llm_significance_domain::AnalysisError;
    use llm_significance_testing::fixtures::{
        create_identical_table, reference_table_json, BASELINE, MODEL_A, MODEL_B,
    };
    use std::io::Write;

    fn write_table(value: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", value).unwrap();
        file
    }

    fn options(input: &Path, columns: &[&str]) -> AnalyzeOptions {
        AnalyzeOptions {
            input: input.to_path_buf(),
            baseline: BASELINE.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_reference_table() {
        let file = write_table(&reference_table_json());
        let ctx = CommandContext::new(Config::default());

        let report = analyze(&ctx, &options(file.path(), &[MODEL_A, MODEL_B])).unwrap();
        assert_eq!(report.data_overview.sample_count, 5);
        assert_eq!(report.data_overview.model_count, 3);
        assert_eq!(report.baseline_comparison.len(), 2);
        assert_eq!(report.best_model.name, MODEL_B);
    }

    #[test]
    fn test_preferences_seed_the_engine() {
        let file = write_table(&reference_table_json());
        let mut config = Config::default();
        config.analysis.alpha = 0.01;
        let ctx = CommandContext::new(config);

        let report = analyze(&ctx, &options(file.path(), &[MODEL_A])).unwrap();
        assert_eq!(report.data_overview.alpha, 0.01);

        let mut overridden = options(file.path(), &[MODEL_A]);
        overridden.alpha = Some(0.1);
        overridden.test_type = Some("ttest".to_string());
        let report = analyze(&ctx, &overridden).unwrap();
        assert_eq!(report.data_overview.alpha, 0.1);
        assert_eq!(report.data_overview.test_type, "ttest");
    }

    #[test]
    fn test_build_request_maps_flags() {
        let mut opts = options(Path::new("unused.json"), &[MODEL_A]);
        opts.correction = Some(CorrectionMethod::Holm);
        opts.exclude_baseline_from_ranking = true;

        let request = build_request(SampleSet::new(), &opts);
        assert_eq!(request.baseline, BASELINE);
        assert_eq!(request.data_columns, vec![MODEL_A.to_string()]);
        assert_eq!(request.correction, Some(CorrectionMethod::Holm));
        assert_eq!(request.include_baseline_in_ranking, Some(false));
        assert!(request.test_type.is_none());

        opts.exclude_baseline_from_ranking = false;
        assert!(build_request(SampleSet::new(), &opts)
            .include_baseline_in_ranking
            .is_none());
    }

    #[test]
    fn test_engine_errors_are_propagated() {
        let table = serde_json::to_value(create_identical_table()).unwrap();
        let file = write_table(&table);
        let ctx = CommandContext::new(Config::default());

        let err = analyze(&ctx, &options(file.path(), &["copy"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::UndefinedTest(_))
        ));

        let mut unsupported = options(file.path(), &["copy"]);
        unsupported.test_type = Some("anova".to_string());
        let err = analyze(&ctx, &unsupported).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported test type: anova");
    }

    #[test]
    fn test_rejects_malformed_table() {
        assert!(parse_table(r#"{"a": [1.0, "x"]}"#).is_err());
        assert!(parse_table("[1, 2, 3]").is_err());
        assert_eq!(parse_table(r#"{"a": [1.0], "b": [2.0]}"#).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_input_file() {
        let ctx = CommandContext::new(Config::default());
        let opts = options(Path::new("/nonexistent/scores.json"), &[MODEL_A]);
        let err = analyze(&ctx, &opts).unwrap_err();
        assert!(err.to_string().contains("Failed to read score table"));
    }
}
