//! End-to-end tests for the significance analyzer
//!
//! Runs complete analyses over the reference tables and checks the report
//! contents and error paths.

use llm_significance_application::{
    render_summary, SignificanceAnalyzer, SignificanceAnalyzerBuilder,
};
use llm_significance_domain::{AnalysisError, CorrectionMethod, TestType};
use llm_significance_testing::fixtures::*;
use llm_significance_testing::AnalysisRequestBuilder;

#[test]
fn test_reference_model_beats_baseline() {
    // Arrange
    let request = AnalysisRequestBuilder::new().with_columns(&[MODEL_A]).build();

    // Act
    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();

    // Assert
    let row = &report.baseline_comparison[0];
    assert_eq!(row.model, MODEL_A);
    assert_eq!(row.statistic, 0.0);
    assert!(row.p_value < 0.05);
    assert!(row.significant);
    assert!(row.better_than_baseline);
    assert!(row.mean_diff > 0.0);
    assert!((row.baseline_mean - 0.70).abs() < 1e-12);
    assert!((row.model_mean - 0.854).abs() < 1e-12);
}

#[test]
fn test_reference_report_overview() {
    let request = AnalysisRequestBuilder::new().build();
    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();

    assert_eq!(report.data_overview.sample_count, 5);
    assert_eq!(report.data_overview.model_count, 3);
    assert_eq!(report.data_overview.test_type, "wilcoxon");
    assert_eq!(report.data_overview.alpha, 0.05);

    let order: Vec<&str> = report.basic_stats.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(order, vec![BASELINE, MODEL_A, MODEL_B]);

    // model_a vs model_b differ only by noise
    assert_eq!(report.pairwise_comparison.len(), 1);
    assert!(!report.pairwise_comparison[0].significant);
    assert_eq!(report.significant_pairs_count, 0);

    assert_eq!(report.best_model.name, MODEL_B);
}

#[test]
fn test_identical_columns_fail_the_run() {
    let request = AnalysisRequestBuilder::new()
        .with_data(create_identical_table())
        .with_columns(&["copy"])
        .build();

    let err = SignificanceAnalyzer::default().analyze(&request).unwrap_err();
    assert!(matches!(err, AnalysisError::UndefinedTest(_)));
    assert_eq!(err.http_status(), 422);
}

#[test]
fn test_constant_shift_is_strongly_significant() {
    let request = AnalysisRequestBuilder::new()
        .with_data(create_constant_shift_table(0.25))
        .with_columns(&["shifted"])
        .build();

    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();
    let row = &report.baseline_comparison[0];

    // every difference ties: the smallest attainable p for five rows
    assert_eq!(row.statistic, 0.0);
    assert!(row.p_value < 0.03);
    assert!(row.better_than_baseline);
    assert!((row.mean_diff - 0.25).abs() < 1e-9);
}

#[test]
fn test_pairing_matters() {
    let sorted = AnalysisRequestBuilder::new()
        .with_data(create_pairing_table())
        .with_baseline("reference")
        .with_columns(&["sorted"])
        .build();
    let shuffled = AnalysisRequestBuilder::new()
        .with_data(create_pairing_table())
        .with_baseline("reference")
        .with_columns(&["shuffled"])
        .build();

    let analyzer = SignificanceAnalyzer::default();
    let sorted = analyzer.analyze(&sorted).unwrap();
    let shuffled = analyzer.analyze(&shuffled).unwrap();

    // identical marginals
    assert!(
        (sorted.basic_stats[1].mean - shuffled.basic_stats[1].mean).abs() < 1e-12
    );

    let (a, b) = (&sorted.baseline_comparison[0], &shuffled.baseline_comparison[0]);
    assert_ne!(a.statistic, b.statistic);
    assert_ne!(a.p_value, b.p_value);
    assert!(a.significant);
    assert!(!b.significant);
}

#[test]
fn test_paired_t_and_mann_whitney() {
    let analyzer = SignificanceAnalyzer::default();

    for identifier in ["ttest", "paired_ttest", "MannWhitney"] {
        let request = AnalysisRequestBuilder::new()
            .with_columns(&[MODEL_A])
            .with_test_type(identifier)
            .build();

        let report = analyzer.analyze(&request).unwrap();
        let expected: TestType = identifier.parse().unwrap();
        assert_eq!(report.data_overview.test_type, expected.as_str());
        assert!(report.baseline_comparison[0].better_than_baseline);
    }
}

#[test]
fn test_unsupported_test_type() {
    let request = AnalysisRequestBuilder::new().with_test_type("chi2").build();

    let err = SignificanceAnalyzer::default().analyze(&request).unwrap_err();
    assert_eq!(err, AnalysisError::UnsupportedTestType("chi2".to_string()));
    assert_eq!(err.to_string(), "Unsupported test type: chi2");
}

#[test]
fn test_invalid_baseline() {
    let request = AnalysisRequestBuilder::new().with_baseline("missing").build();

    let err = SignificanceAnalyzer::default().analyze(&request).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidBaseline(_)));
}

#[test]
fn test_empty_comparison_set() {
    let request = AnalysisRequestBuilder::new().with_columns(&[]).build();

    let err = SignificanceAnalyzer::default().analyze(&request).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyComparisonSet(_)));
}

#[test]
fn test_misaligned_columns() {
    let request = AnalysisRequestBuilder::new()
        .with_column("short", vec![0.5, 0.6])
        .with_columns(&[MODEL_A, "short"])
        .build();

    let err = SignificanceAnalyzer::default().analyze(&request).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

#[test]
fn test_holm_correction_adds_adjusted_values() {
    let request = AnalysisRequestBuilder::new()
        .with_correction(CorrectionMethod::Holm)
        .build();

    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();

    assert_eq!(report.data_overview.correction, CorrectionMethod::Holm);
    for row in &report.baseline_comparison {
        let adjusted = row.adjusted_p_value.unwrap();
        assert!(adjusted >= row.p_value);
        assert_eq!(row.significant, adjusted < 0.05);
    }
    for row in &report.pairwise_comparison {
        assert!(row.adjusted_p_value.is_some());
    }
}

#[test]
fn test_ranking_scope_flag() {
    let analyzer = SignificanceAnalyzerBuilder::new()
        .include_baseline_in_ranking(false)
        .build();

    let mut request = AnalysisRequestBuilder::new()
        .with_column("weak", vec![0.1, 0.2, 0.15, 0.12, 0.18])
        .with_columns(&["weak"])
        .build();

    let report = analyzer.analyze(&request).unwrap();
    assert_eq!(report.best_model.name, "weak");

    request.include_baseline_in_ranking = Some(true);
    let report = analyzer.analyze(&request).unwrap();
    assert_eq!(report.best_model.name, BASELINE);
}

#[test]
fn test_summary_mentions_every_section() {
    let request = AnalysisRequestBuilder::new().build();
    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();

    let text = render_summary(&report);
    assert!(text.contains("Descriptive statistics:"));
    assert!(text.contains("Pairwise comparisons:"));
    assert!(text.contains("Against baseline baseline"));
    assert!(text.contains("No significant differences between models"));
}

#[test]
fn test_large_magnitude_scores_are_not_treated_as_ties() {
    // Arrange: every row improves by 0.2 to 0.55 on scores near 1e9
    let base: Vec<f64> = (0..8).map(|i| 1e9 + 10.0 * i as f64).collect();
    let model: Vec<f64> = base
        .iter()
        .enumerate()
        .map(|(i, v)| v + 0.2 + 0.05 * i as f64)
        .collect();
    let request = AnalysisRequestBuilder::new()
        .with_column(BASELINE, base)
        .with_column("large", model)
        .with_columns(&["large"])
        .build();

    // Act
    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();

    // Assert
    let row = &report.baseline_comparison[0];
    assert_eq!(row.statistic, 0.0);
    assert!((row.p_value - 0.0078125).abs() < 1e-12);
    assert!(row.better_than_baseline);
}

#[test]
fn test_mann_whitney_applies_continuity_correction() {
    let request = AnalysisRequestBuilder::new()
        .with_column(BASELINE, vec![6.0, 7.0, 8.0, 9.0, 10.0])
        .with_column("low", vec![1.0, 2.0, 3.0, 4.0, 5.0])
        .with_columns(&["low"])
        .with_test_type("mannwhitney")
        .build();

    let report = SignificanceAnalyzer::default().analyze(&request).unwrap();

    let row = &report.baseline_comparison[0];
    assert_eq!(row.statistic, 0.0);
    assert!((row.p_value - 0.012186).abs() < 1e-5);
    assert!(!row.better_than_baseline);
}
