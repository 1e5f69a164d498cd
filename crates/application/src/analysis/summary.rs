//! Plain-text rendering of an analysis report

use llm_significance_domain::AnalysisReport;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Render a report as a human-readable text summary.
///
/// Sections: data overview, descriptive statistics, pairwise comparisons,
/// baseline comparisons and a closing list of significant pairs.
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = write_summary(&mut out, report);
    out
}

fn write_summary(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let overview = &report.data_overview;

    writeln!(out, "{}", rule)?;
    writeln!(out, "Model Comparison Significance Report")?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\nData overview:")?;
    writeln!(out, "  - Samples: {}", overview.sample_count)?;
    writeln!(out, "  - Models: {}", overview.model_count)?;
    writeln!(out, "  - Test: {}", overview.test_type)?;
    writeln!(out, "  - Significance level: alpha = {}", overview.alpha)?;
    if report.pairwise_comparison.iter().any(|r| r.adjusted_p_value.is_some())
        || report.baseline_comparison.iter().any(|r| r.adjusted_p_value.is_some())
    {
        writeln!(out, "  - Correction: {}", overview.correction)?;
    }

    writeln!(out, "\nDescriptive statistics:")?;
    writeln!(
        out,
        "  {:<20} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "model", "n", "mean", "std", "median", "q25", "q75"
    )?;
    for stats in &report.basic_stats {
        writeln!(
            out,
            "  {:<20} {:>6} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
            stats.column, stats.count, stats.mean, stats.std, stats.median, stats.q25, stats.q75
        )?;
    }

    writeln!(out, "\nPairwise comparisons:")?;
    if report.pairwise_comparison.is_empty() {
        writeln!(out, "  (fewer than two comparison models)")?;
    }
    for row in &report.pairwise_comparison {
        writeln!(
            out,
            "  {} vs {}: diff = {:+.4}, statistic = {:.4}, p = {:.4}{}",
            row.model1,
            row.model2,
            row.mean_diff,
            row.statistic,
            row.p_value,
            marker(row.significant)
        )?;
    }

    if let Some(first) = report.baseline_comparison.first() {
        let baseline = report
            .basic_stats
            .first()
            .map(|s| s.column.as_str())
            .unwrap_or("baseline");
        writeln!(
            out,
            "\nAgainst baseline {} (mean {:.4}):",
            baseline, first.baseline_mean
        )?;
        for row in &report.baseline_comparison {
            writeln!(
                out,
                "  {}: diff = {:+.4}, p = {:.4}{}{}",
                row.model,
                row.mean_diff,
                row.p_value,
                marker(row.significant),
                if row.better_than_baseline { ", better" } else { "" }
            )?;
        }
    }

    writeln!(out, "\nSummary:")?;
    writeln!(
        out,
        "  - Best model: {} (mean {:.4})",
        report.best_model.name, report.best_model.mean_score
    )?;
    if report.significant_pairs_count > 0 {
        writeln!(
            out,
            "  - {} model pair(s) differ significantly",
            report.significant_pairs_count
        )?;
        for row in report.significant_pairs() {
            let p = row.adjusted_p_value.unwrap_or(row.p_value);
            writeln!(out, "    * {} vs {}: p = {:.4}", row.model1, row.model2, p)?;
        }
    } else {
        writeln!(out, "  - No significant differences between models")?;
    }

    Ok(())
}

fn marker(significant: bool) -> &'static str {
    if significant {
        " *"
    } else {
        ""
    }
}
