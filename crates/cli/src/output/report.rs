//! Report and preference formatting

use super::table::{flag_cell, TableFormatter};
use super::{colors, Formattable, JsonFormatter};
use crate::config::Config;
use anyhow::Result;
use comfy_table::Cell;
use llm_significance_application::render_summary;
use llm_significance_domain::AnalysisReport;
use std::fmt::Write;

fn score(value: f64) -> Cell {
    Cell::new(format!("{:.4}", value))
}

fn diff(value: f64) -> Cell {
    Cell::new(format!("{:+.4}", value))
}

fn p_value(value: f64) -> Cell {
    if value < 1e-4 {
        Cell::new(format!("{:.2e}", value))
    } else {
        Cell::new(format!("{:.4}", value))
    }
}

fn adjusted(value: Option<f64>) -> Cell {
    value.map(p_value).unwrap_or_else(|| Cell::new("-"))
}

impl Formattable for AnalysisReport {
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    fn format_table(&self) -> Result<String> {
        let overview = &self.data_overview;
        let corrected = self
            .pairwise_comparison
            .iter()
            .any(|r| r.adjusted_p_value.is_some())
            || self
                .baseline_comparison
                .iter()
                .any(|r| r.adjusted_p_value.is_some());

        let mut out = String::new();

        writeln!(out, "{}", colors::bold("Data overview"))?;
        let mut items = vec![
            ("Samples", overview.sample_count.to_string()),
            ("Models", overview.model_count.to_string()),
            ("Test", overview.test_type.clone()),
            ("Alpha", overview.alpha.to_string()),
        ];
        if corrected {
            items.push(("Correction", overview.correction.to_string()));
        }
        writeln!(out, "{}", TableFormatter::key_value(items))?;

        writeln!(out, "\n{}", colors::bold("Descriptive statistics"))?;
        let rows: Vec<Vec<Cell>> = self
            .basic_stats
            .iter()
            .map(|s| {
                vec![
                    Cell::new(&s.column),
                    Cell::new(s.count),
                    score(s.mean),
                    score(s.std),
                    score(s.median),
                    score(s.q25),
                    score(s.q75),
                    score(s.min),
                    score(s.max),
                ]
            })
            .collect();
        let headers = vec!["Model", "N", "Mean", "Std", "Median", "Q25", "Q75", "Min", "Max"];
        writeln!(out, "{}", TableFormatter::numeric(headers, rows))?;

        writeln!(out, "\n{}", colors::bold("Pairwise comparisons"))?;
        if self.pairwise_comparison.is_empty() {
            writeln!(out, "{}", colors::dim("Fewer than two comparison models."))?;
        } else {
            let rows: Vec<Vec<Cell>> = self
                .pairwise_comparison
                .iter()
                .map(|r| {
                    let mut row = vec![
                        Cell::new(format!("{} vs {}", r.model1, r.model2)),
                        diff(r.mean_diff),
                        Cell::new(format!("{:.4}", r.statistic)),
                        p_value(r.p_value),
                    ];
                    if corrected {
                        row.push(adjusted(r.adjusted_p_value));
                    }
                    row.push(flag_cell(r.significant));
                    row
                })
                .collect();
            let mut headers = vec!["Pair", "Mean diff", "Statistic", "p-value"];
            if corrected {
                headers.push("Adjusted p");
            }
            headers.push("Significant");
            writeln!(out, "{}", TableFormatter::numeric(headers, rows))?;
        }

        let baseline_mean = self
            .baseline_comparison
            .first()
            .map(|r| r.baseline_mean)
            .unwrap_or_default();
        writeln!(
            out,
            "\n{}",
            colors::bold(&format!("Against baseline (mean {:.4})", baseline_mean))
        )?;
        let rows: Vec<Vec<Cell>> = self
            .baseline_comparison
            .iter()
            .map(|r| {
                let mut row = vec![
                    Cell::new(&r.model),
                    score(r.model_mean),
                    diff(r.mean_diff),
                    Cell::new(format!("{:.4}", r.statistic)),
                    p_value(r.p_value),
                ];
                if corrected {
                    row.push(adjusted(r.adjusted_p_value));
                }
                row.push(flag_cell(r.significant));
                row.push(flag_cell(r.better_than_baseline));
                row
            })
            .collect();
        let mut headers = vec!["Model", "Mean", "Mean diff", "Statistic", "p-value"];
        if corrected {
            headers.push("Adjusted p");
        }
        headers.push("Significant");
        headers.push("Better");
        writeln!(out, "{}", TableFormatter::numeric(headers, rows))?;

        writeln!(
            out,
            "\nBest model: {} (mean {:.4})",
            colors::success(&self.best_model.name),
            self.best_model.mean_score
        )?;
        write!(
            out,
            "Significant pairs: {}",
            self.significant_pairs_count
        )?;

        Ok(out)
    }

    fn format_plain(&self) -> Result<String> {
        Ok(render_summary(self))
    }
}

impl Formattable for Config {
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    fn format_table(&self) -> Result<String> {
        let analysis = &self.analysis;
        let items = vec![
            ("Output format", self.output_format.to_string()),
            ("Colored", self.colored.to_string()),
            ("Test", analysis.test_type.to_string()),
            ("Alpha", analysis.alpha.to_string()),
            ("Correction", analysis.correction.to_string()),
            (
                "Baseline in ranking",
                analysis.include_baseline_in_ranking.to_string(),
            ),
            ("Exact threshold", analysis.exact_threshold.to_string()),
            (
                "Continuity correction",
                analysis.continuity_correction.to_string(),
            ),
        ];
        Ok(TableFormatter::key_value(items).to_string())
    }

    fn format_plain(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
