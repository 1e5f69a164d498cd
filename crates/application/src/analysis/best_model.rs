//! Best-model selection by mean score

use llm_significance_domain::{AnalysisError, AnalysisResult, BestModel, DescriptiveStats};

/// Pick the column with the highest mean; the earliest wins on equal means.
pub fn select_best_model(candidates: &[DescriptiveStats]) -> AnalysisResult<BestModel> {
    let mut best: Option<&DescriptiveStats> = None;
    for stats in candidates {
        match best {
            Some(current) if stats.mean <= current.mean => {}
            _ => best = Some(stats),
        }
    }

    best.map(|stats| BestModel {
        name: stats.column.clone(),
        mean_score: stats.mean,
    })
    .ok_or_else(|| AnalysisError::EmptySet("no models to rank".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(column: &str, mean: f64) -> DescriptiveStats {
        DescriptiveStats {
            column: column.to_string(),
            count: 1,
            mean,
            std: 0.0,
            median: mean,
            q25: mean,
            q75: mean,
            min: mean,
            max: mean,
        }
    }

    #[test]
    fn test_highest_mean_wins() {
        let best = select_best_model(&[stats("a", 0.5), stats("b", 0.9), stats("c", 0.7)]).unwrap();
        assert_eq!(best.name, "b");
        assert_eq!(best.mean_score, 0.9);
    }

    #[test]
    fn test_first_wins_ties() {
        let best = select_best_model(&[stats("a", 0.8), stats("b", 0.8)]).unwrap();
        assert_eq!(best.name, "a");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(matches!(
            select_best_model(&[]),
            Err(AnalysisError::EmptySet(_))
        ));
    }
}
