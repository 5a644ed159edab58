use crate::scoring::SampleScore;
use std::collections::BTreeMap;

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Mean of every per-sample value keyed by judge (plus "avg"), computed over
/// the samples that carry that key.
pub fn aggregate_scores(scores: &[SampleScore]) -> BTreeMap<String, f64> {
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for score in scores {
        for (key, value) in score.value_map() {
            grouped.entry(key).or_default().push(value);
        }
    }
    grouped
        .into_iter()
        .map(|(key, values)| (key, mean(&values)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::JudgeScore;

    fn sample(entries: &[(&str, i32)], avg: f64) -> SampleScore {
        SampleScore {
            judges: entries
                .iter()
                .map(|(judge, score)| {
                    (
                        judge.to_string(),
                        JudgeScore {
                            score: *score,
                            category: None,
                            valid: true,
                        },
                    )
                })
                .collect(),
            avg,
        }
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_averages_values() {
        assert_eq!(mean(&[1.0, -1.0, 0.0]), 0.0);
        assert_eq!(mean(&[1.0, 0.0]), 0.5);
    }

    #[test]
    fn aggregate_averages_each_judge_across_samples() {
        let scores = vec![
            sample(&[("fake/a", 1), ("fake/b", -1)], 0.0),
            sample(&[("fake/a", 1), ("fake/b", 1)], 1.0),
        ];
        let agg = aggregate_scores(&scores);
        assert_eq!(agg["fake/a"], 1.0);
        assert_eq!(agg["fake/b"], 0.0);
        assert_eq!(agg["avg"], 0.5);
    }

    #[test]
    fn aggregate_handles_sparse_judge_keys() {
        let scores = vec![
            sample(&[("fake/a", 1)], 1.0),
            sample(&[("fake/b", -1)], -1.0),
        ];
        let agg = aggregate_scores(&scores);
        assert_eq!(agg["fake/a"], 1.0);
        assert_eq!(agg["fake/b"], -1.0);
        assert_eq!(agg["avg"], 0.0);
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        assert!(aggregate_scores(&[]).is_empty());
    }
}
