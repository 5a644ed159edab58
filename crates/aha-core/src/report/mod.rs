pub mod console;
pub mod json;

use crate::scoring::SampleScore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    pub id: String,
    pub scores: SampleScore,
}

/// Everything a scoring run produced, ready for the console summary and the
/// JSON artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreArtifacts {
    pub run_id: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub judges: Vec<String>,
    pub results: Vec<SampleResult>,
    pub aggregate: BTreeMap<String, f64>,
}

impl ScoreArtifacts {
    pub fn new(judges: Vec<String>, results: Vec<SampleResult>) -> Self {
        let scores: Vec<SampleScore> = results.iter().map(|r| r.scores.clone()).collect();
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now(),
            judges,
            results,
            aggregate: crate::metrics::aggregate_scores(&scores),
        }
    }
}
