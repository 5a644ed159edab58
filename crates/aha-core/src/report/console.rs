use crate::report::ScoreArtifacts;

/// Print a per-sample summary to stderr, keeping stdout clean for data.
/// A trailing "!" marks a judge whose response failed the format check.
pub fn print_summary(artifacts: &ScoreArtifacts) {
    eprintln!();
    for result in &artifacts.results {
        let mut parts = Vec::with_capacity(result.scores.judges.len());
        for (judge, js) in &result.scores.judges {
            let mark = if js.valid { "" } else { "!" };
            parts.push(format!("{}={}{}", judge, js.score, mark));
        }
        eprintln!(
            "{:<24} avg={:+.2}  {}",
            result.id,
            result.scores.avg,
            parts.join(" ")
        );
    }
    eprintln!();

    let mut agg = Vec::with_capacity(artifacts.aggregate.len());
    for (key, value) in &artifacts.aggregate {
        agg.push(format!("{}={:+.2}", key, value));
    }
    eprintln!(
        "Scored {} sample(s) with {} judge(s). Aggregate: {}",
        artifacts.results.len(),
        artifacts.judges.len(),
        agg.join(" ")
    );
}
