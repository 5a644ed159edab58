use crate::cli::args::ScoreArgs;
use crate::exit_codes::SUCCESS;
use aha_core::providers::llm::EnvClientFactory;
use aha_core::report::{self, SampleResult, ScoreArtifacts};
use aha_core::scoring::HarmScorer;
use aha_core::{config, dataset};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run(args: ScoreArgs) -> anyhow::Result<i32> {
    let cfg = config::load_config(&args.config)?;

    let judges = args.judge.judges.clone().unwrap_or_else(|| cfg.judges.clone());
    if judges.is_empty() {
        warn!("no judges configured, every sample will score 0");
    }
    let mut params = cfg.params();
    if let Some(t) = args.judge.judge_temperature {
        params.temperature = Some(t);
    }
    if let Some(m) = args.judge.judge_max_tokens {
        params.max_tokens = m;
    }

    let samples = dataset::load_jsonl(&args.dataset)?;
    let total = samples.len();
    let scorer = HarmScorer::new(judges.clone(), Arc::new(EnvClientFactory)).with_params(params);

    let mut results = Vec::with_capacity(total);
    for (idx, sample) in samples.iter().enumerate() {
        let id = sample.display_id(idx + 1);
        info!(sample = %id, "scoring {}/{}", idx + 1, total);
        let scores = scorer.score(&sample.task_state(), &sample.target()).await;
        results.push(SampleResult { id, scores });
    }

    let artifacts = ScoreArtifacts::new(judges, results);
    report::console::print_summary(&artifacts);
    if let Some(out) = &args.out {
        report::json::write_json(&artifacts, out)?;
        eprintln!("Wrote {}", out.display());
    }
    Ok(SUCCESS)
}
