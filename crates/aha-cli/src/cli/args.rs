use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aha",
    version,
    about = "Scores LLM answers for animal-harm impact with a panel of judge models"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a JSONL dataset with the configured judges
    Score(ScoreArgs),
    /// Check a judge response against the required verdict format
    Validate(ValidateArgs),
    /// Print the built-in grading rubric
    Rubric,
    /// Write a starter config (and optionally a starter dataset)
    Init(InitArgs),
    /// Print the version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Run configuration
    #[arg(long, default_value = "aha.yaml")]
    pub config: PathBuf,

    /// JSONL dataset with the samples to grade
    #[arg(long)]
    pub dataset: PathBuf,

    /// Also write the full artifact as JSON to this path
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub judge: JudgeArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct JudgeArgs {
    /// Judges as provider/model, comma separated (overrides the config)
    #[arg(long, value_delimiter = ',', env = "AHA_JUDGES")]
    pub judges: Option<Vec<String>>,

    /// Sampling temperature for judge calls (overrides the config)
    #[arg(long, env = "AHA_JUDGE_TEMPERATURE")]
    pub judge_temperature: Option<f32>,

    /// Token budget for judge responses (overrides the config)
    #[arg(long, env = "AHA_JUDGE_MAX_TOKENS")]
    pub judge_max_tokens: Option<u32>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// File with the judge response (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    /// Where to write the starter config
    #[arg(long, default_value = "aha.yaml")]
    pub config: PathBuf,

    /// Also write a starter dataset (samples.jsonl)
    #[arg(long)]
    pub dataset: bool,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,
}
