use crate::report::ScoreArtifacts;
use std::path::Path;

/// Write the run artifact as pretty-printed JSON.
pub fn write_json(artifacts: &ScoreArtifacts, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(artifacts)?)?;
    Ok(())
}
