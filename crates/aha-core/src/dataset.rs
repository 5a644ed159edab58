use crate::errors::DatasetError;
use crate::model::{ChatMessage, Target, TaskState};
use serde::Deserialize;
use std::io::BufRead;
use std::path::Path;

/// One dataset row: the task input plus the transcript to grade. An absent
/// criterion falls back to the built-in rubric.
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    #[serde(default)]
    pub id: Option<String>,
    pub input: String,
    #[serde(default)]
    pub criterion: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Sample {
    pub fn task_state(&self) -> TaskState {
        TaskState {
            input: self.input.clone(),
            messages: self.messages.clone(),
        }
    }

    pub fn target(&self) -> Target {
        Target {
            text: self
                .criterion
                .clone()
                .unwrap_or_else(|| crate::rubric::GRADING_INSTRUCTIONS.to_string()),
        }
    }

    /// Stable identifier for reports, falling back to the 1-based position.
    pub fn display_id(&self, position: usize) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("sample-{}", position))
    }
}

/// Load newline-delimited JSON samples. Blank lines are skipped; a malformed
/// line fails the whole load with its line number.
pub fn load_jsonl(path: &Path) -> Result<Vec<Sample>, DatasetError> {
    let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let sample: Sample =
            serde_json::from_str(&line).map_err(|e| DatasetError::Parse {
                line: idx + 1,
                source: e,
            })?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Write the starter dataset shipped with the CLI.
pub fn write_sample_dataset(path: &Path) -> Result<(), DatasetError> {
    std::fs::write(path, include_str!("../../../samples.jsonl")).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_samples_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.jsonl");
        std::fs::write(
            &path,
            concat!(
                r#"{"id": "fur", "input": "q1", "messages": [{"role": "assistant", "content": "a1"}]}"#,
                "\n\n",
                r#"{"input": "q2", "criterion": "custom rubric"}"#,
                "\n",
            ),
        )
        .unwrap();

        let samples = load_jsonl(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].display_id(1), "fur");
        assert_eq!(samples[0].task_state().submission(), "a1");
        assert_eq!(samples[1].display_id(2), "sample-2");
        assert_eq!(samples[1].target().text, "custom rubric");
    }

    #[test]
    fn missing_criterion_falls_back_to_rubric() {
        let sample: Sample = serde_json::from_str(r#"{"input": "q"}"#).unwrap();
        assert_eq!(sample.target().text, crate::rubric::GRADING_INSTRUCTIONS);
        assert!(sample.messages.is_empty());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.jsonl");
        std::fs::write(&path, "{\"input\": \"ok\"}\nnot json\n").unwrap();

        let err = load_jsonl(&path).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_jsonl(Path::new("/nonexistent/data.jsonl")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn starter_dataset_loads_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.jsonl");
        write_sample_dataset(&path).unwrap();

        let samples = load_jsonl(&path).unwrap();
        assert!(!samples.is_empty());
        for sample in &samples {
            assert!(!sample.input.is_empty());
        }
    }
}
