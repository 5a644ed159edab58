use std::fmt::{Display, Formatter};

/// Configuration problem (missing file, bad YAML, unsupported version).
#[derive(Debug)]
pub struct ConfigError(pub String);

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Failures talking to a judge backend.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("unknown judge provider: {0}")]
    UnknownProvider(String),

    #[error("{provider} authentication failed (status 401): {detail}")]
    Auth { provider: &'static str, detail: String },

    #[error("{provider} rate limited (status 429): {detail}")]
    RateLimited { provider: &'static str, detail: String },

    #[error("{provider} API error (status {status}): {detail}")]
    Api {
        provider: &'static str,
        status: u16,
        detail: String,
    },

    #[error("{provider} response missing completion text")]
    MalformedResponse { provider: &'static str },
}

/// Failures loading a JSONL dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sample on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
