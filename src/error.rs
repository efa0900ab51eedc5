use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Source unavailable: {message} (status {status})")]
    SourceUnavailable { status: u16, message: String },

    #[error("Source timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

impl PipelineError {
    /// True for fetch-level failures where callers should fall back to
    /// default content rather than render an empty state.
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            PipelineError::SourceUnavailable { .. }
                | PipelineError::Timeout { .. }
                | PipelineError::Http(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
