use forerunner_core::error::ForerunnerError;

/// Failures while shaping a schema into an OpenAI payload.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for ForerunnerError {
    fn from(value: OpenAiError) -> Self {
        ForerunnerError::Backend(Box::new(value))
    }
}
