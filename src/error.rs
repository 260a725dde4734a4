use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

// Enum for handling various application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("AI error: {0}")]
    AI(#[from] AIError), // Errors related to AI operations.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors.

    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError), // Errors from the OpenAI API.

    #[error("AI client not initialized")]
    AIClientNotInitialized, // The gateway is used before an API key is configured.

    #[error("Image error: {0}")]
    Image(String),
}

// Errors related to AI operations are separated into their own enum for clarity.
#[derive(Debug, Error)]
pub enum AIError {
    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError), // Errors from the OpenAI API.

    #[error("Timeout occurred")]
    Timeout, // Error when an AI operation exceeds its time limit.

    #[error("No message found")]
    NoMessageFound, // The completion came back without content.

    #[error("Failed to parse generated payload: {0}")]
    PayloadParseError(String), // The structured response did not match its schema.
}

impl From<serde_json::Error> for AIError {
    fn from(err: serde_json::Error) -> AIError {
        AIError::PayloadParseError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AIError {
    fn from(err: tokio::task::JoinError) -> Self {
        AIError::PayloadParseError(err.to_string())
    }
}
