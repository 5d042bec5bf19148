use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to parse chat completion response: {0}")]
    MalformedResponse(String),

    #[error("Token limit is not a number: {0:?}")]
    InvalidTokenLimit(String),
}

impl From<reqwest::Error> for ActionError {
    fn from(error: reqwest::Error) -> Self {
        ActionError::Http(error.to_string())
    }
}
