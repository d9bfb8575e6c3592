use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("api error: {0}")]
    Api(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    pub fn api_error(message: impl Into<String>) -> Self {
        ChatError::Api(message.into())
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        ChatError::Config(message.into())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
