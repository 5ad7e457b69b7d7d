use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Todo not found")]
    TodoNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {0}")]
    HttpStatus(u16),

    #[error("Failed to fetch users: {0}")]
    Fetch(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
