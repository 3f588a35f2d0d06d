use thiserror::Error;

pub type Result<T> = std::result::Result<T, GcontribError>;

#[derive(Error, Debug)]
pub enum GcontribError {
    #[error("Git command failed: {0}")]
    Git(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<chrono::ParseError> for GcontribError {
    fn from(err: chrono::ParseError) -> Self {
        GcontribError::InvalidDate(err.to_string())
    }
}
