use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutopilotError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AutopilotError>;
