use std::fmt;

#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    InvalidData(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "I/O error: {e}"),
            SceneError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
