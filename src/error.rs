use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClutchError {
    #[error("random source error: {0}")]
    RandomSource(String),
    #[error("unknown sport: {0}")]
    InvalidSport(String),
    #[error("{0}")]
    Other(String),
}

impl From<String> for ClutchError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for ClutchError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
