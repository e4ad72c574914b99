//! Error types for WREN operations.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unauthorized field accessed: {0:?}")]
    UnauthorizedField(String),
}

pub type Result<T> = std::result::Result<T, Error>;
