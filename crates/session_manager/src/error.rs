//! Session registry error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("execution session not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
