//! Error types for the architecture registry.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArchError {
    #[error("unknown architecture name: {0:?}")]
    UnknownArch(String),
}
