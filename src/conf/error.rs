//! Configuration document error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the configuration document.
#[derive(Debug, Error)]
pub enum ConfError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("no section named `{0}` in the configuration")]
    SectionNotFound(String),
}
