//! Model-level error types
//!
//! Raised when configuration strings cannot be mapped onto the closed
//! enumerations of the model. These are configuration-time failures and
//! never occur while a selection session is running.

use thiserror::Error;

/// Errors produced while parsing model configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Selection mode string is not one of the supported modes
    #[error("Unknown selection mode '{0}' (expected one of: item, file, image, directory, new-file, new-file-item)")]
    UnknownMode(String),

    /// Channel string is not recognised
    #[error("Unknown channel '{0}' (expected 'input' or 'output')")]
    UnknownChannel(String),

    /// Resource kind tag is not recognised
    #[error("Unknown resource kind '{0}'")]
    UnknownResourceKind(String),
}
