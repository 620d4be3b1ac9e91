//! Selectr - resolve a selection from a resource hierarchy
//!
//! This library turns clicks and form submissions from a hierarchy
//! browser into a normalized `{path, value}` selection, according to a
//! configured mode (item, file, image, directory, new-file,
//! new-file-item). Lookups against the resource server run
//! asynchronously and never race a dismissed session.

use thiserror::Error;

pub mod cli;
pub mod client;
pub mod config;
pub mod model;
pub mod selection;
pub mod widget;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
///
/// Selection rejections are not part of this: they are shown inline and
/// the session continues.
#[derive(Debug, Error)]
pub enum SelectrError {
    /// Resource server error
    #[error("Client error: {0}")]
    ClientError(#[from] client::ClientError),
    /// Model configuration error
    #[error("Model error: {0}")]
    ModelError(#[from] model::ModelError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal prompt error
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Output serialization error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type for fallible top-level operations
pub type Result<T> = std::result::Result<T, SelectrError>;
