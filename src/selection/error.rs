//! Selection error types
//!
//! Every variant is recoverable: it is shown inline, the session returns
//! to awaiting a selection, and the user may try again. The `Display`
//! text of each variant is the exact message shown to the user.
//!
//! # Error Kinds
//!
//! - **Validation**: missing input, wrong parent kind, missing image metadata
//! - **LookupEmpty**: a lookup succeeded but found nothing usable
//! - **FetchFailure**: the lookup request itself failed

use crate::client::ClientError;
use thiserror::Error;

/// Category of a selection error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    LookupEmpty,
    FetchFailure,
}

/// Reasons a selection attempt is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Item has no files to choose from
    #[error("Please select an item with at least one file.")]
    NoFiles,

    /// Listing an item's files failed
    #[error("There was an error listing files for the selected item.")]
    ListFilesFailed(#[source] ClientError),

    /// Item carries no large-image descriptor
    #[error("Please select a \"large_image\" item.")]
    NotLargeImage,

    /// Fetching the chosen file failed
    #[error("There was an error fetching the selected file.")]
    FetchFailed(#[source] ClientError),

    /// New-file submission without a name
    #[error("You must provide a name for the new file.")]
    MissingName,

    /// Submission while browsing something other than a folder
    #[error("Files cannot be added under collections.")]
    ParentNotFolder,
}

impl SelectionError {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFiles => ErrorKind::LookupEmpty,
            Self::ListFilesFailed(_) | Self::FetchFailed(_) => ErrorKind::FetchFailure,
            Self::NotLargeImage | Self::MissingName | Self::ParentNotFolder => {
                ErrorKind::Validation
            }
        }
    }

    /// Whether the name input field should be marked as errored
    #[must_use]
    pub const fn marks_name_field(&self) -> bool {
        matches!(self, Self::MissingName)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
