//! Selection mode and channel enumerations
//!
//! Both are fixed when a widget is constructed. Unknown strings are
//! rejected at parse time so a session can never run with a mode it does
//! not know how to resolve.

use super::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of entity a selection session resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// An existing item, chosen by clicking it
    #[default]
    Item,
    /// The first file of a clicked item, fetched in full
    File,
    /// The large-image file derived from a clicked item
    Image,
    /// A folder, chosen by clicking it or by submitting the current location
    Directory,
    /// A new, not yet persisted item named by the user
    NewFile,
    /// The current folder as the destination for a new item
    NewFileItem,
}

impl SelectionMode {
    /// All modes, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Item,
        Self::File,
        Self::Image,
        Self::Directory,
        Self::NewFile,
        Self::NewFileItem,
    ];

    /// Canonical configuration string for this mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::File => "file",
            Self::Image => "image",
            Self::Directory => "directory",
            Self::NewFile => "new-file",
            Self::NewFileItem => "new-file-item",
        }
    }

    /// Whether this mode reacts to form submission
    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        matches!(self, Self::Directory | Self::NewFile | Self::NewFileItem)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModelError::UnknownMode(s.to_string()))
    }
}

/// Which side of a task the selection feeds
///
/// Output selections may be rooted at a task-specific folder. A stored
/// model with any other channel name is read as `Input`; command-line
/// parsing stays strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Output,
    #[default]
    #[serde(other)]
    Input,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

impl FromStr for Channel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            other => Err(ModelError::UnknownChannel(other.to_string())),
        }
    }
}
