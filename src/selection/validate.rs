//! Submission checks for the new-file modes

use super::error::SelectionError;
use crate::model::{HierarchyNode, ResourceKind, SelectionMode};

/// Check a form submission before a result is built
///
/// `new-file` needs a name and a folder parent; `new-file-item` needs a
/// folder parent. The name is checked first. Other modes pass.
///
/// # Errors
///
/// - `SelectionError::MissingName` if a new file has an empty name
/// - `SelectionError::ParentNotFolder` if the parent is not a folder
pub fn validate_submission(
    mode: SelectionMode,
    name: &str,
    parent: &HierarchyNode,
) -> Result<(), SelectionError> {
    match mode {
        SelectionMode::NewFile => {
            if name.is_empty() {
                return Err(SelectionError::MissingName);
            }
            require_folder(parent)
        }
        SelectionMode::NewFileItem => require_folder(parent),
        SelectionMode::Item
        | SelectionMode::File
        | SelectionMode::Image
        | SelectionMode::Directory => Ok(()),
    }
}

fn require_folder(parent: &HierarchyNode) -> Result<(), SelectionError> {
    if parent.kind == ResourceKind::Folder {
        Ok(())
    } else {
        Err(SelectionError::ParentNotFolder)
    }
}
