//! Breadcrumb to path projection

use crate::model::{BreadcrumbTrail, SelectionMode};

/// Names of the location containing the selection, root first
///
/// In directory mode the last breadcrumb is the destination itself and is
/// carried by the result value, so it is left out of the path.
#[must_use]
pub fn selection_path(mode: SelectionMode, trail: &BreadcrumbTrail) -> Vec<String> {
    let mut names = trail.names();
    if mode == SelectionMode::Directory {
        names.pop();
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{folder, trail, user};

    #[test]
    fn test_path_includes_every_breadcrumb() {
        let trail = trail(&[user("u1", "alice"), folder("f1", "Public"), folder("f2", "scans")]);
        for mode in [
            SelectionMode::Item,
            SelectionMode::File,
            SelectionMode::Image,
            SelectionMode::NewFile,
            SelectionMode::NewFileItem,
        ] {
            assert_eq!(selection_path(mode, &trail), vec!["alice", "Public", "scans"]);
        }
    }

    #[test]
    fn test_directory_drops_last_breadcrumb() {
        let trail = trail(&[user("u1", "alice"), folder("f1", "Public")]);
        assert_eq!(selection_path(SelectionMode::Directory, &trail), vec!["alice"]);
    }

    #[test]
    fn test_empty_trail() {
        let trail = BreadcrumbTrail::default();
        assert!(selection_path(SelectionMode::Directory, &trail).is_empty());
        assert!(selection_path(SelectionMode::Item, &trail).is_empty());
    }
}
