//! Mode-keyed decision table
//!
//! Maps `(mode, event)` onto a [`Decision`]. Lookups are described, not
//! performed: the caller runs them and feeds the response back through
//! [`resolve_lookup`].

use super::error::SelectionError;
use super::path::selection_path;
use super::validate::validate_submission;
use crate::client::ClientError;
use crate::model::{
    BreadcrumbTrail, FileRef, HierarchyNode, NewItem, ResourceKind, SelectionMode,
    SelectionResult, SelectionValue,
};

/// Number of files requested when resolving an item to its file
pub const FILE_LISTING_LIMIT: usize = 1;

/// Asynchronous follow-up needed before a result can be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// List the files attached to an item
    ListFiles { item_id: String, limit: usize },

    /// Fetch a complete file record
    FetchFile { file_id: String },
}

/// Completion of a [`Lookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Files(Result<Vec<FileRef>, ClientError>),
    File(Result<FileRef, ClientError>),
}

/// Outcome of evaluating one event against the configured mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Terminal result, ready to emit
    Emit(SelectionResult),

    /// Result depends on a lookup
    Lookup(Lookup),

    /// Attempt rejected with an inline error
    Reject(SelectionError),

    /// Event does not apply to this mode
    Ignore,
}

/// Decide what a click on `node` means
#[must_use]
pub fn resolve_click(
    mode: SelectionMode,
    node: &HierarchyNode,
    trail: &BreadcrumbTrail,
) -> Decision {
    match (mode, node.kind) {
        (SelectionMode::Item, ResourceKind::Item) => emit(mode, trail, SelectionValue::Item(node.clone())),
        (SelectionMode::Directory, ResourceKind::Folder) => {
            emit(mode, trail, SelectionValue::Directory(node.clone()))
        }
        (SelectionMode::File, ResourceKind::Item) => Decision::Lookup(Lookup::ListFiles {
            item_id: node.id.clone(),
            limit: FILE_LISTING_LIMIT,
        }),
        (SelectionMode::Image, ResourceKind::Item) => {
            match node.large_image.as_ref().and_then(|image| image.preferred_file_id()) {
                Some(file_id) => Decision::Lookup(Lookup::FetchFile {
                    file_id: file_id.to_string(),
                }),
                None => Decision::Reject(SelectionError::NotLargeImage),
            }
        }
        // new-file modes only react to submission
        _ => Decision::Ignore,
    }
}

/// Decide what a form submission means
///
/// `parent` is the location currently shown by the browser.
#[must_use]
pub fn resolve_submit(
    mode: SelectionMode,
    name: &str,
    parent: &HierarchyNode,
    trail: &BreadcrumbTrail,
) -> Decision {
    if !mode.accepts_submit() {
        return Decision::Ignore;
    }
    if let Err(err) = validate_submission(mode, name, parent) {
        return Decision::Reject(err);
    }

    match mode {
        SelectionMode::NewFile => Decision::Emit(SelectionResult {
            path: selection_path(mode, trail),
            value: SelectionValue::NewItem(NewItem {
                name: name.to_string(),
                folder_id: parent.id.clone(),
            }),
            parent: Some(parent.clone()),
        }),
        _ => emit(mode, trail, SelectionValue::Directory(parent.clone())),
    }
}

/// Continue after a lookup completed
#[must_use]
pub fn resolve_lookup(
    mode: SelectionMode,
    response: LookupResponse,
    trail: &BreadcrumbTrail,
) -> Decision {
    match response {
        LookupResponse::Files(Err(err)) => Decision::Reject(SelectionError::ListFilesFailed(err)),
        LookupResponse::Files(Ok(files)) => match files.into_iter().next() {
            Some(first) => Decision::Lookup(Lookup::FetchFile { file_id: first.id }),
            None => Decision::Reject(SelectionError::NoFiles),
        },
        LookupResponse::File(Err(err)) => Decision::Reject(SelectionError::FetchFailed(err)),
        LookupResponse::File(Ok(file)) => emit(mode, trail, SelectionValue::File(file)),
    }
}

fn emit(mode: SelectionMode, trail: &BreadcrumbTrail, value: SelectionValue) -> Decision {
    Decision::Emit(SelectionResult {
        path: selection_path(mode, trail),
        value,
        parent: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LargeImage;
    use crate::testing::{collection, folder, item, trail, user};

    fn sample_trail() -> BreadcrumbTrail {
        trail(&[user("u1", "alice"), folder("f1", "Public")])
    }

    #[test]
    fn test_item_click_emits_immediately() {
        let node = item("i1", "scan");
        let decision = resolve_click(SelectionMode::Item, &node, &sample_trail());

        assert_eq!(
            decision,
            Decision::Emit(SelectionResult {
                path: vec!["alice".into(), "Public".into()],
                value: SelectionValue::Item(node),
                parent: None,
            })
        );
    }

    #[test]
    fn test_item_mode_ignores_folders() {
        let decision = resolve_click(SelectionMode::Item, &folder("f2", "sub"), &sample_trail());
        assert_eq!(decision, Decision::Ignore);
    }

    #[test]
    fn test_directory_click_emits_folder_without_last_breadcrumb() {
        let node = folder("f2", "results");
        let decision = resolve_click(SelectionMode::Directory, &node, &sample_trail());

        assert_eq!(
            decision,
            Decision::Emit(SelectionResult {
                path: vec!["alice".into()],
                value: SelectionValue::Directory(node),
                parent: None,
            })
        );
    }

    #[test]
    fn test_file_click_lists_one_file() {
        let decision = resolve_click(SelectionMode::File, &item("i1", "scan"), &sample_trail());
        assert_eq!(
            decision,
            Decision::Lookup(Lookup::ListFiles {
                item_id: "i1".into(),
                limit: 1
            })
        );
    }

    #[test]
    fn test_image_click_without_descriptor_rejected() {
        let decision = resolve_click(SelectionMode::Image, &item("i1", "scan"), &sample_trail());
        assert_eq!(decision, Decision::Reject(SelectionError::NotLargeImage));
    }

    #[test]
    fn test_image_click_prefers_file_id() {
        let node = item("i1", "scan").with_large_image(LargeImage {
            file_id: Some("derived".into()),
            original_id: Some("original".into()),
        });
        let decision = resolve_click(SelectionMode::Image, &node, &sample_trail());
        assert_eq!(
            decision,
            Decision::Lookup(Lookup::FetchFile {
                file_id: "derived".into()
            })
        );
    }

    #[test]
    fn test_image_click_falls_back_to_original_id() {
        let node = item("i1", "scan").with_large_image(LargeImage {
            file_id: None,
            original_id: Some("original".into()),
        });
        let decision = resolve_click(SelectionMode::Image, &node, &sample_trail());
        assert_eq!(
            decision,
            Decision::Lookup(Lookup::FetchFile {
                file_id: "original".into()
            })
        );
    }

    #[test]
    fn test_new_file_modes_ignore_clicks() {
        for mode in [SelectionMode::NewFile, SelectionMode::NewFileItem] {
            assert_eq!(resolve_click(mode, &item("i1", "x"), &sample_trail()), Decision::Ignore);
            assert_eq!(resolve_click(mode, &folder("f2", "x"), &sample_trail()), Decision::Ignore);
        }
    }

    #[test]
    fn test_click_modes_ignore_submit() {
        for mode in [SelectionMode::Item, SelectionMode::File, SelectionMode::Image] {
            let decision = resolve_submit(mode, "name", &folder("f1", "Public"), &sample_trail());
            assert_eq!(decision, Decision::Ignore);
        }
    }

    #[test]
    fn test_new_file_submit_declares_item_under_parent() {
        let parent = folder("f1", "Public");
        let decision = resolve_submit(SelectionMode::NewFile, "out.tif", &parent, &sample_trail());

        assert_eq!(
            decision,
            Decision::Emit(SelectionResult {
                path: vec!["alice".into(), "Public".into()],
                value: SelectionValue::NewItem(NewItem {
                    name: "out.tif".into(),
                    folder_id: "f1".into(),
                }),
                parent: Some(parent),
            })
        );
    }

    #[test]
    fn test_new_file_item_submit_emits_parent() {
        let parent = folder("f1", "Public");
        let decision = resolve_submit(SelectionMode::NewFileItem, "", &parent, &sample_trail());

        match decision {
            Decision::Emit(result) => assert_eq!(result.value, SelectionValue::Directory(parent)),
            other => panic!("Expected Emit, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_under_collection_rejected() {
        let decision = resolve_submit(
            SelectionMode::NewFileItem,
            "",
            &collection("c1", "Lab"),
            &trail(&[collection("c1", "Lab")]),
        );
        assert_eq!(decision, Decision::Reject(SelectionError::ParentNotFolder));
    }

    #[test]
    fn test_directory_submit_emits_current_parent() {
        let parent = folder("f1", "Public");
        let decision = resolve_submit(SelectionMode::Directory, "", &parent, &sample_trail());

        assert_eq!(
            decision,
            Decision::Emit(SelectionResult {
                path: vec!["alice".into()],
                value: SelectionValue::Directory(parent),
                parent: None,
            })
        );
    }

    #[test]
    fn test_empty_listing_rejected() {
        let decision = resolve_lookup(
            SelectionMode::File,
            LookupResponse::Files(Ok(vec![])),
            &sample_trail(),
        );
        assert_eq!(decision, Decision::Reject(SelectionError::NoFiles));
    }

    #[test]
    fn test_listing_leads_to_fetch_by_id() {
        let decision = resolve_lookup(
            SelectionMode::File,
            LookupResponse::Files(Ok(vec![FileRef::new("file1", "a.tif")])),
            &sample_trail(),
        );
        assert_eq!(
            decision,
            Decision::Lookup(Lookup::FetchFile {
                file_id: "file1".into()
            })
        );
    }

    #[test]
    fn test_listing_failure_rejected() {
        let err = ClientError::Transport("connection refused".into());
        let decision = resolve_lookup(
            SelectionMode::File,
            LookupResponse::Files(Err(err.clone())),
            &sample_trail(),
        );
        assert_eq!(decision, Decision::Reject(SelectionError::ListFilesFailed(err)));
    }

    #[test]
    fn test_fetched_file_emitted() {
        let mut file = FileRef::new("file1", "a.tif");
        file.size = Some(10);
        let decision = resolve_lookup(
            SelectionMode::Image,
            LookupResponse::File(Ok(file.clone())),
            &sample_trail(),
        );

        assert_eq!(
            decision,
            Decision::Emit(SelectionResult {
                path: vec!["alice".into(), "Public".into()],
                value: SelectionValue::File(file),
                parent: None,
            })
        );
    }

    #[test]
    fn test_fetch_failure_rejected() {
        let err = ClientError::NotFound("file file1".into());
        let decision = resolve_lookup(
            SelectionMode::Image,
            LookupResponse::File(Err(err.clone())),
            &sample_trail(),
        );
        assert_eq!(decision, Decision::Reject(SelectionError::FetchFailed(err)));
    }
}
