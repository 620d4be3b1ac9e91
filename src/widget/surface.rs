//! Presentation surface abstraction
//!
//! The widget driver never touches dialog chrome directly. It reports
//! through [`Surface`], implemented by the terminal host and by
//! [`RecordingSurface`](super::mock::RecordingSurface) in tests.

use crate::model::{HierarchyNode, SelectionModel};
use serde::Serialize;

/// Construction options for the external hierarchy browser
///
/// The browser's item-click callback is wired by the host to
/// [`SelectorWidget::item_clicked`](super::SelectorWidget::item_clicked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyOptions {
    /// Node the browser is rooted at
    pub parent: HierarchyNode,
    pub checkboxes: bool,
    pub routing: bool,
    pub show_actions: bool,
    pub show_metadata: bool,
    pub download_links: bool,
    pub view_links: bool,
}

impl HierarchyOptions {
    /// Read-only browsing rooted at `parent`: no checkboxes, routing,
    /// actions, metadata or links
    #[must_use]
    pub fn browse_only(parent: HierarchyNode) -> Self {
        Self {
            parent,
            checkboxes: false,
            routing: false,
            show_actions: false,
            show_metadata: false,
            download_links: false,
            view_links: false,
        }
    }
}

/// Dialog chrome and host notifications
pub trait Surface {
    /// Show the dialog with a hierarchy browser built from `options`
    fn show_modal(&mut self, options: &HierarchyOptions);

    /// Close the dialog
    fn hide_modal(&mut self);

    /// Display an inline error message
    fn show_error(&mut self, message: &str);

    /// Hide the inline error message
    fn clear_error(&mut self);

    /// Mark or unmark the new-file name input as errored
    fn set_name_field_error(&mut self, errored: bool);

    /// Notify the host that the model was saved
    fn saved(&mut self, model: &SelectionModel);
}
