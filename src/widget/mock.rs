//! Recording surface for testing

use super::surface::{HierarchyOptions, Surface};
use crate::model::SelectionModel;

/// Call recorded by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    ShowModal(HierarchyOptions),
    HideModal,
    ShowError(String),
    ClearError,
    NameFieldError(bool),
    Saved(SelectionModel),
}

/// Surface that records every call instead of drawing anything
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Models passed to `saved`, in order
    #[must_use]
    pub fn saved_models(&self) -> Vec<&SelectionModel> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Saved(model) => Some(model),
                _ => None,
            })
            .collect()
    }

    /// Most recent error message still on display
    #[must_use]
    pub fn visible_error(&self) -> Option<&str> {
        self.calls.iter().fold(None, |visible, call| match call {
            SurfaceCall::ShowError(message) => Some(message.as_str()),
            SurfaceCall::ClearError => None,
            _ => visible,
        })
    }

    /// Whether the name field is currently marked as errored
    #[must_use]
    pub fn name_field_errored(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::NameFieldError(errored) => Some(*errored),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Whether the dialog is currently shown
    #[must_use]
    pub fn modal_visible(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::ShowModal(_) => Some(true),
                SurfaceCall::HideModal => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Surface for RecordingSurface {
    fn show_modal(&mut self, options: &HierarchyOptions) {
        self.calls.push(SurfaceCall::ShowModal(options.clone()));
    }

    fn hide_modal(&mut self) {
        self.calls.push(SurfaceCall::HideModal);
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(SurfaceCall::ShowError(message.to_string()));
    }

    fn clear_error(&mut self) {
        self.calls.push(SurfaceCall::ClearError);
    }

    fn set_name_field_error(&mut self, errored: bool) {
        self.calls.push(SurfaceCall::NameFieldError(errored));
    }

    fn saved(&mut self, model: &SelectionModel) {
        self.calls.push(SurfaceCall::Saved(model.clone()));
    }
}
