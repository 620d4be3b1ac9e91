//! Terminal host for the selector widget
//!
//! `TerminalSurface` renders the dialog chrome as colored stderr lines;
//! `TerminalBrowser` plays the part of the hierarchy browser with
//! dialoguer menus, keeping the breadcrumb trail and forwarding item
//! clicks and submissions to the widget.

use super::surface::{HierarchyOptions, Surface};
use super::{Outcome, SelectorWidget};
use crate::client::{HierarchySource, ResourceClient};
use crate::model::{
    BreadcrumbTrail, HierarchyNode, SelectionMode, SelectionModel, SelectionValue,
};
use byte_unit::{Byte, UnitType};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tracing::debug;

/// Surface writing to the terminal
#[derive(Debug, Default)]
pub struct TerminalSurface {
    quiet: bool,
    name_errored: bool,
}

impl TerminalSurface {
    /// Create a terminal surface; `quiet` suppresses informational lines
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
            name_errored: false,
        }
    }

    /// Whether the last attempt flagged the name input
    #[must_use]
    pub const fn name_errored(&self) -> bool {
        self.name_errored
    }
}

impl Surface for TerminalSurface {
    fn show_modal(&mut self, options: &HierarchyOptions) {
        if !self.quiet {
            eprintln!(
                "{}",
                format!("Browsing from {} '{}'", options.parent.kind, options.parent.name).dimmed()
            );
        }
    }

    fn hide_modal(&mut self) {}

    fn show_error(&mut self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    // Printed lines cannot be taken back
    fn clear_error(&mut self) {}

    fn set_name_field_error(&mut self, errored: bool) {
        self.name_errored = errored;
    }

    fn saved(&mut self, model: &SelectionModel) {
        if self.quiet {
            return;
        }
        if let Some(value) = &model.value {
            eprintln!("{} {}", "✓".green(), describe_value(value));
        }
    }
}

/// One-line description of a selected value
#[must_use]
pub fn describe_value(value: &SelectionValue) -> String {
    match value {
        SelectionValue::Item(node) => format!("Selected item '{}'", node.name),
        SelectionValue::Directory(node) => format!("Selected folder '{}'", node.name),
        SelectionValue::NewItem(item) => format!("New file '{}' declared", item.name),
        SelectionValue::File(file) => match file.size {
            Some(size) => {
                let size = Byte::from_u64(size)
                    .get_appropriate_unit(UnitType::Binary)
                    .to_string();
                format!("Selected file '{}' ({size})", file.name)
            }
            None => format!("Selected file '{}'", file.name),
        },
    }
}

/// Entry in the browser menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Go to the parent location
    Up,
    /// Submit the form at the current location
    Submit,
    /// A child folder or item
    Node(HierarchyNode),
    /// Close without selecting
    Cancel,
}

impl MenuEntry {
    /// Text shown in the menu
    #[must_use]
    pub fn label(&self, mode: SelectionMode) -> String {
        match self {
            Self::Up => "..".to_string(),
            Self::Submit => match mode {
                SelectionMode::NewFile => "[Create new file here]".to_string(),
                _ => "[Select this folder]".to_string(),
            },
            Self::Node(node) if node.kind.is_container() => format!("{}/", node.name),
            Self::Node(node) => node.name.clone(),
            Self::Cancel => "[Cancel]".to_string(),
        }
    }
}

/// Menu for the current location
#[must_use]
pub fn menu_entries(
    mode: SelectionMode,
    trail: &BreadcrumbTrail,
    children: Vec<HierarchyNode>,
) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(children.len() + 3);
    if trail.len() > 1 {
        entries.push(MenuEntry::Up);
    }
    if mode.accepts_submit() {
        entries.push(MenuEntry::Submit);
    }
    entries.extend(children.into_iter().map(MenuEntry::Node));
    entries.push(MenuEntry::Cancel);
    entries
}

/// How an interactive browse ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    Saved(SelectionModel),
    Cancelled,
}

/// Source of menu choices for [`TerminalBrowser`]
pub trait MenuPrompt {
    /// Pick one of `labels`; `None` when the user backs out
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be read.
    fn choose(&mut self, title: &str, labels: &[String]) -> crate::Result<Option<usize>>;

    /// Read the name of a new file; may be empty
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be read.
    fn new_file_name(&mut self) -> crate::Result<String>;
}

/// Prompt backed by dialoguer menus on the terminal
#[derive(Default)]
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl MenuPrompt for DialoguerPrompt {
    fn choose(&mut self, title: &str, labels: &[String]) -> crate::Result<Option<usize>> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(labels)
            .default(0)
            .interact_opt()?)
    }

    fn new_file_name(&mut self) -> crate::Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt("New file name")
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Interactive hierarchy browser
///
/// Lists the children of the current location, keeps the breadcrumb
/// trail while descending, and forwards clicks and submissions.
pub struct TerminalBrowser<'a, H, P = DialoguerPrompt> {
    source: &'a H,
    page_limit: usize,
    prompt: P,
}

impl<'a, H: HierarchySource> TerminalBrowser<'a, H> {
    #[must_use]
    pub fn new(source: &'a H, page_limit: usize) -> Self {
        Self::with_prompt(source, page_limit, DialoguerPrompt::default())
    }
}

impl<'a, H: HierarchySource, P: MenuPrompt> TerminalBrowser<'a, H, P> {
    /// Create a browser reading its choices from `prompt`
    #[must_use]
    pub const fn with_prompt(source: &'a H, page_limit: usize, prompt: P) -> Self {
        Self {
            source,
            page_limit,
            prompt,
        }
    }

    /// Browse until the widget saves or the user cancels
    ///
    /// # Errors
    ///
    /// Returns an error if a listing request fails or the terminal prompt
    /// cannot be read.
    pub async fn run<C, S>(
        &mut self,
        widget: &mut SelectorWidget<C, S>,
    ) -> crate::Result<BrowserOutcome>
    where
        C: ResourceClient,
        S: Surface,
    {
        let options = widget.render();
        let mode = widget.model().mode;
        let mut trail = BreadcrumbTrail::rooted_at(options.parent);

        loop {
            let Some(current) = trail.current().cloned() else {
                widget.dismiss();
                return Ok(BrowserOutcome::Cancelled);
            };
            let children = self.source.children(&current, self.page_limit).await?;
            let entries = menu_entries(mode, &trail, children);
            let labels: Vec<String> = entries.iter().map(|entry| entry.label(mode)).collect();

            let choice = self.prompt.choose(&trail.names().join(" / "), &labels)?;
            let Some(entry) = choice.and_then(|index| entries.get(index)) else {
                widget.dismiss();
                return Ok(BrowserOutcome::Cancelled);
            };

            let outcome = match entry {
                MenuEntry::Up => {
                    trail.pop();
                    continue;
                }
                MenuEntry::Cancel => {
                    widget.dismiss();
                    return Ok(BrowserOutcome::Cancelled);
                }
                MenuEntry::Node(node) if node.kind.is_container() => {
                    debug!(folder = %node.name, "descending");
                    trail.push(node.clone());
                    continue;
                }
                MenuEntry::Node(node) => widget.item_clicked(node, &trail).await,
                MenuEntry::Submit => {
                    let name = if mode == SelectionMode::NewFile {
                        self.prompt.new_file_name()?
                    } else {
                        String::new()
                    };
                    widget.submitted(&name, &trail).await
                }
            };

            match outcome {
                Outcome::Saved(model) => return Ok(BrowserOutcome::Saved(model)),
                Outcome::Dismissed => return Ok(BrowserOutcome::Cancelled),
                Outcome::Rejected(_) => {}
                Outcome::Ignored(reason) => debug!(?reason, %mode, "event had no effect"),
            }
        }
    }
}
