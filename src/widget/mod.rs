//! Selector widget driver
//!
//! Glues the pure [`SessionState`] machine to a resource client and a
//! presentation [`Surface`]. The host forwards browser clicks and form
//! submissions; the widget performs lookups, discards anything that
//! arrives after dismissal, and reports every transition to the surface.
//!
//! # Workflow
//!
//! ```text
//! SelectorWidget::new ── resolves root (current user) once
//!     ↓
//! render() ── show dialog, returns HierarchyOptions for the browser
//!     ↓
//! ┌─→ item_clicked() / submitted()
//! │       ├─ Emitted  → saved(model), hide dialog, done
//! │       ├─ Pending  → lookup (raced against dismissal) → continue
//! │       ├─ Rejected → show error inline ─┐
//! │       └─ Ignored                       │
//! └────────────────────────────────────────┘
//! ```

pub mod mock;
pub mod surface;
pub mod terminal;

pub use mock::{RecordingSurface, SurfaceCall};
pub use surface::{HierarchyOptions, Surface};
pub use terminal::{BrowserOutcome, TerminalBrowser, TerminalSurface};

use crate::client::{self, ResourceClient};
use crate::model::{BreadcrumbTrail, Channel, HierarchyNode, SelectionModel};
use crate::selection::{
    IgnoreReason, Lookup, LookupResponse, Phase, SelectionError, SessionState, Step, Transition,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Construction settings supplied by the host
#[derive(Debug, Clone, Default)]
pub struct SelectorSettings {
    /// Model to finalize; defaults to an `input` channel `item` selection
    pub model: Option<SelectionModel>,

    /// Root for output selections
    pub task_folder: Option<HierarchyNode>,

    /// Root for everything else; the current user when absent
    pub root_path: Option<HierarchyNode>,
}

/// Result of forwarding one event to the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Session finished; the finalized model was signalled to the host
    Saved(SelectionModel),

    /// Attempt rejected; the error is on display
    Rejected(SelectionError),

    /// Event had no effect
    Ignored(IgnoreReason),

    /// Session was dismissed before a result was produced
    Dismissed,
}

/// Lets the host dismiss the dialog while a lookup is outstanding
#[derive(Debug, Clone)]
pub struct DismissHandle(CancellationToken);

impl DismissHandle {
    /// Dismiss the session; any pending lookup is abandoned
    pub fn dismiss(&self) {
        self.0.cancel();
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.0.is_cancelled()
    }
}

/// One selection session bound to a client and a surface
pub struct SelectorWidget<C, S> {
    client: C,
    surface: S,
    model: SelectionModel,
    state: SessionState,
    cancel: CancellationToken,
}

impl<C: ResourceClient, S: Surface> SelectorWidget<C, S> {
    /// Create a widget, resolving the browsing root once
    ///
    /// Output selections are rooted at `task_folder` when given; otherwise
    /// the root is `root_path`, falling back to the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the root has to be resolved and the current
    /// user cannot be fetched.
    pub async fn new(settings: SelectorSettings, client: C, surface: S) -> client::Result<Self> {
        let model = settings.model.unwrap_or_default();

        let task_root = match model.channel {
            Channel::Output => settings.task_folder,
            Channel::Input => None,
        };
        let root = match task_root.or(settings.root_path) {
            Some(root) => root,
            None => client.current_user().await?,
        };

        info!(mode = %model.mode, channel = %model.channel, root = %root.name, "selector created");
        Ok(Self {
            client,
            surface,
            state: SessionState::new(model.mode, root),
            model,
            cancel: CancellationToken::new(),
        })
    }

    /// Show the dialog and return the options for the hierarchy browser
    pub fn render(&mut self) -> HierarchyOptions {
        self.sync_dismissal();
        let options = HierarchyOptions::browse_only(self.state.root().clone());
        if self.state.phase() == Phase::Idle {
            self.state = self.state.show();
            self.surface.show_modal(&options);
        }
        options
    }

    /// Forward a click on a browser node
    pub async fn item_clicked(&mut self, node: &HierarchyNode, trail: &BreadcrumbTrail) -> Outcome {
        self.sync_dismissal();
        debug!(node = %node.id, kind = %node.kind, "item clicked");
        let step = self.state.click(node, trail);
        self.drive(step, trail).await
    }

    /// Forward a submission of the new-file form
    pub async fn submitted(&mut self, name: &str, trail: &BreadcrumbTrail) -> Outcome {
        self.sync_dismissal();
        debug!(name, "form submitted");
        let step = self.state.submit(name, trail);
        self.drive(step, trail).await
    }

    /// Dismiss the dialog without a result
    pub fn dismiss(&mut self) {
        self.cancel.cancel();
        self.sync_dismissal();
    }

    /// Handle for dismissing from elsewhere on the same executor
    #[must_use]
    pub fn dismiss_handle(&self) -> DismissHandle {
        DismissHandle(self.cancel.clone())
    }

    /// Apply a dismissal requested through a [`DismissHandle`]
    ///
    /// A handle only flags the session; the host calls this to move it to
    /// `Dismissed` and hide the dialog without waiting for the next event.
    /// Returns whether the session is dismissed.
    pub fn poll_dismissal(&mut self) -> bool {
        self.sync_dismissal();
        self.state.phase() == Phase::Dismissed
    }

    /// Model as configured, or finalized after a successful session
    #[must_use]
    pub const fn model(&self) -> &SelectionModel {
        &self.model
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Node the browser is rooted at
    #[must_use]
    pub const fn root(&self) -> &HierarchyNode {
        self.state.root()
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    fn sync_dismissal(&mut self) {
        if !self.cancel.is_cancelled() || self.state.phase().is_terminal() {
            return;
        }
        info!("selector dismissed");
        let shown = self.state.phase() != Phase::Idle;
        self.state = self.state.dismiss();
        if shown {
            self.surface.hide_modal();
        }
    }

    async fn drive(&mut self, mut step: Step, trail: &BreadcrumbTrail) -> Outcome {
        loop {
            let Step { state, transition } = step;
            self.state = state;

            match transition {
                Transition::Ignored(reason) => {
                    debug!(?reason, "event ignored");
                    return Outcome::Ignored(reason);
                }
                Transition::Rejected(err) => {
                    self.reset_errors();
                    warn!(error = %err, kind = ?err.kind(), "selection rejected");
                    self.surface.show_error(&err.to_string());
                    if err.marks_name_field() {
                        self.surface.set_name_field_error(true);
                    }
                    return Outcome::Rejected(err);
                }
                Transition::Emitted(result) => {
                    self.reset_errors();
                    info!(value = result.value.name(), path = ?result.path, "selection saved");
                    self.model.apply(result);
                    self.surface.saved(&self.model);
                    self.surface.hide_modal();
                    return Outcome::Saved(self.model.clone());
                }
                Transition::Pending(request) => {
                    self.reset_errors();
                    debug!(lookup = ?request.lookup, "lookup issued");
                    let Some(response) = self.perform(&request.lookup).await else {
                        self.sync_dismissal();
                        return Outcome::Dismissed;
                    };
                    if self.cancel.is_cancelled() {
                        debug!("discarding lookup response after dismissal");
                        self.sync_dismissal();
                        return Outcome::Dismissed;
                    }
                    step = self.state.complete(request.ticket, response, trail);
                }
            }
        }
    }

    /// Run one lookup unless the session is dismissed first
    async fn perform(&self, lookup: &Lookup) -> Option<LookupResponse> {
        let work = async {
            match lookup {
                Lookup::ListFiles { item_id, limit } => {
                    LookupResponse::Files(self.client.list_files(item_id, *limit).await)
                }
                Lookup::FetchFile { file_id } => {
                    LookupResponse::File(self.client.fetch_file(file_id).await)
                }
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            response = work => Some(response),
        }
    }

    fn reset_errors(&mut self) {
        self.surface.clear_error();
        self.surface.set_name_field_error(false);
    }
}
