//! Selection session state machine
//!
//! A [`SessionState`] is a small value owned by one widget for one user
//! interaction. Every event produces a [`Step`]: the next state plus the
//! [`Transition`] the presentation layer should act on. The state itself
//! is never mutated in place.
//!
//! # Lookup tickets
//!
//! Each lookup is issued under a fresh [`LookupTicket`]. Only a completion
//! bearing the pending ticket is accepted; anything else is stale. Clicks
//! and submits while a lookup is pending are ignored, and nothing is
//! accepted once the session is emitted or dismissed.

use super::error::SelectionError;
use super::resolver::{self, Decision, Lookup, LookupResponse};
use crate::model::{BreadcrumbTrail, HierarchyNode, SelectionMode, SelectionResult};

/// Identifies one issued lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupTicket(u64);

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet shown
    Idle,

    /// Shown and waiting for a click or submit
    AwaitingSelection,

    /// Waiting for the lookup with this ticket
    AwaitingLookup(LookupTicket),

    /// Result emitted (terminal)
    Emitted,

    /// Dialog dismissed without a result (terminal)
    Dismissed,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Emitted | Self::Dismissed)
    }
}

/// Lookup the caller must perform and report back with its ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: LookupTicket,
    pub lookup: Lookup,
}

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Event does not apply to the configured mode or node kind
    NotApplicable,

    /// Session has not been shown yet
    NotShown,

    /// Another lookup is still outstanding
    LookupPending,

    /// Session already emitted or was dismissed
    Closed,

    /// Completion for a lookup that is no longer pending
    Stale,
}

/// What the presentation layer should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Result is final; signal it and close
    Emitted(SelectionResult),

    /// Attempt rejected; show the error and stay open
    Rejected(SelectionError),

    /// Perform this lookup and report its response
    Pending(LookupRequest),

    /// Nothing to do
    Ignored(IgnoreReason),
}

/// Next state plus the transition that produced it
#[derive(Debug, Clone)]
#[must_use]
pub struct Step {
    pub state: SessionState,
    pub transition: Transition,
}

/// Transient state of one selection session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    mode: SelectionMode,
    root: HierarchyNode,
    phase: Phase,
    last_error: Option<SelectionError>,
    next_ticket: u64,
}

impl SessionState {
    /// New idle session browsing from `root`
    #[must_use]
    pub fn new(mode: SelectionMode, root: HierarchyNode) -> Self {
        Self {
            mode,
            root,
            phase: Phase::Idle,
            last_error: None,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Node the browser is rooted at
    #[must_use]
    pub const fn root(&self) -> &HierarchyNode {
        &self.root
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Error from the most recent rejected attempt, if still displayed
    #[must_use]
    pub const fn last_error(&self) -> Option<&SelectionError> {
        self.last_error.as_ref()
    }

    /// Show the session; only an idle session changes
    #[must_use]
    pub fn show(&self) -> Self {
        let mut next = self.clone();
        if next.phase == Phase::Idle {
            next.phase = Phase::AwaitingSelection;
        }
        next
    }

    /// Dismiss the session; an emitted session stays emitted
    #[must_use]
    pub fn dismiss(&self) -> Self {
        let mut next = self.clone();
        if next.phase != Phase::Emitted {
            next.phase = Phase::Dismissed;
        }
        next
    }

    /// Handle a click on a node in the browser
    pub fn click(&self, node: &HierarchyNode, trail: &BreadcrumbTrail) -> Step {
        if let Some(reason) = self.blocked() {
            return self.unchanged(reason);
        }
        self.apply(resolver::resolve_click(self.mode, node, trail))
    }

    /// Handle a form submission with the typed name
    pub fn submit(&self, name: &str, trail: &BreadcrumbTrail) -> Step {
        if let Some(reason) = self.blocked() {
            return self.unchanged(reason);
        }
        let parent = trail.current().unwrap_or(&self.root);
        self.apply(resolver::resolve_submit(self.mode, name, parent, trail))
    }

    /// Feed back the response of a lookup
    pub fn complete(
        &self,
        ticket: LookupTicket,
        response: LookupResponse,
        trail: &BreadcrumbTrail,
    ) -> Step {
        match self.phase {
            Phase::AwaitingLookup(pending) if pending == ticket => {
                self.apply(resolver::resolve_lookup(self.mode, response, trail))
            }
            Phase::Emitted | Phase::Dismissed => self.unchanged(IgnoreReason::Closed),
            _ => self.unchanged(IgnoreReason::Stale),
        }
    }

    fn blocked(&self) -> Option<IgnoreReason> {
        match self.phase {
            Phase::AwaitingSelection => None,
            Phase::Idle => Some(IgnoreReason::NotShown),
            Phase::AwaitingLookup(_) => Some(IgnoreReason::LookupPending),
            Phase::Emitted | Phase::Dismissed => Some(IgnoreReason::Closed),
        }
    }

    fn unchanged(&self, reason: IgnoreReason) -> Step {
        Step {
            state: self.clone(),
            transition: Transition::Ignored(reason),
        }
    }

    fn apply(&self, decision: Decision) -> Step {
        let mut next = self.clone();
        let transition = match decision {
            Decision::Ignore => {
                // Not an attempt: the current phase and error stay as they were
                return self.unchanged(IgnoreReason::NotApplicable);
            }
            Decision::Emit(result) => {
                next.last_error = None;
                next.phase = Phase::Emitted;
                Transition::Emitted(result)
            }
            Decision::Lookup(lookup) => {
                let ticket = LookupTicket(next.next_ticket);
                next.next_ticket += 1;
                next.last_error = None;
                next.phase = Phase::AwaitingLookup(ticket);
                Transition::Pending(LookupRequest { ticket, lookup })
            }
            Decision::Reject(err) => {
                next.last_error = Some(err.clone());
                next.phase = Phase::AwaitingSelection;
                Transition::Rejected(err)
            }
        };
        Step {
            state: next,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::model::{FileRef, SelectionValue};
    use crate::testing::{collection, folder, item, trail, user};

    fn shown(mode: SelectionMode) -> SessionState {
        SessionState::new(mode, user("u1", "alice")).show()
    }

    fn pending_request(step: &Step) -> LookupRequest {
        match &step.transition {
            Transition::Pending(request) => request.clone(),
            other => panic!("Expected Pending, got {other:?}"),
        }
    }

    #[test]
    fn test_new_session_is_idle_and_ignores_clicks() {
        let state = SessionState::new(SelectionMode::Item, user("u1", "alice"));
        assert_eq!(state.phase(), Phase::Idle);

        let step = state.click(&item("i1", "scan"), &trail(&[user("u1", "alice")]));
        assert_eq!(step.transition, Transition::Ignored(IgnoreReason::NotShown));
    }

    #[test]
    fn test_item_click_emits_and_closes() {
        let trail = trail(&[user("u1", "alice"), folder("f1", "Public")]);
        let step = shown(SelectionMode::Item).click(&item("i1", "scan"), &trail);

        assert!(matches!(step.transition, Transition::Emitted(_)));
        assert_eq!(step.state.phase(), Phase::Emitted);

        let again = step.state.click(&item("i2", "other"), &trail);
        assert_eq!(again.transition, Transition::Ignored(IgnoreReason::Closed));
    }

    #[test]
    fn test_file_click_walks_list_then_fetch() {
        let trail = trail(&[user("u1", "alice")]);
        let first = shown(SelectionMode::File).click(&item("i1", "scan"), &trail);
        let list = pending_request(&first);
        assert_eq!(
            list.lookup,
            Lookup::ListFiles {
                item_id: "i1".into(),
                limit: 1
            }
        );

        let second = first.state.complete(
            list.ticket,
            LookupResponse::Files(Ok(vec![FileRef::new("file1", "a.tif")])),
            &trail,
        );
        let fetch = pending_request(&second);
        assert_ne!(fetch.ticket, list.ticket);

        let mut full = FileRef::new("file1", "a.tif");
        full.size = Some(99);
        let last = second
            .state
            .complete(fetch.ticket, LookupResponse::File(Ok(full.clone())), &trail);

        match last.transition {
            Transition::Emitted(result) => assert_eq!(result.value, SelectionValue::File(full)),
            other => panic!("Expected Emitted, got {other:?}"),
        }
        assert_eq!(last.state.phase(), Phase::Emitted);
    }

    #[test]
    fn test_click_while_lookup_pending_is_ignored() {
        let trail = trail(&[user("u1", "alice")]);
        let first = shown(SelectionMode::File).click(&item("i1", "scan"), &trail);
        let second = first.state.click(&item("i2", "other"), &trail);

        assert_eq!(
            second.transition,
            Transition::Ignored(IgnoreReason::LookupPending)
        );
        assert_eq!(second.state, first.state);
    }

    #[test]
    fn test_empty_listing_returns_to_awaiting_selection() {
        let trail = trail(&[user("u1", "alice")]);
        let first = shown(SelectionMode::File).click(&item("i1", "scan"), &trail);
        let request = pending_request(&first);

        let step = first
            .state
            .complete(request.ticket, LookupResponse::Files(Ok(vec![])), &trail);

        assert_eq!(step.transition, Transition::Rejected(SelectionError::NoFiles));
        assert_eq!(step.state.phase(), Phase::AwaitingSelection);
        assert_eq!(step.state.last_error(), Some(&SelectionError::NoFiles));
    }

    #[test]
    fn test_completion_after_dismiss_is_discarded() {
        let trail = trail(&[user("u1", "alice")]);
        let first = shown(SelectionMode::File).click(&item("i1", "scan"), &trail);
        let request = pending_request(&first);
        let dismissed = first.state.dismiss();

        let step = dismissed.complete(
            request.ticket,
            LookupResponse::Files(Ok(vec![FileRef::new("file1", "a")])),
            &trail,
        );

        assert_eq!(step.transition, Transition::Ignored(IgnoreReason::Closed));
        assert_eq!(step.state, dismissed);
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let trail = trail(&[user("u1", "alice")]);
        let first = shown(SelectionMode::File).click(&item("i1", "scan"), &trail);
        let list = pending_request(&first);
        let second = first.state.complete(
            list.ticket,
            LookupResponse::Files(Ok(vec![FileRef::new("file1", "a")])),
            &trail,
        );

        // Replaying the first ticket must not be accepted again
        let replay = second.state.complete(
            list.ticket,
            LookupResponse::File(Ok(FileRef::new("file1", "a"))),
            &trail,
        );
        assert_eq!(replay.transition, Transition::Ignored(IgnoreReason::Stale));
    }

    #[test]
    fn test_rejection_cleared_by_next_successful_attempt() {
        let browsing = trail(&[collection("c1", "Lab")]);
        let rejected = shown(SelectionMode::NewFile).submit("", &browsing);
        assert_eq!(
            rejected.transition,
            Transition::Rejected(SelectionError::MissingName)
        );

        let still_rejected = rejected.state.submit("out.tif", &browsing);
        assert_eq!(
            still_rejected.transition,
            Transition::Rejected(SelectionError::ParentNotFolder)
        );
        assert_eq!(
            still_rejected.state.last_error(),
            Some(&SelectionError::ParentNotFolder)
        );

        let in_folder = trail(&[collection("c1", "Lab"), folder("f1", "data")]);
        let accepted = still_rejected.state.submit("out.tif", &in_folder);
        assert!(matches!(accepted.transition, Transition::Emitted(_)));
        assert_eq!(accepted.state.last_error(), None);
    }

    #[test]
    fn test_submit_with_empty_trail_uses_root_as_parent() {
        let state = SessionState::new(SelectionMode::NewFileItem, folder("f9", "tasks")).show();
        let step = state.submit("", &BreadcrumbTrail::default());

        match step.transition {
            Transition::Emitted(result) => {
                assert_eq!(result.value, SelectionValue::Directory(folder("f9", "tasks")));
            }
            other => panic!("Expected Emitted, got {other:?}"),
        }
    }

    #[test]
    fn test_ignored_click_keeps_previous_error() {
        let browsing = trail(&[user("u1", "alice")]);
        let rejected = shown(SelectionMode::Image).click(&item("i1", "plain"), &browsing);
        assert_eq!(rejected.state.last_error(), Some(&SelectionError::NotLargeImage));

        let ignored = rejected.state.click(&folder("f1", "Public"), &browsing);
        assert_eq!(
            ignored.transition,
            Transition::Ignored(IgnoreReason::NotApplicable)
        );
        assert_eq!(ignored.state.last_error(), Some(&SelectionError::NotLargeImage));
    }

    #[test]
    fn test_lookup_failure_is_recoverable() {
        let browsing = trail(&[user("u1", "alice")]);
        let first = shown(SelectionMode::File).click(&item("i1", "scan"), &browsing);
        let request = pending_request(&first);
        let failed = first.state.complete(
            request.ticket,
            LookupResponse::Files(Err(ClientError::Transport("reset".into()))),
            &browsing,
        );
        assert_eq!(failed.state.phase(), Phase::AwaitingSelection);

        let retry = failed.state.click(&item("i1", "scan"), &browsing);
        assert!(matches!(retry.transition, Transition::Pending(_)));
    }

    #[test]
    fn test_emitted_session_stays_emitted_on_dismiss() {
        let browsing = trail(&[user("u1", "alice")]);
        let step = shown(SelectionMode::Item).click(&item("i1", "scan"), &browsing);
        assert_eq!(step.state.dismiss().phase(), Phase::Emitted);
    }
}
