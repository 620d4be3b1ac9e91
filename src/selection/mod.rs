//! Selection resolution core
//!
//! Decides, per configured [`SelectionMode`](crate::model::SelectionMode),
//! whether a click or submit yields a result, needs an asynchronous
//! lookup first, or is rejected with an inline error. Everything here is
//! pure: no I/O, no presentation. The widget driver performs lookups and
//! translates transitions into surface calls.
//!
//! # Architecture
//!
//! - `path`: breadcrumb trail to result path projection
//! - `validate`: submission checks for the new-file modes
//! - `resolver`: the mode-keyed decision table
//! - `session`: lifecycle state machine with lookup tickets
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──show──▶ AwaitingSelection ◀──────────── rejected (error shown)
//!                    │       │                          ▲
//!                    │       └─click (file/image)──▶ AwaitingLookup
//!                    │                                  │
//!                    ├──click/submit──▶ Emitted ◀───────┘
//!                    └──dismiss──────▶ Dismissed
//! ```

pub mod error;
pub mod path;
pub mod resolver;
pub mod session;
pub mod validate;

pub use error::{ErrorKind, SelectionError};
pub use path::selection_path;
pub use resolver::{Decision, FILE_LISTING_LIMIT, Lookup, LookupResponse};
pub use session::{IgnoreReason, LookupRequest, LookupTicket, Phase, SessionState, Step, Transition};
pub use validate::validate_submission;
