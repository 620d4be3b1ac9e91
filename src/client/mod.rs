//! Resource client layer
//!
//! The selection core talks to the resource server only through the
//! narrow async traits defined here. `GirderClient` implements them over
//! REST; `MockClient` scripts responses for tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  SelectorWidget / browser    │
//! └──────────────┬───────────────┘
//!                │ ResourceClient, HierarchySource
//!        ┌───────┴────────┐
//!        ▼                ▼
//! ┌──────────────┐ ┌──────────────┐
//! │ GirderClient │ │ MockClient   │
//! │  (reqwest)   │ │  (tests)     │
//! └──────────────┘ └──────────────┘
//! ```

pub mod error;
pub mod girder;
pub mod mock;
pub mod traits;

pub use error::{ClientError, Result};
pub use girder::GirderClient;
pub use mock::{MockCall, MockClient, ResponseGate};
pub use traits::{HierarchySource, ResourceClient};
