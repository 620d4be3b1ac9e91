//! Domain model for hierarchy selection
//!
//! Plain data types shared by the resolver, the widget driver and the
//! resource client. Wire names follow the resource server's JSON
//! (`_id`, `_modelType`, `largeImage`, ...) so records can be decoded
//! straight from REST responses.
//!
//! # Types
//!
//! - **`HierarchyNode`**: a folder, item, collection or user seen while browsing
//! - **`BreadcrumbTrail`**: ordered ancestors from root to current location
//! - **`FileRef`**: a fully fetched file record
//! - **`SelectionMode`** / **`Channel`**: closed configuration enumerations
//! - **`SelectionResult`** / **`SelectionModel`**: what a session produces

pub mod error;
pub mod mode;
pub mod types;

pub use error::ModelError;
pub use mode::{Channel, SelectionMode};
pub use types::{
    BreadcrumbTrail, FileRef, HierarchyNode, LargeImage, NewItem, ResourceKind, SelectionModel,
    SelectionResult, SelectionValue,
};
