//! Core traits for resource access

use super::error::Result;
use crate::model::{FileRef, HierarchyNode, ResourceKind};

/// Lookups the selection core issues while resolving a click
///
/// Futures are awaited on a single-threaded executor, so implementations
/// need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait ResourceClient {
    /// List up to `limit` files attached to an item
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn list_files(&self, item_id: &str, limit: usize) -> Result<Vec<FileRef>>;

    /// Fetch a complete file record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the file does not exist.
    async fn fetch_file(&self, file_id: &str) -> Result<FileRef>;

    /// Resolve the authenticated user, used as the default browsing root
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or nobody is logged in.
    async fn current_user(&self) -> Result<HierarchyNode>;
}

/// Listing of browsable children, used by hosts that render the hierarchy
#[allow(async_fn_in_trait)]
pub trait HierarchySource {
    /// Fetch a node by kind and id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the node does not exist.
    async fn node(&self, kind: ResourceKind, id: &str) -> Result<HierarchyNode>;

    /// Sub-folders followed by items directly under `parent`
    ///
    /// # Errors
    ///
    /// Returns an error if either listing request fails.
    async fn children(&self, parent: &HierarchyNode, limit: usize) -> Result<Vec<HierarchyNode>>;
}
