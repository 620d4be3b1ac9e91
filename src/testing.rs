//! Testing utilities for selectr
//!
//! Small constructors for hierarchy fixtures so tests read like the
//! breadcrumb trails they describe.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::{BreadcrumbTrail, FileRef, HierarchyNode, ResourceKind};

/// Folder node
pub fn folder(id: &str, name: &str) -> HierarchyNode {
    HierarchyNode::new(id, ResourceKind::Folder, name)
}

/// Item node without large-image metadata
pub fn item(id: &str, name: &str) -> HierarchyNode {
    HierarchyNode::new(id, ResourceKind::Item, name)
}

/// User node (a browsing root)
pub fn user(id: &str, login: &str) -> HierarchyNode {
    HierarchyNode::new(id, ResourceKind::User, login)
}

/// Collection node
pub fn collection(id: &str, name: &str) -> HierarchyNode {
    HierarchyNode::new(id, ResourceKind::Collection, name)
}

/// File record with a size, so it differs from a listing stub
pub fn file(id: &str, name: &str, size: u64) -> FileRef {
    let mut file = FileRef::new(id, name);
    file.size = Some(size);
    file
}

/// Breadcrumb trail from a slice of nodes, root first
pub fn trail(nodes: &[HierarchyNode]) -> BreadcrumbTrail {
    BreadcrumbTrail::from(nodes.to_vec())
}
