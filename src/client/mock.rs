//! Mock resource client for testing

use super::error::{ClientError, Result};
use super::traits::{HierarchySource, ResourceClient};
use crate::model::{FileRef, HierarchyNode, ResourceKind};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Call recorded by [`MockClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ListFiles { item_id: String, limit: usize },
    FetchFile { file_id: String },
    CurrentUser,
    Node { id: String },
    Children { parent_id: String },
}

/// Holds mock responses back until released
///
/// Lets a test interleave a dismissal with an outstanding lookup.
#[derive(Debug, Clone)]
pub struct ResponseGate(Arc<Semaphore>);

impl ResponseGate {
    /// Create a closed gate
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(Semaphore::new(0)))
    }

    /// Let one waiting (or future) response through
    pub fn release(&self) {
        self.0.add_permits(1);
    }

    async fn wait(&self) {
        if let Ok(permit) = self.0.acquire().await {
            permit.forget();
        }
    }
}

impl Default for ResponseGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock client that answers from predetermined records
///
/// `with_files` registers full records for `fetch_file` but answers
/// `list_files` with id/name stubs, mirroring how the server's listing is
/// lighter than a by-id fetch.
#[derive(Debug, Default)]
pub struct MockClient {
    listings: HashMap<String, Result<Vec<FileRef>>>,
    files: HashMap<String, Result<FileRef>>,
    nodes: HashMap<String, HierarchyNode>,
    children: HashMap<String, Vec<HierarchyNode>>,
    user: Option<HierarchyNode>,
    list_gate: Option<ResponseGate>,
    fetch_gate: Option<ResponseGate>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockClient {
    /// Create an empty mock client
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user returned by `current_user`
    #[must_use]
    pub fn with_user(mut self, user: HierarchyNode) -> Self {
        self.nodes.insert(user.id.clone(), user.clone());
        self.user = Some(user);
        self
    }

    /// Attach files to an item
    #[must_use]
    pub fn with_files(mut self, item_id: &str, files: Vec<FileRef>) -> Self {
        let stubs = files
            .iter()
            .map(|file| FileRef::new(file.id.clone(), file.name.clone()))
            .collect();
        self.listings.insert(item_id.to_string(), Ok(stubs));
        for file in files {
            self.files.insert(file.id.clone(), Ok(file));
        }
        self
    }

    /// Register a file reachable only by id
    #[must_use]
    pub fn with_file(mut self, file: FileRef) -> Self {
        self.files.insert(file.id.clone(), Ok(file));
        self
    }

    /// Make listing an item's files fail
    #[must_use]
    pub fn with_list_error(mut self, item_id: &str, err: ClientError) -> Self {
        self.listings.insert(item_id.to_string(), Err(err));
        self
    }

    /// Make fetching a file fail
    #[must_use]
    pub fn with_fetch_error(mut self, file_id: &str, err: ClientError) -> Self {
        self.files.insert(file_id.to_string(), Err(err));
        self
    }

    /// Register browsable children of a node
    #[must_use]
    pub fn with_children(mut self, parent_id: &str, children: Vec<HierarchyNode>) -> Self {
        for child in &children {
            self.nodes.insert(child.id.clone(), child.clone());
        }
        self.children.insert(parent_id.to_string(), children);
        self
    }

    /// Hold `list_files` responses until the gate is released
    #[must_use]
    pub fn with_list_gate(mut self, gate: ResponseGate) -> Self {
        self.list_gate = Some(gate);
        self
    }

    /// Hold `fetch_file` responses until the gate is released
    #[must_use]
    pub fn with_fetch_gate(mut self, gate: ResponseGate) -> Self {
        self.fetch_gate = Some(gate);
        self
    }

    /// Calls made so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl ResourceClient for MockClient {
    async fn list_files(&self, item_id: &str, limit: usize) -> Result<Vec<FileRef>> {
        self.record(MockCall::ListFiles {
            item_id: item_id.to_string(),
            limit,
        });
        if let Some(gate) = &self.list_gate {
            gate.wait().await;
        }
        match self.listings.get(item_id) {
            Some(Ok(files)) => Ok(files.iter().take(limit).cloned().collect()),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_file(&self, file_id: &str) -> Result<FileRef> {
        self.record(MockCall::FetchFile {
            file_id: file_id.to_string(),
        });
        if let Some(gate) = &self.fetch_gate {
            gate.wait().await;
        }
        self.files
            .get(file_id)
            .cloned()
            .unwrap_or_else(|| Err(ClientError::NotFound(format!("file {file_id}"))))
    }

    async fn current_user(&self) -> Result<HierarchyNode> {
        self.record(MockCall::CurrentUser);
        self.user
            .clone()
            .ok_or_else(|| ClientError::NotFound("current user".into()))
    }
}

impl HierarchySource for MockClient {
    async fn node(&self, kind: ResourceKind, id: &str) -> Result<HierarchyNode> {
        self.record(MockCall::Node { id: id.to_string() });
        self.nodes
            .get(id)
            .filter(|node| node.kind == kind)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("{kind} {id}")))
    }

    async fn children(&self, parent: &HierarchyNode, limit: usize) -> Result<Vec<HierarchyNode>> {
        self.record(MockCall::Children {
            parent_id: parent.id.clone(),
        });
        Ok(self
            .children
            .get(&parent.id)
            .map(|nodes| nodes.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
