//! Core data types
//!
//! Pure data structures with minimal logic. Field names map onto the
//! resource server's JSON via serde renames; direct field access is used
//! everywhere else.

use super::error::ModelError;
use super::mode::{Channel, SelectionMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Hierarchy Types
// ============================================================================

/// Type tag of a browsable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Folder,
    Item,
    File,
    Collection,
    User,
}

impl ResourceKind {
    /// Lowercase wire name (`folder`, `item`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Item => "item",
            Self::File => "file",
            Self::Collection => "collection",
            Self::User => "user",
        }
    }

    /// Whether nodes of this kind can contain folders
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Folder | Self::Collection | Self::User)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "item" => Ok(Self::Item),
            "file" => Ok(Self::File),
            "collection" => Ok(Self::Collection),
            "user" => Ok(Self::User),
            other => Err(ModelError::UnknownResourceKind(other.to_string())),
        }
    }
}

/// Large-image descriptor attached to an item
///
/// Points at the file used as the item's canonical image. `file_id` is the
/// processed (derived) file and wins over `original_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargeImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
}

impl LargeImage {
    /// File id to fetch for this image, preferring the derived file
    #[must_use]
    pub fn preferred_file_id(&self) -> Option<&str> {
        non_empty(self.file_id.as_deref()).or_else(|| non_empty(self.original_id.as_deref()))
    }
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}

/// A folder, item, collection or user encountered while browsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Server-side identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Resource kind tag
    #[serde(rename = "_modelType")]
    pub kind: ResourceKind,

    /// Display name (users expose their login instead)
    #[serde(default, alias = "login")]
    pub name: String,

    /// Large-image descriptor, only present on converted items
    #[serde(rename = "largeImage", default, skip_serializing_if = "Option::is_none")]
    pub large_image: Option<LargeImage>,
}

impl HierarchyNode {
    /// Create a node without large-image metadata
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            large_image: None,
        }
    }

    /// Attach a large-image descriptor
    #[must_use]
    pub fn with_large_image(mut self, image: LargeImage) -> Self {
        self.large_image = Some(image);
        self
    }
}

/// Ordered ancestors from the browser root to the current location
///
/// Owned by the hierarchy browser; the selection core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail(Vec<HierarchyNode>);

impl BreadcrumbTrail {
    /// Trail starting at a single root node
    #[must_use]
    pub fn rooted_at(root: HierarchyNode) -> Self {
        Self(vec![root])
    }

    /// Currently displayed location (last breadcrumb)
    #[must_use]
    pub fn current(&self) -> Option<&HierarchyNode> {
        self.0.last()
    }

    /// Breadcrumb names in order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|node| node.name.clone()).collect()
    }

    /// Descend into a child location
    pub fn push(&mut self, node: HierarchyNode) {
        self.0.push(node);
    }

    /// Move up one level; the root is never removed
    pub fn pop(&mut self) -> Option<HierarchyNode> {
        if self.0.len() > 1 { self.0.pop() } else { None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<HierarchyNode>> for BreadcrumbTrail {
    fn from(nodes: Vec<HierarchyNode>) -> Self {
        Self(nodes)
    }
}

// ============================================================================
// File Types
// ============================================================================

/// A fully fetched file record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl FileRef {
    /// Bare reference carrying only an id and name
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_id: None,
            size: None,
            mime_type: None,
            created: None,
        }
    }
}

/// Declaration of an item that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub folder_id: String,
}

// ============================================================================
// Selection Output
// ============================================================================

/// Resolved entity of a successful selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SelectionValue {
    /// An existing item
    Item(HierarchyNode),

    /// A fetched file record
    File(FileRef),

    /// A folder used as a destination directory
    Directory(HierarchyNode),

    /// A declared, unpersisted item
    NewItem(NewItem),
}

impl SelectionValue {
    /// Human readable name of the selected entity
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Item(node) | Self::Directory(node) => &node.name,
            Self::File(file) => &file.name,
            Self::NewItem(item) => &item.name,
        }
    }
}

/// Normalized result of a selection session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Names of the containing location, root first
    pub path: Vec<String>,

    /// The resolved entity
    pub value: SelectionValue,

    /// Folder a new item is declared under (new-file only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<HierarchyNode>,
}

/// Host-facing model a widget is configured with and finalizes on success
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionModel {
    #[serde(default)]
    pub channel: Channel,

    #[serde(rename = "type", default)]
    pub mode: SelectionMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<SelectionValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<HierarchyNode>,
}

impl SelectionModel {
    /// Model for a given channel and mode with nothing selected yet
    #[must_use]
    pub fn new(channel: Channel, mode: SelectionMode) -> Self {
        Self {
            channel,
            mode,
            ..Self::default()
        }
    }

    /// Copy a session result into the model
    pub fn apply(&mut self, result: SelectionResult) {
        self.path = Some(result.path);
        self.value = Some(result.value);
        self.parent = result.parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_decodes_server_json() {
        let json = r#"{
            "_id": "5a1",
            "_modelType": "item",
            "name": "slide.svs",
            "folderId": "f1",
            "largeImage": {"fileId": "abc", "originalId": "def", "sourceName": "tiff"}
        }"#;
        let node: HierarchyNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.id, "5a1");
        assert_eq!(node.kind, ResourceKind::Item);
        assert_eq!(node.name, "slide.svs");
        let image = node.large_image.unwrap();
        assert_eq!(image.file_id.as_deref(), Some("abc"));
        assert_eq!(image.original_id.as_deref(), Some("def"));
    }

    #[test]
    fn test_user_node_uses_login_as_name() {
        let json = r#"{"_id": "u1", "_modelType": "user", "login": "alice"}"#;
        let node: HierarchyNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, ResourceKind::User);
        assert_eq!(node.name, "alice");
    }

    #[test]
    fn test_large_image_prefers_derived_file() {
        let both = LargeImage {
            file_id: Some("derived".into()),
            original_id: Some("original".into()),
        };
        assert_eq!(both.preferred_file_id(), Some("derived"));

        let original_only = LargeImage {
            file_id: None,
            original_id: Some("original".into()),
        };
        assert_eq!(original_only.preferred_file_id(), Some("original"));

        assert_eq!(LargeImage::default().preferred_file_id(), None);
    }

    #[test]
    fn test_large_image_empty_derived_id_falls_back_to_original() {
        let image = LargeImage {
            file_id: Some(String::new()),
            original_id: Some("orig".into()),
        };
        assert_eq!(image.preferred_file_id(), Some("orig"));

        let both_empty = LargeImage {
            file_id: Some(String::new()),
            original_id: Some(String::new()),
        };
        assert_eq!(both_empty.preferred_file_id(), None);
    }

    #[test]
    fn test_file_decodes_with_timestamp() {
        let json = r#"{
            "_id": "file1",
            "name": "a.tif",
            "itemId": "item1",
            "size": 1024,
            "mimeType": "image/tiff",
            "created": "2017-05-04T13:20:11.123000+00:00"
        }"#;
        let file: FileRef = serde_json::from_str(json).unwrap();
        assert_eq!(file.item_id.as_deref(), Some("item1"));
        assert_eq!(file.size, Some(1024));
        assert!(file.created.is_some());
    }

    #[test]
    fn test_trail_pop_keeps_root() {
        let mut trail = BreadcrumbTrail::rooted_at(HierarchyNode::new(
            "u1",
            ResourceKind::User,
            "alice",
        ));
        trail.push(HierarchyNode::new("f1", ResourceKind::Folder, "Public"));

        assert_eq!(trail.pop().map(|n| n.id), Some("f1".to_string()));
        assert_eq!(trail.pop(), None);
        assert_eq!(trail.names(), vec!["alice".to_string()]);
    }

    #[test]
    fn test_model_serializes_mode_as_type() {
        let model = SelectionModel::new(Channel::Output, SelectionMode::Directory);
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["type"], "directory");
        assert_eq!(json["channel"], "output");
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_model_apply_sets_path_and_value() {
        let mut model = SelectionModel::new(Channel::Input, SelectionMode::Item);
        let node = HierarchyNode::new("i1", ResourceKind::Item, "scan");
        model.apply(SelectionResult {
            path: vec!["alice".into(), "Public".into()],
            value: SelectionValue::Item(node.clone()),
            parent: None,
        });

        assert_eq!(
            model.path,
            Some(vec!["alice".to_string(), "Public".to_string()])
        );
        assert_eq!(model.value, Some(SelectionValue::Item(node)));
    }
}
