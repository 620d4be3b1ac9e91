//! REST client for a Girder-compatible resource server

use super::error::{ClientError, Result};
use super::traits::{HierarchySource, ResourceClient};
use crate::model::{FileRef, HierarchyNode, ResourceKind};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Header carrying the authentication token
const TOKEN_HEADER: &str = "Girder-Token";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the server on failure
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Async REST client
#[derive(Debug, Clone)]
pub struct GirderClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GirderClient {
    /// Create a client for the API rooted at `api_url` (e.g. `http://host/api/v1`)
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token,
        })
    }

    /// Absolute URL for an API path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let mut request = self.http.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|err| err.message)
                .unwrap_or(body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl ResourceClient for GirderClient {
    async fn list_files(&self, item_id: &str, limit: usize) -> Result<Vec<FileRef>> {
        self.get_json(
            &format!("item/{item_id}/files"),
            &[("limit", limit.to_string())],
        )
        .await
    }

    async fn fetch_file(&self, file_id: &str) -> Result<FileRef> {
        self.get_json(&format!("file/{file_id}"), &[]).await
    }

    async fn current_user(&self) -> Result<HierarchyNode> {
        // Anonymous sessions get `null` back rather than an error status
        self.get_json::<Option<HierarchyNode>>("user/me", &[])
            .await?
            .ok_or_else(|| ClientError::NotFound("current user".into()))
    }
}

impl HierarchySource for GirderClient {
    async fn node(&self, kind: ResourceKind, id: &str) -> Result<HierarchyNode> {
        self.get_json(&format!("{kind}/{id}"), &[]).await
    }

    async fn children(&self, parent: &HierarchyNode, limit: usize) -> Result<Vec<HierarchyNode>> {
        let mut nodes: Vec<HierarchyNode> = Vec::new();
        if parent.kind.is_container() {
            let folders: Vec<HierarchyNode> = self
                .get_json(
                    "folder",
                    &[
                        ("parentType", parent.kind.to_string()),
                        ("parentId", parent.id.clone()),
                        ("limit", limit.to_string()),
                    ],
                )
                .await?;
            nodes.extend(folders);
        }
        if parent.kind == ResourceKind::Folder {
            let items: Vec<HierarchyNode> = self
                .get_json(
                    "item",
                    &[
                        ("folderId", parent.id.clone()),
                        ("limit", limit.to_string()),
                    ],
                )
                .await?;
            nodes.extend(items);
        }
        Ok(nodes)
    }
}
