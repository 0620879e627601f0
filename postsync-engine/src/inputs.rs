//! Run parameters, validated before any file or network I/O.

use std::fmt;
use std::path::{Path, PathBuf};

use postsync_core::WorkspaceId;

use crate::error::SyncError;

/// Secret key for the remote service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// The three parameters a run needs.
#[derive(Debug, Clone)]
pub struct SyncInputs {
    api_key: ApiKey,
    workspace_id: WorkspaceId,
    collection_path: PathBuf,
}

impl SyncInputs {
    /// Validate raw parameter values.
    ///
    /// Missing, empty, and whitespace-only values are rejected with
    /// [`SyncError::MissingInput`], checked in declaration order.
    pub fn new(
        api_key: Option<String>,
        workspace_id: Option<String>,
        collection_path: Option<String>,
    ) -> Result<Self, SyncError> {
        let api_key = required("api-key", api_key)?;
        let workspace_id = required("workspace-id", workspace_id)?;
        let collection_path = required("collection-path", collection_path)?;
        Ok(Self {
            api_key: ApiKey(api_key),
            workspace_id: WorkspaceId::from(workspace_id),
            collection_path: PathBuf::from(collection_path),
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    pub fn collection_path(&self) -> &Path {
        &self.collection_path
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, SyncError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SyncError::MissingInput { name }),
    }
}
