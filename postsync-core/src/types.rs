//! Domain types for local collections and remote workspace metadata.
//!
//! Request/folder items and every key this crate does not interpret are kept
//! as raw JSON so a collection written back to the remote is byte-for-byte the
//! document that was read, except for the auth block.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::{AuthVariant, NormalizedAuth};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Remote identifier of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(pub String);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for WorkspaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Remote identifier of a collection (`<owner>-<id>` on the hosting service).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionUid(pub String);

impl fmt::Display for CollectionUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CollectionUid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CollectionUid {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Local collection
// ---------------------------------------------------------------------------

/// The `info` block of a collection. Only `name` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A locally authored collection, as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDefinition {
    pub info: CollectionInfo,
    /// Requests and folders, in authored order. Opaque here.
    pub item: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthVariant>,
    /// `variable`, `event`, and any other top-level keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CollectionDefinition {
    pub fn name(&self) -> &str {
        &self.info.name
    }
}

/// The collection body sent on create and update: the local definition with
/// its auth block replaced by the normalized one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionPayload {
    pub info: CollectionInfo,
    pub item: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<NormalizedAuth>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CollectionPayload {
    pub fn new(definition: &CollectionDefinition, auth: Option<NormalizedAuth>) -> Self {
        Self {
            info: definition.info.clone(),
            item: definition.item.clone(),
            auth,
            extra: definition.extra.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }
}

// ---------------------------------------------------------------------------
// Remote metadata
// ---------------------------------------------------------------------------

/// Workspace as returned by the workspace lookup. Used only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceMetadata {
    pub id: WorkspaceId,
    pub name: String,
}

/// One entry of a workspace's collection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub uid: CollectionUid,
    pub name: String,
}

/// Identity of a collection the remote reports back after a write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
