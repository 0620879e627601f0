//! The remote collection service, as seen by the sync engine.
//!
//! Every call returns either its success body or an [`ApiFailure`]; callers
//! treat any failure as terminal for the run.

use std::fmt;

use serde_json::Value;

use crate::types::{
    CollectionPayload, CollectionRef, CollectionSummary, CollectionUid, WorkspaceId,
    WorkspaceMetadata,
};

/// Failure envelope of a remote call.
///
/// `status` is the HTTP status when the service answered, `None` when the
/// request never completed. `payload` is the service's error body verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: Option<u16>,
    pub payload: Value,
}

impl ApiFailure {
    pub fn new(status: Option<u16>, payload: impl Into<Value>) -> Self {
        Self {
            status,
            payload: payload.into(),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP {status}: ")?;
        }
        match &self.payload {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

impl std::error::Error for ApiFailure {}

pub type ApiResult<T> = Result<T, ApiFailure>;

/// Operations consumed from the collection-hosting service.
pub trait CollectionApi {
    fn get_workspace(&self, workspace_id: &WorkspaceId) -> ApiResult<WorkspaceMetadata>;

    /// Every collection visible in the workspace, in service order.
    fn list_collections(&self, workspace_id: &WorkspaceId) -> ApiResult<Vec<CollectionSummary>>;

    fn create_collection(
        &self,
        workspace_id: &WorkspaceId,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef>;

    /// Replaces the whole remote collection body.
    fn update_collection(
        &self,
        collection_uid: &CollectionUid,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef>;
}

impl<T: CollectionApi + ?Sized> CollectionApi for &T {
    fn get_workspace(&self, workspace_id: &WorkspaceId) -> ApiResult<WorkspaceMetadata> {
        (**self).get_workspace(workspace_id)
    }

    fn list_collections(&self, workspace_id: &WorkspaceId) -> ApiResult<Vec<CollectionSummary>> {
        (**self).list_collections(workspace_id)
    }

    fn create_collection(
        &self,
        workspace_id: &WorkspaceId,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        (**self).create_collection(workspace_id, collection)
    }

    fn update_collection(
        &self,
        collection_uid: &CollectionUid,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        (**self).update_collection(collection_uid, collection)
    }
}
