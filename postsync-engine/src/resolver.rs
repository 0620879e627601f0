//! Workspace lookup. The name is only used in messages.

use postsync_core::{CollectionApi, WorkspaceId, WorkspaceMetadata};

use crate::error::{remote_err, Operation, SyncError};

/// Fetch workspace metadata. One round trip, no retry.
pub fn resolve_workspace<A: CollectionApi>(
    api: &A,
    workspace_id: &WorkspaceId,
) -> Result<WorkspaceMetadata, SyncError> {
    let workspace = api
        .get_workspace(workspace_id)
        .map_err(|failure| remote_err(Operation::WorkspaceLookup, None, failure))?;
    tracing::info!(workspace = %workspace.name, id = %workspace.id, "resolved workspace");
    Ok(workspace)
}
