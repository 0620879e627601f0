//! Finds the remote collection sharing the local collection's name.

use postsync_core::{CollectionApi, CollectionSummary, WorkspaceId};

use crate::error::{remote_err, Operation, SyncError};

/// First summary whose name equals `name` exactly (case-sensitive).
pub fn find_by_name<'a>(
    collections: &'a [CollectionSummary],
    name: &str,
) -> Option<&'a CollectionSummary> {
    collections.iter().find(|c| c.name == name)
}

/// List the workspace's collections and pick the one named `target_name`.
///
/// `Ok(None)` means no collection matched and one should be created. The
/// listing is assumed to be complete in a single response.
pub fn locate<A: CollectionApi>(
    api: &A,
    workspace_id: &WorkspaceId,
    target_name: &str,
) -> Result<Option<CollectionSummary>, SyncError> {
    let collections = api
        .list_collections(workspace_id)
        .map_err(|failure| remote_err(Operation::MetadataListing, None, failure))?;

    let matches = collections.iter().filter(|c| c.name == target_name).count();
    if matches > 1 {
        tracing::warn!(
            name = target_name,
            matches,
            "several remote collections share this name; using the first listed"
        );
    }

    let found = find_by_name(&collections, target_name).cloned();
    match &found {
        Some(c) => tracing::info!(uid = %c.uid, "found existing collection '{target_name}'"),
        None => tracing::info!("no collection named '{target_name}' in workspace"),
    }
    Ok(found)
}
