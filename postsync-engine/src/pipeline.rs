//! Reconciliation entrypoint used by the CLI.
//!
//! Stages run strictly in order and the first failing stage ends the run:
//!
//! ```text
//! LoadInput -> NormalizeAuth -> ResolveWorkspace -> LocateCollection -> Dispatch
//! ```

use postsync_core::{normalize, CollectionApi, CollectionDefinition, WorkspaceId};

use crate::dispatcher::{dispatch, Upserted};
use crate::error::{Stage, SyncError};
use crate::inputs::SyncInputs;
use crate::loader::load_collection;
use crate::locator::locate;
use crate::resolver::resolve_workspace;

/// Load the collection named by `inputs` and upsert it into the workspace.
pub fn run<A: CollectionApi>(api: &A, inputs: &SyncInputs) -> Result<Upserted, SyncError> {
    tracing::debug!(stage = %Stage::LoadInput, path = %inputs.collection_path().display());
    let definition = load_collection(inputs.collection_path())?;
    reconcile(api, inputs.workspace_id(), &definition)
}

/// Upsert an already loaded collection into `workspace_id`.
pub fn reconcile<A: CollectionApi>(
    api: &A,
    workspace_id: &WorkspaceId,
    definition: &CollectionDefinition,
) -> Result<Upserted, SyncError> {
    tracing::debug!(stage = %Stage::NormalizeAuth);
    let auth = normalize(definition.auth.as_ref());

    tracing::debug!(stage = %Stage::ResolveWorkspace, %workspace_id);
    let workspace = resolve_workspace(api, workspace_id)?;

    tracing::debug!(stage = %Stage::LocateCollection, name = definition.name());
    let located = locate(api, workspace_id, definition.name())?;

    tracing::debug!(stage = %Stage::Dispatch);
    let upserted = dispatch(api, located.as_ref(), &workspace, definition, auth).into_result()?;

    tracing::info!(
        "successfully {} collection '{}' in workspace {}",
        upserted.action,
        upserted.collection.name,
        upserted.workspace.name
    );
    Ok(upserted)
}
