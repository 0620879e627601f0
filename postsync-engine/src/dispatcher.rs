//! Create-or-update of the remote collection.
//!
//! Exactly one write is issued per dispatch: an update addressed by the
//! located collection's uid, or a create addressed by the workspace id. A
//! failed write is never followed by the other kind of write.

use std::fmt;

use postsync_core::{
    ApiFailure, CollectionApi, CollectionDefinition, CollectionPayload, CollectionRef,
    CollectionSummary, NormalizedAuth, WorkspaceMetadata,
};

use crate::error::{remote_err, Operation, SyncError};

/// Which write a successful dispatch performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Created,
    Updated,
}

impl fmt::Display for UpsertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertAction::Created => write!(f, "created"),
            UpsertAction::Updated => write!(f, "updated"),
        }
    }
}

/// Result of a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created {
        workspace: WorkspaceMetadata,
        collection: CollectionRef,
    },
    Updated {
        workspace: WorkspaceMetadata,
        collection: CollectionRef,
    },
    Failed {
        operation: Operation,
        workspace: WorkspaceMetadata,
        failure: ApiFailure,
    },
}

/// A completed upsert, as reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted {
    pub action: UpsertAction,
    pub workspace: WorkspaceMetadata,
    pub collection: CollectionRef,
}

impl UpsertOutcome {
    /// Turn a `Failed` outcome into its [`SyncError`].
    pub fn into_result(self) -> Result<Upserted, SyncError> {
        match self {
            UpsertOutcome::Created {
                workspace,
                collection,
            } => Ok(Upserted {
                action: UpsertAction::Created,
                workspace,
                collection,
            }),
            UpsertOutcome::Updated {
                workspace,
                collection,
            } => Ok(Upserted {
                action: UpsertAction::Updated,
                workspace,
                collection,
            }),
            UpsertOutcome::Failed {
                operation,
                workspace,
                failure,
            } => Err(remote_err(operation, Some(&workspace.name), failure)),
        }
    }
}

/// Write `definition` (with `auth` as its auth block) to the remote.
///
/// `located` selects the write: `Some` updates that collection, `None` creates
/// a new one in `workspace`.
pub fn dispatch<A: CollectionApi>(
    api: &A,
    located: Option<&CollectionSummary>,
    workspace: &WorkspaceMetadata,
    definition: &CollectionDefinition,
    auth: Option<NormalizedAuth>,
) -> UpsertOutcome {
    let payload = CollectionPayload::new(definition, auth);

    let (operation, result) = match located {
        Some(existing) => {
            tracing::debug!(uid = %existing.uid, "updating collection");
            (
                Operation::Update,
                api.update_collection(&existing.uid, &payload),
            )
        }
        None => {
            tracing::debug!(workspace = %workspace.id, "creating collection");
            (
                Operation::Create,
                api.create_collection(&workspace.id, &payload),
            )
        }
    };

    match result {
        Ok(mut collection) => {
            if collection.name.is_empty() {
                collection.name = payload.name().to_owned();
            }
            if collection.uid.is_empty() {
                if let Some(existing) = located {
                    collection.uid = existing.uid.0.clone();
                }
            }
            let workspace = workspace.clone();
            match located {
                Some(_) => UpsertOutcome::Updated {
                    workspace,
                    collection,
                },
                None => UpsertOutcome::Created {
                    workspace,
                    collection,
                },
            }
        }
        Err(failure) => {
            tracing::debug!(%operation, %failure, "collection write rejected");
            UpsertOutcome::Failed {
                operation,
                workspace: workspace.clone(),
                failure,
            }
        }
    }
}
