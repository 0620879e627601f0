//! Error types for postsync-engine.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use postsync_core::ApiFailure;

/// Remote operation a [`SyncError::RemoteApi`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    WorkspaceLookup,
    MetadataListing,
    Create,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::WorkspaceLookup => write!(f, "workspace lookup"),
            Operation::MetadataListing => write!(f, "collection metadata listing"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
        }
    }
}

/// Orchestrator stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    LoadInput,
    NormalizeAuth,
    ResolveWorkspace,
    LocateCollection,
    Dispatch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::LoadInput => write!(f, "load-input"),
            Stage::NormalizeAuth => write!(f, "normalize-auth"),
            Stage::ResolveWorkspace => write!(f, "resolve-workspace"),
            Stage::LocateCollection => write!(f, "locate-collection"),
            Stage::Dispatch => write!(f, "dispatch"),
        }
    }
}

/// All errors that end a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required parameter was missing or blank.
    #[error("input required and not supplied: {name}")]
    MissingInput { name: &'static str },

    /// The collection file could not be read.
    #[error("failed to read collection at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file is not valid JSON or does not match the schema.
    #[error("failed to parse collection at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The remote service reported a failure.
    #[error("{}", describe_remote(.operation, .workspace, .failure))]
    RemoteApi {
        operation: Operation,
        /// Workspace display name, once it is known.
        workspace: Option<String>,
        failure: ApiFailure,
    },
}

impl SyncError {
    /// The stage the run was in when this error ended it.
    pub fn stage(&self) -> Stage {
        match self {
            SyncError::MissingInput { .. } | SyncError::Read { .. } | SyncError::Parse { .. } => {
                Stage::LoadInput
            }
            SyncError::RemoteApi { operation, .. } => match operation {
                Operation::WorkspaceLookup => Stage::ResolveWorkspace,
                Operation::MetadataListing => Stage::LocateCollection,
                Operation::Create | Operation::Update => Stage::Dispatch,
            },
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            SyncError::RemoteApi { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

fn describe_remote(operation: &Operation, workspace: &Option<String>, failure: &ApiFailure) -> String {
    match (operation, workspace) {
        (Operation::Create, Some(name)) => {
            format!("failed to create collection in workspace '{name}': {failure}")
        }
        (Operation::Update, Some(name)) => {
            format!("failed to update collection in workspace '{name}': {failure}")
        }
        (Operation::MetadataListing, _) => {
            format!("{operation} failed: could not load collection metadata from workspace: {failure}")
        }
        _ => format!("{operation} failed: {failure}"),
    }
}

/// Convenience constructor for [`SyncError::RemoteApi`].
pub(crate) fn remote_err(
    operation: Operation,
    workspace: Option<&str>,
    failure: ApiFailure,
) -> SyncError {
    SyncError::RemoteApi {
        operation,
        workspace: workspace.map(str::to_owned),
        failure,
    }
}
