//! Reads the local collection document.

use std::path::Path;

use postsync_core::CollectionDefinition;

use crate::error::SyncError;

/// Read and parse the collection at `path`.
///
/// Returns [`SyncError::Read`] if the file cannot be read and
/// [`SyncError::Parse`] if it is not a collection document.
pub fn load_collection(path: &Path) -> Result<CollectionDefinition, SyncError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let definition: CollectionDefinition =
        serde_json::from_str(&contents).map_err(|source| SyncError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("read collection from {}", path.display());
    Ok(definition)
}
