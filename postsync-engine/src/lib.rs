//! # postsync-engine
//!
//! Collection reconciliation: resolve the workspace, find a same-named remote
//! collection, and create or update it.
//!
//! Call [`pipeline::run`] with a [`CollectionApi`](postsync_core::CollectionApi)
//! implementation and validated [`SyncInputs`].

pub mod dispatcher;
pub mod error;
pub mod inputs;
pub mod loader;
pub mod locator;
pub mod pipeline;
pub mod resolver;

#[cfg(test)]
mod fake;

pub use dispatcher::{dispatch, UpsertAction, UpsertOutcome, Upserted};
pub use error::{Operation, Stage, SyncError};
pub use inputs::{ApiKey, SyncInputs};
pub use loader::load_collection;
pub use locator::{find_by_name, locate};
pub use resolver::resolve_workspace;
