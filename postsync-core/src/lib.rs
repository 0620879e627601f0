//! postsync core library — collection types, auth normalization, and the
//! remote API seam.
//!
//! - [`types`] — local collection and remote metadata types
//! - [`auth`] — auth blocks and [`normalize`]
//! - [`api`] — [`CollectionApi`] and its [`ApiFailure`] envelope

pub mod api;
pub mod auth;
pub mod types;

pub use api::{ApiFailure, ApiResult, CollectionApi};
pub use auth::{normalize, AuthKind, AuthVariant, NormalizedAuth};
pub use types::{
    CollectionDefinition, CollectionInfo, CollectionPayload, CollectionRef, CollectionSummary,
    CollectionUid, WorkspaceId, WorkspaceMetadata,
};
