//! Collection auth blocks and their projection onto what the remote write API
//! accepts.
//!
//! A local auth block is any JSON object with a `type` string. Only `basic` and
//! `bearer` survive [`normalize`]; every other kind is dropped and the
//! collection is written without auth.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recognized auth kinds. Anything else is [`AuthKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthKind {
    Basic,
    Bearer,
    /// Unrecognized or missing `type`. Holds the raw tag when it was a string.
    Other(Option<String>),
}

impl AuthKind {
    fn from_tag(tag: Option<&Value>) -> Self {
        match tag.and_then(Value::as_str) {
            Some("basic") => AuthKind::Basic,
            Some("bearer") => AuthKind::Bearer,
            Some(other) => AuthKind::Other(Some(other.to_owned())),
            None => AuthKind::Other(None),
        }
    }
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthKind::Basic => write!(f, "basic"),
            AuthKind::Bearer => write!(f, "bearer"),
            AuthKind::Other(Some(tag)) => write!(f, "{tag}"),
            AuthKind::Other(None) => write!(f, "<untyped>"),
        }
    }
}

/// A collection's auth block: its kind plus the untouched JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AuthVariant {
    kind: AuthKind,
    raw: Map<String, Value>,
}

impl AuthVariant {
    pub fn kind(&self) -> &AuthKind {
        &self.kind
    }
}

impl From<Map<String, Value>> for AuthVariant {
    fn from(raw: Map<String, Value>) -> Self {
        Self {
            kind: AuthKind::from_tag(raw.get("type")),
            raw,
        }
    }
}

impl From<AuthVariant> for Map<String, Value> {
    fn from(auth: AuthVariant) -> Self {
        auth.raw
    }
}

/// An auth block the remote write API understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedAuth(Map<String, Value>);

/// Project a local auth block onto the subset the remote accepts.
///
/// `basic` and `bearer` are passed through verbatim. Any other kind yields
/// `None`, as does an absent block.
pub fn normalize(auth: Option<&AuthVariant>) -> Option<NormalizedAuth> {
    let auth = auth?;
    match auth.kind() {
        AuthKind::Basic | AuthKind::Bearer => Some(NormalizedAuth(auth.raw.clone())),
        AuthKind::Other(_) => {
            tracing::warn!(
                kind = %auth.kind(),
                "auth kind not supported by the remote; collection will be written without auth"
            );
            None
        }
    }
}
