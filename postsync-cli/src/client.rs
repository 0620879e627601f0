//! HTTP implementation of [`CollectionApi`] for the collection-hosting
//! service's REST API.
//!
//! | operation          | request                                   |
//! |--------------------|-------------------------------------------|
//! | workspace lookup   | `GET  /workspaces/{id}`                   |
//! | metadata listing   | `GET  /collections?workspace={id}`        |
//! | create             | `POST /collections?workspace={id}`        |
//! | update             | `PUT  /collections/{uid}`                 |

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use postsync_core::{
    ApiFailure, ApiResult, CollectionApi, CollectionPayload, CollectionRef, CollectionSummary,
    CollectionUid, WorkspaceId, WorkspaceMetadata,
};
use postsync_engine::ApiKey;

pub const DEFAULT_API_URL: &str = "https://api.getpostman.com";

#[derive(Deserialize)]
struct WorkspaceEnvelope {
    workspace: WorkspaceBody,
}

#[derive(Deserialize)]
struct WorkspaceBody {
    name: String,
}

#[derive(Deserialize)]
struct CollectionsEnvelope {
    collections: Vec<CollectionSummary>,
}

#[derive(Deserialize)]
struct CollectionEnvelope {
    collection: CollectionRef,
}

#[derive(Serialize)]
struct WriteEnvelope<'a> {
    collection: &'a CollectionPayload,
}

/// Blocking client; one request in flight at a time.
pub struct PostmanClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: ApiKey,
}

impl PostmanClient {
    pub fn new(base_url: &str, api_key: ApiKey, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("postsync/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        self.agent
            .request(method, &format!("{}{}", self.base_url, path))
            .set("X-Api-Key", self.api_key.expose())
            .set("Accept", "application/json")
    }

    fn execute<T: DeserializeOwned>(
        &self,
        request: ureq::Request,
        body: Option<&CollectionPayload>,
    ) -> ApiResult<T> {
        let method = request.method().to_owned();
        let url = request.url().to_owned();
        let result = match body {
            Some(collection) => request.send_json(WriteEnvelope { collection }),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                let status = response.status();
                let text = response
                    .into_string()
                    .map_err(|e| ApiFailure::new(Some(status), e.to_string()))?;
                tracing::debug!(%method, %url, status, body = %text, "received response");
                decode(status, &text)
            }
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                tracing::debug!(%method, %url, status, body = %text, "received error response");
                Err(failure_from_body(status, text))
            }
            Err(transport) => {
                tracing::debug!(%method, %url, error = %transport, "request did not complete");
                Err(ApiFailure::new(None, transport.to_string()))
            }
        }
    }
}

/// Percent-encode an id for use as one URL path segment. `.` and `..` would
/// be collapsed by URL normalization, so they are rejected.
fn path_segment(id: &str) -> ApiResult<String> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiFailure::new(
            None,
            format!("'{id}' is not a valid resource id"),
        ));
    }
    Ok(urlencoding::encode(id).into_owned())
}

/// Parse a success body, reporting a body that does not decode as a failure.
fn decode<T: DeserializeOwned>(status: u16, text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| {
        ApiFailure::new(Some(status), format!("unexpected response body: {e}"))
    })
}

/// Error bodies are kept as JSON when they parse, as text otherwise.
fn failure_from_body(status: u16, text: String) -> ApiFailure {
    let payload = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
    ApiFailure::new(Some(status), payload)
}

impl CollectionApi for PostmanClient {
    fn get_workspace(&self, workspace_id: &WorkspaceId) -> ApiResult<WorkspaceMetadata> {
        let segment = path_segment(&workspace_id.0)?;
        let request = self.request("GET", &format!("/workspaces/{segment}"));
        let envelope: WorkspaceEnvelope = self.execute(request, None)?;
        Ok(WorkspaceMetadata {
            id: workspace_id.clone(),
            name: envelope.workspace.name,
        })
    }

    fn list_collections(&self, workspace_id: &WorkspaceId) -> ApiResult<Vec<CollectionSummary>> {
        let request = self
            .request("GET", "/collections")
            .query("workspace", &workspace_id.0);
        let envelope: CollectionsEnvelope = self.execute(request, None)?;
        Ok(envelope.collections)
    }

    fn create_collection(
        &self,
        workspace_id: &WorkspaceId,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        let request = self
            .request("POST", "/collections")
            .query("workspace", &workspace_id.0);
        let envelope: CollectionEnvelope = self.execute(request, Some(collection))?;
        Ok(envelope.collection)
    }

    fn update_collection(
        &self,
        collection_uid: &CollectionUid,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        let segment = path_segment(&collection_uid.0)?;
        let request = self.request("PUT", &format!("/collections/{segment}"));
        let envelope: CollectionEnvelope = self.execute(request, Some(collection))?;
        Ok(envelope.collection)
    }
}
