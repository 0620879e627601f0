//! Stateful in-memory workspace for engine integration tests.

use std::cell::RefCell;

use postsync_core::{
    ApiFailure, ApiResult, CollectionApi, CollectionPayload, CollectionRef, CollectionSummary,
    CollectionUid, WorkspaceId, WorkspaceMetadata,
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetWorkspace(String),
    ListCollections(String),
    Create(String, Value),
    Update(String, Value),
}

/// A single remote workspace. Creates append to the listing so a later run
/// sees its own writes.
pub struct MemoryWorkspace {
    pub name: String,
    pub collections: RefCell<Vec<(CollectionSummary, Value)>>,
    pub calls: RefCell<Vec<Call>>,
    pub fail_workspace: Option<ApiFailure>,
    pub fail_listing: Option<ApiFailure>,
    pub fail_writes: Option<ApiFailure>,
    next_id: RefCell<u32>,
}

impl MemoryWorkspace {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            collections: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            fail_workspace: None,
            fail_listing: None,
            fail_writes: None,
            next_id: RefCell::new(1),
        }
    }

    pub fn with_collection(self, uid: &str, name: &str) -> Self {
        self.collections.borrow_mut().push((
            CollectionSummary {
                uid: CollectionUid::from(uid),
                name: name.to_owned(),
            },
            Value::Null,
        ));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn write_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Create(..) | Call::Update(..)))
            .count()
    }

    pub fn stored(&self, uid: &str) -> Option<Value> {
        self.collections
            .borrow()
            .iter()
            .find(|(s, _)| s.uid.0 == uid)
            .map(|(_, body)| body.clone())
    }
}

impl CollectionApi for MemoryWorkspace {
    fn get_workspace(&self, workspace_id: &WorkspaceId) -> ApiResult<WorkspaceMetadata> {
        self.calls
            .borrow_mut()
            .push(Call::GetWorkspace(workspace_id.0.clone()));
        if let Some(failure) = &self.fail_workspace {
            return Err(failure.clone());
        }
        Ok(WorkspaceMetadata {
            id: workspace_id.clone(),
            name: self.name.clone(),
        })
    }

    fn list_collections(&self, workspace_id: &WorkspaceId) -> ApiResult<Vec<CollectionSummary>> {
        self.calls
            .borrow_mut()
            .push(Call::ListCollections(workspace_id.0.clone()));
        if let Some(failure) = &self.fail_listing {
            return Err(failure.clone());
        }
        Ok(self
            .collections
            .borrow()
            .iter()
            .map(|(s, _)| s.clone())
            .collect())
    }

    fn create_collection(
        &self,
        workspace_id: &WorkspaceId,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        let body = serde_json::to_value(collection).expect("payload");
        self.calls
            .borrow_mut()
            .push(Call::Create(workspace_id.0.clone(), body.clone()));
        if let Some(failure) = &self.fail_writes {
            return Err(failure.clone());
        }
        let id = {
            let mut next = self.next_id.borrow_mut();
            let id = format!("col-{next}");
            *next += 1;
            id
        };
        let uid = format!("owner-{id}");
        self.collections.borrow_mut().push((
            CollectionSummary {
                uid: CollectionUid::from(uid.as_str()),
                name: collection.name().to_owned(),
            },
            body,
        ));
        Ok(CollectionRef {
            id,
            uid,
            name: collection.name().to_owned(),
        })
    }

    fn update_collection(
        &self,
        collection_uid: &CollectionUid,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        let body = serde_json::to_value(collection).expect("payload");
        self.calls
            .borrow_mut()
            .push(Call::Update(collection_uid.0.clone(), body.clone()));
        if let Some(failure) = &self.fail_writes {
            return Err(failure.clone());
        }
        let mut collections = self.collections.borrow_mut();
        let Some(entry) = collections.iter_mut().find(|(s, _)| &s.uid == collection_uid) else {
            return Err(ApiFailure::new(
                Some(404),
                serde_json::json!({ "error": { "name": "instanceNotFoundError" } }),
            ));
        };
        entry.1 = body;
        Ok(CollectionRef {
            id: String::new(),
            uid: collection_uid.0.clone(),
            name: collection.name().to_owned(),
        })
    }
}
