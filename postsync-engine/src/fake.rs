//! In-memory `CollectionApi` for unit tests.

use std::cell::RefCell;

use serde_json::Value;

use postsync_core::{
    ApiResult, CollectionApi, CollectionPayload, CollectionRef, CollectionSummary, CollectionUid,
    WorkspaceId, WorkspaceMetadata,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    GetWorkspace(WorkspaceId),
    ListCollections(WorkspaceId),
    Create(WorkspaceId, Value),
    Update(CollectionUid, Value),
}

pub(crate) struct FakeApi {
    pub workspace: ApiResult<WorkspaceMetadata>,
    pub collections: ApiResult<Vec<CollectionSummary>>,
    pub write: ApiResult<CollectionRef>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new(workspace_name: &str, collections: Vec<CollectionSummary>) -> Self {
        Self {
            workspace: Ok(WorkspaceMetadata {
                id: WorkspaceId::from("ws-1"),
                name: workspace_name.to_owned(),
            }),
            collections: Ok(collections),
            write: Ok(CollectionRef::default()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub(crate) fn summary(uid: &str, name: &str) -> CollectionSummary {
    CollectionSummary {
        uid: CollectionUid::from(uid),
        name: name.to_owned(),
    }
}

impl CollectionApi for FakeApi {
    fn get_workspace(&self, workspace_id: &WorkspaceId) -> ApiResult<WorkspaceMetadata> {
        self.record(Call::GetWorkspace(workspace_id.clone()));
        self.workspace.clone()
    }

    fn list_collections(&self, workspace_id: &WorkspaceId) -> ApiResult<Vec<CollectionSummary>> {
        self.record(Call::ListCollections(workspace_id.clone()));
        self.collections.clone()
    }

    fn create_collection(
        &self,
        workspace_id: &WorkspaceId,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        let body = serde_json::to_value(collection).expect("payload serializes");
        self.record(Call::Create(workspace_id.clone(), body));
        self.write.clone()
    }

    fn update_collection(
        &self,
        collection_uid: &CollectionUid,
        collection: &CollectionPayload,
    ) -> ApiResult<CollectionRef> {
        let body = serde_json::to_value(collection).expect("payload serializes");
        self.record(Call::Update(collection_uid.clone(), body));
        self.write.clone()
    }
}
