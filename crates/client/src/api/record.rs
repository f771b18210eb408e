//! Record CRUD operations.

use std::sync::Arc;

use kintone_miniapp_domain::{GuestSpaceId, Result};
use serde_json::Value;

use super::url::{build_path, BuildPathParams};
use crate::http::{HttpClient, Params};

/// Client for the record APIs. Pass-through over the transport; payload
/// shapes are the server's concern.
pub struct RecordClient {
    client: Arc<dyn HttpClient>,
    guest_space_id: Option<GuestSpaceId>,
}

impl RecordClient {
    pub(crate) fn new(client: Arc<dyn HttpClient>, guest_space_id: Option<GuestSpaceId>) -> Self {
        Self { client, guest_space_id }
    }

    fn path(&self, endpoint_name: &str) -> String {
        build_path(BuildPathParams {
            endpoint_name,
            guest_space_id: self.guest_space_id.as_ref(),
            preview: false,
        })
    }

    pub async fn get_record(&self, params: Params) -> Result<Value> {
        self.client.get(&self.path("record"), params).await
    }

    pub async fn get_records(&self, params: Params) -> Result<Value> {
        self.client.get(&self.path("records"), params).await
    }

    pub async fn add_record(&self, params: Params) -> Result<Value> {
        self.client.post(&self.path("record"), params).await
    }

    pub async fn add_records(&self, params: Params) -> Result<Value> {
        self.client.post(&self.path("records"), params).await
    }

    pub async fn update_record(&self, params: Params) -> Result<Value> {
        self.client.put(&self.path("record"), params).await
    }

    pub async fn update_records(&self, params: Params) -> Result<Value> {
        self.client.put(&self.path("records"), params).await
    }

    pub async fn delete_records(&self, params: Params) -> Result<Value> {
        self.client.delete(&self.path("records"), params).await
    }

    pub async fn add_record_comment(&self, params: Params) -> Result<Value> {
        self.client.post(&self.path("record/comment"), params).await
    }

    pub async fn delete_record_comment(&self, params: Params) -> Result<Value> {
        self.client.delete(&self.path("record/comment"), params).await
    }

    pub async fn get_record_comments(&self, params: Params) -> Result<Value> {
        self.client.get(&self.path("record/comments"), params).await
    }
}
