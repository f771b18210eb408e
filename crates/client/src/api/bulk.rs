//! Bulk request submission.

use std::sync::Arc;

use kintone_miniapp_domain::{GuestSpaceId, Result};
use serde_json::Value;

use super::url::{build_path, BuildPathParams};
use crate::http::{HttpClient, Params};

/// Client for the bulk-request API: submits a batch of operations in one
/// round trip.
pub struct BulkRequestClient {
    client: Arc<dyn HttpClient>,
    guest_space_id: Option<GuestSpaceId>,
}

impl BulkRequestClient {
    pub(crate) fn new(client: Arc<dyn HttpClient>, guest_space_id: Option<GuestSpaceId>) -> Self {
        Self { client, guest_space_id }
    }

    pub async fn send(&self, params: Params) -> Result<Value> {
        let path = build_path(BuildPathParams {
            endpoint_name: "bulkRequest",
            guest_space_id: self.guest_space_id.as_ref(),
            preview: false,
        });
        self.client.post(&path, params).await
    }
}
