//! App metadata operations.

use std::sync::Arc;

use kintone_miniapp_domain::{GuestSpaceId, Result};
use serde_json::Value;

use super::url::{build_path, BuildPathParams};
use crate::http::{HttpClient, Params};

/// Client for the app APIs.
pub struct AppClient {
    client: Arc<dyn HttpClient>,
    guest_space_id: Option<GuestSpaceId>,
}

impl AppClient {
    pub(crate) fn new(client: Arc<dyn HttpClient>, guest_space_id: Option<GuestSpaceId>) -> Self {
        Self { client, guest_space_id }
    }

    fn path(&self, endpoint_name: &str, preview: bool) -> String {
        build_path(BuildPathParams {
            endpoint_name,
            guest_space_id: self.guest_space_id.as_ref(),
            preview,
        })
    }

    pub async fn get_app(&self, params: Params) -> Result<Value> {
        self.client.get(&self.path("app", false), params).await
    }

    pub async fn get_apps(&self, params: Params) -> Result<Value> {
        self.client.get(&self.path("apps", false), params).await
    }

    pub async fn get_form_fields(&self, params: Params, preview: bool) -> Result<Value> {
        self.client.get(&self.path("app/form/fields", preview), params).await
    }

    pub async fn get_form_layout(&self, params: Params, preview: bool) -> Result<Value> {
        self.client.get(&self.path("app/form/layout", preview), params).await
    }
}
