//! File upload and download operations.

use std::sync::Arc;

use kintone_miniapp_domain::{GuestSpaceId, KintoneError, Result};
use serde_json::Value;

use super::url::{build_path, BuildPathParams};
use crate::http::{DownloadedFile, HttpClient, Params};

/// Parameters for [`FileClient::upload_file`].
#[derive(Debug, Clone, Default)]
pub struct UploadFileParams {
    /// Path of the locally stored file to upload.
    pub file_path: Option<String>,
}

/// Client for the file API. Uploads are forced through the upload transfer
/// kind (multipart POST), downloads through the download kind.
pub struct FileClient {
    client: Arc<dyn HttpClient>,
    guest_space_id: Option<GuestSpaceId>,
}

impl FileClient {
    pub(crate) fn new(client: Arc<dyn HttpClient>, guest_space_id: Option<GuestSpaceId>) -> Self {
        Self { client, guest_space_id }
    }

    fn path(&self) -> String {
        build_path(BuildPathParams {
            endpoint_name: "file",
            guest_space_id: self.guest_space_id.as_ref(),
            preview: false,
        })
    }

    /// Upload a locally stored file; resolves with the server-assigned file
    /// key. Fails before any network call when no file path is given.
    pub async fn upload_file(&self, params: UploadFileParams) -> Result<Value> {
        let path = self.path();
        let file_path = params.file_path.ok_or(KintoneError::MissingFilePath)?;
        self.client.upload_file(&path, &file_path).await
    }

    /// Download a file into temporary local storage.
    pub async fn download_file(&self, params: Params) -> Result<DownloadedFile> {
        self.client.download_file(&self.path(), params).await
    }
}
