//! Transport adapter over a mini-program runtime.
//!
//! Translates abstract HTTP verbs into platform request descriptors,
//! executes them through the callback-based network primitive, and settles
//! a future with the parsed payload or a rejection routed through the
//! configured error-response handler.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kintone_miniapp_domain::constants::{
    CONTENT_TYPE_HEADER, GET_CONTENT_TYPE, METHOD_OVERRIDE_HEADER, UPLOAD_FIELD_NAME,
};
use kintone_miniapp_domain::{KintoneError, Result};
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::debug;

use super::query;
use super::runtime::{
    FileMethod, HttpMethod, Params, PlatformRuntime, RequestConfig, RequestTask,
    RuntimeFailure, RuntimeResponse,
};

/// A rejection captured before the error-response handler shapes it.
#[derive(Debug)]
pub enum Rejection {
    /// The platform primitive failed without producing an HTTP response.
    Failure(RuntimeFailure),
    /// The server answered with a non-200 status.
    Response(ErrorResponse),
}

/// Raw non-200 response: status, headers, and the decoded body when one
/// could be recovered.
#[derive(Debug)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub header: HashMap<String, String>,
    pub body: Option<Value>,
}

/// Converts raw rejections into the error type surfaced to callers. The
/// adapter funnels every rejection through this handler and never
/// interprets response semantics beyond status routing.
pub type ErrorResponseHandler = Arc<dyn Fn(Rejection) -> KintoneError + Send + Sync>;

/// Result of a successful download: a handle to the temporary file the
/// runtime stored the payload in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub temp_file_path: String,
}

/// Verb operations consumed by the API clients.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str, params: Params) -> Result<Value>;
    async fn post(&self, path: &str, params: Params) -> Result<Value>;
    async fn put(&self, path: &str, params: Params) -> Result<Value>;
    async fn delete(&self, path: &str, params: Params) -> Result<Value>;
    /// Upload a locally stored file; resolves with the decoded response
    /// body (a server-assigned file key).
    async fn upload_file(&self, path: &str, file_path: &str) -> Result<Value>;
    /// Download into a temporary file on local storage.
    async fn download_file(&self, path: &str, params: Params) -> Result<DownloadedFile>;
}

/// File-transfer metadata attached at descriptor construction.
#[derive(Debug, Clone)]
pub(crate) enum FileTransfer {
    Upload { file_path: String },
    Download,
}

/// Configuration for [`MiniAppHttpClient`].
pub struct TransportConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
    /// Default parameters merged into every request body.
    pub params: Params,
    pub error_response_handler: ErrorResponseHandler,
    /// Platform URL-length ceiling past which GETs are rewritten.
    pub url_length_limit: usize,
}

/// Transport adapter over a mini-program runtime's callback-based network
/// primitives. Configuration is read-only after construction; each call
/// builds a local descriptor and settles exactly once.
pub struct MiniAppHttpClient {
    runtime: Arc<dyn PlatformRuntime>,
    base_url: String,
    headers: HashMap<String, String>,
    default_params: Params,
    error_response_handler: ErrorResponseHandler,
    url_length_limit: usize,
}

/// Single completion delivered by the platform callbacks.
enum Settled {
    Success(RuntimeResponse),
    Failure(RuntimeFailure),
}

impl MiniAppHttpClient {
    pub fn new(runtime: Arc<dyn PlatformRuntime>, config: TransportConfig) -> Self {
        Self {
            runtime,
            base_url: config.base_url,
            headers: config.headers,
            default_params: config.params,
            error_response_handler: config.error_response_handler,
            url_length_limit: config.url_length_limit,
        }
    }

    /// Build the per-call request descriptor.
    pub(crate) fn build_request_config(
        &self,
        method: &str,
        path: &str,
        params: &Params,
        file: Option<&FileTransfer>,
    ) -> Result<RequestConfig> {
        let method: HttpMethod = method.parse()?;
        let url = format!("{}{}", self.base_url, path);
        let (file_path, name, file_method) = match file {
            Some(FileTransfer::Upload { file_path }) => (
                Some(file_path.clone()),
                Some(UPLOAD_FIELD_NAME.to_string()),
                Some(FileMethod::Upload),
            ),
            Some(FileTransfer::Download) => (None, None, Some(FileMethod::Download)),
            None => (None, None, None),
        };

        match method {
            HttpMethod::Get => {
                let request_url = self.build_request_url(path, params);
                if request_url.len() > self.url_length_limit {
                    // The platform rejects URLs past the ceiling; carry the
                    // parameters in a POST body with a method override so
                    // the request stays an effective GET.
                    let mut header = self.headers.clone();
                    header.insert(METHOD_OVERRIDE_HEADER.to_string(), "GET".to_string());
                    return Ok(RequestConfig {
                        method: HttpMethod::Post,
                        url,
                        header,
                        data: Some(self.merge_params(params)),
                        file_path,
                        name,
                        file_method,
                    });
                }
                let mut header = self.headers.clone();
                header.insert(CONTENT_TYPE_HEADER.to_string(), GET_CONTENT_TYPE.to_string());
                Ok(RequestConfig {
                    method: HttpMethod::Get,
                    url: request_url,
                    header,
                    data: None,
                    file_path,
                    name,
                    file_method,
                })
            }
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => Ok(RequestConfig {
                method,
                url,
                header: self.headers.clone(),
                data: Some(self.merge_params(params)),
                file_path,
                name,
                file_method,
            }),
        }
    }

    fn build_request_url(&self, path: &str, params: &Params) -> String {
        format!("{}{}?{}", self.base_url, path, query::stringify(params))
    }

    fn merge_params(&self, params: &Params) -> Params {
        let mut merged = self.default_params.clone();
        merged.extend(params.clone());
        merged
    }

    /// Bridge one descriptor through the platform primitive.
    ///
    /// The platform promises exactly one callback, but that contract is
    /// external and unverifiable; the shared slot makes a double settlement
    /// harmless.
    async fn dispatch(
        &self,
        config: RequestConfig,
    ) -> std::result::Result<RuntimeResponse, Rejection> {
        let file_method = config.file_method;
        let (tx, rx) = oneshot::channel::<Settled>();
        let slot = Arc::new(Mutex::new(Some(tx)));

        let success_slot = Arc::clone(&slot);
        let success = Box::new(move |response: RuntimeResponse| {
            if let Some(tx) = take_sender(&success_slot) {
                let _ = tx.send(Settled::Success(response));
            }
        });
        let fail_slot = Arc::clone(&slot);
        let fail = Box::new(move |failure: RuntimeFailure| {
            if let Some(tx) = take_sender(&fail_slot) {
                let _ = tx.send(Settled::Failure(failure));
            }
        });

        debug!(method = %config.method, url = %config.url, "dispatching runtime request");

        let task = RequestTask { config, success, fail };
        match file_method {
            Some(FileMethod::Upload) => self.runtime.upload_file(task),
            Some(FileMethod::Download) => self.runtime.download_file(task),
            None => self.runtime.request(task),
        }

        let settled = rx.await.map_err(|_| {
            Rejection::Failure(RuntimeFailure::new("request task dropped without completion"))
        })?;

        match settled {
            Settled::Success(response) => {
                debug!(status = response.status_code, "runtime request completed");
                Ok(response)
            }
            Settled::Failure(failure) => {
                debug!(err_msg = %failure.err_msg, "runtime request failed");
                Err(Rejection::Failure(failure))
            }
        }
    }

    fn reject(&self, rejection: Rejection) -> KintoneError {
        (self.error_response_handler)(rejection)
    }

    /// Interpret an ordinary response: 200 resolves with the decoded body,
    /// anything else rejects with the full response.
    fn interpret_response(
        response: RuntimeResponse,
    ) -> std::result::Result<Value, Rejection> {
        if response.status_code == 200 {
            Ok(response.data.unwrap_or(Value::Null))
        } else {
            Err(Rejection::Response(ErrorResponse {
                status_code: response.status_code,
                header: response.header,
                body: response.data,
            }))
        }
    }

    /// Interpret an upload response: the runtime delivers the body as raw
    /// text that must be JSON-decoded on both paths.
    fn interpret_upload(response: RuntimeResponse) -> std::result::Result<Value, Rejection> {
        let decoded = response.body.as_deref().map(serde_json::from_str::<Value>);
        if response.status_code == 200 {
            match decoded {
                Some(Ok(value)) => Ok(value),
                Some(Err(err)) => Err(Rejection::Failure(RuntimeFailure::new(format!(
                    "upload response is not valid JSON: {err}"
                )))),
                None => {
                    Err(Rejection::Failure(RuntimeFailure::new("upload response has no body")))
                }
            }
        } else {
            Err(Rejection::Response(ErrorResponse {
                status_code: response.status_code,
                header: response.header,
                body: decoded.and_then(std::result::Result::ok),
            }))
        }
    }

    /// Interpret a download response. Failed downloads still land a body in
    /// the temp file; it is read back and decoded for the error payload.
    fn interpret_download(
        &self,
        response: RuntimeResponse,
    ) -> std::result::Result<DownloadedFile, Rejection> {
        if response.status_code == 200 {
            match response.temp_file_path {
                Some(temp_file_path) => Ok(DownloadedFile { temp_file_path }),
                None => Err(Rejection::Failure(RuntimeFailure::new(
                    "download completed without a temp file path",
                ))),
            }
        } else {
            let body = response
                .temp_file_path
                .as_deref()
                .and_then(|path| self.runtime.read_file(path).ok())
                .and_then(|text| serde_json::from_str(&text).ok());
            Err(Rejection::Response(ErrorResponse {
                status_code: response.status_code,
                header: response.header,
                body,
            }))
        }
    }

    async fn perform(&self, method: &str, path: &str, params: &Params) -> Result<Value> {
        let config = self.build_request_config(method, path, params, None)?;
        let response = self.dispatch(config).await.map_err(|r| self.reject(r))?;
        Self::interpret_response(response).map_err(|r| self.reject(r))
    }
}

fn take_sender(
    slot: &Arc<Mutex<Option<oneshot::Sender<Settled>>>>,
) -> Option<oneshot::Sender<Settled>> {
    slot.lock().ok().and_then(|mut sender| sender.take())
}

#[async_trait]
impl HttpClient for MiniAppHttpClient {
    async fn get(&self, path: &str, params: Params) -> Result<Value> {
        self.perform("get", path, &params).await
    }

    async fn post(&self, path: &str, params: Params) -> Result<Value> {
        self.perform("post", path, &params).await
    }

    async fn put(&self, path: &str, params: Params) -> Result<Value> {
        self.perform("put", path, &params).await
    }

    async fn delete(&self, path: &str, params: Params) -> Result<Value> {
        self.perform("delete", path, &params).await
    }

    async fn upload_file(&self, path: &str, file_path: &str) -> Result<Value> {
        let file = FileTransfer::Upload { file_path: file_path.to_string() };
        let config = self.build_request_config("post", path, &Params::new(), Some(&file))?;
        let response = self.dispatch(config).await.map_err(|r| self.reject(r))?;
        Self::interpret_upload(response).map_err(|r| self.reject(r))
    }

    async fn download_file(&self, path: &str, params: Params) -> Result<DownloadedFile> {
        let config =
            self.build_request_config("get", path, &params, Some(&FileTransfer::Download))?;
        let response = self.dispatch(config).await.map_err(|r| self.reject(r))?;
        self.interpret_download(response).map_err(|r| self.reject(r))
    }
}
