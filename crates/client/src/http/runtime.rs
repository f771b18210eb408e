//! The injected platform capability: callback-based network primitives.
//!
//! Mini-program runtimes expose networking as three global functions
//! (`request`, `uploadFile`, `downloadFile`) that take a request
//! configuration object with `success`/`fail` callback fields and invoke
//! exactly one of them. [`PlatformRuntime`] models that surface as an
//! explicit capability so the transport can be wired to a real runtime or
//! to a test double without any runtime reflection.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use kintone_miniapp_domain::KintoneError;
use serde_json::{Map, Value};

/// JSON object carried as request parameters or body payload.
pub type Params = Map<String, Value>;

/// HTTP verb understood by descriptor construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = KintoneError;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            other => Err(KintoneError::UnsupportedMethod { method: other.to_string() }),
        }
    }
}

/// Transfer kind of a request. Ordinary requests carry no kind; the kind
/// selects both the dispatched primitive and how its success payload is
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMethod {
    Upload,
    Download,
}

/// Per-call request descriptor handed to the platform runtime.
///
/// Created per call, consumed immediately, never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub url: String,
    pub header: HashMap<String, String>,
    /// Body payload for non-GET requests (and for length-rewritten GETs).
    pub data: Option<Params>,
    /// Local file to upload.
    pub file_path: Option<String>,
    /// Multipart field name for uploads.
    pub name: Option<String>,
    pub file_method: Option<FileMethod>,
}

/// Success payload delivered by a platform primitive.
///
/// `request` sets `data` (decoded JSON), `uploadFile` sets `body` (the raw
/// response text), `downloadFile` sets `temp_file_path`.
#[derive(Debug, Clone, Default)]
pub struct RuntimeResponse {
    pub status_code: u16,
    pub header: HashMap<String, String>,
    pub data: Option<Value>,
    pub body: Option<String>,
    pub temp_file_path: Option<String>,
}

/// Failure payload: the request never produced an HTTP response.
#[derive(Debug, Clone)]
pub struct RuntimeFailure {
    pub err_msg: String,
}

impl RuntimeFailure {
    pub fn new(err_msg: impl Into<String>) -> Self {
        Self { err_msg: err_msg.into() }
    }
}

pub type SuccessCallback = Box<dyn FnOnce(RuntimeResponse) + Send>;
pub type FailCallback = Box<dyn FnOnce(RuntimeFailure) + Send>;

/// A descriptor plus its single-shot completion callbacks. The platform
/// contract is to invoke exactly one of the two.
pub struct RequestTask {
    pub config: RequestConfig,
    pub success: SuccessCallback,
    pub fail: FailCallback,
}

/// Network capability of the host mini-program runtime.
pub trait PlatformRuntime: Send + Sync {
    /// Execute an ordinary HTTP request.
    fn request(&self, task: RequestTask);

    /// Upload a locally stored file as multipart form data.
    fn upload_file(&self, task: RequestTask);

    /// Download a payload into a temporary file on local storage.
    fn download_file(&self, task: RequestTask);

    /// Read a locally stored file as text. Failed downloads still land a
    /// body on local storage that must be read back for the error payload.
    fn read_file(&self, path: &str) -> Result<String, RuntimeFailure>;
}
