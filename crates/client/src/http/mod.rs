//! HTTP transport for mini-program runtimes.

pub mod query;
pub mod runtime;
pub mod transport;

// Re-export commonly used items
pub use runtime::{
    FileMethod, HttpMethod, Params, PlatformRuntime, RequestConfig, RequestTask,
    RuntimeFailure, RuntimeResponse,
};
pub use transport::{
    DownloadedFile, ErrorResponse, ErrorResponseHandler, HttpClient, MiniAppHttpClient,
    Rejection, TransportConfig,
};
