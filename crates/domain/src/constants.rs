//! Domain constants
//!
//! Centralized location for platform limits and protocol header names.

/// Hard URL-length ceiling imposed by mini-program runtimes. GET requests
/// whose absolute URL exceeds this limit are rewritten into
/// method-overridden POSTs carrying the parameters in the body.
pub const DEFAULT_URL_LENGTH_LIMIT: usize = 4096;

// Authentication headers
pub const PASSWORD_AUTH_HEADER: &str = "X-Cybozu-Authorization";
pub const API_TOKEN_AUTH_HEADER: &str = "X-Cybozu-API-Token";
pub const BASIC_AUTH_HEADER: &str = "Authorization";

// Transport headers
pub const METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";
pub const CONTENT_TYPE_HEADER: &str = "content-type";
/// Content type attached to plain GET requests; the REST API expects this
/// override for GET bodies.
pub const GET_CONTENT_TYPE: &str = "application/html";

/// Multipart field name the file endpoint expects for uploads.
pub const UPLOAD_FIELD_NAME: &str = "file";
