//! Client facade: validates configuration, derives headers, and assembles
//! the object graph.

use std::collections::HashMap;
use std::sync::Arc;

use kintone_miniapp_domain::{ApiErrorResponse, Credential, KintoneError, Result};
use serde_json::Value;

use crate::api::{AppClient, BulkRequestClient, FileClient, RecordClient};
use crate::config::ClientOptions;
use crate::headers::build_headers;
use crate::http::{
    ErrorResponseHandler, HttpClient, MiniAppHttpClient, Params, PlatformRuntime, Rejection,
    TransportConfig,
};

/// Kintone REST API client for mini-program runtimes.
///
/// Owns one transport adapter shared by the record, app, file, and
/// bulk-request clients. Configuration is validated and headers derived
/// once at construction; both are immutable thereafter.
pub struct KintoneMiniAppClient {
    base_url: String,
    headers: HashMap<String, String>,
    pub record: RecordClient,
    pub app: AppClient,
    pub file: FileClient,
    bulk: BulkRequestClient,
}

impl KintoneMiniAppClient {
    /// Build a client against the given platform runtime.
    ///
    /// # Errors
    ///
    /// Returns `MissingBaseUrl` when no base URL is supplied and
    /// `MissingAuth` when the auth input carries no usable credential.
    pub fn new(options: ClientOptions, runtime: Arc<dyn PlatformRuntime>) -> Result<Self> {
        let base_url = options.base_url.ok_or(KintoneError::MissingBaseUrl)?;
        let credential = Credential::from_config(&options.auth)?;
        let headers = build_headers(&credential, options.basic_auth.as_ref());

        let transport: Arc<dyn HttpClient> = Arc::new(MiniAppHttpClient::new(
            runtime,
            TransportConfig {
                base_url: base_url.clone(),
                headers: headers.clone(),
                params: Params::new(),
                error_response_handler: default_error_response_handler(),
                url_length_limit: options.url_length_limit,
            },
        ));

        Ok(Self {
            record: RecordClient::new(Arc::clone(&transport), options.guest_space_id.clone()),
            app: AppClient::new(Arc::clone(&transport), options.guest_space_id.clone()),
            file: FileClient::new(Arc::clone(&transport), options.guest_space_id.clone()),
            bulk: BulkRequestClient::new(transport, options.guest_space_id),
            base_url,
            headers,
        })
    }

}

impl std::fmt::Debug for KintoneMiniAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KintoneMiniAppClient")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl KintoneMiniAppClient {
    /// The resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The derived header set.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Submit a batch of operations in one round trip.
    pub async fn bulk_request(&self, params: Params) -> Result<Value> {
        self.bulk.send(params).await
    }
}

/// Default rejection shaping: a rejection carrying a structured body
/// becomes an API error preserving status, headers, and body; anything
/// else becomes a plain transport error carrying the runtime message.
pub fn default_error_response_handler() -> ErrorResponseHandler {
    Arc::new(|rejection| match rejection {
        Rejection::Failure(failure) => KintoneError::Platform(failure.err_msg),
        Rejection::Response(response) => match response.body {
            Some(body) => KintoneError::Api(ApiErrorResponse {
                status: response.status_code,
                headers: response.header,
                body,
            }),
            None => KintoneError::Platform(format!(
                "request failed with status {}",
                response.status_code
            )),
        },
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::{ErrorResponse, RuntimeFailure};

    #[test]
    fn handler_shapes_structured_rejections_as_api_errors() {
        let handler = default_error_response_handler();
        let error = handler(Rejection::Response(ErrorResponse {
            status_code: 500,
            header: HashMap::new(),
            body: Some(json!({"message": "Internal Server Error"})),
        }));
        match error {
            KintoneError::Api(response) => {
                assert_eq!(response.status, 500);
                assert_eq!(response.message(), Some("Internal Server Error"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn handler_shapes_bare_failures_as_platform_errors() {
        let handler = default_error_response_handler();
        let error = handler(Rejection::Failure(RuntimeFailure::new("unknown error")));
        assert!(matches!(error, KintoneError::Platform(ref msg) if msg == "unknown error"));
    }

    #[test]
    fn handler_treats_bodyless_rejections_as_platform_errors() {
        let handler = default_error_response_handler();
        let error = handler(Rejection::Response(ErrorResponse {
            status_code: 502,
            header: HashMap::new(),
            body: None,
        }));
        assert!(matches!(error, KintoneError::Platform(ref msg) if msg.contains("502")));
    }
}
