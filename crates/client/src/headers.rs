//! Authorization header derivation.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use kintone_miniapp_domain::constants::{
    API_TOKEN_AUTH_HEADER, BASIC_AUTH_HEADER, PASSWORD_AUTH_HEADER,
};
use kintone_miniapp_domain::{BasicAuth, Credential};

/// Derive the request header set from a classified credential.
///
/// The optional Basic-Auth header is additive; exactly one credential
/// scheme header is present. Pure: equal input always yields the same
/// mapping.
pub fn build_headers(
    credential: &Credential,
    basic_auth: Option<&BasicAuth>,
) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let Some(basic) = basic_auth {
        headers.insert(
            BASIC_AUTH_HEADER.to_string(),
            format!("Basic {}", STANDARD.encode(format!("{}:{}", basic.username, basic.password))),
        );
    }
    match credential {
        Credential::Password { username, password } => {
            headers.insert(
                PASSWORD_AUTH_HEADER.to_string(),
                STANDARD.encode(format!("{username}:{password}")),
            );
        }
        Credential::ApiToken(tokens) => {
            headers.insert(API_TOKEN_AUTH_HEADER.to_string(), tokens.join(","));
        }
    }
    headers
}
