//! Credential types and the validating classification factory.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{KintoneError, Result};

/// API token input: a single token string or a list of tokens.
///
/// A comma-separated string and a list of the same tokens are equivalent;
/// both join to the same header value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiTokens {
    Single(String),
    Many(Vec<String>),
}

impl ApiTokens {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(token) => vec![token.clone()],
            Self::Many(tokens) => tokens.clone(),
        }
    }
}

impl From<&str> for ApiTokens {
    fn from(token: &str) -> Self {
        Self::Single(token.to_string())
    }
}

impl From<Vec<String>> for ApiTokens {
    fn from(tokens: Vec<String>) -> Self {
        Self::Many(tokens)
    }
}

/// Raw authentication input supplied at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_token: Option<ApiTokens>,
}

/// Classified credential. Derived once at facade construction and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Password { username: String, password: String },
    ApiToken(Vec<String>),
}

impl Credential {
    /// Classify raw auth input. A username selects password auth even when
    /// a token is also present; input carrying neither fails.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        if let Some(username) = &config.username {
            return Ok(Self::Password {
                username: username.clone(),
                password: config.password.clone().unwrap_or_default(),
            });
        }
        if let Some(tokens) = &config.api_token {
            return Ok(Self::ApiToken(tokens.to_vec()));
        }
        Err(KintoneError::MissingAuth)
    }
}

/// Basic authentication credentials, additive to the credential header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Guest-space identifier used as a URL-path prefix by the API clients.
/// Opaque to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GuestSpaceId {
    Id(u64),
    Name(String),
}

impl fmt::Display for GuestSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<u64> for GuestSpaceId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for GuestSpaceId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_classifies_as_password_auth() {
        let config = AuthConfig {
            username: Some("user".to_string()),
            password: Some("password".to_string()),
            api_token: None,
        };
        let credential = Credential::from_config(&config).unwrap();
        assert_eq!(
            credential,
            Credential::Password {
                username: "user".to_string(),
                password: "password".to_string()
            }
        );
    }

    #[test]
    fn api_token_classifies_as_token_auth() {
        let config = AuthConfig {
            api_token: Some(ApiTokens::from("ApiToken")),
            ..AuthConfig::default()
        };
        let credential = Credential::from_config(&config).unwrap();
        assert_eq!(credential, Credential::ApiToken(vec!["ApiToken".to_string()]));
    }

    #[test]
    fn username_wins_over_api_token() {
        let config = AuthConfig {
            username: Some("user".to_string()),
            password: Some("password".to_string()),
            api_token: Some(ApiTokens::from("ApiToken")),
        };
        let credential = Credential::from_config(&config).unwrap();
        assert!(matches!(credential, Credential::Password { .. }));
    }

    #[test]
    fn empty_input_is_rejected() {
        let error = Credential::from_config(&AuthConfig::default()).unwrap_err();
        assert!(matches!(error, KintoneError::MissingAuth));
    }

    #[test]
    fn token_list_deserializes_from_string_or_sequence() {
        let single: ApiTokens = serde_json::from_str(r#""ApiToken1,ApiToken2""#).unwrap();
        let many: ApiTokens = serde_json::from_str(r#"["ApiToken1", "ApiToken2"]"#).unwrap();
        assert_eq!(single.to_vec().join(","), many.to_vec().join(","));
    }

    #[test]
    fn guest_space_id_displays_both_forms() {
        assert_eq!(GuestSpaceId::from(1).to_string(), "1");
        assert_eq!(GuestSpaceId::from("space").to_string(), "space");
    }
}
