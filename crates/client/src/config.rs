//! Client construction options.

use kintone_miniapp_domain::constants::DEFAULT_URL_LENGTH_LIMIT;
use kintone_miniapp_domain::{ApiTokens, AuthConfig, BasicAuth, GuestSpaceId};

/// Options accepted by [`crate::KintoneMiniAppClient::new`].
///
/// Validation happens at client construction, not here: a missing base URL
/// or empty auth input fails there with the corresponding error.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: Option<String>,
    pub auth: AuthConfig,
    pub guest_space_id: Option<GuestSpaceId>,
    pub basic_auth: Option<BasicAuth>,
    /// Platform URL-length ceiling past which GETs are rewritten into
    /// method-overridden POSTs.
    pub url_length_limit: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            auth: AuthConfig::default(),
            guest_space_id: None,
            basic_auth: None,
            url_length_limit: DEFAULT_URL_LENGTH_LIMIT,
        }
    }
}

impl ClientOptions {
    /// Start building client options.
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }
}

/// Builder for [`ClientOptions`].
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = Some(base_url.into());
        self
    }

    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.options.auth = auth;
        self
    }

    /// Convenience for password authentication.
    pub fn password_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.options.auth.username = Some(username.into());
        self.options.auth.password = Some(password.into());
        self
    }

    /// Convenience for API-token authentication.
    pub fn api_token(mut self, tokens: impl Into<ApiTokens>) -> Self {
        self.options.auth.api_token = Some(tokens.into());
        self
    }

    pub fn guest_space_id(mut self, id: impl Into<GuestSpaceId>) -> Self {
        self.options.guest_space_id = Some(id.into());
        self
    }

    pub fn basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.options.basic_auth =
            Some(BasicAuth { username: username.into(), password: password.into() });
        self
    }

    /// Override the platform URL-length ceiling.
    pub fn url_length_limit(mut self, limit: usize) -> Self {
        self.options.url_length_limit = limit;
        self
    }

    pub fn build(self) -> ClientOptions {
        self.options
    }
}
