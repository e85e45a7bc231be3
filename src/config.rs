//! Client configuration.
//!
//! All settings are explicit values resolved before the pipeline runs;
//! `from_env` is the one place that touches process environment.

use std::env;
use std::fmt;

use crate::proxy::ProxyConfig;
use crate::{Result, SearchError};

/// Environment variable naming the backend base URL.
pub const ENV_SEARXNG_URL: &str = "SEARXNG_URL";
/// Environment variable for the basic-auth username.
pub const ENV_AUTH_USERNAME: &str = "AUTH_USERNAME";
/// Environment variable for the basic-auth password.
pub const ENV_AUTH_PASSWORD: &str = "AUTH_PASSWORD";
/// Environment variable overriding the User-Agent header.
pub const ENV_USER_AGENT: &str = "USER_AGENT";

/// HTTP basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username sent in the Authorization header.
    pub username: String,
    /// Password sent in the Authorization header.
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// The password must never reach logs or error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for a [`SearxngClient`](crate::SearxngClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the SearXNG instance, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Optional basic-auth credentials.
    pub auth: Option<Credentials>,
    /// Optional User-Agent override.
    pub user_agent: Option<String>,
    /// Optional forward proxy.
    pub proxy: Option<ProxyConfig>,
}

impl ClientConfig {
    /// Creates a configuration for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            user_agent: None,
            proxy: None,
        }
    }

    /// Sets basic-auth credentials.
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(Credentials::new(username, password));
        self
    }

    /// Sets a custom User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a forward proxy.
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// `SEARXNG_URL` is required. `AUTH_USERNAME` and `AUTH_PASSWORD` only
    /// take effect together; a lone half of the pair is ignored.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(ENV_SEARXNG_URL).map_err(|_| {
            SearchError::Configuration(format!(
                "{} is not set. Expected a base URL like http://localhost:8080",
                ENV_SEARXNG_URL
            ))
        })?;

        let mut config = Self::new(base_url);

        if let (Ok(username), Ok(password)) =
            (env::var(ENV_AUTH_USERNAME), env::var(ENV_AUTH_PASSWORD))
        {
            config = config.with_auth(username, password);
        }

        if let Ok(user_agent) = env::var(ENV_USER_AGENT) {
            config = config.with_user_agent(user_agent);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.auth.is_none());
        assert!(config.user_agent.is_none());
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_client_config_with_auth() {
        let config = ClientConfig::new("http://localhost:8080").with_auth("alice", "secret");
        let auth = config.auth.unwrap();
        assert_eq!(auth.username, "alice");
        assert_eq!(auth.password, "secret");
    }

    #[test]
    fn test_client_config_with_user_agent() {
        let config = ClientConfig::new("http://localhost:8080").with_user_agent("custom-agent/1.0");
        assert_eq!(config.user_agent, Some("custom-agent/1.0".to_string()));
    }

    #[test]
    fn test_client_config_with_proxy() {
        let config = ClientConfig::new("http://localhost:8080")
            .with_proxy(ProxyConfig::new("127.0.0.1", 8080));
        assert!(config.proxy.is_some());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("alice", "hunter2");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("alice"));
        assert!(!debug_str.contains("hunter2"));
        assert!(debug_str.contains("<redacted>"));
    }

    #[test]
    fn test_client_config_debug_redacts_password() {
        let config = ClientConfig::new("http://localhost:8080").with_auth("alice", "hunter2");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("hunter2"));
    }
}
