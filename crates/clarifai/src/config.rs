//! Configuration for the Clarifai session

use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// API key sent as `Authorization: Key <api_key>`
    pub api_key: Option<SecretString>,

    /// Base URL for the API (defaults to [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL))
    pub base_url: Option<String>,

    /// Timeout applied to every request
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,

    /// Overrides the `User-Agent` header
    pub user_agent: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            default_headers: HeaderMap::new(),
            proxy: None,
            user_agent: None,
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// This will look for:
    /// - `CLARIFAI_API_KEY` for authentication
    /// - `CLARIFAI_BASE_URL` for the API base URL
    /// - `CLARIFAI_TIMEOUT` for request timeout (in seconds)
    /// - `CLARIFAI_PROXY` for HTTP proxy
    ///
    /// Unparseable numeric values are ignored and leave the default in place.
    #[cfg(feature = "env")]
    pub fn from_env() -> crate::Result<Self> {
        use std::env;

        let _ = dotenvy::dotenv();
        let mut config = Self::default();

        if let Ok(api_key) = env::var("CLARIFAI_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("CLARIFAI_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("CLARIFAI_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(proxy) = env::var("CLARIFAI_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: SessionConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }

        self
    }
}

/// Builder for creating a [`SessionConfig`] with a fluent API.
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Set the HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = SessionConfigBuilder::new()
            .api_key("test-key")
            .base_url("https://example.com/v2")
            .timeout(Duration::from_secs(5))
            .user_agent("my-app/1.0")
            .default_header("x-app", "gallery")
            .unwrap()
            .build();

        assert!(config.api_key.is_some());
        assert_eq!(config.base_url.as_deref(), Some("https://example.com/v2"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent.as_deref(), Some("my-app/1.0"));
        assert_eq!(config.default_headers["x-app"], "gallery");
    }

    #[test]
    fn test_invalid_default_header() {
        let result = SessionConfigBuilder::new().default_header("bad header", "v");
        assert!(matches!(result, Err(crate::Error::InvalidHeaderName(name)) if name == "bad header"));
    }

    #[test]
    fn test_config_merge() {
        let base = SessionConfigBuilder::new()
            .api_key("key1")
            .proxy("http://proxy.local")
            .default_header("x-one", "1")
            .unwrap()
            .build();
        let overlay = SessionConfigBuilder::new()
            .base_url("https://example.com")
            .timeout(Duration::from_secs(30))
            .default_header("x-two", "2")
            .unwrap()
            .build();

        let merged = base.merge(overlay);
        assert!(merged.api_key.is_some());
        assert_eq!(merged.base_url.as_deref(), Some("https://example.com"));
        assert_eq!(merged.timeout, Duration::from_secs(30));
        assert_eq!(merged.proxy.as_deref(), Some("http://proxy.local"));
        assert!(merged.default_headers.contains_key("x-one"));
        assert!(merged.default_headers.contains_key("x-two"));
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_variables() {
        temp_env::with_vars(
            [
                ("CLARIFAI_API_KEY", Some("env-key")),
                ("CLARIFAI_BASE_URL", Some("https://env.example.com/v2/")),
                ("CLARIFAI_TIMEOUT", Some("15")),
                ("CLARIFAI_PROXY", Some("http://proxy-env.local")),
            ],
            || {
                let config = SessionConfig::from_env().unwrap();
                assert!(config.api_key.is_some());
                assert_eq!(
                    config.base_url.as_deref(),
                    Some("https://env.example.com/v2/")
                );
                assert_eq!(config.timeout, Duration::from_secs(15));
                assert_eq!(config.proxy.as_deref(), Some("http://proxy-env.local"));
            },
        );
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_ignores_bad_timeout() {
        temp_env::with_vars(
            [
                ("CLARIFAI_API_KEY", None),
                ("CLARIFAI_TIMEOUT", Some("soon")),
            ],
            || {
                let config = SessionConfig::from_env().unwrap();
                assert_eq!(config.timeout, DEFAULT_TIMEOUT);
            },
        );
    }
}
