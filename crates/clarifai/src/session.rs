//! Session: the authenticated entry point to the API

use std::sync::Arc;
use std::time::Duration;

use http::{HeaderMap, HeaderValue, Method, header};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    DEFAULT_BASE_URL, USER_AGENT,
    config::SessionConfig,
    error::{Error, Result},
    http::Request,
    resources::{InputsApi, ModelsApi},
};

/// Authenticated handle to the Clarifai API.
///
/// Cloning is cheap; clones share the HTTP connection pool and settings.
///
/// # Example
///
/// ```rust,no_run
/// use clarifai::Session;
///
/// let session = Session::new("your-api-key");
/// let request = session.inputs().list();
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    http_client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    /// Authorization and user-configured headers
    default_headers: HeaderMap,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a new session with an API key.
    ///
    /// # Panics
    ///
    /// Panics if the session cannot be built with the default configuration,
    /// e.g. when the key contains characters not allowed in a header. Use
    /// [`Session::try_new()`] for fallible construction.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::try_new(api_key).expect("Failed to build session with provided API key")
    }

    /// Create a new session with an API key (fallible version).
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new session builder for advanced configuration.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Create a session from a configuration object.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingConfig`] without an API key
    /// - [`Error::InvalidUrl`] for an empty or non-HTTP base URL
    /// - [`Error::HttpClient`] if the HTTP client cannot be built
    pub fn from_config(config: SessionConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| Error::MissingConfig("API key (set CLARIFAI_API_KEY)".to_string()))?;

        let base_url = parse_base_url(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let default_headers = build_default_headers(&api_key, config.default_headers)?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{}': {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }
        let http_client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        tracing::debug!(base_url = %base_url, timeout_secs = config.timeout.as_secs(), "Session created");

        Ok(Self {
            inner: Arc::new(SessionInner {
                http_client,
                base_url,
                timeout: config.timeout,
                default_headers,
            }),
        })
    }

    /// Create a session from `CLARIFAI_*` environment variables.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(SessionConfig::from_env()?)
    }

    /// Access the inputs endpoints.
    pub fn inputs(&self) -> InputsApi<'_> {
        InputsApi::new(self)
    }

    /// Access the model endpoints.
    pub fn models(&self) -> ModelsApi<'_> {
        ModelsApi::new(self)
    }

    /// Create a request for any path under the base URL.
    pub fn request(&self, method: Method, path: impl AsRef<str>) -> Request {
        Request::new(self.clone(), method, path)
    }

    /// Base URL every request path is joined to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.inner.http_client
    }

    pub(crate) fn default_headers(&self) -> &HeaderMap {
        &self.inner.default_headers
    }
}

/// Validate the base URL and force a trailing slash so relative paths nest under it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| Error::InvalidUrl(format!("Failed to parse '{}': {}", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl(format!(
            "Unsupported scheme '{}', expected http or https",
            other
        ))),
    }
}

fn build_default_headers(api_key: &SecretString, extra: HeaderMap) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Key {}", api_key.expose_secret()))
        .map_err(|_| Error::InvalidHeaderValue("API key contains invalid characters".to_string()))?;
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);

    for (key, value) in extra.iter() {
        headers.insert(key.clone(), value.clone());
    }

    Ok(headers)
}

/// Builder for creating a configured [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Start from an existing configuration; later builder calls override it.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Build the session with the configured options.
    pub fn build(self) -> Result<Session> {
        Session::from_config(self.config)
    }
}
