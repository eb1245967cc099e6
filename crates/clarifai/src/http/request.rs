//! HTTP request builder

use std::{fmt, sync::Arc};

use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use super::Response;
use crate::{
    error::{Error, Result},
    observability::{RequestMetadata, RequestTimer, ResponseMetadata, log_transport_error},
    session::Session,
};

type Payload = Arc<dyn erased_serde::Serialize + Send + Sync>;

/// A request to the API: method, path and optional JSON payload.
///
/// Built by the resource helpers and sent with [`send`](Self::send). Until
/// then it can be inspected freely; the payload is serialized lazily.
///
/// The path is kept as unescaped segments. Each one is percent-encoded when
/// the URL is built, so a segment can never add a query, a fragment or
/// another path level.
#[derive(Clone)]
pub struct Request {
    session: Session,
    method: Method,
    segments: Vec<String>,
    payload: Option<Payload>,
    headers: HeaderMap,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path())
            .field("has_payload", &self.payload.is_some())
            .field("headers", &self.headers)
            .finish()
    }
}

impl Request {
    /// Create a request for `path`, relative to the session's base URL.
    ///
    /// `path` is split on `/`. Use [`segment`](Self::segment) for values that
    /// come from callers, such as identifiers.
    pub fn new(session: Session, method: Method, path: impl AsRef<str>) -> Self {
        Self {
            session,
            method,
            segments: path
                .as_ref()
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            payload: None,
            headers: HeaderMap::new(),
        }
    }

    /// Append one path segment, escaped as a whole.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPathSegment`] for an empty segment, `.` or `..`.
    pub fn segment(mut self, segment: impl Into<String>) -> Result<Self> {
        let segment = segment.into();
        if matches!(segment.as_str(), "" | "." | "..") {
            return Err(Error::InvalidPathSegment(segment));
        }
        self.segments.push(segment);
        Ok(self)
    }

    /// Attach a JSON payload, replacing any previous one.
    pub fn payload<T>(mut self, payload: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.set_payload(payload);
        self
    }

    /// Attach a JSON payload in place, replacing any previous one.
    pub fn set_payload<T>(&mut self, payload: T)
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.payload = Some(Arc::new(payload));
    }

    /// Set a per-request header.
    ///
    /// # Errors
    /// Returns an error if the header name or value contains invalid characters.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the path relative to the base URL, segments joined unescaped.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Get the per-request headers (session headers are added at send time).
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Headers as sent: session defaults, then per-request headers replacing
    /// them. `Content-Type: application/json` is added only with a body.
    fn wire_headers(&self, has_body: bool) -> HeaderMap {
        let mut headers = self.session.default_headers().clone();
        if has_body {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        for (key, value) in &self.headers {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }

    /// Whether a payload is attached.
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// The payload as a JSON value, for inspection.
    pub fn payload_json(&self) -> Result<Option<serde_json::Value>> {
        self.payload
            .as_deref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(Error::Serialization)
    }

    /// Absolute URL the request will be sent to.
    pub fn url(&self) -> Result<Url> {
        let mut url = self.session.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl("Base URL cannot take path segments".to_string()))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }

    /// Send the request once and return the raw response.
    ///
    /// HTTP error statuses are returned as a `Response`; only transport
    /// failures become errors here.
    pub async fn send(self) -> Result<Response> {
        let url = self.url()?;
        let body = self
            .payload
            .as_deref()
            .map(serde_json::to_vec)
            .transpose()?;

        let mut metadata = RequestMetadata::new(self.method.as_str(), self.path());
        if let Some(body) = &body {
            metadata = metadata.with_body_size(body.len());
        }
        metadata.log_request();

        let timeout = self.session.timeout();
        let mut req = self
            .session
            .http_client()
            .request(self.method.clone(), url)
            .timeout(timeout)
            .headers(self.wire_headers(body.is_some()));

        if let Some(body) = body {
            req = req.body(body);
        }

        let timer = RequestTimer::start();
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log_transport_error(&metadata, timer.elapsed(), &e.to_string());
                return Err(if e.is_timeout() {
                    Error::Timeout(timeout)
                } else {
                    Error::Connection(e.to_string())
                });
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?
            .to_vec();
        let elapsed = timer.elapsed();

        ResponseMetadata::new(status.as_u16(), body.len(), elapsed).log(&metadata);

        Ok(Response::new(status, headers, body, elapsed))
    }

    /// Send the request and decode a successful JSON reply.
    ///
    /// # Errors
    /// Transport failures, error statuses (mapped with
    /// [`Error::from_response`]) and undecodable bodies.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T> {
        self.send().await?.parse_result()
    }
}
