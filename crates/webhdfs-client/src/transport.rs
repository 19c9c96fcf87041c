//! The HTTP transport seam.
//!
//! Everything below the failover loop is an opaque `execute(request) ->
//! response` capability. Kerberos/SPNEGO, connection pooling and timeouts all
//! live behind this trait; tests substitute scripted implementations.

use std::fmt;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use http::{Method, StatusCode};

use crate::error::{ClientError, Result};

/// One HTTP request, fully assembled. The body is `Bytes` so a failover
/// re-send transmits the identical payload; there is no stream to rewind.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response body in one of three states: known-empty, fully buffered (mock
/// transports, JSON envelopes) or streaming (data reads).
pub enum ResponseBody {
    Empty,
    Buffered(Bytes),
    Streaming(BoxStream<'static, io::Result<Bytes>>),
}

impl ResponseBody {
    /// Drains the body into a single buffer. The body is consumed exactly
    /// once regardless of outcome.
    pub async fn collect(self) -> io::Result<Bytes> {
        match self {
            ResponseBody::Empty => Ok(Bytes::new()),
            ResponseBody::Buffered(bytes) => Ok(bytes),
            ResponseBody::Streaming(mut stream) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }

    /// Converts into a chunk stream; ownership transfers to the caller, who
    /// becomes responsible for draining it.
    pub fn into_stream(self) -> BoxStream<'static, io::Result<Bytes>> {
        match self {
            ResponseBody::Empty => futures::stream::empty().boxed(),
            ResponseBody::Buffered(bytes) => futures::stream::once(async move { Ok(bytes) }).boxed(),
            ResponseBody::Streaming(stream) => stream,
        }
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Empty => f.write_str("ResponseBody::Empty"),
            ResponseBody::Buffered(b) => write!(f, "ResponseBody::Buffered({} bytes)", b.len()),
            ResponseBody::Streaming(_) => f.write_str("ResponseBody::Streaming"),
        }
    }
}

/// One HTTP response with the transport-level metadata captured up front:
/// status, content length/type and redirect location, plus the body.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Success range of the protocol: [200, 206] inclusive (OK through
    /// Partial Content). Anything outside is a failure even if the body
    /// parses cleanly.
    pub fn is_success(&self) -> bool {
        (200..=206).contains(&self.status.as_u16())
    }

    pub fn is_redirect(&self) -> bool {
        self.status == StatusCode::TEMPORARY_REDIRECT
    }
}

/// The opaque transport capability.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Production transport over a shared `reqwest` client.
///
/// Redirect following is disabled: the redirect-aware transfer layer owns
/// the decision of when and where to follow a `Location`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::Configuration {
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body.clone() {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(|e| ClientError::Transport {
            url: request.url.clone(),
            msg: e.to_string(),
        })?;

        let status = response.status();
        let content_length = response.content_length();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let location = response
            .headers()
            .get(http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let stream = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
            .boxed();

        Ok(HttpResponse {
            status,
            content_length,
            content_type,
            location,
            body: ResponseBody::Streaming(stream),
        })
    }
}
