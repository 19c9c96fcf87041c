//! Endpoint failover executor.
//!
//! The operation entry point: builds the request, then walks the configured
//! address list strictly in order, issuing the call against each endpoint
//! until one decodes successfully or the list is exhausted. Iteration is
//! deliberately sequential, never parallel: a slow first address delays the
//! second, which keeps the client free of active/standby bookkeeping.
//!
//! Failover triggers are transport errors, decode errors and remote
//! exceptions (a standby may answer where the active refused). Validation,
//! configuration, pre-send hook failures and cancellation are terminal.

use std::future::Future;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{AttemptFailure, ClientError, EndpointFailures, Result};
use crate::request::RestRequest;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::url;

/// Caller-supplied request customization, applied after assembly and before
/// send. A hook failure is a local configuration fault and aborts the whole
/// call; it would recur identically on every address.
pub type PreSendHook = dyn Fn(&mut HttpRequest) -> std::result::Result<(), String> + Send + Sync;

pub(crate) struct FailoverExecutor<'a> {
    pub config: &'a ClientConfig,
    pub transport: &'a dyn HttpTransport,
    pub hook: Option<&'a PreSendHook>,
    pub cancel: Option<&'a CancellationToken>,
}

impl<'a> FailoverExecutor<'a> {
    /// Runs one operation with failover, handing each received response to
    /// `decode` for the per-operation result.
    pub async fn execute<T, F, Fut>(
        &self,
        request: &dyn RestRequest,
        body: Option<Bytes>,
        extra_params: &[(&str, &str)],
        decode: F,
    ) -> Result<T>
    where
        F: Fn(HttpResponse) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        // Descriptor validation happens before any network attempt and never
        // leaks a partially built request.
        let mut params = request.params(&self.config.context)?;
        for (key, value) in extra_params {
            params.push(key, *value);
        }
        let query = params.encode();
        self.config.validate()?;

        let method = request.operation().method(self.config.variant);
        let mut failures = Vec::new();

        for addr in &self.config.addresses {
            let attempt_url = url::build_url(self.config.scheme(), addr, request.path(), &query);
            let mut http_request = HttpRequest::new(method.clone(), &attempt_url);
            if let Some(payload) = &body {
                http_request = http_request
                    .header("Content-Type", "application/octet-stream")
                    .body(payload.clone());
            }
            if let Some(csrf) = &self.config.csrf {
                http_request = http_request.header(&csrf.header, &csrf.value);
            }
            if self.config.connection_close {
                http_request = http_request.header("Connection", "close");
            }
            if let Some(hook) = self.hook {
                if let Err(msg) = hook(&mut http_request) {
                    return Err(ClientError::PreSendHook(msg));
                }
            }

            debug!(
                op = request.operation().wire_name(),
                addr = addr.as_str(),
                url = attempt_url.as_str(),
                "issuing request"
            );

            let sent = match self.cancel {
                Some(token) => tokio::select! {
                    _ = token.cancelled() => return Err(ClientError::Cancelled),
                    result = self.transport.execute(http_request) => result,
                },
                None => self.transport.execute(http_request).await,
            };

            let outcome = match sent {
                Ok(response) => decode(response).await,
                Err(error) => Err(error),
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(ClientError::Cancelled) => return Err(ClientError::Cancelled),
                Err(error) => {
                    warn!(
                        addr = addr.as_str(),
                        error = %error,
                        "attempt failed, trying next endpoint"
                    );
                    failures.push(AttemptFailure {
                        addr: addr.clone(),
                        error: Box::new(error),
                    });
                }
            }
        }

        Err(ClientError::AllEndpointsFailed(EndpointFailures(failures)))
    }
}
