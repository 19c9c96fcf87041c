//! Redirect-aware body transfer for data-plane operations.
//!
//! OPEN, CREATE, APPEND and GETFILECHECKSUM have two possible response
//! modes: a redirect naming the datanode that holds (or will hold) the
//! bytes, or a direct data response when the transport already reached the
//! right server. The namenode hop runs through the failover executor; the
//! datanode hop targets exactly one server and does not fail over.

use bytes::Bytes;
use http::Method;
use webhdfs_types::envelope::LocationResponse;

use crate::config::ProtocolVariant;
use crate::decode;
use crate::error::{ClientError, Result};
use crate::failover::FailoverExecutor;
use crate::request::RestRequest;
use crate::transport::{HttpRequest, HttpResponse};

/// Outcome of the namenode hop of a redirect-capable operation.
pub(crate) enum Hop {
    /// The payload is already on this response; pass it through untouched.
    Direct(HttpResponse),
    /// The data lives behind this absolute URL.
    Redirect(String),
}

/// Classifies the first-hop response: a 307 carries the target in the
/// `Location` header; in no-redirect mode a success body carries it as JSON;
/// any other success is the payload itself. Failures are decoded for the
/// remote exception.
pub(crate) async fn classify_hop(response: HttpResponse, noredirect: bool) -> Result<Hop> {
    if response.is_redirect() {
        let location = response.location.clone();
        // The redirect body is empty or boilerplate; consume it so the
        // connection is reusable.
        let _ = response.body.collect().await;
        return match location {
            Some(location) => Ok(Hop::Redirect(location)),
            None => Err(ClientError::UnexpectedResponse {
                msg: "redirect response without Location header".to_string(),
            }),
        };
    }
    if response.is_success() {
        if noredirect {
            let envelope: LocationResponse = decode::decode_json(response).await?;
            return Ok(Hop::Redirect(envelope.location));
        }
        return Ok(Hop::Direct(response));
    }
    fail_from_body(response).await
}

/// Decodes an error response into its remote exception; never returns Ok.
async fn fail_from_body<T>(response: HttpResponse) -> Result<T> {
    let (status, success, bytes) = decode::read_body(response).await?;
    decode::envelope(status, success, &bytes)?;
    Err(ClientError::UnexpectedResponse {
        msg: format!("HTTP {} on data transfer", status),
    })
}

async fn ensure_success(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        fail_from_body(response).await
    }
}

/// Uploads `data` for a CREATE or APPEND operation.
pub(crate) async fn write(
    executor: &FailoverExecutor<'_>,
    request: &dyn RestRequest,
    data: Bytes,
) -> Result<()> {
    match executor.config.variant {
        // Single hop: the body travels with the first request.
        ProtocolVariant::HttpFs => {
            executor
                .execute(request, Some(data), &[("data", "true")], decode::decode_unit)
                .await
        }
        ProtocolVariant::WebHdfs => {
            let noredirect = executor.config.use_noredirect;
            let extra: &[(&str, &str)] = if noredirect {
                &[("noredirect", "true")]
            } else {
                &[]
            };
            let hop = executor
                .execute(request, None, extra, |response| {
                    classify_hop(response, noredirect)
                })
                .await?;
            match hop {
                Hop::Direct(response) => decode::decode_unit(response).await,
                Hop::Redirect(location) => {
                    let method = request.operation().method(executor.config.variant);
                    let datanode_request = HttpRequest::new(method, &location)
                        .header("Content-Type", "application/octet-stream")
                        .body(data);
                    let response = executor.transport.execute(datanode_request).await?;
                    decode::decode_unit(response).await
                }
            }
        }
    }
}

/// Fetches the data-bearing response for an OPEN or GETFILECHECKSUM
/// operation. Ownership of the body transfers to the caller, who must drain
/// it.
pub(crate) async fn read(
    executor: &FailoverExecutor<'_>,
    request: &dyn RestRequest,
) -> Result<HttpResponse> {
    let noredirect = executor.config.use_noredirect;
    let extra: &[(&str, &str)] = if noredirect {
        &[("noredirect", "true")]
    } else {
        &[]
    };
    let hop = executor
        .execute(request, None, extra, |response| {
            classify_hop(response, noredirect)
        })
        .await?;
    match hop {
        Hop::Direct(response) => Ok(response),
        Hop::Redirect(location) => {
            let datanode_request = HttpRequest::new(Method::GET, &location);
            let response = executor.transport.execute(datanode_request).await?;
            ensure_success(response).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::request::{AppendRequest, CreateRequest, OpenRequest};
    use crate::transport::{HttpTransport, ResponseBody};
    use async_trait::async_trait;
    use http::StatusCode;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedTransport {
        responses: Mutex<VecDeque<HttpResponse>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<HttpResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.responses.lock().unwrap().pop_front().expect("script"))
        }
    }

    fn response(status: u16, body: &[u8], location: Option<&str>) -> HttpResponse {
        HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            content_length: Some(body.len() as u64),
            content_type: None,
            location: location.map(String::from),
            body: if body.is_empty() {
                ResponseBody::Empty
            } else {
                ResponseBody::Buffered(Bytes::copy_from_slice(body))
            },
        }
    }

    fn webhdfs_config() -> ClientConfig {
        ClientConfig::new(vec!["nn1:9870".to_string()])
    }

    #[tokio::test]
    async fn test_create_follows_307_and_uploads_to_datanode() {
        let transport = ScriptedTransport::new(vec![
            response(307, b"", Some("http://dn1:9864/webhdfs/v1/f?op=CREATE")),
            response(201, b"", None),
        ]);
        let config = webhdfs_config();
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = CreateRequest {
            path: "/f".to_string(),
            ..Default::default()
        };
        write(&executor, &request, Bytes::from_static(b"hello"))
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        // Namenode hop carries no body; datanode hop carries the payload.
        assert!(requests[0].body.is_none());
        assert!(requests[0].url.starts_with("https://nn1:9870/"));
        assert!(requests[1].url.starts_with("http://dn1:9864/"));
        assert_eq!(requests[1].body.as_deref(), Some(b"hello".as_ref()));
    }

    #[tokio::test]
    async fn test_noredirect_mode_reads_location_from_json() {
        let transport = ScriptedTransport::new(vec![
            response(
                200,
                br#"{"Location": "http://dn2:9864/webhdfs/v1/f?op=APPEND"}"#,
                None,
            ),
            response(200, b"", None),
        ]);
        let mut config = webhdfs_config();
        config.use_noredirect = true;
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = AppendRequest {
            path: "/f".to_string(),
            buffer_size: None,
        };
        write(&executor, &request, Bytes::from_static(b"more"))
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].url.contains("noredirect=true"));
        assert!(requests[1].url.starts_with("http://dn2:9864/"));
    }

    #[tokio::test]
    async fn test_httpfs_writes_in_a_single_hop() {
        let transport = ScriptedTransport::new(vec![response(201, b"", None)]);
        let mut config = webhdfs_config();
        config.variant = ProtocolVariant::HttpFs;
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = CreateRequest {
            path: "/f".to_string(),
            ..Default::default()
        };
        write(&executor, &request, Bytes::from_static(b"hello"))
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("data=true"));
        assert_eq!(requests[0].body.as_deref(), Some(b"hello".as_ref()));
    }

    #[tokio::test]
    async fn test_open_direct_success_passes_body_through() {
        // The transport already followed the redirect; the body is the
        // payload and must not be parsed as JSON.
        let transport = ScriptedTransport::new(vec![response(200, b"raw file bytes", None)]);
        let config = webhdfs_config();
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = OpenRequest {
            path: "/f".to_string(),
            ..Default::default()
        };
        let resp = read(&executor, &request).await.unwrap();
        assert_eq!(
            resp.body.collect().await.unwrap().as_ref(),
            b"raw file bytes"
        );
    }

    #[tokio::test]
    async fn test_open_follows_redirect_to_datanode() {
        let transport = ScriptedTransport::new(vec![
            response(307, b"", Some("http://dn1:9864/webhdfs/v1/f?op=OPEN")),
            response(200, b"contents", None),
        ]);
        let config = webhdfs_config();
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = OpenRequest {
            path: "/f".to_string(),
            ..Default::default()
        };
        let resp = read(&executor, &request).await.unwrap();
        assert_eq!(resp.body.collect().await.unwrap().as_ref(), b"contents");

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[1].method, Method::GET);
    }

    #[tokio::test]
    async fn test_redirect_without_location_is_an_error() {
        let transport = ScriptedTransport::new(vec![response(307, b"", None)]);
        let config = webhdfs_config();
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = OpenRequest {
            path: "/f".to_string(),
            ..Default::default()
        };
        let err = read(&executor, &request).await.unwrap_err();
        // The sole endpoint failed, so the classification error surfaces
        // through the aggregated failover error.
        assert!(matches!(err, ClientError::AllEndpointsFailed(_)));
    }

    #[tokio::test]
    async fn test_datanode_error_is_decoded() {
        let transport = ScriptedTransport::new(vec![
            response(307, b"", Some("http://dn1:9864/webhdfs/v1/f?op=OPEN")),
            response(
                404,
                br#"{"RemoteException":{"exception":"FileNotFoundException","message":"gone"}}"#,
                None,
            ),
        ]);
        let config = webhdfs_config();
        let executor = FailoverExecutor {
            config: &config,
            transport: &transport,
            hook: None,
            cancel: None,
        };
        let request = OpenRequest {
            path: "/f".to_string(),
            ..Default::default()
        };
        let err = read(&executor, &request).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
