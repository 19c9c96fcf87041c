//! Response decoding.
//!
//! One shared decision structure serves every operation: capture transport
//! metadata, read the full body, branch on status and body-emptiness before
//! attempting a JSON parse, and always check a decoded document for an
//! embedded `RemoteException` before using it. Redirect-capable data
//! responses never pass through here; the transfer layer hands their bodies
//! to the caller untouched.

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use webhdfs_types::RemoteException;

use crate::error::{ClientError, Result};
use crate::remote;
use crate::transport::HttpResponse;

/// Upper bound on the raw-body excerpt attached to decode errors. A
/// pathological error page never ends up in an error message whole.
pub const BODY_EXCERPT_LIMIT: usize = 1024;

pub(crate) fn excerpt(bytes: &[u8]) -> String {
    let end = bytes.len().min(BODY_EXCERPT_LIMIT);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

pub(crate) async fn read_body(response: HttpResponse) -> Result<(StatusCode, bool, Bytes)> {
    let status = response.status;
    let success = response.is_success();
    let bytes = response
        .body
        .collect()
        .await
        .map_err(|e| ClientError::Decode {
            msg: format!("failed to read response body: {}", e),
            excerpt: String::new(),
        })?;
    Ok((status, success, bytes))
}

/// Parses the body into a JSON envelope. Returns `None` for an empty body on
/// a success status; errors on everything else that is not a clean success
/// document.
pub(crate) fn envelope(status: StatusCode, success: bool, bytes: &Bytes) -> Result<Option<Value>> {
    if bytes.is_empty() {
        if success {
            return Ok(None);
        }
        return Err(ClientError::UnexpectedResponse {
            msg: format!("HTTP {} with empty body", status),
        });
    }
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ClientError::Decode {
        msg: format!("invalid JSON: {}", e),
        excerpt: excerpt(bytes),
    })?;
    if let Some(raw) = value.get("RemoteException") {
        let exception: RemoteException =
            serde_json::from_value(raw.clone()).map_err(|e| ClientError::Decode {
                msg: format!("malformed RemoteException: {}", e),
                excerpt: excerpt(bytes),
            })?;
        return Err(remote::translate(exception));
    }
    if !success {
        return Err(ClientError::UnexpectedResponse {
            msg: format!("HTTP {} without remote exception", status),
        });
    }
    Ok(Some(value))
}

/// Decodes an operation whose success shape is mandatory.
pub async fn decode_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let (status, success, bytes) = read_body(response).await?;
    match envelope(status, success, &bytes)? {
        Some(value) => serde_json::from_value(value).map_err(|e| ClientError::Decode {
            msg: format!("unexpected success shape: {}", e),
            excerpt: excerpt(&bytes),
        }),
        None => Err(ClientError::UnexpectedResponse {
            msg: format!("HTTP {} with empty body for mandatory payload", status),
        }),
    }
}

/// Decodes an operation that signals only a side effect: an empty success
/// body yields the default result.
pub async fn decode_json_or_default<T: DeserializeOwned + Default>(
    response: HttpResponse,
) -> Result<T> {
    let (status, success, bytes) = read_body(response).await?;
    match envelope(status, success, &bytes)? {
        Some(value) => serde_json::from_value(value).map_err(|e| ClientError::Decode {
            msg: format!("unexpected success shape: {}", e),
            excerpt: excerpt(&bytes),
        }),
        None => Ok(T::default()),
    }
}

/// Decodes an operation with no payload at all: success is success.
pub async fn decode_unit(response: HttpResponse) -> Result<()> {
    let (status, success, bytes) = read_body(response).await?;
    envelope(status, success, &bytes)?;
    Ok(())
}
