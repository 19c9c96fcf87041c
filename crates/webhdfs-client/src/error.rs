//! Client error taxonomy.
//!
//! Validation and configuration errors short-circuit before any network
//! attempt. Transport, decode and remote errors are per-address and feed the
//! failover loop; when every address fails the individual failures are
//! aggregated, never discarded.

use std::fmt;

use thiserror::Error;

/// Portable classification of a server-reported exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The path does not exist.
    NotFound,
    /// The caller lacks permission.
    PermissionDenied,
    /// The target already exists (or is already being created).
    AlreadyExists,
    /// A directory delete/rename target is not empty.
    DirectoryNotEmpty,
    /// Any other server-side exception; the original class name and message
    /// are preserved verbatim on the error.
    Other,
}

/// One failed attempt against one endpoint.
#[derive(Debug)]
pub struct AttemptFailure {
    pub addr: String,
    pub error: Box<ClientError>,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.addr, self.error)
    }
}

/// All per-address failures from an exhausted failover loop.
#[derive(Debug, Default)]
pub struct EndpointFailures(pub Vec<AttemptFailure>);

impl fmt::Display for EndpointFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attempt) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", attempt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("transport error for {url}: {msg}")]
    Transport { url: String, msg: String },

    #[error("decode error: {msg} (body excerpt: {excerpt:?})")]
    Decode { msg: String, excerpt: String },

    #[error("remote exception {exception}: {message}")]
    Remote {
        kind: RemoteErrorKind,
        exception: String,
        message: String,
    },

    #[error("pre-send hook failed: {0}")]
    PreSendHook(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("unexpected response: {msg}")]
    UnexpectedResponse { msg: String },

    #[error("all endpoints failed: {0}")]
    AllEndpointsFailed(EndpointFailures),
}

impl ClientError {
    /// The remote error kind, if this error (or, for an aggregated failover
    /// error, any of its per-address failures) carries one.
    pub fn remote_kind(&self) -> Option<RemoteErrorKind> {
        match self {
            ClientError::Remote { kind, .. } => Some(*kind),
            ClientError::AllEndpointsFailed(failures) => failures
                .0
                .iter()
                .find_map(|attempt| attempt.error.remote_kind()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.remote_kind() == Some(RemoteErrorKind::NotFound)
    }

    pub fn is_permission_denied(&self) -> bool {
        self.remote_kind() == Some(RemoteErrorKind::PermissionDenied)
    }

    pub fn is_already_exists(&self) -> bool {
        self.remote_kind() == Some(RemoteErrorKind::AlreadyExists)
    }

    pub fn is_directory_not_empty(&self) -> bool {
        self.remote_kind() == Some(RemoteErrorKind::DirectoryNotEmpty)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(kind: RemoteErrorKind) -> ClientError {
        ClientError::Remote {
            kind,
            exception: "X".to_string(),
            message: "m".to_string(),
        }
    }

    #[test]
    fn test_kind_predicates() {
        assert!(remote(RemoteErrorKind::NotFound).is_not_found());
        assert!(remote(RemoteErrorKind::PermissionDenied).is_permission_denied());
        assert!(remote(RemoteErrorKind::AlreadyExists).is_already_exists());
        assert!(remote(RemoteErrorKind::DirectoryNotEmpty).is_directory_not_empty());
        assert!(!remote(RemoteErrorKind::Other).is_not_found());
    }

    #[test]
    fn test_aggregated_error_exposes_remote_kind() {
        let err = ClientError::AllEndpointsFailed(EndpointFailures(vec![
            AttemptFailure {
                addr: "nn1:9870".to_string(),
                error: Box::new(ClientError::Transport {
                    url: "http://nn1:9870/".to_string(),
                    msg: "connection refused".to_string(),
                }),
            },
            AttemptFailure {
                addr: "nn2:9870".to_string(),
                error: Box::new(remote(RemoteErrorKind::NotFound)),
            },
        ]));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_aggregated_display_preserves_every_failure() {
        let err = ClientError::AllEndpointsFailed(EndpointFailures(vec![
            AttemptFailure {
                addr: "nn1:9870".to_string(),
                error: Box::new(ClientError::Transport {
                    url: "http://nn1:9870/".to_string(),
                    msg: "refused".to_string(),
                }),
            },
            AttemptFailure {
                addr: "nn2:9870".to_string(),
                error: Box::new(ClientError::Transport {
                    url: "http://nn2:9870/".to_string(),
                    msg: "timeout".to_string(),
                }),
            },
        ]));
        let text = err.to_string();
        assert!(text.contains("nn1:9870"));
        assert!(text.contains("refused"));
        assert!(text.contains("nn2:9870"));
        assert!(text.contains("timeout"));
    }

    #[test]
    fn test_validation_error_has_no_remote_kind() {
        let err = ClientError::MissingRequiredField { field: "path" };
        assert!(err.remote_kind().is_none());
    }
}
