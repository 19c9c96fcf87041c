//! WebHDFS/HttpFS REST client.
//!
//! Marshals typed filesystem operations into HTTP requests against an ordered
//! list of interchangeable namenode endpoints, decodes JSON or raw-byte
//! responses into typed results, translates remote Java exceptions into
//! portable local error kinds, and fails over sequentially across endpoints.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod failover;
pub mod op;
pub mod param;
pub mod remote;
pub mod request;
pub mod transfer;
pub mod transport;
pub mod url;

pub use client::WebHdfsClient;
pub use config::{ClientConfig, CsrfConfig, ProtocolVariant};
pub use error::{AttemptFailure, ClientError, EndpointFailures, RemoteErrorKind, Result};
pub use op::Operation;
pub use param::CallContext;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ResponseBody};
