//! Data-transfer types for the WebHDFS/HttpFS REST protocol.
//!
//! Every struct here mirrors a JSON shape defined by the remote filesystem's
//! HTTP API: success payloads keyed by a capitalized field name (for example
//! `{"FileStatus": {...}}`) and the error payload `{"RemoteException": {...}}`.
//! Instances are created transiently per response and owned by the caller.

pub mod block;
pub mod envelope;
pub mod exception;
pub mod permission;
pub mod policy;
pub mod snapshot;
pub mod status;
pub mod summary;
pub mod token;
pub mod xattr;

pub use block::{BlockLocation, FileChecksum};
pub use exception::RemoteException;
pub use policy::{EcPolicy, StoragePolicy};
pub use snapshot::{SnapshotDiffReport, SnapshottableDirectory};
pub use status::{FileStatus, FileType};
pub use summary::{ContentSummary, QuotaUsage};
pub use token::DelegationToken;
pub use xattr::{XAttr, XAttrFlag};
