//! The structured error payload reported by the remote service.

use serde::{Deserialize, Serialize};

/// A server-side exception as transmitted in the error envelope
/// `{"RemoteException": {...}}`.
///
/// Created by the response decoder when a call fails remotely, translated
/// immediately into a local error and never retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteException {
    pub exception: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_class_name: Option<String>,
}

impl RemoteException {
    /// The most specific class name available: the fully qualified Java class
    /// when present, otherwise the bare exception name.
    pub fn class_name(&self) -> &str {
        self.java_class_name.as_deref().unwrap_or(&self.exception)
    }

    /// The unqualified class name (`java.io.FileNotFoundException` becomes
    /// `FileNotFoundException`).
    pub fn simple_name(&self) -> &str {
        self.class_name().rsplit('.').next().unwrap_or_default()
    }
}
