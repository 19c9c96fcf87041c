//! Extended attribute records.

use serde::{Deserialize, Serialize};

/// One extended attribute attached to a path.
///
/// The value is absent when the server was asked for names only, or when the
/// attribute was set without a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XAttr {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Flag governing SETXATTR: create a new attribute or replace an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum XAttrFlag {
    Create,
    Replace,
}

impl XAttrFlag {
    /// Wire value for the `flag` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            XAttrFlag::Create => "CREATE",
            XAttrFlag::Replace => "REPLACE",
        }
    }
}
