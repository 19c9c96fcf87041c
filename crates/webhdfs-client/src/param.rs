//! Query-parameter encoding.
//!
//! Parameters are optional-typed: an absent optional must not emit its key at
//! all. Booleans serialize as literal `true`/`false`, integers as decimal,
//! and permissions as leading-zero octal strings. Values are percent-encoded
//! here; the URL builder uses the encoded string unmodified.

use serde::{Deserialize, Serialize};
use webhdfs_types::permission;

use crate::op::Operation;

/// Cross-cutting optional query parameters shared by every operation:
/// `delegation` (auth token), `user.name` (authenticated user) and `doas`
/// (proxy-as user). Inserted before operation-specific parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallContext {
    pub delegation: Option<String>,
    pub user_name: Option<String>,
    pub doas: Option<String>,
}

/// An ordered list of query parameters for one call.
///
/// Keys are emitted in insertion order; duplicate keys are allowed (the
/// `xattr.name` parameter repeats).
#[derive(Debug, Clone)]
pub struct ParamList {
    entries: Vec<(String, String)>,
}

impl ParamList {
    /// Starts a parameter list for the given operation: `op=` first, then the
    /// present cross-cutting context parameters.
    pub fn new(op: Operation, ctx: &CallContext) -> Self {
        let mut list = Self {
            entries: Vec::new(),
        };
        list.push("op", op.wire_name());
        if let Some(token) = &ctx.delegation {
            list.push("delegation", token);
        }
        if let Some(user) = &ctx.user_name {
            list.push("user.name", user);
        }
        if let Some(doas) = &ctx.doas {
            list.push("doas", doas);
        }
        list
    }

    pub fn push(&mut self, key: &str, value: impl AsRef<str>) {
        self.entries
            .push((key.to_string(), value.as_ref().to_string()));
    }

    pub fn push_bool(&mut self, key: &str, value: bool) {
        self.push(key, if value { "true" } else { "false" });
    }

    pub fn push_u64(&mut self, key: &str, value: u64) {
        self.push(key, value.to_string());
    }

    pub fn push_i64(&mut self, key: &str, value: i64) {
        self.push(key, value.to_string());
    }

    /// Permission values serialize as a leading-zero octal literal, e.g.
    /// `0o644` becomes `0644`.
    pub fn push_permission(&mut self, key: &str, value: u32) {
        self.push(key, permission::format_query(value));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.push(key, v);
        }
    }

    pub fn push_opt_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.push_bool(key, v);
        }
    }

    pub fn push_opt_u64(&mut self, key: &str, value: Option<u64>) {
        if let Some(v) = value {
            self.push_u64(key, v);
        }
    }

    pub fn push_opt_i64(&mut self, key: &str, value: Option<i64>) {
        if let Some(v) = value {
            self.push_i64(key, v);
        }
    }

    pub fn push_opt_permission(&mut self, key: &str, value: Option<u32>) {
        if let Some(v) = value {
            self.push_permission(key, v);
        }
    }

    /// True if a parameter with this key was inserted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Percent-encoded `k=v&k=v` query string.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(k));
            out.push('=');
            out.push_str(&urlencoding::encode(v));
        }
        out
    }
}
