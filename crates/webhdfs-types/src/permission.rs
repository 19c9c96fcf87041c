//! Octal permission serialization.
//!
//! The remote filesystem transmits permissions as octal strings (`"755"`,
//! `"0644"`), sometimes as bare JSON numbers whose digits are octal. Locally a
//! permission is a plain `u32` bit mask.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

/// Serde adapter for `FileStatus.permission` and friends.
///
/// Use with `#[serde(with = "webhdfs_types::permission::octal")]`.
pub mod octal {
    use super::*;

    pub fn serialize<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:o}", value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OctalVisitor)
    }
}

struct OctalVisitor;

impl<'de> Visitor<'de> for OctalVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an octal permission string or number")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<u32, E> {
        parse_octal(s).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<u32, E> {
        // A bare number's decimal digits are octal digits on the wire.
        parse_octal(&n.to_string()).map_err(E::custom)
    }
}

/// Parses an octal permission string such as `"755"` or `"0644"`.
pub fn parse_octal(s: &str) -> Result<u32, String> {
    u32::from_str_radix(s, 8).map_err(|e| format!("invalid octal permission {:?}: {}", s, e))
}

/// Formats a permission as the query-string representation: a leading-zero
/// octal literal, e.g. `0o644` becomes `"0644"`.
pub fn format_query(value: u32) -> String {
    format!("0{:o}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(with = "octal")]
        permission: u32,
    }

    #[test]
    fn test_parse_octal_string() {
        let h: Holder = serde_json::from_str(r#"{"permission":"755"}"#).unwrap();
        assert_eq!(h.permission, 0o755);
    }

    #[test]
    fn test_parse_octal_with_leading_zero() {
        let h: Holder = serde_json::from_str(r#"{"permission":"0644"}"#).unwrap();
        assert_eq!(h.permission, 0o644);
    }

    #[test]
    fn test_parse_octal_number() {
        let h: Holder = serde_json::from_str(r#"{"permission":755}"#).unwrap();
        assert_eq!(h.permission, 0o755);
    }

    #[test]
    fn test_parse_octal_rejects_garbage() {
        let r: Result<Holder, _> = serde_json::from_str(r#"{"permission":"rwx"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_format_query_leading_zero() {
        assert_eq!(format_query(0o644), "0644");
        assert_eq!(format_query(0o755), "0755");
        assert_eq!(format_query(0o1777), "01777");
    }
}
