//! Delegation token records.

use serde::{Deserialize, Serialize};

/// An opaque, renewable credential issued by the remote service.
///
/// The URL-safe string is passed back verbatim in the `delegation` query
/// parameter and in RENEW/CANCELDELEGATIONTOKEN calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelegationToken {
    pub url_string: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_token() {
        let raw = r#"{"urlString": "JQAIaG9y..."}"#;
        let token: DelegationToken = serde_json::from_str(raw).unwrap();
        assert_eq!(token.url_string, "JQAIaG9y...");
    }
}
