//! Client configuration.
//!
//! The configuration is read-only after client construction: the address
//! list, protocol variant and call context are set once and shared by every
//! call without synchronization.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::param::CallContext;

/// Which flavor of the REST protocol the endpoints speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVariant {
    /// Namenode-redirect style: data operations bounce through a `Location`
    /// redirect to the datanode holding the bytes.
    WebHdfs,
    /// Single-hop gateway style: data operations carry `data=true` and the
    /// body travels on the first request.
    HttpFs,
}

impl Default for ProtocolVariant {
    fn default() -> Self {
        ProtocolVariant::WebHdfs
    }
}

/// Optional anti-forgery header attached to every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfConfig {
    pub header: String,
    pub value: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            header: "X-XSRF-HEADER".to_string(),
            value: "\"\"".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Ordered `host:port` endpoints; tried strictly in declaration order.
    pub addresses: Vec<String>,
    /// On by default; opting out of TLS is the explicit choice.
    pub use_ssl: bool,
    pub variant: ProtocolVariant,
    /// Cross-cutting query parameters applied to every call.
    pub context: CallContext,
    pub csrf: Option<CsrfConfig>,
    /// Ask servers to close connections after each response.
    pub connection_close: bool,
    /// Request `{"Location": ...}` JSON instead of a 307 on data operations.
    pub use_noredirect: bool,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            addresses: Vec::new(),
            use_ssl: true,
            variant: ProtocolVariant::WebHdfs,
            context: CallContext::default(),
            csrf: None,
            connection_close: false,
            use_noredirect: false,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new(addresses: Vec<String>) -> Self {
        Self {
            addresses,
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.context.user_name = Some(user.into());
        self
    }

    pub fn with_doas(mut self, doas: impl Into<String>) -> Self {
        self.context.doas = Some(doas.into());
        self
    }

    pub fn with_delegation_token(mut self, token: impl Into<String>) -> Self {
        self.context.delegation = Some(token.into());
        self
    }

    pub fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    pub fn with_csrf(mut self, csrf: CsrfConfig) -> Self {
        self.csrf = Some(csrf);
        self
    }

    /// URL scheme: `https` unless SSL is explicitly disabled.
    pub fn scheme(&self) -> &'static str {
        if self.use_ssl {
            "https"
        } else {
            "http"
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.addresses.is_empty() {
            return Err(ClientError::Configuration {
                reason: "no server addresses configured".to_string(),
            });
        }
        for addr in &self.addresses {
            if !addr.contains(':') {
                return Err(ClientError::Configuration {
                    reason: format!("address {:?} is not host:port", addr),
                });
            }
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClientError::Configuration {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let config: ClientConfig = match ext.to_lowercase().as_str() {
            "toml" => toml::from_str(&contents).map_err(|e| ClientError::Configuration {
                reason: format!("invalid TOML config: {}", e),
            })?,
            "json" => serde_json::from_str(&contents).map_err(|e| ClientError::Configuration {
                reason: format!("invalid JSON config: {}", e),
            })?,
            other => {
                return Err(ClientError::Configuration {
                    reason: format!("unsupported config file extension: {:?}", other),
                })
            }
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();
        assert!(config.addresses.is_empty());
        assert_eq!(config.variant, ProtocolVariant::WebHdfs);
        assert!(config.use_ssl);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.csrf.is_none());
    }

    #[test]
    fn test_default_scheme_is_https() {
        // An untouched config must not downgrade to plaintext.
        let config = ClientConfig::new(vec!["nn1:9871".to_string()]);
        assert_eq!(config.scheme(), "https");
    }

    #[test]
    fn test_scheme_is_http_only_when_ssl_disabled() {
        let config = ClientConfig::new(vec!["nn1:9870".to_string()]).with_ssl(false);
        assert_eq!(config.scheme(), "http");
    }

    #[test]
    fn test_validate_rejects_empty_address_list() {
        let err = ClientConfig::default().validate().unwrap_err();
        assert!(matches!(err, ClientError::Configuration { .. }));
    }

    #[test]
    fn test_validate_rejects_address_without_port() {
        let config = ClientConfig::new(vec!["namenode".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let raw = r#"
            addresses = ["nn1:9870", "nn2:9870"]
            use_ssl = false
            variant = "httpfs"

            [context]
            user_name = "alice"
        "#;
        let config: ClientConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.addresses.len(), 2);
        assert!(!config.use_ssl);
        assert_eq!(config.variant, ProtocolVariant::HttpFs);
        assert_eq!(config.context.user_name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new(vec!["nn1:9870".to_string()])
            .with_user("alice")
            .with_doas("bob")
            .with_delegation_token("tok")
            .with_variant(ProtocolVariant::HttpFs);
        assert_eq!(config.context.user_name.as_deref(), Some("alice"));
        assert_eq!(config.context.doas.as_deref(), Some("bob"));
        assert_eq!(config.context.delegation.as_deref(), Some("tok"));
        assert_eq!(config.variant, ProtocolVariant::HttpFs);
        assert!(config.validate().is_ok());
    }
}
