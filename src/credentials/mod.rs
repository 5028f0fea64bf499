//! API key handling for the upstream Anthropic API.
//!
//! The key is resolved through a [`CredentialProvider`] injected into the
//! server state, so handlers never touch process environment directly and
//! tests can substitute a fixed key. [`ApiKey`] keeps the secret out of
//! `Debug` output and zeroizes it on drop.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{ProxyError, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret API key sent as `x-api-key`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the raw key. Only the upstream client should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Source of the upstream API key, consulted once per request.
pub trait CredentialProvider: Send + Sync {
    fn api_key(&self) -> Result<ApiKey>;

    /// Whether a key is currently available, without handing it out.
    fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }
}

/// Reads the key from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Result<ApiKey> {
        match std::env::var(&self.var) {
            Ok(key) if !key.is_empty() => Ok(ApiKey::new(key)),
            _ => Err(ProxyError::MissingCredential(self.var.clone())),
        }
    }
}

/// Fixed key, or a fixed absence of one.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    key: Option<ApiKey>,
    var: String,
}

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(ApiKey::new(key)),
            var: "ANTHROPIC_API_KEY".to_string(),
        }
    }

    /// A provider that always reports the key as missing.
    pub fn missing() -> Self {
        Self {
            key: None,
            var: "ANTHROPIC_API_KEY".to_string(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Result<ApiKey> {
        self.key
            .clone()
            .ok_or_else(|| ProxyError::MissingCredential(self.var.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("sk-ant-api03-secret");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_env_credentials_read_at_call_time() {
        let var = "ANTHROPIC_PROXY_TEST_KEY_CALL_TIME";
        let provider = EnvCredentials::new(var);

        std::env::remove_var(var);
        assert!(!provider.is_configured());

        std::env::set_var(var, "sk-ant-test");
        assert_eq!(provider.api_key().unwrap().expose(), "sk-ant-test");

        std::env::remove_var(var);
        assert!(provider.api_key().is_err());
    }

    #[test]
    fn test_env_credentials_empty_is_missing() {
        let var = "ANTHROPIC_PROXY_TEST_KEY_EMPTY";
        std::env::set_var(var, "");

        let err = EnvCredentials::new(var).api_key().unwrap_err();
        assert_eq!(err.to_string(), format!("{} not set", var));

        std::env::remove_var(var);
    }

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::new("k").api_key().unwrap().expose(), "k");

        let err = StaticCredentials::missing().api_key().unwrap_err();
        assert_eq!(err.to_string(), "ANTHROPIC_API_KEY not set");
    }
}
