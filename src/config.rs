//! Gate configuration: storage key, login path and header shape.
//!
//! Defaults match the conventional SPA setup (`"token"` in storage,
//! `/login`, `Authorization: Bearer ...`). Hosts that need something else
//! can ship a partial JSON document and let the remaining fields default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "token";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HEADER_NAME: &str = "Authorization";
pub const DEFAULT_AUTH_SCHEME: &str = "Bearer";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Persistent-storage key holding the credential.
    pub storage_key: String,
    /// Redirect target when a guarded route is entered without a credential.
    pub login_path: String,
    /// Default request header carrying the credential.
    pub header_name: String,
    /// Scheme prefix placed before the credential in the header value.
    pub auth_scheme: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            header_name: DEFAULT_HEADER_NAME.to_owned(),
            auth_scheme: DEFAULT_AUTH_SCHEME.to_owned(),
        }
    }
}

impl GateConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a field fails [`GateConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("storage_key", &self.storage_key)?;
        require_non_empty("header_name", &self.header_name)?;
        require_non_empty("auth_scheme", &self.auth_scheme)?;
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "login_path",
                reason: format!("must start with '/', got {:?}", self.login_path),
            });
        }
        Ok(())
    }

    /// Header value for `token`, e.g. `Bearer tok123`.
    #[must_use]
    pub fn header_value(&self, token: &str) -> String {
        format!("{} {token}", self.auth_scheme)
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid { field, reason: "must not be empty".to_owned() });
    }
    Ok(())
}
