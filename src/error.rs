//! Error types for persistence and configuration.
//!
//! ERROR HANDLING
//! ==============
//! A missing credential is a state, not an error, and an unmatched path is a
//! `Navigation::NotFound` outcome. Only the collaborators that can genuinely
//! fail get an error type here.

/// Failure reported by a [`crate::storage::TokenStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no `window`, storage disabled, etc.).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading `key` failed.
    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },
    /// Writing `key` failed (quota exceeded, private mode, ...).
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
    /// Removing `key` failed.
    #[error("storage remove failed for {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// Failure building a [`crate::config::GateConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
