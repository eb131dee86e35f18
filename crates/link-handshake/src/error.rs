//! Error types for link handshake handling
//!
//! Protocol findings (incompatible revisions, clock skew) are not errors: they
//! are returned as [`Decision`](crate::Decision) values. The types here cover
//! malformed input, misrouted announcements and configuration problems.

use thiserror::Error;

/// Errors raised around handshake evaluation
#[derive(Debug, Error)]
pub enum HandshakeError {
    /// A handshake parameter is not an integer
    #[error("Malformed handshake: {field} is not an integer ({value:?})")]
    MalformedHandshake { field: &'static str, value: String },

    /// Fewer parameters than the handshake requires
    #[error("Malformed handshake: expected {expected} parameters, got {actual}")]
    MissingParameters { expected: usize, actual: usize },

    /// The announcement did not originate from the directly connected session
    #[error("Handshake announcement relayed through another server")]
    RelayedAnnouncement,

    /// Local configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `warn_skew_secs` exceeds `max_skew_secs`
    #[error("Invalid skew thresholds: warn ({warn}s) exceeds max ({max}s)")]
    InvertedSkewThresholds { warn: u64, max: u64 },

    /// `min_supported_protocol_version` exceeds `current_protocol_version`
    #[error("Invalid protocol range: min ({min}) exceeds current ({current})")]
    InvertedVersionRange { min: u32, current: u32 },

    /// Config file could not be read
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Config file could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Result type for handshake operations
pub type HandshakeResult<T> = Result<T, HandshakeError>;
