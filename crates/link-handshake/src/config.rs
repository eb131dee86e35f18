//! Handshake configuration.

use crate::domain::{LocalNodeState, SkewPolicy, VersionRange};
use crate::error::ConfigError;

/// Newest protocol revision this implementation speaks
pub const CURRENT_PROTOCOL_VERSION: u32 = 6;

/// Oldest protocol revision accepted from peers
pub const MIN_PROTOCOL_VERSION: u32 = 6;

/// Configuration for handshake evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeConfig {
    /// Newest protocol revision spoken
    pub current_protocol_version: u32,
    /// Oldest protocol revision accepted
    pub min_supported_protocol_version: u32,
    /// Clock delta above which operators are warned (seconds)
    pub warn_skew_secs: u64,
    /// Clock delta above which the link is dropped (seconds)
    pub max_skew_secs: u64,
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            current_protocol_version: CURRENT_PROTOCOL_VERSION,
            min_supported_protocol_version: MIN_PROTOCOL_VERSION,
            warn_skew_secs: 30,
            max_skew_secs: 300,
        }
    }
}

impl HandshakeConfig {
    /// Check `warn <= max` and `min <= current`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warn_skew_secs > self.max_skew_secs {
            return Err(ConfigError::InvertedSkewThresholds {
                warn: self.warn_skew_secs,
                max: self.max_skew_secs,
            });
        }
        if self.min_supported_protocol_version > self.current_protocol_version {
            return Err(ConfigError::InvertedVersionRange {
                min: self.min_supported_protocol_version,
                current: self.current_protocol_version,
            });
        }
        Ok(())
    }

    /// Validated local state for evaluation
    pub fn local_state(&self) -> Result<LocalNodeState, ConfigError> {
        self.validate()?;
        Ok(LocalNodeState::new(
            VersionRange::new(
                i64::from(self.min_supported_protocol_version),
                i64::from(self.current_protocol_version),
            ),
            SkewPolicy::new(self.warn_skew_secs, self.max_skew_secs),
        ))
    }

    /// Testing config
    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            current_protocol_version: 6,
            min_supported_protocol_version: 3,
            warn_skew_secs: 5,
            max_skew_secs: 10,
        }
    }
}
