use crate::config::HandshakeConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - In-code config
// ============================================================================

/// Configuration provider with values fixed at construction.
///
/// Useful for embedding and tests. For file-based config, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: HandshakeConfig,
}

impl StaticConfigProvider {
    /// Create with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole config.
    #[must_use]
    pub fn with_config(mut self, config: HandshakeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the skew thresholds in seconds.
    #[must_use]
    pub fn with_skew_thresholds(mut self, warn_secs: u64, max_secs: u64) -> Self {
        self.config.warn_skew_secs = warn_secs;
        self.config.max_skew_secs = max_secs;
        self
    }

    /// Set the accepted protocol revision range.
    #[must_use]
    pub fn with_protocol_range(mut self, min: u32, current: u32) -> Self {
        self.config.min_supported_protocol_version = min;
        self.config.current_protocol_version = current;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn handshake_config(&self) -> HandshakeConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading (requires "config-file" feature)
// ============================================================================

#[cfg(feature = "config-file")]
mod toml_config {
    use super::*;
    use crate::error::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        protocol: ProtocolSection,
        #[serde(default)]
        clock: ClockSection,
    }

    #[derive(Debug, Deserialize, Default)]
    struct ProtocolSection {
        current_version: Option<u32>,
        min_version: Option<u32>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct ClockSection {
        warn_delta_secs: Option<u64>,
        max_delta_secs: Option<u64>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [protocol]
    /// current_version = 6
    /// min_version = 6
    ///
    /// [clock]
    /// warn_delta_secs = 30
    /// max_delta_secs = 300
    /// ```
    ///
    /// Missing keys fall back to [`HandshakeConfig::default`]. The result is
    /// validated on load.
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: HandshakeConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed, or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                reason: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let defaults = HandshakeConfig::default();
            let config = HandshakeConfig {
                current_protocol_version: file
                    .protocol
                    .current_version
                    .unwrap_or(defaults.current_protocol_version),
                min_supported_protocol_version: file
                    .protocol
                    .min_version
                    .unwrap_or(defaults.min_supported_protocol_version),
                warn_skew_secs: file
                    .clock
                    .warn_delta_secs
                    .unwrap_or(defaults.warn_skew_secs),
                max_skew_secs: file
                    .clock
                    .max_delta_secs
                    .unwrap_or(defaults.max_skew_secs),
            };
            config.validate()?;

            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn handshake_config(&self) -> HandshakeConfig {
            self.config.clone()
        }
    }
}

#[cfg(feature = "config-file")]
pub use toml_config::TomlConfigProvider;
