//! config.rs
//! Runtime configuration for upload inspection.
//!
//! Every field has a default from `constants.rs`; a JSON document only needs
//! the fields it overrides.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::constants::{BLUEPRINT_EXTENSION, MAX_UPLOAD_BYTES, MIN_CONTAINER_LEN, MIN_UPLOAD_BYTES};
use crate::container::ContainerLimits;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub limits: ContainerLimits,
    pub min_upload_bytes: usize,
    pub max_upload_bytes: usize,
    /// Required final extension, without the dot.
    pub allowed_extension: String,
    /// Run the advisory content tier.
    pub scan_content: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            limits: ContainerLimits::default(),
            min_upload_bytes: MIN_UPLOAD_BYTES,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            allowed_extension: BLUEPRINT_EXTENSION.to_string(),
            scan_content: true,
        }
    }
}

impl GuardConfig {
    /// Parse overrides from JSON and validate the result.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GuardConfig = serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_upload_bytes > self.max_upload_bytes {
            return Err(ConfigError::Invalid(format!(
                "min_upload_bytes {} > max_upload_bytes {}",
                self.min_upload_bytes, self.max_upload_bytes
            )));
        }
        if self.max_upload_bytes < MIN_CONTAINER_LEN {
            return Err(ConfigError::Invalid(format!(
                "max_upload_bytes {} cannot hold a container ({} bytes)",
                self.max_upload_bytes, MIN_CONTAINER_LEN
            )));
        }
        if self.limits.max_chunks < 2 {
            return Err(ConfigError::Invalid("max_chunks must allow header and terminator".into()));
        }
        let ext = self.allowed_extension.as_str();
        if ext.is_empty() || ext.contains('.') || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Invalid(format!("invalid allowed_extension: {:?}", ext)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
