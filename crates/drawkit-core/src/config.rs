//! Interaction tuning: handle size, minimum and default shape sizes.

use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_grab_handle_size() -> f64 {
    8.0
}

fn default_min_shape_size() -> Size {
    Size::new(16.0, 16.0)
}

fn default_shape_size() -> Size {
    Size::new(96.0, 48.0)
}

fn default_nudge_step() -> f64 {
    1.0
}

/// Sizes and steps shared by hit testing and interactors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Side of a square grab handle. Half of it is the hit tolerance.
    #[serde(default = "default_grab_handle_size")]
    pub grab_handle_size: f64,
    /// Smallest shape a finished gesture may produce.
    #[serde(default = "default_min_shape_size")]
    pub min_shape_size: Size,
    /// Size of a shape placed with a single click.
    #[serde(default = "default_shape_size")]
    pub default_shape_size: Size,
    /// Distance moved by one keyboard nudge.
    #[serde(default = "default_nudge_step")]
    pub nudge_step: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grab_handle_size: default_grab_handle_size(),
            min_shape_size: default_min_shape_size(),
            default_shape_size: default_shape_size(),
            nudge_step: default_nudge_step(),
        }
    }
}

impl InteractionConfig {
    /// Grab handle as a square size.
    pub fn handle_size(&self) -> Size {
        Size::new(self.grab_handle_size, self.grab_handle_size)
    }

    /// Reject sizes that would break hit testing or viable-size enforcement.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.grab_handle_size) {
            return Err(ConfigError::Invalid(format!(
                "grab_handle_size must be positive, got {}",
                self.grab_handle_size
            )));
        }
        for (name, size) in [
            ("min_shape_size", self.min_shape_size),
            ("default_shape_size", self.default_shape_size),
        ] {
            if !size.width.is_finite()
                || !size.height.is_finite()
                || size.width < 0.0
                || size.height < 0.0
            {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {}x{}",
                    size.width, size.height
                )));
            }
        }
        if !positive(self.nudge_step) {
            return Err(ConfigError::Invalid(format!(
                "nudge_step must be positive, got {}",
                self.nudge_step
            )));
        }
        Ok(())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded interaction config from {}", path.display());
        Ok(config)
    }
}
