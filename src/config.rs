//! Canvas configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use crate::consts::{CANVAS_MIN_HEIGHT, CANVAS_WIDTH, MIN_ELEMENT_SIZE};

pub const ENV_CANVAS_WIDTH: &str = "FREEFORM_CANVAS_WIDTH";
pub const ENV_CANVAS_MIN_HEIGHT: &str = "FREEFORM_CANVAS_MIN_HEIGHT";
pub const ENV_MIN_ELEMENT_SIZE: &str = "FREEFORM_MIN_ELEMENT_SIZE";

/// Error returned by [`CanvasConfig::from_env`] and [`CanvasConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an integer, got '{value}'")]
    Parse { var: &'static str, value: String },
    #[error("invalid canvas config: {0}")]
    Invalid(String),
}

/// Dimensions of the drawing surface and the element size floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Fixed horizontal extent; elements never cross it.
    pub width: i64,
    /// Display hint for hosts; not enforced.
    pub min_height: i64,
    /// Smallest committed width or height.
    pub min_size: i64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: CANVAS_WIDTH, min_height: CANVAS_MIN_HEIGHT, min_size: MIN_ELEMENT_SIZE }
    }
}

impl CanvasConfig {
    /// Build canvas config from environment variables.
    ///
    /// Optional:
    /// - `FREEFORM_CANVAS_WIDTH`: default 1000
    /// - `FREEFORM_CANVAS_MIN_HEIGHT`: default 1400
    /// - `FREEFORM_MIN_ELEMENT_SIZE`: default 50
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for non-integer values and
    /// [`ConfigError::Invalid`] when the values cannot hold an element.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build canvas config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`CanvasConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let defaults = Self::default();
        let config = Self {
            width: parse_i64(&lookup, ENV_CANVAS_WIDTH, defaults.width)?,
            min_height: parse_i64(&lookup, ENV_CANVAS_MIN_HEIGHT, defaults.min_height)?,
            min_size: parse_i64(&lookup, ENV_MIN_ELEMENT_SIZE, defaults.min_size)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that an element of minimum size fits on the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size <= 0 {
            return Err(ConfigError::Invalid(format!("min_size must be positive, got {}", self.min_size)));
        }
        if self.width < self.min_size {
            return Err(ConfigError::Invalid(format!(
                "width {} is smaller than min_size {}",
                self.width, self.min_size
            )));
        }
        if self.min_height < 0 {
            return Err(ConfigError::Invalid(format!("min_height must not be negative, got {}", self.min_height)));
        }
        Ok(())
    }
}

fn parse_i64<F>(lookup: &F, var: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::Parse { var, value: raw }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Parse { var, value: raw.to_string_lossy().into_owned() }),
    }
}
