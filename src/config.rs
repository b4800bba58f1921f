use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the Portrait-Compositor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas geometry and background treatment
    pub canvas: CanvasConfig,

    /// Directory scan and worker settings
    pub batch: BatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Keys missing from the file keep their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.canvas.validate()?;
        self.batch.validate()?;
        Ok(())
    }
}

/// Output canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Gaussian blur sigma applied to the background (0 disables the blur)
    pub blur_radius: f32,

    /// Multiplier applied to the background's RGB channels
    pub brightness: f32,

    /// JPEG quality (1-100, higher is better)
    pub quality: u8,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            blur_radius: 20.0,
            brightness: 0.7,
            quality: 90,
        }
    }
}

impl CanvasConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "canvas.size".to_string(),
                value: format!("{}x{}", self.width, self.height)
            }.into());
        }

        if !self.blur_radius.is_finite() || self.blur_radius < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "canvas.blur_radius".to_string(),
                value: self.blur_radius.to_string()
            }.into());
        }

        if !self.brightness.is_finite() || self.brightness < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "canvas.brightness".to_string(),
                value: self.brightness.to_string()
            }.into());
        }

        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::InvalidValue {
                key: "canvas.quality".to_string(),
                value: self.quality.to_string()
            }.into());
        }

        Ok(())
    }
}

/// Directory-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Appended to each output's file stem; any file name containing it is skipped on input
    pub output_suffix: String,

    /// Maximum number of images converted at the same time
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_suffix: "_portrait".to_string(),
            workers: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<()> {
        if self.output_suffix.is_empty()
            || self.output_suffix.contains(['/', '\\'])
        {
            return Err(ConfigError::InvalidValue {
                key: "batch.output_suffix".to_string(),
                value: self.output_suffix.clone()
            }.into());
        }

        if self.workers == 0 {
            return Err(ConfigError::InvalidValue {
                key: "batch.workers".to_string(),
                value: self.workers.to_string()
            }.into());
        }

        Ok(())
    }
}
