//! Simulator settings
//!
//! Loaded from an optional JSON file; any missing key takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapter::InputGuard;
use crate::consts::{ACCELERATION_SCALE, BALL_SIZE, STANDARD_GRAVITY};

/// Longest mean sensor interval the demo source accepts (one minute)
pub const MAX_SAMPLE_INTERVAL_MS: f32 = 60_000.0;

/// Settings load/validation failure
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Synthetic sensor parameters for the demo host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// RNG seed; same seed, same sample stream
    pub seed: u64,
    /// Number of samples to generate
    pub samples: u32,
    /// Mean interval between samples (milliseconds)
    pub mean_interval_ms: f32,
    /// Interval jitter as a fraction of the mean (0.0 - 1.0)
    pub jitter: f32,
    /// In-plane gravity magnitude (m/s²)
    pub tilt: f32,
    /// How fast the tilt direction turns (radians/second)
    pub turn_rate: f32,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            samples: 600,
            // Roughly SENSOR_DELAY_GAME
            mean_interval_ms: 20.0,
            jitter: 0.3,
            tilt: STANDARD_GRAVITY * 0.25,
            turn_rate: 0.8,
        }
    }
}

/// Simulator and host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Device acceleration to field units
    pub acceleration_scale: f32,
    /// Ball diameter in field units
    pub ball_size: f32,
    /// Non-finite / degenerate sample handling
    pub input_guard: InputGuard,

    // === Demo host ===
    /// Field width used by the demo binary
    pub field_width: f32,
    /// Field height used by the demo binary
    pub field_height: f32,
    pub source: SourceSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            acceleration_scale: ACCELERATION_SCALE,
            ball_size: BALL_SIZE,
            input_guard: InputGuard::Propagate,
            field_width: 1080.0,
            field_height: 1920.0,
            source: SourceSettings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ball radius implied by `ball_size`
    pub fn radius(&self) -> f32 {
        self.ball_size / 2.0
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "field must be positive, got {}x{}",
                self.field_width, self.field_height
            )));
        }
        if !(self.ball_size > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "ball_size must be positive, got {}",
                self.ball_size
            )));
        }
        if self.ball_size > self.field_width.min(self.field_height) {
            return Err(SettingsError::Invalid(format!(
                "ball_size {} does not fit a {}x{} field",
                self.ball_size, self.field_width, self.field_height
            )));
        }
        if !(self.acceleration_scale > 0.0 && self.acceleration_scale.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "acceleration_scale must be positive, got {}",
                self.acceleration_scale
            )));
        }
        if !(self.source.mean_interval_ms > 0.0
            && self.source.mean_interval_ms <= MAX_SAMPLE_INTERVAL_MS)
        {
            return Err(SettingsError::Invalid(format!(
                "source.mean_interval_ms must be within (0, {}], got {}",
                MAX_SAMPLE_INTERVAL_MS, self.source.mean_interval_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.source.jitter) {
            return Err(SettingsError::Invalid(format!(
                "source.jitter must be within 0..=1, got {}",
                self.source.jitter
            )));
        }
        Ok(())
    }
}
