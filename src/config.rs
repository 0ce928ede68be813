//! Serializable engine configuration.
//!
//! Configs are JSON files. Every field has a default, so a config only needs
//! to mention what it changes:
//!
//! ```json
//! {
//!     "container": [1280, 720],
//!     "element_count": 5,
//!     "orbit": "cosmic",
//!     "particles": { "count": 89, "colors": ["#FFD700", "#4ECDC4"] }
//! }
//! ```
//!
//! `orbit` is either a preset name or a full options object.

use crate::constants::TARGET_FRAME_MS;
use crate::error::{OrbitError, Result};
use crate::orbit::OrbitOptions;
use crate::palette::{parse_palette, DEFAULT_PALETTE_HEX};
use crate::particles::{ParticleOptions, DEFAULT_PARTICLE_COUNT};
use crate::presets::OrbitPreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the orbit options are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrbitConfig {
    /// One of the named presets.
    Preset(OrbitPreset),
    /// Explicit options.
    Custom(OrbitOptions),
}

impl Default for OrbitConfig {
    fn default() -> Self {
        OrbitConfig::Preset(OrbitPreset::Default)
    }
}

impl OrbitConfig {
    /// Resolve to concrete options.
    pub fn options(&self) -> OrbitOptions {
        match self {
            OrbitConfig::Preset(preset) => preset.options(),
            OrbitConfig::Custom(options) => *options,
        }
    }
}

/// Particle burst settings with the palette kept as hex strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub initial_velocity: f64,
    pub lifespan: f64,
    pub size_range: [f64; 2],
    pub colors: Vec<String>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        let defaults = ParticleOptions::default();
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            initial_velocity: defaults.initial_velocity,
            lifespan: defaults.lifespan,
            size_range: defaults.size_range,
            colors: DEFAULT_PALETTE_HEX.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ParticleConfig {
    /// Parse the palette and build [`ParticleOptions`].
    pub fn to_options(&self) -> Result<ParticleOptions> {
        Ok(ParticleOptions {
            initial_velocity: self.initial_velocity,
            lifespan: self.lifespan,
            size_range: self.size_range,
            colors: parse_palette(&self.colors)?,
        })
    }
}

/// Complete configuration for a headless run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Container width and height in pixels.
    pub container: [f64; 2],
    /// Number of orbiting elements.
    pub element_count: usize,
    pub orbit: OrbitConfig,
    pub particles: ParticleConfig,
    /// Frames to simulate.
    pub frames: u32,
    /// Simulated frame duration in milliseconds.
    pub frame_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            container: [800.0, 600.0],
            element_count: 8,
            orbit: OrbitConfig::default(),
            particles: ParticleConfig::default(),
            frames: 120,
            frame_ms: TARGET_FRAME_MS,
        }
    }
}

impl EngineConfig {
    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let [width, height] = self.container;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(OrbitError::invalid(
                "container",
                format!("must be finite and non-negative, got [{}, {}]", width, height),
            ));
        }
        if self.element_count == 0 {
            return Err(OrbitError::invalid("element_count", "must be at least 1"));
        }
        if !(self.frame_ms.is_finite() && self.frame_ms > 0.0) {
            return Err(OrbitError::invalid(
                "frame_ms",
                format!("must be positive, got {}", self.frame_ms),
            ));
        }
        if self.particles.colors.is_empty() {
            return Err(OrbitError::invalid("particles.colors", "palette must not be empty"));
        }
        parse_palette(&self.particles.colors)?;
        Ok(())
    }
}
