//! Simulation settings
//!
//! Loaded from a JSON file. Missing fields fall back to the reference values
//! (1280x720 window, 10% header, ~60 Hz tick, batches of 5).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{BallKind, Bounds};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Fraction of the window height taken by the type selector
    pub header_fraction: f32,

    // === Timing ===
    /// Host tick interval in seconds
    pub tick_interval: f32,

    // === Spawning ===
    /// Balls per click
    pub batch_size: usize,
    pub speed_mean: f32,
    pub speed_std_dev: f32,
    /// Kind selected at startup
    pub default_kind: BallKind,
    /// Oldest balls are retired past this count. `None` keeps every ball.
    pub max_bodies: Option<usize>,
    /// RNG seed. `None` picks one from the clock.
    pub seed: Option<u64>,

    // === Assets ===
    pub asset_dir: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            header_fraction: HEADER_FRACTION,

            tick_interval: SIM_DT,

            batch_size: SPAWN_BATCH,
            speed_mean: SPAWN_SPEED_MEAN,
            speed_std_dev: SPAWN_SPEED_STD_DEV,
            default_kind: BallKind::default(),
            max_bodies: None,
            seed: None,

            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl SimConfig {
    /// Active area derived from the window size and header band
    pub fn bounds(&self) -> Bounds {
        Bounds::from_window(self.window_width, self.window_height, self.header_fraction)
    }

    /// Seed to use for this run
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {v}")))
            }
        };
        positive("window_width", self.window_width)?;
        positive("window_height", self.window_height)?;
        positive("tick_interval", self.tick_interval)?;

        if !(0.0..1.0).contains(&self.header_fraction) {
            return Err(ConfigError::Invalid(format!(
                "header_fraction must be in [0, 1), got {}",
                self.header_fraction
            )));
        }
        if !self.speed_mean.is_finite() {
            return Err(ConfigError::Invalid("speed_mean must be finite".into()));
        }
        if !self.speed_std_dev.is_finite() || self.speed_std_dev < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "speed_std_dev must be non-negative, got {}",
                self.speed_std_dev
            )));
        }
        if self.max_bodies == Some(0) {
            return Err(ConfigError::Invalid("max_bodies must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, falling back to defaults on any problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
