//! JSON level descriptions.
//!
//! Every field has a default, so `{}` is a valid configuration describing a
//! single level of the default wave plan.

use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::{AgentTuning, TuningError};
use crate::patrol::{Axis, PatrolRangeError};
use crate::spawn::{SpawnArea, WavePlan};
use crate::vector_math::Point2D;
use crate::{CONTACT_RADIUS, DEFAULT_PATROL_HALF_WIDTH, SPAWN_SAFE_RADIUS};

/// Failures while loading or validating a [`LevelConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid JSON for a level.
    #[error("invalid level json: {0}")]
    Parse(#[from] serde_json::Error),
    /// A patrol range derived from the config is invalid.
    #[error(transparent)]
    Range(#[from] PatrolRangeError),
    /// Agent speeds or radius are invalid.
    #[error(transparent)]
    Tuning(#[from] TuningError),
    /// Some other field is out of bounds.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Starting point and constant velocity of the chased target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Where the target starts.
    pub start: Point2D,
    /// Velocity in units per second; the target stays inside the spawn
    /// area.
    pub velocity: Point2D,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            start: DVec2::new(400.0, 300.0),
            velocity: DVec2::new(120.0, 90.0),
        }
    }
}

/// Description of one level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Seed for spawn placement.
    pub seed: u64,
    /// Number of agents to place.
    pub agent_count: usize,
    /// Rectangle agents spawn in and the target is kept inside.
    pub area: SpawnArea,
    /// Minimum distance between spawn points.
    pub min_spacing: f64,
    /// Radius around the target's start that no agent spawns in.
    pub safe_radius: f64,
    /// Distance at which the target defeats an agent it touches.
    pub contact_radius: f64,
    /// Half width of each agent's patrol range around its spawn point.
    pub patrol_half_width: f64,
    /// Axis agents patrol along.
    pub axis: Axis,
    /// Agent speeds and detection radius.
    pub tuning: AgentTuning,
    /// Target motion.
    pub target: TargetConfig,
}

impl Default for LevelConfig {
    fn default() -> Self {
        let plan = WavePlan::default();
        Self {
            seed: plan.seed(1),
            agent_count: plan.enemy_count(1) as usize,
            area: SpawnArea::default(),
            min_spacing: 80.0,
            safe_radius: SPAWN_SAFE_RADIUS,
            contact_radius: CONTACT_RADIUS,
            patrol_half_width: DEFAULT_PATROL_HALF_WIDTH,
            axis: Axis::X,
            tuning: AgentTuning::default(),
            target: TargetConfig::default(),
        }
    }
}

impl LevelConfig {
    /// This configuration with the seed and agent count of `level` in
    /// `plan`.
    #[must_use]
    pub fn with_wave(&self, plan: &WavePlan, level: u32) -> Self {
        Self {
            seed: plan.seed(level),
            agent_count: plan.enemy_count(level) as usize,
            ..self.clone()
        }
    }

    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// error otherwise.
    ///
    /// # Examples
    /// ```
    /// use prowl::config::LevelConfig;
    /// let config = LevelConfig::from_json_str(r#"{"seed": 7, "agent_count": 3}"#).unwrap();
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.tuning.chase_speed, 160.0);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, or any error
    /// of [`LevelConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded level config from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        if !self.area.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "spawn area {:?}..{:?} is empty or not finite",
                self.area.min, self.area.max
            )));
        }
        if !self.min_spacing.is_finite() || self.min_spacing < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_spacing must be non-negative, got {}",
                self.min_spacing
            )));
        }
        for (field, value) in [
            ("patrol_half_width", self.patrol_half_width),
            ("safe_radius", self.safe_radius),
            ("contact_radius", self.contact_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be non-negative, got {value}"
                )));
            }
        }
        if !self.target.start.is_finite() || !self.target.velocity.is_finite() {
            return Err(ConfigError::Invalid("target must be finite".to_owned()));
        }
        Ok(())
    }
}
