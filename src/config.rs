use crate::constants::*;
use crate::physics::distribution::DistributionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed parameters of the demo scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Total charge on the sphere (C)
    pub total_charge: f64,
    /// Sphere radius (m)
    pub sphere_radius: f64,
    /// Number of discrete charges approximating the surface
    pub sample_count: usize,
    /// Base animation frame rate before the speed factor is applied
    pub frame_rate: f64,
    /// Parameter increment per animation tick
    pub time_step: f64,
    pub field_lines: FieldLineConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldLineConfig {
    pub count: usize,
    pub max_steps: usize,
    /// Seed ring radius, as a multiple of the sphere radius
    pub seed_radius: f64,
    /// Step length, as a multiple of the sphere radius
    pub step: f64,
    /// Tracing stops past this distance, as a multiple of the sphere radius
    pub bound: f64,
}

impl Default for FieldLineConfig {
    fn default() -> Self {
        Self {
            count: FIELD_LINE_COUNT,
            max_steps: FIELD_LINE_STEPS,
            seed_radius: FIELD_LINE_SEED_RADIUS,
            step: FIELD_LINE_STEP,
            bound: FIELD_LINE_BOUND,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            total_charge: TOTAL_CHARGE,
            sphere_radius: SPHERE_RADIUS,
            sample_count: SAMPLE_COUNT,
            frame_rate: FRAME_RATE,
            time_step: TIME_STEP,
            field_lines: FieldLineConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A rate, step or bound that must be a positive finite number.
    NotPositive { field: &'static str, value: f64 },
    Distribution(DistributionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "{} must be positive and finite, got {}", field, value)
            }
            Self::Distribution(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Distribution(e) => Some(e),
            Self::NotPositive { .. } => None,
        }
    }
}

impl From<DistributionError> for ConfigError {
    fn from(e: DistributionError) -> Self {
        Self::Distribution(e)
    }
}

impl SceneConfig {
    pub fn charge_per_point(&self) -> f64 {
        self.total_charge / self.sample_count as f64
    }

    /// Checks the animation and tracing parameters. Sample count and radius are
    /// checked when the distribution is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("time_step", self.time_step)?;
        positive("frame_rate", self.frame_rate)?;
        positive("field_lines.step", self.field_lines.step)?;
        positive("field_lines.bound", self.field_lines.bound)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
