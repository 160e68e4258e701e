//! Electrostatic field of a uniformly charged sphere, approximated by point charges on
//! a Fibonacci lattice and compared against the closed-form model.

pub mod app;
pub mod config;
pub mod constants;
pub mod physics;
pub mod platform;
pub mod simulation;
pub mod ui;

pub use config::{ConfigError, SceneConfig};
pub use physics::{
    ChargeDistribution, DistributionError, FieldSample, PointCharge, field_at, generate,
    theoretical_field_at,
};
