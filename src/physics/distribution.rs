use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed charge sitting on the sphere surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointCharge {
    pub position: DVec3,
    pub charge: f64,
}

impl PointCharge {
    pub const fn new(position: DVec3, charge: f64) -> Self {
        Self { position, charge }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DistributionError {
    /// The lattice divides by `count - 1`, so at least two samples are required.
    InvalidSampleCount { count: usize },
    InvalidRadius { radius: f64 },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleCount { count } => {
                write!(f, "sample count must be at least 2, got {}", count)
            }
            Self::InvalidRadius { radius } => {
                write!(f, "sphere radius must be positive and finite, got {}", radius)
            }
        }
    }
}

impl std::error::Error for DistributionError {}

/// Equal point charges spread over a sphere centred on the origin.
///
/// Built once by [`generate`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeDistribution {
    charges: Vec<PointCharge>,
    radius: f64,
    total_charge: f64,
}

impl ChargeDistribution {
    pub fn charges(&self) -> &[PointCharge] {
        &self.charges
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn total_charge(&self) -> f64 {
        self.total_charge
    }

    pub fn charge_per_point(&self) -> f64 {
        self.total_charge / self.charges.len() as f64
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointCharge> {
        self.charges.iter()
    }
}

impl<'a> IntoIterator for &'a ChargeDistribution {
    type Item = &'a PointCharge;
    type IntoIter = std::slice::Iter<'a, PointCharge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.iter()
    }
}

/// Splits `total_charge` evenly over `sample_count` points of a Fibonacci lattice.
pub fn generate(
    sample_count: usize,
    radius: f64,
    total_charge: f64,
) -> Result<ChargeDistribution, DistributionError> {
    let positions = fibonacci_sphere(sample_count, radius)?;
    let charge = total_charge / sample_count as f64;
    let charges = positions
        .into_iter()
        .map(|position| PointCharge::new(position, charge))
        .collect();

    debug!(
        "Distributed {} C over {} point charges (R = {} m)",
        total_charge, sample_count, radius
    );

    Ok(ChargeDistribution {
        charges,
        radius,
        total_charge,
    })
}

/// Golden-angle lattice on a sphere of `radius`; the first and last points sit on the poles.
pub fn fibonacci_sphere(count: usize, radius: f64) -> Result<Vec<DVec3>, DistributionError> {
    if count < 2 {
        return Err(DistributionError::InvalidSampleCount { count });
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(DistributionError::InvalidRadius { radius });
    }

    let golden_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    let last = (count - 1) as f64;

    let points = (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * i as f64 / last;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            DVec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
        })
        .collect();

    Ok(points)
}
