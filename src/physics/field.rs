use crate::constants::{COINCIDENCE_EPSILON, COULOMB_K};
use crate::physics::distribution::{ChargeDistribution, PointCharge};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Field vector evaluated at one observation point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub position: DVec3,
    pub field: DVec3,
}

impl FieldSample {
    pub fn magnitude(&self) -> f64 {
        self.field.length()
    }

    pub fn direction(&self) -> DVec3 {
        self.field.normalize_or_zero()
    }
}

/// Coulomb field of a single charge. Points closer than `COINCIDENCE_EPSILON`
/// to the charge see no field from it.
#[inline]
pub fn point_field(charge: &PointCharge, observation: DVec3) -> DVec3 {
    let r = observation - charge.position;
    let distance = r.length();
    if distance < COINCIDENCE_EPSILON {
        return DVec3::ZERO;
    }
    r * (COULOMB_K * charge.charge / (distance * distance * distance))
}

/// Direct superposition over a slice of charges.
pub fn superpose(charges: &[PointCharge], observation: DVec3) -> DVec3 {
    charges
        .iter()
        .fold(DVec3::ZERO, |acc, c| acc + point_field(c, observation))
}

/// Superposed field of the whole distribution at `observation`.
pub fn field_at(distribution: &ChargeDistribution, observation: DVec3) -> DVec3 {
    superpose(distribution.charges(), observation)
}

/// Same sum as [`field_at`], reduced across the rayon pool. Results differ from the
/// sequential sum only in the last few bits.
#[cfg(feature = "parallel")]
pub fn field_at_parallel(distribution: &ChargeDistribution, observation: DVec3) -> DVec3 {
    use rayon::prelude::*;

    distribution
        .charges()
        .par_iter()
        .map(|c| point_field(c, observation))
        .reduce(|| DVec3::ZERO, |a, b| a + b)
}

/// Field of the distribution at `observation`, summed in parallel when the `parallel`
/// feature is on.
pub fn sample(distribution: &ChargeDistribution, observation: DVec3) -> FieldSample {
    #[cfg(feature = "parallel")]
    let field = field_at_parallel(distribution, observation);
    #[cfg(not(feature = "parallel"))]
    let field = field_at(distribution, observation);

    FieldSample {
        position: observation,
        field,
    }
}

/// Closed-form field of a uniformly charged ball of radius `sphere_radius` centred on the
/// origin: linear in `r` inside, inverse-square outside.
pub fn theoretical_field_at(observation: DVec3, total_charge: f64, sphere_radius: f64) -> DVec3 {
    let r = observation.length();
    if r <= sphere_radius {
        observation * (COULOMB_K * total_charge / sphere_radius.powi(3))
    } else {
        observation * (COULOMB_K * total_charge / r.powi(3))
    }
}
