use crate::config::FieldLineConfig;
use crate::physics::distribution::{ChargeDistribution, PointCharge};
use crate::physics::field::superpose;
use glam::DVec3;
use std::f64::consts::TAU;

/// A field line traced by fixed-length steps along the local field direction.
///
/// Holds only the tracing parameters; every call to [`FieldLine::waypoints`] walks the
/// line again from its start.
#[derive(Clone, Copy, Debug)]
pub struct FieldLine<'a> {
    charges: &'a [PointCharge],
    start: DVec3,
    step: f64,
    max_steps: usize,
    bound: f64,
}

impl<'a> FieldLine<'a> {
    pub fn new(
        charges: &'a [PointCharge],
        start: DVec3,
        step: f64,
        max_steps: usize,
        bound: f64,
    ) -> Self {
        Self {
            charges,
            start,
            step,
            max_steps,
            bound,
        }
    }

    /// Line through `start` with lengths taken relative to the distribution's radius.
    pub fn from_config(
        distribution: &'a ChargeDistribution,
        start: DVec3,
        config: &FieldLineConfig,
    ) -> Self {
        let radius = distribution.radius();
        Self::new(
            distribution.charges(),
            start,
            config.step * radius,
            config.max_steps,
            config.bound * radius,
        )
    }

    pub fn waypoints(&self) -> Waypoints<'a> {
        Waypoints {
            line: *self,
            current: None,
            steps: 0,
            finished: false,
        }
    }
}

impl<'a> IntoIterator for &FieldLine<'a> {
    type Item = DVec3;
    type IntoIter = Waypoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints()
    }
}

/// Yields the start point, then one waypoint per step. The first waypoint outside the
/// bounding radius is still yielded and ends the walk, as does a vanishing field.
#[derive(Clone, Debug)]
pub struct Waypoints<'a> {
    line: FieldLine<'a>,
    current: Option<DVec3>,
    steps: usize,
    finished: bool,
}

impl Iterator for Waypoints<'_> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.finished {
            return None;
        }

        let Some(current) = self.current else {
            self.current = Some(self.line.start);
            return Some(self.line.start);
        };

        if self.steps >= self.line.max_steps {
            self.finished = true;
            return None;
        }

        let direction = superpose(self.line.charges, current).normalize_or_zero();
        if direction == DVec3::ZERO {
            self.finished = true;
            return None;
        }

        let next = current + direction * self.line.step;
        self.steps += 1;
        self.current = Some(next);
        if next.length() > self.line.bound {
            self.finished = true;
        }
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let pending_start = usize::from(self.current.is_none());
        (
            pending_start,
            Some(pending_start + self.line.max_steps - self.steps),
        )
    }
}

/// Seeds evenly spaced on a circle in the xy-plane.
pub fn seed_ring(count: usize, radius: f64) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let theta = TAU * i as f64 / count as f64;
            DVec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
        })
        .collect()
}

/// Traces every seeded line of the scene around `distribution`.
pub fn trace_all(distribution: &ChargeDistribution, config: &FieldLineConfig) -> Vec<Vec<DVec3>> {
    seed_ring(config.count, config.seed_radius * distribution.radius())
        .into_iter()
        .map(|seed| {
            FieldLine::from_config(distribution, seed, config)
                .waypoints()
                .collect()
        })
        .collect()
}
