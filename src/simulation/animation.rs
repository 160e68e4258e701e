use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Scripted path segment the test charge is currently following, with its own
/// parameter `t`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// One lap on a circle of radius 4R.
    Circular { t: f64 },
    /// Spiral from 4R down to 1.5R.
    SpiralInward { t: f64 },
    /// Slide out along +x and back, then half an orbit at 4R.
    PulseAndOrbit { t: f64 },
    /// Two laps at 3R while bobbing in z.
    Helical { t: f64 },
}

impl AnimationPhase {
    pub fn t(&self) -> f64 {
        match *self {
            Self::Circular { t }
            | Self::SpiralInward { t }
            | Self::PulseAndOrbit { t }
            | Self::Helical { t } => t,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circular { .. } => "Circular",
            Self::SpiralInward { .. } => "Spiral inward",
            Self::PulseAndOrbit { .. } => "Pulse and orbit",
            Self::Helical { .. } => "Helical",
        }
    }
}

/// Everything the per-tick update needs; passed in by value and handed back.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub phase: AnimationPhase,
    pub sphere_radius: f64,
    pub time_step: f64,
}

impl AnimationState {
    pub const fn new(sphere_radius: f64, time_step: f64) -> Self {
        Self {
            phase: AnimationPhase::Circular { t: 0.0 },
            sphere_radius,
            time_step,
        }
    }

    /// Where the test charge rests before the first tick and after a reset.
    pub fn start_position(&self) -> DVec3 {
        DVec3::new(3.0 * self.sphere_radius, 0.0, 0.0)
    }

    pub fn reset(self) -> Self {
        Self::new(self.sphere_radius, self.time_step)
    }

    /// Advances the script by one step, returning the next state and the test charge
    /// position for this frame.
    pub fn tick(self) -> (Self, DVec3) {
        let r = self.sphere_radius;
        let path_radius = 4.0 * r;
        let t = self.phase.t() + self.time_step;

        let (phase, position) = match self.phase {
            AnimationPhase::Circular { .. } => {
                let phase = if t > TAU {
                    AnimationPhase::SpiralInward { t: 0.0 }
                } else {
                    AnimationPhase::Circular { t }
                };
                let t = phase.t();
                (
                    phase,
                    DVec3::new(path_radius * t.cos(), path_radius * t.sin(), 0.0),
                )
            }
            AnimationPhase::SpiralInward { .. } => {
                let current_radius = path_radius * (1.0 - t / (2.0 * TAU));
                let phase = if current_radius < 1.5 * r {
                    AnimationPhase::PulseAndOrbit { t: 0.0 }
                } else {
                    AnimationPhase::SpiralInward { t }
                };
                let angle = 4.0 * phase.t();
                let position = DVec3::new(
                    current_radius * angle.cos(),
                    current_radius * angle.sin(),
                    0.0,
                );
                (phase, position)
            }
            AnimationPhase::PulseAndOrbit { .. } => {
                if t < PI {
                    let distance = 1.5 * r + 3.0 * r * (1.0 + t.cos()) / 2.0;
                    (
                        AnimationPhase::PulseAndOrbit { t },
                        DVec3::new(distance, 0.0, 0.0),
                    )
                } else {
                    let angle = (t - PI) * 2.0;
                    let position =
                        DVec3::new(path_radius * angle.cos(), path_radius * angle.sin(), 0.0);
                    let phase = if t > TAU {
                        AnimationPhase::Helical { t: 0.0 }
                    } else {
                        AnimationPhase::PulseAndOrbit { t }
                    };
                    (phase, position)
                }
            }
            AnimationPhase::Helical { .. } => {
                let phase = if t > 2.0 * TAU {
                    AnimationPhase::Circular { t: 0.0 }
                } else {
                    AnimationPhase::Helical { t }
                };
                let t = phase.t();
                let position =
                    DVec3::new(3.0 * r * t.cos(), 3.0 * r * t.sin(), 2.0 * r * (t / 2.0).sin());
                (phase, position)
            }
        };

        (Self { phase, ..self }, position)
    }
}
