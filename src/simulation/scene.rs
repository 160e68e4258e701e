use crate::config::{ConfigError, SceneConfig};
use crate::constants::{ARROW_LENGTH, TRAIL_CAPACITY};
use crate::physics::distribution::{ChargeDistribution, generate};
use crate::physics::field::{self, FieldSample, theoretical_field_at};
use crate::simulation::animation::{AnimationPhase, AnimationState};
use crate::simulation::field_lines::trace_all;
use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Test charge moved along the scripted paths, with the positions it has visited.
#[derive(Clone, Debug)]
pub struct TestCharge {
    position: DVec3,
    trail: VecDeque<DVec3>,
}

impl TestCharge {
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            trail: VecDeque::new(),
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn trail(&self) -> &VecDeque<DVec3> {
        &self.trail
    }

    fn move_to(&mut self, position: DVec3) {
        if self.trail.len() == TRAIL_CAPACITY {
            self.trail.pop_front();
        }
        self.trail.push_back(position);
        self.position = position;
    }

    fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

/// Everything a surface needs to draw one animation frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: AnimationPhase,
    /// Discrete field at the test charge.
    pub sample: FieldSample,
    /// Reference field of a uniformly charged ball at the same point.
    pub theoretical: DVec3,
    /// Distance from the sphere centre (m).
    pub distance: f64,
    /// Fixed-length arrow along the discrete field.
    pub arrow: DVec3,
    /// Present only on frames where the field lines were retraced.
    pub field_lines: Option<Vec<Vec<DVec3>>>,
}

impl Frame {
    pub fn position(&self) -> DVec3 {
        self.sample.position
    }
}

pub struct Scene {
    config: SceneConfig,
    distribution: ChargeDistribution,
    animation: AnimationState,
    test_charge: TestCharge,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let distribution = generate(
            config.sample_count,
            config.sphere_radius,
            config.total_charge,
        )?;
        debug!(
            "Scene ready: {} charges of {:.3e} C",
            distribution.len(),
            distribution.charge_per_point()
        );

        let animation = AnimationState::new(config.sphere_radius, config.time_step);
        let test_charge = TestCharge::new(animation.start_position());

        Ok(Self {
            config,
            distribution,
            animation,
            test_charge,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn distribution(&self) -> &ChargeDistribution {
        &self.distribution
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn test_charge(&self) -> &TestCharge {
        &self.test_charge
    }

    /// Sends the test charge back to its start and restarts the script.
    pub fn reset(&mut self) {
        self.animation = self.animation.reset();
        self.test_charge.clear_trail();
        self.test_charge.position = self.animation.start_position();
    }

    /// Advances the animation one tick and evaluates the field at the new position.
    pub fn step(&mut self, show_field_lines: bool) -> Frame {
        let (animation, position) = self.animation.tick();
        self.animation = animation;
        self.test_charge.move_to(position);

        let field_lines = (show_field_lines && field_lines_due(self.animation.phase.t()))
            .then(|| trace_all(&self.distribution, &self.config.field_lines));

        self.frame_at(position, field_lines)
    }

    pub fn evaluate(&self, observation: DVec3) -> FieldSample {
        field::sample(&self.distribution, observation)
    }

    fn frame_at(&self, position: DVec3, field_lines: Option<Vec<Vec<DVec3>>>) -> Frame {
        let sample = self.evaluate(position);
        let theoretical = theoretical_field_at(
            position,
            self.config.total_charge,
            self.config.sphere_radius,
        );

        Frame {
            phase: self.animation.phase,
            sample,
            theoretical,
            distance: position.length(),
            arrow: sample.direction() * ARROW_LENGTH * self.config.sphere_radius,
            field_lines,
        }
    }
}

/// True while `floor(20 t)` is a multiple of ten.
fn field_lines_due(t: f64) -> bool {
    (t * 20.0) as i64 % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::distribution::DistributionError;
    use approx::assert_relative_eq;

    fn small_scene() -> Scene {
        Scene::new(SceneConfig {
            sample_count: 300,
            ..SceneConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn starts_at_three_radii() {
        let scene = small_scene();
        assert_relative_eq!(scene.test_charge().position().x, 0.3, max_relative = 1e-12);
        assert!(scene.test_charge().trail().is_empty());
        assert_eq!(scene.distribution().len(), 300);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Scene::new(SceneConfig {
            sample_count: 1,
            ..SceneConfig::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::Distribution(
                DistributionError::InvalidSampleCount { count: 1 }
            ))
        ));
    }

    fn rejected_field(config: SceneConfig) -> &'static str {
        match Scene::new(config) {
            Err(ConfigError::NotPositive { field, .. }) => field,
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("config was accepted"),
        }
    }

    #[test]
    fn rejects_zero_time_step() {
        let config = SceneConfig {
            time_step: 0.0,
            ..SceneConfig::default()
        };
        assert_eq!(rejected_field(config), "time_step");
    }

    #[test]
    fn rejects_non_finite_time_step() {
        for time_step in [f64::NAN, f64::INFINITY, -0.02] {
            let config = SceneConfig {
                time_step,
                ..SceneConfig::default()
            };
            assert_eq!(rejected_field(config), "time_step");
        }
    }

    #[test]
    fn rejects_non_positive_frame_rate() {
        for frame_rate in [0.0, -30.0, f64::NAN] {
            let config = SceneConfig {
                frame_rate,
                ..SceneConfig::default()
            };
            assert_eq!(rejected_field(config), "frame_rate");
        }
    }

    #[test]
    fn rejects_degenerate_field_line_tracing() {
        let mut config = SceneConfig::default();
        config.field_lines.step = 0.0;
        assert_eq!(rejected_field(config), "field_lines.step");

        let mut config = SceneConfig::default();
        config.field_lines.bound = f64::INFINITY;
        assert_eq!(rejected_field(config), "field_lines.bound");
    }

    #[test]
    fn step_reports_field_and_theory() {
        let mut scene = small_scene();
        let frame = scene.step(false);

        assert_relative_eq!(frame.distance, 0.4, max_relative = 1e-12);
        assert_relative_eq!(
            frame.sample.magnitude(),
            frame.theoretical.length(),
            max_relative = 0.01
        );
        assert_relative_eq!(frame.arrow.length(), 0.1, max_relative = 1e-9);
        assert!(frame.arrow.dot(frame.sample.field) > 0.0);
        assert!(frame.field_lines.is_none());
        assert_eq!(scene.test_charge().trail().len(), 1);
    }

    #[test]
    fn field_lines_follow_the_toggle() {
        let mut scene = small_scene();
        // t = 0.02 gives floor(0.4) = 0, a refresh frame.
        let frame = scene.step(true);
        let lines = frame.field_lines.unwrap();
        assert_eq!(lines.len(), 16);

        // Fifth tick: t = 0.10, floor(t * 20) = 2.
        let mut scene = small_scene();
        for _ in 0..4 {
            scene.step(false);
        }
        assert!(scene.step(true).field_lines.is_none());
    }

    #[test]
    fn due_schedule() {
        assert!(field_lines_due(0.0));
        assert!(field_lines_due(0.04));
        assert!(!field_lines_due(0.06));
        assert!(!field_lines_due(0.26));
        assert!(field_lines_due(0.5));
    }

    #[test]
    fn reset_clears_the_trail() {
        let mut scene = small_scene();
        for _ in 0..25 {
            scene.step(false);
        }
        assert_eq!(scene.test_charge().trail().len(), 25);

        scene.reset();
        assert!(scene.test_charge().trail().is_empty());
        assert_eq!(scene.animation().phase, AnimationPhase::Circular { t: 0.0 });
        assert_relative_eq!(scene.test_charge().position().x, 0.3, max_relative = 1e-12);
    }

    #[test]
    fn trail_is_bounded() {
        let mut charge = TestCharge::new(DVec3::ZERO);
        for i in 0..TRAIL_CAPACITY + 10 {
            charge.move_to(DVec3::splat(i as f64));
        }
        assert_eq!(charge.trail().len(), TRAIL_CAPACITY);
        assert_eq!(charge.trail()[0], DVec3::splat(10.0));
    }
}
