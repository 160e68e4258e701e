use crate::config::SceneConfig;
use crate::platform::VisualizationSurface;
use crate::simulation::animation::AnimationPhase;
use crate::simulation::scene::{Frame, Scene};
use crate::ui::{Readout, UiState};

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

/// Owns the scene and the control state, and feeds frames to a surface.
pub struct App {
    scene: Scene,
    ui_state: UiState,
}

impl App {
    pub fn initialize<S: VisualizationSurface>(surface: &mut S) -> AppResult<Self> {
        Self::with_config(SceneConfig::default(), surface)
    }

    pub fn with_config<S: VisualizationSurface>(
        config: SceneConfig,
        surface: &mut S,
    ) -> AppResult<Self> {
        surface.status("Generating point charges...");
        let scene = Scene::new(config)?;
        surface.status("Charges generated. Starting simulation...");

        Ok(Self {
            scene,
            ui_state: UiState::default(),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn ui_state_mut(&mut self) -> &mut UiState {
        &mut self.ui_state
    }

    /// One animation tick: apply pending controls, advance, and present.
    pub fn update<S: VisualizationSurface>(&mut self, surface: &mut S) -> Frame {
        self.apply_ui_changes(surface);

        let frame = self.scene.step(self.ui_state.show_field_lines);
        let readout = Readout::from_frame(&frame, self.scene.config().sphere_radius);
        surface.present(&frame, &readout);
        frame
    }

    /// Runs until the script returns to its first phase. Returns the number of frames.
    pub fn run_cycle<S: VisualizationSurface>(&mut self, surface: &mut S, paced: bool) -> usize {
        let mut frames = 0;
        let mut left_first_phase = false;

        loop {
            let frame = self.update(surface);
            frames += 1;

            let circular = matches!(frame.phase, AnimationPhase::Circular { .. });
            if !circular {
                left_first_phase = true;
            } else if left_first_phase {
                return frames;
            }

            if paced {
                let interval = self.ui_state.frame_interval(self.scene.config().frame_rate);
                std::thread::sleep(interval);
            }
        }
    }

    fn apply_ui_changes<S: VisualizationSurface>(&mut self, surface: &mut S) {
        self.ui_state.sync_speed();

        if self.ui_state.take_reset_request() {
            self.scene.reset();
            surface.clear_trail();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        statuses: Vec<String>,
        readouts: Vec<Readout>,
        clears: usize,
    }

    impl VisualizationSurface for RecordingSurface {
        fn status(&mut self, message: &str) {
            self.statuses.push(message.to_owned());
        }

        fn present(&mut self, _frame: &Frame, readout: &Readout) {
            self.readouts.push(readout.clone());
        }

        fn clear_trail(&mut self) {
            self.clears += 1;
        }
    }

    fn small_config() -> SceneConfig {
        SceneConfig {
            sample_count: 200,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn initialization_reports_status() {
        let mut surface = RecordingSurface::default();
        App::with_config(small_config(), &mut surface).unwrap();
        assert_eq!(
            surface.statuses,
            vec![
                "Generating point charges...".to_owned(),
                "Charges generated. Starting simulation...".to_owned(),
            ]
        );
    }

    #[test]
    fn bad_config_surfaces_as_error() {
        let mut surface = RecordingSurface::default();
        let config = SceneConfig {
            sphere_radius: 0.0,
            ..small_config()
        };
        let err = App::with_config(config, &mut surface).err().unwrap();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn update_presents_a_readout() {
        let mut surface = RecordingSurface::default();
        let mut app = App::with_config(small_config(), &mut surface).unwrap();
        app.update(&mut surface);
        assert_eq!(surface.readouts.len(), 1);
        assert_eq!(surface.readouts[0].distance, "Distance from center: 4.00R");
    }

    #[test]
    fn reset_request_is_applied_before_the_next_tick() {
        let mut surface = RecordingSurface::default();
        let mut app = App::with_config(small_config(), &mut surface).unwrap();
        for _ in 0..10 {
            app.update(&mut surface);
        }
        app.ui_state_mut().request_reset();
        let frame = app.update(&mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(frame.phase, AnimationPhase::Circular { t: 0.02 });
        assert_eq!(app.scene().test_charge().trail().len(), 1);
    }

    #[test]
    fn toggled_field_lines_arrive_on_the_next_due_frame() {
        let mut surface = RecordingSurface::default();
        let mut app = App::with_config(small_config(), &mut surface).unwrap();
        assert!(app.update(&mut surface).field_lines.is_none());

        app.ui_state_mut().toggle_field_lines();
        assert!(app.ui_state().show_field_lines);
        // Second tick: t = 0.04, floor(t * 20) = 0.
        let frame = app.update(&mut surface);
        assert_eq!(frame.field_lines.map(|lines| lines.len()), Some(16));

        app.ui_state_mut().toggle_field_lines();
        assert!(app.update(&mut surface).field_lines.is_none());
    }

    #[test]
    fn frame_rate_zero_is_rejected_before_pacing() {
        let mut surface = RecordingSurface::default();
        let config = SceneConfig {
            frame_rate: 0.0,
            ..small_config()
        };
        let err = App::with_config(config, &mut surface).err().unwrap();
        assert!(err.to_string().contains("frame_rate"));
        assert_eq!(surface.statuses.len(), 1);
    }

    #[test]
    fn one_cycle_visits_every_phase() {
        let mut surface = RecordingSurface::default();
        let mut app = App::with_config(small_config(), &mut surface).unwrap();
        let frames = app.run_cycle(&mut surface, false);
        assert_eq!(frames, surface.readouts.len());
        assert!(frames > 1000);
        assert_eq!(app.scene().animation().phase, AnimationPhase::Circular { t: 0.0 });
    }
}
