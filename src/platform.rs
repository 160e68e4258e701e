use crate::app::{App, AppResult};
use crate::simulation::scene::Frame;
use crate::ui::Readout;
use log::{debug, info};

/// Whatever presents the scene: receives plain geometry and text each frame and owns
/// any renderable handles itself.
pub trait VisualizationSurface {
    fn status(&mut self, message: &str);
    fn present(&mut self, frame: &Frame, readout: &Readout);
    fn clear_trail(&mut self) {}
}

/// Headless surface that writes the readout to the log.
#[derive(Default)]
pub struct LogSurface {
    frames: u64,
    /// Log every n-th frame at info level; the rest go to debug.
    pub info_every: u64,
}

impl LogSurface {
    pub fn new(info_every: u64) -> Self {
        Self {
            frames: 0,
            info_every,
        }
    }
}

impl VisualizationSurface for LogSurface {
    fn status(&mut self, message: &str) {
        info!("{}", message);
    }

    fn present(&mut self, frame: &Frame, readout: &Readout) {
        self.frames += 1;
        if self.info_every > 0 && self.frames % self.info_every == 0 {
            info!("[{}] {} | {}", frame.phase.name(), readout.field, readout.distance);
        } else {
            debug!("[{}] {} | {}", frame.phase.name(), readout.field, readout.distance);
        }
        if let Some(lines) = &frame.field_lines {
            debug!("retraced {} field lines", lines.len());
        }
    }

    fn clear_trail(&mut self) {
        info!("Animation reset");
    }
}

/// Native entry point: one full pass through the animation script, paced to the frame
/// rate, reported through the log.
pub fn start() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let mut surface = LogSurface::new(30);
    let mut app = App::initialize(&mut surface)?;

    let frames = app.run_cycle(&mut surface, true);
    info!("Animation cycle finished after {} frames", frames);
    Ok(())
}
