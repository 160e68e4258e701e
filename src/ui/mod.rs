use crate::simulation::scene::Frame;
use log::warn;
use std::time::Duration;

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 5.0;

/// User-controlled knobs of the demo.
#[derive(Clone, Debug)]
pub struct UiState {
    pub speed_factor: f64,
    pub show_field_lines: bool,
    reset_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(1.0, false)
    }
}

impl UiState {
    pub fn new(speed_factor: f64, show_field_lines: bool) -> Self {
        Self {
            speed_factor,
            show_field_lines,
            reset_requested: false,
        }
    }

    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn take_reset_request(&mut self) -> bool {
        let requested = self.reset_requested;
        self.reset_requested = false;
        requested
    }

    pub fn toggle_field_lines(&mut self) {
        self.show_field_lines = !self.show_field_lines;
    }

    pub fn sync_speed(&mut self) {
        if !self.speed_factor.is_finite() {
            warn!("Speed factor {} is not finite, resetting to 1.0", self.speed_factor);
            self.speed_factor = 1.0;
        }
        let clamped = self.speed_factor.clamp(MIN_SPEED, MAX_SPEED);
        if clamped != self.speed_factor {
            warn!(
                "Speed factor {} outside [{}, {}], clamped to {}",
                self.speed_factor, MIN_SPEED, MAX_SPEED, clamped
            );
            self.speed_factor = clamped;
        }
    }

    /// Wall-clock time between ticks at `base_rate` frames per second. A rate that
    /// yields no finite positive interval gives a zero pause.
    pub fn frame_interval(&self, base_rate: f64) -> Duration {
        Duration::try_from_secs_f64(1.0 / (base_rate * self.speed_factor)).unwrap_or_default()
    }
}

/// Text shown under the sphere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub field: String,
    pub distance: String,
}

impl Readout {
    pub fn from_frame(frame: &Frame, sphere_radius: f64) -> Self {
        Self {
            field: format!(
                "E = {} N/C    Theory = {} N/C",
                scientific(frame.sample.magnitude()),
                scientific(frame.theoretical.length())
            ),
            distance: format!("Distance from center: {:.2}R", frame.distance / sphere_radius),
        }
    }
}

/// Two-decimal scientific notation with a signed, two-digit exponent (`2.99e+05`).
pub fn scientific(value: f64) -> String {
    let formatted = format!("{:.2e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}
