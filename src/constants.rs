// SI units throughout: metres, coulombs, newtons per coulomb.
pub const COULOMB_K: f64 = 8.99e9; // N·m²/C²

/// Separation below which a charge contributes nothing to the field.
pub const COINCIDENCE_EPSILON: f64 = 1e-10;

// Scene defaults
pub const TOTAL_CHARGE: f64 = 3e-6;
pub const SPHERE_RADIUS: f64 = 0.1;
pub const SAMPLE_COUNT: usize = 2000;

pub const FRAME_RATE: f64 = 30.0;
pub const TIME_STEP: f64 = 0.02;

pub const FIELD_LINE_COUNT: usize = 16;
pub const FIELD_LINE_STEPS: usize = 15;
pub const FIELD_LINE_SEED_RADIUS: f64 = 1.1; // × sphere radius
pub const FIELD_LINE_STEP: f64 = 0.2; // × sphere radius
pub const FIELD_LINE_BOUND: f64 = 5.0; // × sphere radius

pub const TRAIL_CAPACITY: usize = 4096;
pub const ARROW_LENGTH: f64 = 1.0; // × sphere radius
