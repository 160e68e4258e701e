pub mod animation;
pub mod field_lines;
pub mod scene;

pub use animation::{AnimationPhase, AnimationState};
pub use field_lines::{FieldLine, Waypoints};
pub use scene::{Frame, Scene, TestCharge};
