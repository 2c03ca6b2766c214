//! # Camera Transitions
//!
//! Timed, eased camera moves. A transition passes through named phases
//! instead of nested completion callbacks:
//!
//! `Moving` (eye interpolates, look-at re-applied every tick)
//! → `Settling` (optional hold while a screen cover fades in)
//! → `Swapped` (arrival reported once, runner idle again).

pub mod easing;
pub mod runner;

pub use easing::Easing;
pub use runner::{Arrival, RunnerEvent, TransitionPhase, TransitionRequest, TransitionRunner};
