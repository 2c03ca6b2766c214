//! # Navigation
//!
//! Pointer and keyboard input turned into camera transitions, scene swaps
//! and model requests.
//!
//! - [`hit`] - Nearest node under the pointer, with its product tag
//! - [`carousel`] - Cyclic product stepping
//! - [`input`] - Key mapping onto [`NavKey`]
//! - [`state`] - Phase, current product and the loading gate
//! - [`stage`] - Scenes, camera rig and mixer the navigator acts on
//! - [`machine`] - The [`Navigator`] state machine

pub mod carousel;
pub mod hit;
pub mod input;
pub mod machine;
pub mod stage;
pub mod state;

pub use carousel::Direction;
pub use hit::{HitResolver, HitResult};
pub use input::NavKey;
pub use machine::Navigator;
pub use stage::{Cue, Stage};
pub use state::{LoadGate, NavPhase, NavigationState};
