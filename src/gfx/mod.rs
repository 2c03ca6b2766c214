//! # Graphics Module
//!
//! The scene and camera model the navigation core reasons about. Nothing here
//! rasterizes; a host renderer reads the current [`scene::SceneGraph`] and the
//! camera every frame.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Perspective camera steered by orbit controls
//! - **Scene Management** ([`scene`]) - Scene graphs, product tags and the scene registry
//! - **Picking** ([`picking`]) - Pointer rays and nearest-node intersection
//! - **Animation** ([`animation`]) - Clip lookup and playback bookkeeping

pub mod animation;
pub mod camera;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationMixer};
pub use camera::{CameraRig, OrbitControls, PerspectiveCamera};
pub use picking::ObjectPicker;
pub use scene::{SceneGraph, SceneName, SceneRegistry};
