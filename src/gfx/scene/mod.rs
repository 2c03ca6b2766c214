//! # Scene Management Module
//!
//! Scene graphs the showroom navigates between and the registry that decides
//! which one is current.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - Model nodes, lights, axis helpers and animation clips of one scene
//! - [`SceneNode`] - Named node with transform, pickable bounds and children
//! - [`ObjectTag`] - Product / non-product classification assigned at load time
//! - [`SceneRegistry`] - The three scenes plus the single "current" pointer
//!
//! ## Usage
//!
//! ```no_run
//! use showroom::gfx::scene::{SceneName, SceneRegistry};
//!
//! let mut registry = SceneRegistry::new();
//! registry.swap_current(SceneName::HomeScene);
//! assert_eq!(registry.current().name, SceneName::HomeScene);
//! ```

pub mod node;
pub mod registry;
pub mod scene;
pub mod tag;

// Re-export main types
pub use node::SceneNode;
pub use registry::SceneRegistry;
pub use scene::{AxisArrow, Light, LightKind, SceneGraph, SceneName, SceneStatistics};
pub use tag::{ObjectTag, ProductRef};
