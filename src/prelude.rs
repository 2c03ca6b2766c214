//! # Showroom Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use showroom::prelude::*;
//!
//! let config = ShowroomConfig::default();
//! let loader = StaticLoader::new();
//! let mut showroom = Showroom::new(config, Box::new(loader)).unwrap();
//! showroom.tick(1.0 / 60.0);
//! showroom.key_pressed(NavKey::Next);
//! ```

// Core types
pub use crate::app::ShowroomApp;
pub use crate::config::{EscapeBehavior, ShowroomConfig};
pub use crate::error::{LoadError, ShowroomError};
pub use crate::showroom::Showroom;

// Catalog and scenes
pub use crate::catalog::{Product, ProductCatalog};
pub use crate::gfx::animation::AnimationClip;
pub use crate::gfx::camera::PerspectiveCamera;
pub use crate::gfx::scene::{ObjectTag, SceneGraph, SceneName, SceneNode};

// Loading
pub use crate::loader::{LoadCompleter, LoadRequest, LoadedModel, ModelKind, ModelLoader, PendingLoad, StaticLoader};

// Navigation
pub use crate::navigation::{Cue, HitResult, LoadGate, NavKey, NavPhase};
pub use crate::transition::Easing;

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
