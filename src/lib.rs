// src/lib.rs
//! Showroom
//!
//! Scene and camera choreography for interactive 3D product showcases: a
//! loading scene, a home scene and a product-detail scene, eased camera
//! flights between them, ray-picked product selection and a keyboard
//! carousel. Rendering and model decoding are left to the host.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gfx;
pub mod loader;
pub mod navigation;
pub mod prelude;
pub mod showroom;
pub mod transition;

// Re-export main types for convenience
pub use app::ShowroomApp;
pub use config::ShowroomConfig;
pub use error::{LoadError, Result, ShowroomError};
pub use showroom::Showroom;
