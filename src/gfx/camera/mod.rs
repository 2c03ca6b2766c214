pub mod orbit_controls;
pub mod perspective_camera;
pub mod rig;

// Re-export main types
pub use orbit_controls::OrbitControls;
pub use perspective_camera::PerspectiveCamera;
pub use rig::{Camera, CameraRig};
