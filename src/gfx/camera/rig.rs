use cgmath::Matrix4;

use super::{orbit_controls::OrbitControls, perspective_camera::PerspectiveCamera};

/// Camera plus the orbit controls steering it.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
}

impl CameraRig {
    pub fn new(camera: PerspectiveCamera, controls: OrbitControls) -> Self {
        Self { camera, controls }
    }

    /// Per-frame controls update; `transitioning` suspends the controls.
    pub fn update(&mut self, delta_time: f32, transitioning: bool) {
        self.controls
            .update(delta_time, &mut self.camera, transitioning);
    }

    /// Get the view projection matrix from the camera
    pub fn get_view_proj_matrix(&self) -> Matrix4<f32> {
        self.camera.build_view_projection_matrix()
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}
