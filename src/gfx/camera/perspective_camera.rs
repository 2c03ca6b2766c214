use cgmath::*;

use super::rig::Camera;

/// Free-standing perspective camera positioned by eye and look-at target.
///
/// Transitions move `eye` directly, so the orientation has to be re-applied
/// with [`PerspectiveCamera::look_at`] whenever the eye changes.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl PerspectiveCamera {
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(45.0).into(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Moves the eye without touching the look-at target.
    pub fn set_position(&mut self, eye: Vector3<f32>) {
        self.eye = eye;
    }

    pub fn look_at(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn forward(&self) -> Vector3<f32> {
        let dir = self.target - self.eye;
        if dir.magnitude2() <= f32::EPSILON {
            -Vector3::unit_z()
        } else {
            dir.normalize()
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        Matrix4::look_at_rh(eye, target, self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}
