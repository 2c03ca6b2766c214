use cgmath::*;

use super::perspective_camera::PerspectiveCamera;

/// Orbit controls layered over a [`PerspectiveCamera`].
///
/// The controls own the orbit target; after every update the camera is
/// re-aimed at it. Auto-rotation spins the eye around the target's vertical
/// axis and is suspended while a scripted transition owns the camera.
#[derive(Debug, Clone, Copy)]
pub struct OrbitControls {
    pub target: Vector3<f32>,
    pub min_distance: f32,
    pub max_distance: Option<f32>,
    pub auto_rotate: bool,
    /// Radians per second.
    pub auto_rotate_speed: f32,
}

impl OrbitControls {
    pub fn new(target: Vector3<f32>) -> Self {
        Self {
            target,
            min_distance: 0.0,
            max_distance: None,
            auto_rotate: false,
            auto_rotate_speed: std::f32::consts::TAU / 30.0,
        }
    }

    pub fn set_target(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    /// Applies auto-rotation and distance bounds, then re-aims the camera.
    ///
    /// Does nothing while `suspended`; the transition runner is then the
    /// sole writer of the camera.
    pub fn update(&mut self, delta_time: f32, camera: &mut PerspectiveCamera, suspended: bool) {
        if suspended {
            return;
        }

        let offset = camera.eye - self.target;
        let distance = offset.magnitude();
        if distance <= f32::EPSILON {
            camera.look_at(self.target);
            return;
        }

        let mut pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let mut yaw = offset.x.atan2(offset.z);
        pitch = pitch.clamp(
            -std::f32::consts::FRAC_PI_2 + f32::EPSILON,
            std::f32::consts::FRAC_PI_2 - f32::EPSILON,
        );

        if self.auto_rotate {
            yaw += self.auto_rotate_speed * delta_time.max(0.0);
        }

        let bounded = distance.clamp(
            self.min_distance.max(f32::EPSILON),
            self.max_distance.unwrap_or(f32::MAX),
        );

        camera.eye = calculate_cartesian_eye_position(pitch, yaw, bounded, self.target);
        camera.look_at(self.target);
    }
}

fn calculate_cartesian_eye_position(
    pitch: f32,
    yaw: f32,
    distance: f32,
    target: Vector3<f32>,
) -> Vector3<f32> {
    Vector3::new(
        distance * yaw.sin() * pitch.cos(),
        distance * pitch.sin(),
        distance * yaw.cos() * pitch.cos(),
    ) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(eye: Vector3<f32>) -> PerspectiveCamera {
        PerspectiveCamera::new(eye, Vector3::zero(), 1.0)
    }

    #[test]
    fn test_update_without_rotation_keeps_eye() {
        let mut controls = OrbitControls::new(Vector3::new(0.0, 5.0, 8.0));
        let mut camera = camera_at(Vector3::new(0.0, 5.0, -16.0));
        controls.update(0.016, &mut camera, false);

        assert!((camera.eye - Vector3::new(0.0, 5.0, -16.0)).magnitude() < 1e-4);
        assert_eq!(camera.target, Vector3::new(0.0, 5.0, 8.0));
    }

    #[test]
    fn test_auto_rotate_preserves_distance() {
        let mut controls = OrbitControls::new(Vector3::zero());
        controls.auto_rotate = true;
        let mut camera = camera_at(Vector3::new(0.0, 2.0, 10.0));
        let before = camera.eye.magnitude();

        controls.update(1.0, &mut camera, false);

        assert!((camera.eye.magnitude() - before).abs() < 1e-4);
        assert!(camera.eye.x.abs() > 0.1);
    }

    #[test]
    fn test_suspended_leaves_camera_alone() {
        let mut controls = OrbitControls::new(Vector3::new(1.0, 1.0, 1.0));
        controls.auto_rotate = true;
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 10.0));
        controls.update(1.0, &mut camera, true);

        assert_eq!(camera.eye, Vector3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.target, Vector3::zero());
    }

    #[test]
    fn test_min_distance_is_enforced() {
        let mut controls = OrbitControls::new(Vector3::zero());
        controls.min_distance = 5.0;
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 1.0));
        controls.update(0.0, &mut camera, false);

        assert!((camera.eye.magnitude() - 5.0).abs() < 1e-4);
    }
}
