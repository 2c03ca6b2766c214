use cgmath::{Vector3, VectorSpace};

use super::easing::Easing;
use crate::{
    error::{Result, ShowroomError},
    gfx::camera::PerspectiveCamera,
};

/// What the state machine does once a transition has fully completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// Loading scene left behind; swap to the home scene.
    EnterHome,
    /// First arrival at a product from the home scene.
    EnterProductOverview { index: usize },
    /// Carousel step between products inside the overview.
    FocusProduct { index: usize },
    /// Flight from the overview back to the home pose.
    ReturnHome,
}

/// A single camera move. Built once per accepted navigation action and
/// consumed by [`TransitionRunner::start`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub duration_seconds: f32,
    /// Hold after the camera arrives, before `arrival` is reported.
    pub settle_seconds: f32,
    pub target_position: Vector3<f32>,
    pub target_look_at: Vector3<f32>,
    pub easing: Easing,
    pub arrival: Arrival,
}

/// Phase of the active transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// Camera interpolating towards the target.
    Moving { elapsed: f32 },
    /// Camera at the target; waiting out the settle delay.
    Settling { remaining: f32 },
    /// Completed and reported; the runner is idle.
    Swapped,
}

/// Reported by [`TransitionRunner::tick`] at phase boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    /// Camera reached the target and a settle delay started.
    Arrived,
    /// The transition is over; the arrival action must run now.
    Completed(Arrival),
}

#[derive(Debug, Clone)]
struct ActiveTransition {
    request: TransitionRequest,
    start_position: Vector3<f32>,
    phase: TransitionPhase,
}

/// Drives at most one camera transition at a time.
#[derive(Debug, Clone, Default)]
pub struct TransitionRunner {
    active: Option<ActiveTransition>,
    started: u64,
}

impl TransitionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of requests accepted since construction.
    pub fn started_count(&self) -> u64 {
        self.started
    }

    pub fn phase(&self) -> TransitionPhase {
        self.active
            .as_ref()
            .map_or(TransitionPhase::Swapped, |active| active.phase)
    }

    pub fn request(&self) -> Option<&TransitionRequest> {
        self.active.as_ref().map(|active| &active.request)
    }

    /// Starts a transition from the camera's current eye position.
    pub fn start(&mut self, request: TransitionRequest, camera: &PerspectiveCamera) -> Result<()> {
        if self.active.is_some() {
            return Err(ShowroomError::TransitionInFlight);
        }
        self.started += 1;
        self.active = Some(ActiveTransition {
            request,
            start_position: camera.eye,
            phase: TransitionPhase::Moving { elapsed: 0.0 },
        });
        Ok(())
    }

    /// Advances the active transition by `delta_time` seconds.
    ///
    /// While moving, the eye is interpolated and `look_at` is re-applied on
    /// every tick. `Completed` is returned exactly once, after which the
    /// runner accepts a new request.
    pub fn tick(&mut self, delta_time: f32, camera: &mut PerspectiveCamera) -> Option<RunnerEvent> {
        let dt = delta_time.max(0.0);
        let active = self.active.as_mut()?;
        let request = &active.request;

        match active.phase {
            TransitionPhase::Moving { elapsed } => {
                let elapsed = elapsed + dt;
                let progress = if request.duration_seconds > 0.0 {
                    (elapsed / request.duration_seconds).min(1.0)
                } else {
                    1.0
                };

                let eased = request.easing.apply(progress);
                camera.set_position(
                    active
                        .start_position
                        .lerp(request.target_position, eased),
                );
                camera.look_at(request.target_look_at);

                if progress < 1.0 {
                    active.phase = TransitionPhase::Moving { elapsed };
                    return None;
                }

                camera.set_position(request.target_position);
                if request.settle_seconds > 0.0 {
                    active.phase = TransitionPhase::Settling {
                        remaining: request.settle_seconds,
                    };
                    Some(RunnerEvent::Arrived)
                } else {
                    self.finish()
                }
            }
            TransitionPhase::Settling { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    active.phase = TransitionPhase::Settling { remaining };
                    None
                } else {
                    self.finish()
                }
            }
            TransitionPhase::Swapped => self.finish(),
        }
    }

    fn finish(&mut self) -> Option<RunnerEvent> {
        self.active
            .take()
            .map(|active| RunnerEvent::Completed(active.request.arrival))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Zero};

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vector3::new(0.0, 0.0, 40.0), Vector3::zero(), 1.0)
    }

    fn request(duration: f32, settle: f32) -> TransitionRequest {
        TransitionRequest {
            duration_seconds: duration,
            settle_seconds: settle,
            target_position: Vector3::new(0.0, -20.0, 40.0),
            target_look_at: Vector3::zero(),
            easing: Easing::QuadInOut,
            arrival: Arrival::EnterHome,
        }
    }

    #[test]
    fn test_moves_with_easing_and_completes_once() {
        let mut camera = camera();
        let mut runner = TransitionRunner::new();
        runner.start(request(2.0, 0.0), &camera).unwrap();

        assert_eq!(runner.tick(0.5, &mut camera), None);
        // Quad ease-in-out at t = 0.25 covers 12.5% of the way
        assert!((camera.eye.y - (-2.5)).abs() < 1e-4);
        assert_eq!(camera.target, Vector3::zero());

        assert_eq!(runner.tick(0.5, &mut camera), None);
        assert!((camera.eye.y - (-10.0)).abs() < 1e-4);

        assert_eq!(
            runner.tick(1.5, &mut camera),
            Some(RunnerEvent::Completed(Arrival::EnterHome))
        );
        assert_eq!(camera.eye, Vector3::new(0.0, -20.0, 40.0));
        assert!(!runner.is_active());
        assert_eq!(runner.tick(1.0, &mut camera), None);
    }

    #[test]
    fn test_settle_phase_delays_completion() {
        let mut camera = camera();
        let mut runner = TransitionRunner::new();
        runner.start(request(2.0, 1.0), &camera).unwrap();

        assert_eq!(runner.tick(2.0, &mut camera), Some(RunnerEvent::Arrived));
        assert_eq!(runner.phase(), TransitionPhase::Settling { remaining: 1.0 });
        assert_eq!(runner.tick(0.6, &mut camera), None);
        assert!(runner.is_active());
        assert_eq!(
            runner.tick(0.4, &mut camera),
            Some(RunnerEvent::Completed(Arrival::EnterHome))
        );
        assert_eq!(runner.phase(), TransitionPhase::Swapped);
    }

    #[test]
    fn test_second_start_is_rejected() {
        let camera = camera();
        let mut runner = TransitionRunner::new();
        runner.start(request(2.0, 0.0), &camera).unwrap();

        assert!(matches!(
            runner.start(request(3.0, 0.0), &camera),
            Err(ShowroomError::TransitionInFlight)
        ));
        assert_eq!(runner.started_count(), 1);
        assert_eq!(runner.request().unwrap().duration_seconds, 2.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut camera = camera();
        let mut runner = TransitionRunner::new();
        runner.start(request(0.0, 0.0), &camera).unwrap();

        assert_eq!(
            runner.tick(0.0, &mut camera),
            Some(RunnerEvent::Completed(Arrival::EnterHome))
        );
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut camera = camera();
        let mut runner = TransitionRunner::new();
        runner.start(request(2.0, 0.0), &camera).unwrap();
        runner.tick(1.0, &mut camera);
        let halfway = camera.eye;

        runner.tick(-5.0, &mut camera);
        assert!((camera.eye - halfway).magnitude() < 1e-6);
    }
}
