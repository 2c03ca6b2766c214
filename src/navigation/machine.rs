use cgmath::Vector3;

use super::{
    carousel::{self, Direction},
    hit::HitResult,
    input::NavKey,
    stage::{Cue, Stage},
    state::{LoadGate, NavPhase, NavigationState},
};
use crate::{
    catalog::ProductCatalog,
    config::{EscapeBehavior, ShowroomConfig},
    error::{LoadError, Result},
    gfx::{animation::AnimationMixer, camera::PerspectiveCamera, scene::SceneName},
    loader::{LoadRequest, LoadedModel, ModelKind},
    transition::{Arrival, RunnerEvent, TransitionRequest, TransitionRunner},
};

/// Where a transition goes and how long it takes.
#[derive(Debug, Clone, Copy)]
struct Leg {
    target: Vector3<f32>,
    look_at: Vector3<f32>,
    duration_seconds: f32,
    settle_seconds: f32,
}

/// The navigation state machine.
///
/// Maps (phase, input, hit) onto camera transitions, scene swaps, model
/// requests and clip playback. All transitions are created through
/// `begin_transition`, which rejects requests while one is in flight.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: ShowroomConfig,
    catalog: ProductCatalog,
    state: NavigationState,
    runner: TransitionRunner,
}

impl Navigator {
    pub fn new(config: ShowroomConfig) -> Result<Self> {
        let catalog = config.catalog()?;
        Ok(Self {
            config,
            catalog,
            state: NavigationState::default(),
            runner: TransitionRunner::new(),
        })
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShowroomConfig {
        &self.config
    }

    pub fn runner(&self) -> &TransitionRunner {
        &self.runner
    }

    /// Lights the loading scene and asks for its model. Navigation stays
    /// inert until that model arrives.
    pub fn request_initial_load(&mut self, stage: &mut Stage) {
        self.state.gate = LoadGate::Waiting;
        stage
            .registry
            .get_mut(SceneName::LoadingScene)
            .place_standard_lights();
        self.request_model(ModelKind::Loading, SceneName::LoadingScene, stage);
    }

    /// Re-issues the loading-scene request after a failure.
    pub fn retry_initial_load(&mut self, stage: &mut Stage) -> bool {
        if !matches!(self.state.gate, LoadGate::Failed(_)) {
            return false;
        }
        log::info!("Retrying loading scene model");
        self.request_initial_load(stage);
        true
    }

    pub fn model_loaded(&mut self, request: &LoadRequest, model: LoadedModel, stage: &mut Stage) {
        log::info!(
            "Loaded {:?} model `{}` ({} root nodes, {} clips) into {}",
            request.kind,
            request.source,
            model.nodes.len(),
            model.clips.len(),
            request.scene
        );
        stage
            .registry
            .get_mut(request.scene)
            .attach_model(request.kind, model.nodes, model.clips, &self.catalog);

        match request.kind {
            ModelKind::Loading => {
                if !self.state.gate.is_open() {
                    log::info!("Loading scene ready; navigation enabled");
                    self.state.gate = LoadGate::Open;
                }
            }
            ModelKind::ProductDetail => {
                let showing = self.state.phase == NavPhase::ProductOverview
                    && stage.registry.current_name() == request.scene;
                if let (true, Some(index)) = (showing, self.state.current_product) {
                    stage.mixer = Some(AnimationMixer::bind(stage.registry.current().clips.clone()));
                    self.play_product_clip(index, stage);
                }
            }
            ModelKind::Home => {}
        }
    }

    /// Load-failure hook. A failed loading model parks the gate in
    /// `Failed` instead of waiting forever.
    pub fn model_load_failed(&mut self, request: &LoadRequest, error: &LoadError) {
        log::warn!("Failed to load {:?} model: {}", request.kind, error);
        if request.kind == ModelKind::Loading {
            self.state.gate = LoadGate::Failed(error.to_string());
        }
    }

    pub fn on_click(&mut self, hit: Option<&HitResult>, stage: &mut Stage) {
        stage.rig.controls.auto_rotate = false;

        let Some(hit) = hit else {
            log::debug!("Click hit nothing");
            return;
        };
        log::debug!("Click on `{}` during {:?}", hit.object_name, self.state.phase);

        if !self.state.gate.is_open() {
            log::debug!("Click ignored: loading gate is {:?}", self.state.gate);
            return;
        }

        match self.state.phase {
            NavPhase::Loading => {
                let leg = self.loading_exit_leg(&stage.rig.camera);
                self.begin_transition(leg, Arrival::EnterHome, stage);
            }
            NavPhase::Home => self.select_product(hit, stage),
            NavPhase::ProductOverview => {}
        }
    }

    pub fn on_key(&mut self, key: NavKey, stage: &mut Stage) {
        if self.state.phase != NavPhase::ProductOverview {
            log::debug!("{:?} ignored during {:?}", key, self.state.phase);
            return;
        }
        let Some(current) = self.state.current_product else {
            debug_assert!(false, "product overview without a current product");
            return;
        };

        match key.direction() {
            Some(direction) => self.step_carousel(direction, current, stage),
            None => self.escape(current, stage),
        }
    }

    /// Outline-highlight decision for pointer movement.
    pub fn on_hover(&mut self, hit: Option<&HitResult>, stage: &mut Stage) {
        let highlighting = self.state.phase == NavPhase::Home
            && !self.state.is_transitioning
            && stage.registry.current_name() == SceneName::HomeScene;

        stage.highlighted = match hit {
            Some(hit) if highlighting && hit.is_product_hit() => Some(hit.object_name.clone()),
            _ => None,
        };
    }

    /// Advances the transition, mixer and controls by one frame.
    pub fn tick(&mut self, delta_time: f32, stage: &mut Stage) {
        match self.runner.tick(delta_time, &mut stage.rig.camera) {
            Some(RunnerEvent::Arrived) => {
                stage.rig.controls.min_distance = 0.0;
                stage.push_cue(Cue::CoverScreen);
            }
            Some(RunnerEvent::Completed(arrival)) => {
                self.arrive(arrival, stage);
                self.state.is_transitioning = false;
            }
            None => {}
        }

        if let Some(mixer) = stage.mixer.as_mut() {
            mixer.update(delta_time);
        }
        stage.rig.update(delta_time, self.state.is_transitioning);
    }

    fn select_product(&mut self, hit: &HitResult, stage: &mut Stage) {
        let Some(index) = hit.matched_product_index() else {
            if hit.is_product_hit() {
                log::debug!("`{}` looks like a product but is not in the catalog", hit.object_name);
            }
            return;
        };
        let Some(leg) = self.product_leg(index) else {
            return;
        };

        if self.begin_transition(leg, Arrival::EnterProductOverview { index }, stage) {
            self.state.current_product = Some(index);
            stage.mixer = Some(AnimationMixer::bind(stage.registry.current().clips.clone()));
            self.play_product_clip(index, stage);
        }
    }

    fn step_carousel(&mut self, direction: Direction, current: usize, stage: &mut Stage) {
        let next = match carousel::advance(direction, current, self.catalog.len()) {
            Ok(next) => next,
            Err(err) => {
                log::error!("Carousel step failed: {}", err);
                return;
            }
        };
        let Some(leg) = self.product_leg(next) else {
            return;
        };

        if self.begin_transition(leg, Arrival::FocusProduct { index: next }, stage) {
            self.state.current_product = Some(next);
            self.play_product_clip(next, stage);
        }
    }

    fn escape(&mut self, current: usize, stage: &mut Stage) {
        match self.config.escape {
            EscapeBehavior::Reframe => {
                if let Some(leg) = self.product_leg(current) {
                    self.begin_transition(leg, Arrival::EnterProductOverview { index: current }, stage);
                }
            }
            EscapeBehavior::ReturnHome => {
                let leg = self.home_leg();
                self.begin_transition(leg, Arrival::ReturnHome, stage);
            }
        }
    }

    fn begin_transition(&mut self, leg: Leg, arrival: Arrival, stage: &mut Stage) -> bool {
        if self.state.is_transitioning {
            log::debug!("Rejected transition to {:?}: another transition is in flight", arrival);
            return false;
        }

        let request = TransitionRequest {
            duration_seconds: leg.duration_seconds,
            settle_seconds: leg.settle_seconds,
            target_position: leg.target,
            target_look_at: leg.look_at,
            easing: self.config.easing,
            arrival,
        };
        match self.runner.start(request, &stage.rig.camera) {
            Ok(()) => {
                log::debug!("Transition to {:?} over {:.1}s", arrival, leg.duration_seconds);
                self.state.is_transitioning = true;
                true
            }
            Err(err) => {
                log::debug!("Rejected transition to {:?}: {}", arrival, err);
                false
            }
        }
    }

    fn arrive(&mut self, arrival: Arrival, stage: &mut Stage) {
        match arrival {
            Arrival::EnterHome => {
                let pose = self.config.home_pose;
                stage.rig.camera.set_position(pose.position);
                stage.rig.camera.look_at(pose.target);
                stage.rig.controls.set_target(pose.target);
                stage.rig.controls.min_distance = 0.0;
                self.swap_to(NavPhase::Home, stage);

                let home = stage.registry.get_mut(SceneName::HomeScene);
                home.place_standard_lights();
                if self.config.debug_axes {
                    home.add_axis_helpers();
                }
                self.request_model(ModelKind::Home, SceneName::HomeScene, stage);
                stage.push_cue(Cue::RevealScreen);
            }
            Arrival::EnterProductOverview { index } => {
                self.focus(index, stage);
                self.swap_to(NavPhase::ProductOverview, stage);
                stage
                    .registry
                    .get_mut(SceneName::ProductDetailScene)
                    .place_standard_lights();
                self.request_model(ModelKind::ProductDetail, SceneName::ProductDetailScene, stage);
            }
            Arrival::FocusProduct { index } => self.focus(index, stage),
            Arrival::ReturnHome => {
                stage.rig.controls.set_target(self.config.home_pose.target);
                stage.rig.controls.min_distance = 0.0;
                stage.highlighted = None;
                if let Some(mixer) = stage.mixer.as_mut() {
                    mixer.stop_all();
                }
                self.state.current_product = None;
                self.swap_to(NavPhase::Home, stage);
            }
        }
    }

    fn swap_to(&mut self, phase: NavPhase, stage: &mut Stage) {
        stage.registry.swap_current(phase.scene());
        self.state.phase = phase;
    }

    fn focus(&self, index: usize, stage: &mut Stage) {
        if let Some(product) = self.catalog.get(index) {
            stage.rig.controls.min_distance = 0.0;
            stage.rig.controls.set_target(product.look_at_pos);
        }
    }

    fn request_model(&self, kind: ModelKind, scene: SceneName, stage: &mut Stage) {
        stage.push_load(LoadRequest {
            kind,
            source: self.config.models.source(kind).to_string(),
            scene,
        });
    }

    fn play_product_clip(&self, index: usize, stage: &mut Stage) {
        let Some(product) = self.catalog.get(index) else {
            return;
        };
        let clip = product.clip_name(&self.config.clip_suffix);

        if stage.mixer.is_none() {
            stage.mixer = Some(AnimationMixer::bind(stage.registry.current().clips.clone()));
        }
        if let Some(mixer) = stage.mixer.as_mut() {
            if let Err(err) = mixer.play(&clip) {
                log::debug!("{}; continuing without animation", err);
            }
        }
    }

    fn loading_exit_leg(&self, camera: &PerspectiveCamera) -> Leg {
        let exit = self.config.loading_exit;
        Leg {
            target: Vector3::new(0.0, exit.drop_to_y, camera.eye.z),
            look_at: exit.look_at,
            duration_seconds: exit.duration_seconds,
            settle_seconds: exit.settle_seconds,
        }
    }

    fn product_leg(&self, index: usize) -> Option<Leg> {
        let Some(product) = self.catalog.get(index) else {
            log::warn!("No product at index {}", index);
            return None;
        };
        Some(Leg {
            target: product.standing_pos,
            look_at: product.look_at_pos,
            duration_seconds: self.config.product_transition_seconds,
            settle_seconds: 0.0,
        })
    }

    fn home_leg(&self) -> Leg {
        Leg {
            target: self.config.home_pose.position,
            look_at: self.config.home_pose.target,
            duration_seconds: self.config.product_transition_seconds,
            settle_seconds: 0.0,
        }
    }
}
