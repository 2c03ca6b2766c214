use cgmath::Matrix4;

use crate::{
    config::ShowroomConfig,
    error::Result,
    gfx::{
        camera::PerspectiveCamera,
        scene::{SceneGraph, SceneName},
    },
    loader::{ModelLoader, PendingLoad},
    navigation::{Cue, HitResolver, HitResult, LoadGate, NavKey, NavigationState, Navigator, Stage},
};

/// The navigation core behind one viewport.
///
/// Owns the navigator, the stage it acts on and the model loader. A host
/// forwards pointer and key input, calls [`Showroom::tick`] once per frame,
/// and renders [`Showroom::current_scene`] from [`Showroom::camera`].
pub struct Showroom {
    navigator: Navigator,
    stage: Stage,
    resolver: HitResolver,
    loader: Box<dyn ModelLoader>,
    pending: Vec<PendingLoad>,
}

impl Showroom {
    /// Validates `config` and requests the loading-scene model.
    pub fn new(config: ShowroomConfig, loader: Box<dyn ModelLoader>) -> Result<Self> {
        let stage = Stage::new(&config);
        let navigator = Navigator::new(config)?;
        log::info!(
            "Showroom ready with {} products: {}",
            navigator.catalog().len(),
            navigator.catalog().names().join(", ")
        );

        let mut showroom = Self {
            navigator,
            stage,
            resolver: HitResolver::default(),
            loader,
            pending: Vec::new(),
        };
        showroom.navigator.request_initial_load(&mut showroom.stage);
        showroom.dispatch_loads();
        Ok(showroom)
    }

    /// Pointer press at normalized device coordinates.
    pub fn pointer_clicked(&mut self, ndc: (f32, f32)) {
        let hit = self.pick(ndc);
        self.navigator.on_click(hit.as_ref(), &mut self.stage);
        self.dispatch_loads();
    }

    pub fn pointer_moved(&mut self, ndc: (f32, f32)) {
        let hit = self.pick(ndc);
        self.navigator.on_hover(hit.as_ref(), &mut self.stage);
    }

    pub fn key_pressed(&mut self, key: NavKey) {
        self.navigator.on_key(key, &mut self.stage);
        self.dispatch_loads();
    }

    /// One frame: finished loads are attached, then the transition, mixer and
    /// controls advance, then any new model requests go out.
    pub fn tick(&mut self, delta_time: f32) {
        self.poll_loads();
        self.navigator.tick(delta_time, &mut self.stage);
        self.dispatch_loads();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.stage.rig.camera.resize_projection(width, height);
    }

    /// Re-requests the loading model after a failure.
    pub fn retry_initial_load(&mut self) -> bool {
        let retried = self.navigator.retry_initial_load(&mut self.stage);
        self.dispatch_loads();
        retried
    }

    pub fn load_gate(&self) -> &LoadGate {
        &self.navigator.state().gate
    }

    pub fn state(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn current_scene(&self) -> &SceneGraph {
        self.stage.registry.current()
    }

    pub fn current_scene_name(&self) -> SceneName {
        self.stage.registry.current_name()
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        self.stage.camera()
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.stage.rig.get_view_proj_matrix()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.stage.highlighted.as_deref()
    }

    pub fn playing_clips(&self) -> Vec<&str> {
        self.stage
            .mixer
            .as_ref()
            .map(|mixer| mixer.playing())
            .unwrap_or_default()
    }

    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }

    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.stage.drain_cues()
    }

    fn pick(&self, ndc: (f32, f32)) -> Option<HitResult> {
        self.resolver
            .resolve(ndc, self.stage.camera(), self.stage.registry.current())
    }

    fn dispatch_loads(&mut self) {
        for request in self.stage.drain_load_requests() {
            let pending = self.loader.load(&request);
            self.pending.push(pending);
        }
    }

    fn poll_loads(&mut self) {
        let mut waiting = Vec::with_capacity(self.pending.len());
        for mut pending in std::mem::take(&mut self.pending) {
            match pending.poll() {
                None => waiting.push(pending),
                Some(Ok(model)) => {
                    self.navigator
                        .model_loaded(pending.request(), model, &mut self.stage)
                }
                Some(Err(err)) => self.navigator.model_load_failed(pending.request(), &err),
            }
        }
        self.pending = waiting;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use cgmath::{InnerSpace, Vector3};

    use super::*;
    use crate::{
        gfx::{animation::AnimationClip, scene::SceneNode},
        loader::{LoadCompleter, LoadRequest, LoadedModel, StaticLoader},
        navigation::NavPhase,
    };

    fn boxed(min: [f32; 3], max: [f32; 3], name: &str) -> SceneNode {
        SceneNode::new(name).with_bounds(Vector3::from(min), Vector3::from(max))
    }

    fn still_config() -> ShowroomConfig {
        ShowroomConfig {
            auto_rotate: false,
            ..ShowroomConfig::default()
        }
    }

    fn full_loader(config: &ShowroomConfig) -> StaticLoader {
        StaticLoader::new()
            .with_model(
                &config.models.loading,
                LoadedModel {
                    nodes: vec![boxed([-5.0; 3], [5.0; 3], "LoadingSphere")],
                    clips: Vec::new(),
                },
            )
            .with_model(
                &config.models.home,
                LoadedModel {
                    nodes: vec![
                        boxed([-1.0, 4.0, 7.0], [1.0, 6.0, 9.0], "Prod2"),
                        boxed([-30.0, -1.0, 20.0], [30.0, 30.0, 21.0], "Main_Building"),
                    ],
                    clips: vec![AnimationClip::new("Prod2Action", 2.0)],
                },
            )
            .with_model(
                &config.models.product_detail,
                LoadedModel {
                    nodes: vec![SceneNode::new("Prod2")],
                    clips: vec![AnimationClip::new("Prod2Action", 2.0)],
                },
            )
    }

    fn run(showroom: &mut Showroom, seconds: f32) {
        for _ in 0..((seconds * 60.0) as usize + 5) {
            showroom.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn test_guided_tour() {
        let config = still_config();
        let loader = full_loader(&config);
        let mut showroom = Showroom::new(config, Box::new(loader)).unwrap();
        assert_eq!(showroom.current_scene_name(), SceneName::LoadingScene);
        assert_eq!(showroom.pending_loads(), 1);

        showroom.tick(0.0);
        assert!(showroom.load_gate().is_open());

        showroom.pointer_clicked((0.0, 0.0));
        assert!(showroom.state().is_transitioning);
        run(&mut showroom, 3.0);
        assert_eq!(showroom.current_scene_name(), SceneName::HomeScene);
        assert_eq!(
            showroom.drain_cues(),
            vec![Cue::CoverScreen, Cue::RevealScreen]
        );
        assert_eq!(showroom.current_scene().get_object_names().len(), 2);

        showroom.pointer_moved((0.0, 0.0));
        assert_eq!(showroom.highlighted(), Some("Prod2"));

        showroom.pointer_clicked((0.0, 0.0));
        assert_eq!(showroom.state().current_product, Some(1));
        assert_eq!(showroom.playing_clips(), vec!["Prod2Action"]);

        run(&mut showroom, 3.0);
        assert_eq!(showroom.state().phase, NavPhase::ProductOverview);
        assert_eq!(showroom.current_scene_name(), SceneName::ProductDetailScene);
        assert!((showroom.camera().eye - Vector3::new(0.0, 4.0, 0.0)).magnitude() < 1e-3);
        assert_eq!(showroom.playing_clips(), vec!["Prod2Action"]);

        showroom.key_pressed(NavKey::Next);
        assert_eq!(showroom.state().current_product, Some(2));
        run(&mut showroom, 3.0);
        assert_eq!(showroom.stage().rig.controls.target, Vector3::new(9.0, 2.0, 8.0));
    }

    #[test]
    fn test_failed_loading_model_blocks_until_retry() {
        let mut showroom = Showroom::new(still_config(), Box::new(StaticLoader::new())).unwrap();
        showroom.tick(0.0);
        assert!(matches!(showroom.load_gate(), LoadGate::Failed(_)));

        showroom.pointer_clicked((0.0, 0.0));
        assert!(!showroom.state().is_transitioning);

        assert!(showroom.retry_initial_load());
        assert_eq!(showroom.load_gate(), &LoadGate::Waiting);
        assert_eq!(showroom.pending_loads(), 1);
    }

    struct DeferredLoader {
        completers: Rc<RefCell<Vec<(LoadRequest, LoadCompleter)>>>,
    }

    impl ModelLoader for DeferredLoader {
        fn load(&mut self, request: &LoadRequest) -> PendingLoad {
            let (completer, pending) = PendingLoad::channel(request.clone());
            self.completers
                .borrow_mut()
                .push((request.clone(), completer));
            pending
        }
    }

    #[test]
    fn test_gate_waits_for_deferred_completion() {
        let completers = Rc::new(RefCell::new(Vec::new()));
        let loader = DeferredLoader {
            completers: completers.clone(),
        };
        let mut showroom = Showroom::new(still_config(), Box::new(loader)).unwrap();

        run(&mut showroom, 0.5);
        assert_eq!(showroom.load_gate(), &LoadGate::Waiting);
        assert_eq!(showroom.pending_loads(), 1);

        let (request, completer) = completers.borrow_mut().remove(0);
        assert_eq!(request.scene, SceneName::LoadingScene);
        completer.complete(Ok(LoadedModel {
            nodes: vec![boxed([-5.0; 3], [5.0; 3], "LoadingSphere")],
            clips: Vec::new(),
        }));

        showroom.tick(1.0 / 60.0);
        assert!(showroom.load_gate().is_open());
        assert_eq!(showroom.pending_loads(), 0);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut showroom = Showroom::new(still_config(), Box::new(StaticLoader::new())).unwrap();
        let square = showroom.view_projection();
        showroom.resize(1600, 800);
        assert_eq!(showroom.camera().aspect, 2.0);
        // Wider viewport squeezes x, leaves y alone
        let wide = showroom.view_projection();
        assert!((wide.x.x - square.x.x / 2.0).abs() < 1e-5);
        assert!((wide.y.y - square.y.y).abs() < 1e-5);
    }
}
