use crate::{
    config::ShowroomConfig,
    gfx::{
        animation::AnimationMixer,
        camera::{CameraRig, OrbitControls, PerspectiveCamera},
        scene::SceneRegistry,
    },
    loader::LoadRequest,
};

/// Visual cues for a screen-cover collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Start covering the screen; a scene swap follows after the settle delay.
    CoverScreen,
    /// The swap happened; uncover.
    RevealScreen,
}

/// Everything the navigator acts upon: scenes, camera, mixer and the
/// outgoing requests for collaborators.
#[derive(Debug, Clone)]
pub struct Stage {
    pub registry: SceneRegistry,
    pub rig: CameraRig,
    pub mixer: Option<AnimationMixer>,
    /// Product node the outline pass should highlight.
    pub highlighted: Option<String>,
    cues: Vec<Cue>,
    load_requests: Vec<LoadRequest>,
}

impl Stage {
    pub fn new(config: &ShowroomConfig) -> Self {
        let camera = PerspectiveCamera::new(
            config.initial_camera.position,
            config.initial_camera.target,
            1.0,
        );
        let mut controls = OrbitControls::new(config.initial_camera.target);
        controls.auto_rotate = config.auto_rotate;
        controls.auto_rotate_speed = config.auto_rotate_speed;

        Self {
            registry: SceneRegistry::new(),
            rig: CameraRig::new(camera, controls),
            mixer: None,
            highlighted: None,
            cues: Vec::new(),
            load_requests: Vec::new(),
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.rig.camera
    }

    pub(crate) fn push_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub(crate) fn push_load(&mut self, request: LoadRequest) {
        log::info!("Requesting {:?} model `{}` for {}", request.kind, request.source, request.scene);
        self.load_requests.push(request);
    }

    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    pub fn drain_load_requests(&mut self) -> Vec<LoadRequest> {
        std::mem::take(&mut self.load_requests)
    }
}
