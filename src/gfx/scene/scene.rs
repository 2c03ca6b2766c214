use cgmath::Vector3;

use super::{node::SceneNode, tag};
use crate::{catalog::ProductCatalog, gfx::animation::AnimationClip, loader::ModelKind};

/// The closed set of scenes the showroom moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneName {
    LoadingScene,
    HomeScene,
    ProductDetailScene,
}

impl SceneName {
    pub const ALL: [SceneName; 3] = [
        SceneName::LoadingScene,
        SceneName::HomeScene,
        SceneName::ProductDetailScene,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneName::LoadingScene => "LoadingScene",
            SceneName::HomeScene => "HomeScene",
            SceneName::ProductDetailScene => "ProductDetailScene",
        }
    }
}

impl std::fmt::Display for SceneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point,
    Hemisphere,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Option<Vector3<f32>>,
}

/// Debug arrow drawn from the origin along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisArrow {
    pub direction: Vector3<f32>,
    pub origin: Vector3<f32>,
    pub length: f32,
    pub color: u32,
}

/// One scene graph: model nodes, lights, debug helpers and the clips of the
/// model currently attached.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    pub name: SceneName,
    pub nodes: Vec<SceneNode>,
    pub lights: Vec<Light>,
    pub helpers: Vec<AxisArrow>,
    pub clips: Vec<AnimationClip>,
    pub model: Option<ModelKind>,
}

impl SceneGraph {
    pub fn new(name: SceneName) -> Self {
        Self {
            name,
            nodes: Vec::new(),
            lights: Vec::new(),
            helpers: Vec::new(),
            clips: Vec::new(),
            model: None,
        }
    }

    /// Replaces the attached model, classifying its nodes against the catalog.
    pub fn attach_model(
        &mut self,
        kind: ModelKind,
        mut nodes: Vec<SceneNode>,
        clips: Vec<AnimationClip>,
        catalog: &ProductCatalog,
    ) {
        tag::tag_tree(&mut nodes, catalog);
        self.nodes = nodes;
        self.clips = clips;
        self.model = Some(kind);
    }

    /// Places the ambient, directional, point and hemisphere lights.
    ///
    /// Placing again replaces the previous set, so relighting is idempotent.
    pub fn place_standard_lights(&mut self) {
        self.lights = vec![
            Light {
                kind: LightKind::Ambient,
                color: [0.55, 0.55, 0.55],
                intensity: 1.0,
                position: None,
            },
            Light {
                kind: LightKind::Directional,
                color: [1.0, 1.0, 1.0],
                intensity: 0.4,
                position: Some(Vector3::new(-10.0, 40.0, 50.0)),
            },
            Light {
                kind: LightKind::Point,
                color: [1.0, 1.0, 1.0],
                intensity: 0.3,
                position: Some(Vector3::new(0.0, 20.0, 0.0)),
            },
            Light {
                kind: LightKind::Hemisphere,
                color: [1.0, 1.0, 1.0],
                intensity: 0.55,
                position: Some(Vector3::new(0.0, 50.0, 0.0)),
            },
        ];
    }

    /// Adds the three coordinate-axis arrows (X blue, Y green, Z yellow).
    pub fn add_axis_helpers(&mut self) {
        if !self.helpers.is_empty() {
            return;
        }
        let origin = Vector3::new(0.0, 0.0, 0.0);
        self.helpers = vec![
            AxisArrow {
                direction: Vector3::unit_x(),
                origin,
                length: 25.0,
                color: 0x0000ff,
            },
            AxisArrow {
                direction: Vector3::unit_y(),
                origin,
                length: 25.0,
                color: 0x00ff00,
            },
            AxisArrow {
                direction: Vector3::unit_z(),
                origin,
                length: 25.0,
                color: 0xffff00,
            },
        ];
    }

    /// Depth-first search over all model nodes.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find_map(|node| node.find(name))
    }

    /// All nodes, depth first.
    pub fn walk(&self) -> Vec<&SceneNode> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.visit(&mut out);
        }
        out
    }

    pub fn get_object_names(&self) -> Vec<String> {
        self.walk().iter().map(|node| node.name.clone()).collect()
    }

    pub fn get_statistics(&self) -> SceneStatistics {
        let nodes = self.walk();
        SceneStatistics {
            node_count: nodes.len(),
            product_count: nodes.iter().filter(|n| n.tag.is_product()).count(),
            light_count: self.lights.len(),
            clip_count: self.clips.len(),
        }
    }
}

/// Scene statistics for debugging
#[derive(Debug, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub product_count: usize,
    pub light_count: usize,
    pub clip_count: usize,
}
