use crate::gfx::{
    camera::PerspectiveCamera,
    picking::ObjectPicker,
    scene::{ObjectTag, SceneGraph},
};

/// Interpretation of the nearest node under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct HitResult {
    pub object_name: String,
    pub tag: ObjectTag,
}

impl HitResult {
    pub fn new(object_name: &str, tag: ObjectTag) -> Self {
        Self {
            object_name: object_name.to_string(),
            tag,
        }
    }

    pub fn is_product_hit(&self) -> bool {
        self.tag.is_product()
    }

    pub fn matched_product_index(&self) -> Option<usize> {
        self.tag.product_index()
    }
}

/// Turns pointer positions into [`HitResult`]s against a scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitResolver {
    picker: ObjectPicker,
}

impl HitResolver {
    pub fn new(picker: ObjectPicker) -> Self {
        Self { picker }
    }

    /// Casts from `ndc` into `scene`; `None` when the ray hits nothing.
    pub fn resolve(
        &self,
        ndc: (f32, f32),
        camera: &PerspectiveCamera,
        scene: &SceneGraph,
    ) -> Option<HitResult> {
        let pick = self.picker.pick_node(ndc, camera, scene)?;
        log::debug!(
            "Hit `{}` at distance {:.2} in {}",
            pick.node.name,
            pick.distance,
            scene.name
        );
        Some(HitResult::new(&pick.node.name, pick.node.tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{default_products, ProductCatalog},
        gfx::scene::{SceneName, SceneNode},
        loader::ModelKind,
    };
    use cgmath::{Vector3, Zero};

    fn scene_with(nodes: Vec<SceneNode>) -> SceneGraph {
        let catalog = ProductCatalog::new(default_products()).unwrap();
        let mut scene = SceneGraph::new(SceneName::HomeScene);
        scene.attach_model(ModelKind::Home, nodes, Vec::new(), &catalog);
        scene
    }

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::zero(), 1.0)
    }

    #[test]
    fn test_product_part_resolves_to_catalog_index() {
        let scene = scene_with(vec![SceneNode::new("Prod3_body")
            .with_bounds(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0))]);

        let hit = HitResolver::default()
            .resolve((0.0, 0.0), &camera(), &scene)
            .unwrap();
        assert_eq!(hit.object_name, "Prod3_body");
        assert!(hit.is_product_hit());
        assert_eq!(hit.matched_product_index(), Some(2));
    }

    #[test]
    fn test_building_is_a_non_product_hit() {
        let scene = scene_with(vec![SceneNode::new("Main_Building")
            .with_bounds(Vector3::new(-5.0, -5.0, -5.0), Vector3::new(5.0, 5.0, 5.0))]);

        let hit = HitResolver::default()
            .resolve((0.0, 0.0), &camera(), &scene)
            .unwrap();
        assert!(!hit.is_product_hit());
        assert_eq!(hit.matched_product_index(), None);
    }

    #[test]
    fn test_miss_is_none() {
        let scene = scene_with(Vec::new());
        assert!(HitResolver::default()
            .resolve((0.5, 0.5), &camera(), &scene)
            .is_none());
    }
}
