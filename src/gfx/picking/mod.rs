//! # Object Picking System
//!
//! Ray casting from a pointer position into a scene graph.
//!
//! ## How it works
//!
//! 1. **Pointer to Ray**: Unproject normalized device coordinates through the
//!    camera's inverse view-projection into a world-space ray
//! 2. **Ray-Node Intersection**: Test the ray against every node's bounding
//!    box, transformed into world space through the node hierarchy
//! 3. **Selection**: Return the closest intersected node
//!
//! ## Usage
//!
//! ```no_run
//! use showroom::gfx::{camera::PerspectiveCamera, picking::ObjectPicker, scene::SceneGraph};
//! # fn demo(camera: &PerspectiveCamera, scene: &SceneGraph) {
//! let picker = ObjectPicker::new();
//! if let Some(hit) = picker.pick_node((0.0, 0.0), camera, scene) {
//!     println!("Selected node: {}", hit.node.name);
//! }
//! # }
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::{
    camera::PerspectiveCamera,
    scene::{SceneGraph, SceneNode},
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners of the AABB and compute new bounds
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let transformed: Vec<[f32; 3]> = corners
            .iter()
            .map(|corner| {
                let p = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
                [p.x / p.w, p.y / p.w, p.z / p.w]
            })
            .collect();

        Self::from_vertices(&transformed)
    }
}

/// Result of a picking operation
#[derive(Debug, Clone)]
pub struct PickResult<'a> {
    /// The nearest node the ray hit
    pub node: &'a SceneNode,
    /// Distance from the ray origin to the intersection point
    pub distance: f32,
    /// World space intersection point
    pub intersection_point: Vector3<f32>,
}

/// Ray picker for pointer selection
#[derive(Debug, Clone, Copy)]
pub struct ObjectPicker {
    /// Hits further away than this are ignored
    pub max_distance: f32,
}

impl ObjectPicker {
    /// Create a new object picker
    pub fn new() -> Self {
        Self {
            max_distance: f32::INFINITY,
        }
    }

    /// Convert screen pixel coordinates to normalized device coordinates (-1 to 1, y up)
    pub fn screen_to_ndc(screen_pos: (f32, f32), screen_size: (f32, f32)) -> (f32, f32) {
        let (mouse_x, mouse_y) = screen_pos;
        let (screen_width, screen_height) = screen_size;
        let ndc_x = (2.0 * mouse_x) / screen_width.max(1.0) - 1.0;
        let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height.max(1.0); // Flip Y axis
        (ndc_x, ndc_y)
    }

    /// Convert normalized device coordinates to a world-space ray
    pub fn ndc_to_ray(&self, ndc: (f32, f32), camera: &PerspectiveCamera) -> Ray {
        let (ndc_x, ndc_y) = ndc;

        let view_proj_matrix = camera.projection_matrix() * camera.view_matrix();
        let inv_view_proj = view_proj_matrix
            .invert()
            .unwrap_or(Matrix4::from_scale(1.0));

        // Near and far plane points in NDC
        let world_near = inv_view_proj * Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
        let world_far = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_3d = world_near.truncate() / world_near.w;
        let far_3d = world_far.truncate() / world_far.w;

        Ray::new(near_3d, far_3d - near_3d)
    }

    /// Pick the nearest node of `scene` under the pointer
    pub fn pick_node<'a>(
        &self,
        ndc: (f32, f32),
        camera: &PerspectiveCamera,
        scene: &'a SceneGraph,
    ) -> Option<PickResult<'a>> {
        let ray = self.ndc_to_ray(ndc, camera);
        self.cast(&ray, scene)
    }

    /// Intersect a ray with every node of the scene, recursively
    pub fn cast<'a>(&self, ray: &Ray, scene: &'a SceneGraph) -> Option<PickResult<'a>> {
        let mut closest: Option<PickResult<'a>> = None;
        for node in &scene.nodes {
            self.cast_node(ray, node, Matrix4::identity(), &mut closest);
        }
        closest
    }

    fn cast_node<'a>(
        &self,
        ray: &Ray,
        node: &'a SceneNode,
        parent: Matrix4<f32>,
        closest: &mut Option<PickResult<'a>>,
    ) {
        let world = parent * node.transform;

        if let Some(bounds) = node.bounds {
            let world_aabb = bounds.transform(&world);
            if let Some(distance) = world_aabb.intersect_ray(ray) {
                // Strict comparison keeps the first node in traversal order on ties
                let nearer = closest
                    .as_ref()
                    .map_or(true, |result| distance < result.distance);
                if distance <= self.max_distance && nearer {
                    *closest = Some(PickResult {
                        node,
                        distance,
                        intersection_point: ray.point_at(distance),
                    });
                }
            }
        }

        for child in &node.children {
            self.cast_node(ray, child, world, closest);
        }
    }
}

impl Default for ObjectPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::SceneName;

    fn unit_box(name: &str) -> SceneNode {
        SceneNode::new(name).with_bounds(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = AABB::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_aabb_intersection() {
        let aabb = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        // Ray hitting the box
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(aabb.intersect_ray(&ray), Some(4.0));

        // Ray missing the box
        let ray_miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&ray_miss).is_none());
    }

    #[test]
    fn test_center_ray_follows_camera_forward() {
        let camera = PerspectiveCamera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::zero(), 1.0);
        let ray = ObjectPicker::new().ndc_to_ray((0.0, 0.0), &camera);

        assert!((ray.direction - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-4);
    }

    #[test]
    fn test_screen_to_ndc() {
        assert_eq!(ObjectPicker::screen_to_ndc((400.0, 300.0), (800.0, 600.0)), (0.0, 0.0));
        assert_eq!(ObjectPicker::screen_to_ndc((0.0, 0.0), (800.0, 600.0)), (-1.0, 1.0));
    }

    #[test]
    fn test_pick_nearest_nested_node() {
        let mut scene = SceneGraph::new(SceneName::HomeScene);
        scene.nodes = vec![
            unit_box("Far").with_translation(Vector3::new(0.0, 0.0, -5.0)),
            SceneNode::new("Group")
                .with_translation(Vector3::new(0.0, 0.0, 2.0))
                .with_child(unit_box("Near")),
        ];
        let camera = PerspectiveCamera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::zero(), 1.0);

        let hit = ObjectPicker::new().pick_node((0.0, 0.0), &camera, &scene).unwrap();
        assert_eq!(hit.node.name, "Near");
        assert!((hit.intersection_point.z - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_pick_empty_space() {
        let mut scene = SceneGraph::new(SceneName::HomeScene);
        scene.nodes = vec![unit_box("Box").with_translation(Vector3::new(20.0, 0.0, 0.0))];
        let camera = PerspectiveCamera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::zero(), 1.0);

        assert!(ObjectPicker::new().pick_node((0.0, 0.0), &camera, &scene).is_none());
    }
}
