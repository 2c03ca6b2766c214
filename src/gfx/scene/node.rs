use cgmath::{Matrix4, SquareMatrix, Vector3};

use super::tag::ObjectTag;
use crate::gfx::picking::AABB;

/// A named element of a scene graph.
///
/// Nodes carry a local transform, an optional local-space bounding box used
/// for ray picking, and children. The `tag` is assigned once when the node is
/// attached to a scene and never re-derived from the name afterwards.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub transform: Matrix4<f32>,
    pub bounds: Option<AABB>,
    pub children: Vec<SceneNode>,
    pub tag: ObjectTag,
}

impl SceneNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Matrix4::identity(),
            bounds: None,
            children: Vec::new(),
            tag: ObjectTag::NonProduct,
        }
    }

    /// Gives the node a pickable local-space box.
    pub fn with_bounds(mut self, min: Vector3<f32>, max: Vector3<f32>) -> Self {
        self.bounds = Some(AABB::new(min, max));
        self
    }

    pub fn with_translation(mut self, offset: Vector3<f32>) -> Self {
        self.transform = Matrix4::from_translation(offset) * self.transform;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search by exact name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SceneNode::subtree_len).sum::<usize>()
    }

    pub(crate) fn visit<'a>(&'a self, out: &mut Vec<&'a SceneNode>) {
        out.push(self);
        for child in &self.children {
            child.visit(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_find() {
        let node = SceneNode::new("Prod3")
            .with_translation(Vector3::new(9.0, 0.0, 8.0))
            .with_child(
                SceneNode::new("Prod3_body")
                    .with_bounds(Vector3::new(-1.0, 0.0, -1.0), Vector3::new(1.0, 2.0, 1.0)),
            );

        assert_eq!(node.subtree_len(), 2);
        assert!(node.find("Prod3_body").unwrap().bounds.is_some());
        assert!(node.find("Prod4").is_none());
        assert_eq!(node.transform.w.x, 9.0);
    }
}
