//! Product classification of scene nodes.
//!
//! Classification runs once, when a model's nodes are attached to a scene.
//! A node is a product when its name contains `prod` (any case). Its catalog
//! index is resolved in order of preference:
//!
//! 1. a catalog product with exactly the node's name,
//! 2. the nearest ancestor whose name is exactly a catalog product,
//! 3. the longest catalog name that prefixes the node name and is followed
//!    by a delimiter (`Prod3_body` -> `Prod3`, but `Prod10` is not `Prod1`).

use super::node::SceneNode;
use crate::catalog::ProductCatalog;

const PRODUCT_MARKER: &str = "prod";
const NAME_DELIMITERS: [char; 4] = ['_', '.', '-', ' '];

/// Reference from a scene node to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRef {
    /// `None` for product-looking nodes that match no catalog entry.
    pub index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectTag {
    Product(ProductRef),
    #[default]
    NonProduct,
}

impl ObjectTag {
    pub fn is_product(&self) -> bool {
        matches!(self, ObjectTag::Product(_))
    }

    pub fn product_index(&self) -> Option<usize> {
        match self {
            ObjectTag::Product(product) => product.index,
            ObjectTag::NonProduct => None,
        }
    }
}

/// Classifies a single name given the names of its ancestors (root first).
pub fn classify(name: &str, ancestors: &[&str], catalog: &ProductCatalog) -> ObjectTag {
    if !name.to_lowercase().contains(PRODUCT_MARKER) {
        return ObjectTag::NonProduct;
    }

    let index = catalog
        .index_of(name)
        .or_else(|| ancestors.iter().rev().find_map(|a| catalog.index_of(a)))
        .or_else(|| prefix_match(name, catalog));

    ObjectTag::Product(ProductRef { index })
}

fn prefix_match(name: &str, catalog: &ProductCatalog) -> Option<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| {
            name.strip_prefix(product.name.as_str())
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| NAME_DELIMITERS.contains(&c))
        })
        .max_by_key(|(_, product)| product.name.len())
        .map(|(i, _)| i)
}

/// Tags every node of the given trees in place.
pub fn tag_tree(nodes: &mut [SceneNode], catalog: &ProductCatalog) {
    let mut ancestors = Vec::new();
    for node in nodes {
        tag_node(node, &mut ancestors, catalog);
    }
}

fn tag_node(node: &mut SceneNode, ancestors: &mut Vec<String>, catalog: &ProductCatalog) {
    let names: Vec<&str> = ancestors.iter().map(String::as_str).collect();
    node.tag = classify(&node.name, &names, catalog);

    ancestors.push(node.name.clone());
    for child in &mut node.children {
        tag_node(child, ancestors, catalog);
    }
    ancestors.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_products, Product};
    use cgmath::Vector3;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(default_products()).unwrap()
    }

    #[test]
    fn test_exact_name_is_product() {
        let tag = classify("Prod2", &[], &catalog());
        assert_eq!(tag, ObjectTag::Product(ProductRef { index: Some(1) }));
    }

    #[test]
    fn test_suffixed_part_matches_catalog_entry() {
        let tag = classify("Prod3_body", &[], &catalog());
        assert!(tag.is_product());
        assert_eq!(tag.product_index(), Some(2));
    }

    #[test]
    fn test_building_is_not_a_product() {
        let tag = classify("Main_Building", &[], &catalog());
        assert_eq!(tag, ObjectTag::NonProduct);
        assert_eq!(tag.product_index(), None);
    }

    #[test]
    fn test_case_insensitive_marker_without_entry() {
        let tag = classify("PRODUCT_SHELF", &[], &catalog());
        assert_eq!(tag, ObjectTag::Product(ProductRef { index: None }));
    }

    #[test]
    fn test_ancestor_wins_over_prefix() {
        let tag = classify("prod_mesh", &["Root", "Prod4"], &catalog());
        assert_eq!(tag.product_index(), Some(3));
    }

    #[test]
    fn test_prefix_requires_delimiter() {
        let mut products = default_products();
        products.push(Product::new("Prod10", Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)));
        let catalog = ProductCatalog::new(products).unwrap();

        assert_eq!(classify("Prod10_lid", &[], &catalog).product_index(), Some(4));
        assert_eq!(classify("Prod1x", &[], &catalog).product_index(), None);
    }

    #[test]
    fn test_tag_tree_propagates_ancestors() {
        let mut nodes = vec![SceneNode::new("Prod1").with_child(SceneNode::new("prod_glass"))];
        tag_tree(&mut nodes, &catalog());

        assert_eq!(nodes[0].tag.product_index(), Some(0));
        assert_eq!(nodes[0].children[0].tag.product_index(), Some(0));
    }
}
