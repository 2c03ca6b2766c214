//! # Product Catalog
//!
//! The ordered, immutable list of products the showroom can present. Each
//! product carries the camera standing position and the point the camera
//! looks at when the product is in focus. Products are addressed both by
//! their unique name and by their ordinal index, which the carousel treats
//! cyclically.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowroomError};

/// A single showcased product and its overview viewpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, also the name of the product's node in the scene.
    pub name: String,
    /// Where the camera stands while presenting this product.
    pub standing_pos: Vector3<f32>,
    /// Where the camera (and the orbit controls) look at.
    pub look_at_pos: Vector3<f32>,
}

impl Product {
    pub fn new(name: &str, standing_pos: Vector3<f32>, look_at_pos: Vector3<f32>) -> Self {
        Self {
            name: name.to_string(),
            standing_pos,
            look_at_pos,
        }
    }

    /// Name of the animation clip played when this product comes into focus.
    pub fn clip_name(&self, suffix: &str) -> String {
        format!("{}{}", self.name, suffix)
    }
}

/// Non-empty, name-unique list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds a catalog, rejecting empty lists and duplicate names.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(ShowroomError::EmptyCatalog);
        }

        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.name == product.name) {
                return Err(ShowroomError::DuplicateProduct(product.name.clone()));
            }
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Index of the product whose name matches exactly.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    pub fn by_name(&self, name: &str) -> Result<&Product> {
        self.index_of(name)
            .map(|i| &self.products[i])
            .ok_or_else(|| ShowroomError::UnknownProduct(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }
}

/// The four products of the stock showroom layout.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(
            "Prod1",
            Vector3::new(0.0, 4.0, -7.0),
            Vector3::new(9.0, 2.0, -8.0),
        ),
        Product::new(
            "Prod2",
            Vector3::new(0.0, 4.0, 0.0),
            Vector3::new(8.0, 3.0, 0.0),
        ),
        Product::new(
            "Prod3",
            Vector3::new(0.0, 4.0, 7.0),
            Vector3::new(9.0, 2.0, 8.0),
        ),
        Product::new(
            "Prod4",
            Vector3::new(0.0, 4.0, 7.0),
            Vector3::new(-10.0, 2.0, 6.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = ProductCatalog::new(default_products()).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.index_of("Prod2"), Some(1));
        assert_eq!(catalog.index_of("prod2"), None);
        assert_eq!(
            catalog.by_name("Prod3").unwrap().look_at_pos,
            Vector3::new(9.0, 2.0, 8.0)
        );
        assert_eq!(catalog.get(0).unwrap().clip_name("Action"), "Prod1Action");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            ProductCatalog::new(Vec::new()),
            Err(ShowroomError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut products = default_products();
        products.push(products[0].clone());
        match ProductCatalog::new(products) {
            Err(ShowroomError::DuplicateProduct(name)) => assert_eq!(name, "Prod1"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_product() {
        let catalog = ProductCatalog::new(default_products()).unwrap();
        assert!(matches!(
            catalog.by_name("Main_Building"),
            Err(ShowroomError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_product_json_field_names() {
        let json = r#"{ "name": "Prod9",
            "standingPos": { "x": 1, "y": 2, "z": 3 },
            "lookAtPos": { "x": 4, "y": 5, "z": 6 } }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Prod9");
        assert_eq!(product.standing_pos, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(product.look_at_pos, Vector3::new(4.0, 5.0, 6.0));
    }
}
