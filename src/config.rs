//! # Showroom Configuration
//!
//! Catalog, camera poses, timings and model sources. Every field has a
//! default reproducing the stock showroom, so a config file only needs to
//! name what it changes:
//!
//! ```
//! use showroom::config::{EscapeBehavior, ShowroomConfig};
//!
//! let config = ShowroomConfig::from_json_str(r#"{ "escape": "return_home" }"#).unwrap();
//! assert_eq!(config.escape, EscapeBehavior::ReturnHome);
//! assert_eq!(config.products.len(), 4);
//! ```

use std::path::Path;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{default_products, Product, ProductCatalog},
    error::{Result, ShowroomError},
    loader::ModelKind,
    transition::Easing,
};

/// What `Escape` does while a product is in focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeBehavior {
    /// Fly to the current product's viewpoint again.
    #[default]
    Reframe,
    /// Fly back to the home pose and swap to the home scene.
    ReturnHome,
}

/// Camera pose: eye position plus look-at / orbit target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
}

/// The flight out of the loading scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingExit {
    pub duration_seconds: f32,
    /// Hold after arrival while the screen cover fades in.
    pub settle_seconds: f32,
    /// Camera drops to this height, keeping its z.
    pub drop_to_y: f32,
    pub look_at: Vector3<f32>,
}

impl Default for LoadingExit {
    fn default() -> Self {
        Self {
            duration_seconds: 2.0,
            settle_seconds: 1.0,
            drop_to_y: -20.0,
            look_at: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Asset identifiers handed to the model loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSources {
    pub loading: String,
    pub home: String,
    pub product_detail: String,
}

impl Default for ModelSources {
    fn default() -> Self {
        Self {
            loading: "models/loading.glb".to_string(),
            home: "models/home.glb".to_string(),
            product_detail: "models/product_detail.glb".to_string(),
        }
    }
}

impl ModelSources {
    pub fn source(&self, kind: ModelKind) -> &str {
        match kind {
            ModelKind::Loading => &self.loading,
            ModelKind::Home => &self.home,
            ModelKind::ProductDetail => &self.product_detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowroomConfig {
    pub products: Vec<Product>,
    pub initial_camera: CameraPose,
    pub loading_exit: LoadingExit,
    pub home_pose: CameraPose,
    pub product_transition_seconds: f32,
    pub easing: Easing,
    pub models: ModelSources,
    pub escape: EscapeBehavior,
    /// Adds axis arrows to the home scene.
    pub debug_axes: bool,
    pub auto_rotate: bool,
    /// Radians per second.
    pub auto_rotate_speed: f32,
    /// Appended to a product name to find its animation clip.
    pub clip_suffix: String,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
            initial_camera: CameraPose {
                position: Vector3::new(0.0, 0.0, 40.0),
                target: Vector3::new(0.0, 0.0, 0.0),
            },
            loading_exit: LoadingExit::default(),
            home_pose: CameraPose {
                position: Vector3::new(0.0, 5.0, -16.0),
                target: Vector3::new(0.0, 5.0, 8.0),
            },
            product_transition_seconds: 3.0,
            easing: Easing::QuadInOut,
            models: ModelSources::default(),
            escape: EscapeBehavior::Reframe,
            debug_axes: false,
            auto_rotate: true,
            auto_rotate_speed: std::f32::consts::TAU / 30.0,
            clip_suffix: "Action".to_string(),
        }
    }
}

impl ShowroomConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ShowroomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the catalog invariants (non-empty, unique names).
    pub fn validate(&self) -> Result<()> {
        self.catalog().map(|_| ())
    }

    pub fn catalog(&self) -> Result<ProductCatalog> {
        ProductCatalog::new(self.products.clone())
    }
}
