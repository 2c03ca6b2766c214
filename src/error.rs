//! Error types shared across the showroom core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by catalog construction, configuration and navigation.
#[derive(Debug, Error)]
pub enum ShowroomError {
    #[error("product catalog is empty")]
    EmptyCatalog,

    #[error("product name `{0}` appears more than once in the catalog")]
    DuplicateProduct(String),

    #[error("no product named `{0}` in the catalog")]
    UnknownProduct(String),

    #[error("animation clip `{0}` not found on the bound model")]
    MissingAnimationClip(String),

    #[error("a camera transition is already in flight")]
    TransitionInFlight,

    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config JSON error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure reported by a model loader collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("model `{model}` failed to load: {reason}")]
    Failed { model: String, reason: String },

    #[error("loader dropped the request for `{0}` without answering")]
    Abandoned(String),
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
