//! # Model Loading Gate
//!
//! Model decoding belongs to a collaborator. The showroom hands it a
//! [`LoadRequest`] through the [`ModelLoader`] trait and gets back a
//! [`PendingLoad`], a one-shot completion the showroom polls every frame.
//! The collaborator may complete it synchronously or later, from any thread,
//! through the paired [`LoadCompleter`].

use std::collections::HashMap;

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};

use crate::{
    error::LoadError,
    gfx::{
        animation::AnimationClip,
        scene::{SceneName, SceneNode},
    },
};

/// Which model variant a scene needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Loading,
    Home,
    ProductDetail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub kind: ModelKind,
    /// Asset identifier from the configuration (path, URL, key).
    pub source: String,
    /// Scene the model is attached to once loaded.
    pub scene: SceneName,
}

/// Decoded model as delivered by the loader.
#[derive(Debug, Clone, Default)]
pub struct LoadedModel {
    pub nodes: Vec<SceneNode>,
    pub clips: Vec<AnimationClip>,
}

pub type LoadOutcome = Result<LoadedModel, LoadError>;

/// Collaborator that decodes models.
pub trait ModelLoader {
    fn load(&mut self, request: &LoadRequest) -> PendingLoad;
}

/// Sending half of a pending load.
#[derive(Debug)]
pub struct LoadCompleter {
    sender: oneshot::Sender<LoadOutcome>,
}

impl LoadCompleter {
    pub fn complete(self, outcome: LoadOutcome) {
        if self.sender.send(outcome).is_err() {
            log::debug!("Load completed after the showroom stopped waiting");
        }
    }
}

/// A load the showroom is waiting on.
#[derive(Debug)]
pub struct PendingLoad {
    request: LoadRequest,
    receiver: oneshot::Receiver<LoadOutcome>,
}

impl PendingLoad {
    /// A pending load plus the completer that resolves it.
    pub fn channel(request: LoadRequest) -> (LoadCompleter, PendingLoad) {
        let (sender, receiver) = oneshot::channel();
        (LoadCompleter { sender }, PendingLoad { request, receiver })
    }

    /// A load that is already resolved.
    pub fn ready(request: LoadRequest, outcome: LoadOutcome) -> PendingLoad {
        let (completer, pending) = Self::channel(request);
        completer.complete(outcome);
        pending
    }

    pub fn request(&self) -> &LoadRequest {
        &self.request
    }

    /// Non-blocking check. A dropped completer counts as a failure.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::Canceled) => Some(Err(LoadError::Abandoned(self.request.source.clone()))),
        }
    }
}

/// In-memory loader answering from a fixed table of sources.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    models: HashMap<String, LoadedModel>,
    requests: Vec<LoadRequest>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, source: &str, model: LoadedModel) -> Self {
        self.models.insert(source.to_string(), model);
        self
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> &[LoadRequest] {
        &self.requests
    }
}

impl ModelLoader for StaticLoader {
    fn load(&mut self, request: &LoadRequest) -> PendingLoad {
        self.requests.push(request.clone());
        let outcome = self
            .models
            .get(&request.source)
            .cloned()
            .ok_or_else(|| LoadError::Failed {
                model: request.source.clone(),
                reason: "unknown source".to_string(),
            });
        PendingLoad::ready(request.clone(), outcome)
    }
}
