//! # Animation Playback
//!
//! Bookkeeping for pre-authored clips shipped with a loaded model. The mixer
//! is bound to one model's clip list at a time; binding again replaces it.
//! Sampling the rig is the renderer's business, the mixer only tracks which
//! clips play and how far along they are.

use crate::error::{Result, ShowroomError};

/// Named clip as reported by the model loader.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration_seconds: f32,
}

impl AnimationClip {
    pub fn new(name: &str, duration_seconds: f32) -> Self {
        Self {
            name: name.to_string(),
            duration_seconds,
        }
    }
}

/// A clip that is currently playing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationAction {
    pub clip: AnimationClip,
    pub time: f32,
}

#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    clips: Vec<AnimationClip>,
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    /// Creates a mixer bound to the given clip list.
    pub fn bind(clips: Vec<AnimationClip>) -> Self {
        Self {
            clips,
            actions: Vec::new(),
        }
    }

    pub fn find_clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.iter().find(|clip| clip.name == name)
    }

    /// Starts (or restarts) the named clip.
    pub fn play(&mut self, name: &str) -> Result<()> {
        let clip = self
            .find_clip(name)
            .cloned()
            .ok_or_else(|| ShowroomError::MissingAnimationClip(name.to_string()))?;

        if let Some(action) = self.actions.iter_mut().find(|a| a.clip.name == name) {
            action.time = 0.0;
        } else {
            self.actions.push(AnimationAction { clip, time: 0.0 });
        }
        Ok(())
    }

    pub fn stop_all(&mut self) {
        self.actions.clear();
    }

    /// Advances every playing action, looping over its clip duration.
    pub fn update(&mut self, delta_time: f32) {
        let dt = delta_time.max(0.0);
        for action in &mut self.actions {
            let duration = action.clip.duration_seconds;
            action.time = if duration > 0.0 {
                (action.time + dt) % duration
            } else {
                0.0
            };
        }
    }

    pub fn playing(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.clip.name.as_str()).collect()
    }

    pub fn action(&self, name: &str) -> Option<&AnimationAction> {
        self.actions.iter().find(|a| a.clip.name == name)
    }
}
