use super::scene::{SceneGraph, SceneName};

/// Owns every scene and the single "current" pointer.
///
/// `swap_current` is the only place the current scene changes; hit testing
/// and frame callbacks both read through `current()`.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
    scenes: [SceneGraph; 3],
    current: SceneName,
}

impl SceneRegistry {
    /// All three scenes start empty; `LoadingScene` is current.
    pub fn new() -> Self {
        Self {
            scenes: SceneName::ALL.map(SceneGraph::new),
            current: SceneName::LoadingScene,
        }
    }

    fn slot(name: SceneName) -> usize {
        match name {
            SceneName::LoadingScene => 0,
            SceneName::HomeScene => 1,
            SceneName::ProductDetailScene => 2,
        }
    }

    pub fn current(&self) -> &SceneGraph {
        &self.scenes[Self::slot(self.current)]
    }

    pub fn current_mut(&mut self) -> &mut SceneGraph {
        &mut self.scenes[Self::slot(self.current)]
    }

    pub fn current_name(&self) -> SceneName {
        self.current
    }

    /// Makes `name` current and returns the previously current scene name.
    pub fn swap_current(&mut self, name: SceneName) -> SceneName {
        let previous = std::mem::replace(&mut self.current, name);
        if previous != name {
            log::info!("Scene swap: {} -> {}", previous, name);
        }
        previous
    }

    pub fn get(&self, name: SceneName) -> &SceneGraph {
        &self.scenes[Self::slot(name)]
    }

    pub fn get_mut(&mut self, name: SceneName) -> &mut SceneGraph {
        &mut self.scenes[Self::slot(name)]
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_loading_scene() {
        let registry = SceneRegistry::new();
        assert_eq!(registry.current_name(), SceneName::LoadingScene);
        assert_eq!(registry.current().name, SceneName::LoadingScene);
    }

    #[test]
    fn test_swap_returns_previous() {
        let mut registry = SceneRegistry::new();
        let previous = registry.swap_current(SceneName::HomeScene);

        assert_eq!(previous, SceneName::LoadingScene);
        assert_eq!(registry.current().name, SceneName::HomeScene);
        assert_eq!(registry.get(SceneName::ProductDetailScene).name, SceneName::ProductDetailScene);
    }

    #[test]
    fn test_current_mut_targets_current_scene() {
        let mut registry = SceneRegistry::new();
        registry.swap_current(SceneName::ProductDetailScene);
        registry.current_mut().place_standard_lights();

        assert_eq!(registry.get(SceneName::ProductDetailScene).lights.len(), 4);
        assert!(registry.get(SceneName::HomeScene).lights.is_empty());
    }
}
