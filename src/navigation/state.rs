use crate::gfx::scene::SceneName;

/// Top-level navigation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPhase {
    #[default]
    Loading,
    Home,
    ProductOverview,
}

impl NavPhase {
    /// The scene that is current while in this phase.
    pub fn scene(&self) -> SceneName {
        match self {
            NavPhase::Loading => SceneName::LoadingScene,
            NavPhase::Home => SceneName::HomeScene,
            NavPhase::ProductOverview => SceneName::ProductDetailScene,
        }
    }
}

/// Whether the loading-scene model has arrived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadGate {
    #[default]
    Waiting,
    Open,
    Failed(String),
}

impl LoadGate {
    pub fn is_open(&self) -> bool {
        matches!(self, LoadGate::Open)
    }
}

/// Everything the state machine decides on, owned by the navigator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub phase: NavPhase,
    pub current_product: Option<usize>,
    /// True from an accepted transition request until its arrival has run.
    pub is_transitioning: bool,
    pub gate: LoadGate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavigationState::default();
        assert_eq!(state.phase, NavPhase::Loading);
        assert_eq!(state.phase.scene(), SceneName::LoadingScene);
        assert_eq!(state.current_product, None);
        assert!(!state.is_transitioning);
        assert!(!state.gate.is_open());
    }
}
