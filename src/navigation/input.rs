use winit::keyboard::{KeyCode, PhysicalKey};

use super::carousel::Direction;

/// Navigation keys recognised by the showroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Prev,
    Next,
    Back,
}

impl NavKey {
    pub fn from_physical_key(key: PhysicalKey) -> Option<Self> {
        match key {
            PhysicalKey::Code(code) => Self::from_key_code(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(NavKey::Prev),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(NavKey::Next),
            KeyCode::Escape => Some(NavKey::Back),
            _ => None,
        }
    }

    /// Maps browser-style numeric key codes (65/37, 68/39, 27).
    pub fn from_legacy_code(code: u32) -> Option<Self> {
        match code {
            65 | 37 => Some(NavKey::Prev),
            68 | 39 => Some(NavKey::Next),
            27 => Some(NavKey::Back),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            NavKey::Prev => Some(Direction::Prev),
            NavKey::Next => Some(Direction::Next),
            NavKey::Back => None,
        }
    }
}
