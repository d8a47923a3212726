use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::CameraCommand;

/// Discrete camera actions that can be bound to a key.
///
/// Only parameterless commands make sense here; drags and zoom come from the
/// pointer, not from key lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return to the initial orientation and distance.
    ResetCamera,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Step the camera closer by one scroll notch.
    ZoomIn,
    /// Step the camera away by one scroll notch.
    ZoomOut,
}

impl KeyAction {
    /// Convert to the corresponding [`CameraCommand`].
    #[must_use]
    pub fn to_command(self) -> CameraCommand {
        match self {
            Self::ResetCamera => CameraCommand::Reset,
            Self::ToggleAutoRotate => CameraCommand::ToggleAutoRotate,
            Self::ZoomIn => CameraCommand::Zoom { amount: 1.0 },
            Self::ZoomOut => CameraCommand::Zoom { amount: -1.0 },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings mapping physical key strings to actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"Home"`, `"Equal"`, etc.
pub struct KeybindingOptions {
    /// Key string → action.
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyQ".into(), KeyAction::ResetCamera),
            ("Home".into(), KeyAction::ResetCamera),
            ("KeyR".into(), KeyAction::ToggleAutoRotate),
            ("Equal".into(), KeyAction::ZoomIn),
            ("Minus".into(), KeyAction::ZoomOut),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}
