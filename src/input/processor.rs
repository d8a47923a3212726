//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! whether a drag is live) and the key-binding map. It is the only thing
//! that sits between raw window events and the camera's
//! [`execute`](crate::camera::VirtualCamera::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, TouchPhase};
use crate::camera::CameraCommand;
use crate::options::{KeyAction, KeybindingOptions};

/// Converts raw window events into [`CameraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     camera.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyR") {
///     camera.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last known cursor position, `None` until the first move.
    cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether a `StartDrag` has been emitted without its `EndDrag`.
    drag_active: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::default()
        }
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the processor is in the middle of a drag.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Forget the held button and end any live drag.
    ///
    /// For hosts that lose pointer capture (focus change, window hidden)
    /// and will never see the release event.
    pub fn release_drag(&mut self) -> Option<CameraCommand> {
        self.mouse_pressed = false;
        self.finish_drag()
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<CameraCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                Some(CameraCommand::Zoom { amount: delta })
            }
            InputEvent::Resized { width, height } => {
                Some(CameraCommand::Resize {
                    size: Vec2::new(width, height),
                })
            }
            InputEvent::Touch { phase, x, y } => {
                self.handle_touch(phase, Vec2::new(x, y))
            }
        }
    }

    /// Cursor moved: continue the drag, or start it if the button went
    /// down before any cursor position was known.
    fn handle_cursor_moved(&mut self, point: Vec2) -> Option<CameraCommand> {
        self.cursor = Some(point);
        if !self.mouse_pressed {
            return None;
        }
        if self.drag_active {
            return Some(CameraCommand::DragTo { point });
        }
        self.drag_active = true;
        Some(CameraCommand::StartDrag { point })
    }

    /// Left button press/release starts or ends the drag. Other buttons
    /// are ignored.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<CameraCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.mouse_pressed = true;
            if self.drag_active {
                return None;
            }
            let point = self.cursor?;
            self.drag_active = true;
            return Some(CameraCommand::StartDrag { point });
        }

        // Release
        self.mouse_pressed = false;
        self.finish_drag()
    }

    fn handle_touch(
        &mut self,
        phase: TouchPhase,
        point: Vec2,
    ) -> Option<CameraCommand> {
        self.cursor = Some(point);
        match phase {
            TouchPhase::Started => {
                self.mouse_pressed = true;
                if self.drag_active {
                    return Some(CameraCommand::DragTo { point });
                }
                self.drag_active = true;
                Some(CameraCommand::StartDrag { point })
            }
            TouchPhase::Moved => self
                .drag_active
                .then_some(CameraCommand::DragTo { point }),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.mouse_pressed = false;
                self.finish_drag()
            }
        }
    }

    fn finish_drag(&mut self) -> Option<CameraCommand> {
        if !self.drag_active {
            return None;
        }
        self.drag_active = false;
        Some(CameraCommand::EndDrag)
    }
}
