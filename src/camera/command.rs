//! The camera's complete interactive vocabulary.
//!
//! Pointer gestures, key presses, and resize notifications all arrive at the
//! camera as a `CameraCommand`, passed to
//! [`VirtualCamera::execute`](super::VirtualCamera::execute).

use glam::Vec2;

/// A discrete or parameterized camera operation.
///
/// ```ignore
/// camera.execute(CameraCommand::StartDrag { point: Vec2::new(400.0, 300.0) });
/// camera.execute(CameraCommand::Zoom { amount: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Begin an arcball drag at `point` (viewport pixels).
    StartDrag {
        /// Pointer position in viewport pixels.
        point: Vec2,
    },
    /// Continue the active drag to `point` (viewport pixels).
    DragTo {
        /// Pointer position in viewport pixels.
        point: Vec2,
    },
    /// Release the active drag.
    EndDrag,
    /// Move the eye along the viewing axis (positive = closer).
    Zoom {
        /// Scroll amount.
        amount: f32,
    },
    /// The viewport changed size.
    Resize {
        /// New viewport size in pixels.
        size: Vec2,
    },
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Return to the initial orientation and distance.
    Reset,
}
