//! Input handling: platform-agnostic event types and the processor that
//! turns them into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use processor::InputProcessor;
