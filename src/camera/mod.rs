//! Arcball camera for orbiting a single object at the origin.
//!
//! Drag gestures rotate the view as if the pointer were grabbing a virtual
//! trackball, scroll moves the eye along the viewing axis, and released
//! drags can keep coasting. All of it is driven through
//! [`VirtualCamera`], either by calling its methods directly or by feeding
//! it [`CameraCommand`]s.

/// Pointer-to-sphere projection and shortest-arc rotations.
pub mod arcball;
/// Camera command vocabulary.
pub mod command;
mod gesture;
mod momentum;
/// The arcball camera itself.
pub mod virtual_camera;

pub use command::CameraCommand;
pub use momentum::AngularVelocity;
pub use virtual_camera::VirtualCamera;
