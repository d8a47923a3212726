//! Per-frame rendering contract between the camera and the GPU.
//!
//! Nothing here touches a device: [`FramePlanner`] turns the camera and a
//! list of [`SceneObject`]s into uniform blocks and hands them, one draw at
//! a time, to a host-provided [`DrawSink`] that owns the pipelines.

mod frame;
mod uniforms;

pub use frame::{DrawSink, FramePlanner, ObjectKind, SceneObject};
pub use uniforms::{InstanceParams, Projection, Uniforms};
