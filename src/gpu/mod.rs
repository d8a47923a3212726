//! GPU resource helpers: static mesh buffers and typed uniform buffers.

/// Vertex/index buffers uploaded from [`MeshData`](crate::scene::MeshData).
pub mod mesh_buffers;
/// Typed uniform buffer wrapper.
pub mod uniform_buffer;

pub use mesh_buffers::GpuMesh;
pub use uniform_buffer::UniformBuffer;
