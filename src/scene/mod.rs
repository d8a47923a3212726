//! Geometry handed to the renderer: vertex format, CPU-side meshes, and
//! the trait external tessellators implement.
//!
//! The viewer only ever draws two meshes (the textured sphere and the
//! skybox box). Building them is left to a [`MeshSource`]; this module
//! fixes the shape of what such a source must produce.

mod mesh;

pub use mesh::{MeshData, MeshId, MeshSource, Vertex};
