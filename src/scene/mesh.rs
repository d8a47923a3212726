use bytemuck::{Pod, Zeroable};

use crate::error::OrbviewError;

/// Interleaved vertex shared by the sphere and skybox pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl Vertex {
    /// Vertex buffer layout matching the field order above.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0, // position
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1, // normal
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2, // uv
            },
        ],
    };

    /// Vertex from its three attributes.
    #[must_use]
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Indexed triangle list on the CPU, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex array.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of indices, as wgpu wants it for `draw_indexed`.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Check that the mesh is a drawable triangle list.
    ///
    /// Rejects empty meshes, index counts that are not a multiple of three,
    /// indices past the end of the vertex array, and non-finite positions.
    pub fn validate(&self) -> Result<(), OrbviewError> {
        if self.vertices.is_empty() || self.indices.is_empty() {
            return Err(OrbviewError::InvalidMesh("mesh is empty".into()));
        }
        if self.indices.len() % 3 != 0 {
            return Err(OrbviewError::InvalidMesh(format!(
                "{} indices do not form whole triangles",
                self.indices.len()
            )));
        }
        let vertex_count = self.vertices.len();
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(OrbviewError::InvalidMesh(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }
        if let Some(pos) = self
            .vertices
            .iter()
            .position(|v| v.position.iter().any(|c| !c.is_finite()))
        {
            return Err(OrbviewError::InvalidMesh(format!(
                "vertex {pos} has a non-finite position"
            )));
        }
        Ok(())
    }
}

/// Handle the renderer uses to refer to an uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

/// Producer of mesh geometry (a sphere tessellator, a cube builder, a file
/// loader).
pub trait MeshSource {
    /// Build the mesh on the CPU.
    fn mesh_data(&self) -> MeshData;

    /// Debug label for the GPU buffers made from this mesh.
    fn label(&self) -> &str {
        "mesh"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-triangle quad in the XY plane.
    struct Quad;

    impl MeshSource for Quad {
        fn mesh_data(&self) -> MeshData {
            let n = [0.0, 0.0, 1.0];
            MeshData {
                vertices: vec![
                    Vertex::new([-1.0, -1.0, 0.0], n, [0.0, 1.0]),
                    Vertex::new([1.0, -1.0, 0.0], n, [1.0, 1.0]),
                    Vertex::new([1.0, 1.0, 0.0], n, [1.0, 0.0]),
                    Vertex::new([-1.0, 1.0, 0.0], n, [0.0, 0.0]),
                ],
                indices: vec![0, 1, 2, 0, 2, 3],
            }
        }

        fn label(&self) -> &str {
            "quad"
        }
    }

    #[test]
    fn layout_matches_vertex_size() {
        assert_eq!(size_of::<Vertex>(), 32);
        assert_eq!(Vertex::LAYOUT.array_stride, 32);
        assert_eq!(Vertex::LAYOUT.attributes.len(), 3);
    }

    #[test]
    fn provider_mesh_validates() {
        let mesh = Quad.mesh_data();
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(Quad.label(), "quad");
    }

    #[test]
    fn validation_rejects_broken_meshes() {
        let mut mesh = Quad.mesh_data();
        mesh.indices.push(0);
        assert!(matches!(mesh.validate(), Err(OrbviewError::InvalidMesh(_))));

        let mut mesh = Quad.mesh_data();
        mesh.indices[4] = 9;
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("index 9"));

        let mut mesh = Quad.mesh_data();
        mesh.vertices[2].position[1] = f32::NAN;
        assert!(mesh.validate().is_err());

        assert!(MeshData::default().validate().is_err());
    }
}
