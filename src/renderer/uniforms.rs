use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection for the given camera options (fovy in degrees) and
    /// viewport aspect ratio.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            fovy: options.fovy.to_radians(),
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Track a new viewport aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Right-handed perspective matrix with a `[0, 1]` depth range.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Transform block for the textured sphere pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    /// Eye-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Object-to-world transform.
    pub model: [[f32; 4]; 4],
}

impl Uniforms {
    /// Pack the three matrices for upload.
    #[must_use]
    pub fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }
}

/// Transform block for the skybox pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceParams {
    /// Object-to-clip transform with the eye translation removed.
    pub view_projection: [[f32; 4]; 4],
}

impl InstanceParams {
    /// Skybox transform: only the rotational part of `view` is kept, so the
    /// box stays centred on the eye however far it zooms.
    #[must_use]
    pub fn skybox(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        let rotation = Mat4::from_mat3(Mat3::from_mat4(view));
        Self {
            view_projection: (projection * rotation * model).to_cols_array_2d(),
        }
    }
}
