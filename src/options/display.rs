use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which way the textured sphere's surface is wound.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FaceCulling {
    /// Draw front faces only.
    #[default]
    Back,
    /// Draw both sides (useful when inspecting the inside of the sphere).
    None,
}

impl FaceCulling {
    /// The wgpu cull mode a pipeline for this setting should use.
    #[must_use]
    pub fn cull_mode(self) -> Option<wgpu::Face> {
        match self {
            Self::Back => Some(wgpu::Face::Back),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// What gets drawn each frame and at what size.
pub struct DisplayOptions {
    /// Draw the environment box around the scene.
    #[schemars(title = "Show Skybox")]
    pub show_skybox: bool,
    /// Uniform scale applied to the skybox model matrix.
    #[schemars(skip)]
    pub skybox_scale: f32,
    /// Uniform scale applied to the textured sphere's model matrix.
    #[schemars(title = "Sphere Scale", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub sphere_scale: f32,
    /// Face culling for the textured sphere.
    #[schemars(title = "Face Culling")]
    pub culling: FaceCulling,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_skybox: true,
            skybox_scale: 50.0,
            sphere_scale: 1.0,
            culling: FaceCulling::Back,
        }
    }
}
