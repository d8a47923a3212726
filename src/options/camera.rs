use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, zoom limits, and motion parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye distance from the origin at construction and after a reset.
    #[schemars(title = "Initial Distance", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub initial_distance: f32,
    /// Closest the eye may get to the look-at target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the eye may get from the look-at target.
    #[schemars(skip)]
    pub max_distance: f32,
    /// World units of eye travel per unit of scroll.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub radius_scale: f32,
    /// Keep spinning after a drag is released.
    #[schemars(title = "Momentum")]
    pub momentum: bool,
    /// Exponential decay rate of release momentum, per second.
    #[schemars(title = "Momentum Damping", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub momentum_damping: f32,
    /// Turntable speed in radians per second while auto-rotation is on.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 100.0,
            initial_distance: 3.0,
            min_distance: 1.2,
            max_distance: 20.0,
            radius_scale: 0.5,
            momentum: true,
            momentum_damping: 4.0,
            auto_rotate_speed: 0.4,
        }
    }
}

impl CameraOptions {
    /// Distance limits as a `(min, max)` pair that is safe to clamp with.
    ///
    /// The minimum is forced strictly positive and the maximum is never
    /// below it, whatever a preset file says.
    #[must_use]
    pub fn distance_limits(&self) -> (f32, f32) {
        let min = if self.min_distance.is_finite() && self.min_distance > 0.0 {
            self.min_distance
        } else {
            Self::default().min_distance
        };
        let max = if self.max_distance.is_finite() {
            self.max_distance.max(min)
        } else {
            Self::default().max_distance.max(min)
        };
        (min, max)
    }
}
