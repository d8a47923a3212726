use glam::{Mat4, Vec3};

use super::uniforms::{InstanceParams, Projection, Uniforms};
use crate::camera::VirtualCamera;
use crate::options::DisplayOptions;
use crate::scene::MeshId;

/// How an object is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Lit, textured mesh placed in the world.
    Textured,
    /// Environment box drawn around the eye.
    Skybox,
}

/// One drawable in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Uploaded mesh to draw.
    pub mesh: MeshId,
    /// Object-to-world transform before display scaling.
    pub model: Mat4,
    /// Pipeline to draw it with.
    pub kind: ObjectKind,
}

impl SceneObject {
    /// Textured object at the origin.
    #[must_use]
    pub fn textured(mesh: MeshId) -> Self {
        Self {
            mesh,
            model: Mat4::IDENTITY,
            kind: ObjectKind::Textured,
        }
    }

    /// Skybox centred on the eye.
    #[must_use]
    pub fn skybox(mesh: MeshId) -> Self {
        Self {
            mesh,
            model: Mat4::IDENTITY,
            kind: ObjectKind::Skybox,
        }
    }
}

/// Receiver of planned draws. Implemented by whatever owns the pipelines
/// and the render pass.
pub trait DrawSink {
    /// Draw `mesh` with the textured pipeline.
    fn draw_textured(&mut self, mesh: MeshId, uniforms: &Uniforms);
    /// Draw `mesh` with the skybox pipeline.
    fn draw_skybox(&mut self, mesh: MeshId, params: &InstanceParams);
}

/// Builds each frame's draw list from the camera state.
#[derive(Debug, Clone, Default)]
pub struct FramePlanner {
    display: DisplayOptions,
}

impl FramePlanner {
    /// Planner honouring the given display options.
    #[must_use]
    pub fn new(display: DisplayOptions) -> Self {
        Self { display }
    }

    /// Current display options.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Replace the display options used for subsequent frames.
    pub fn set_display(&mut self, display: DisplayOptions) {
        self.display = display;
    }

    /// Emit one draw per visible object.
    ///
    /// The view matrix is read once, so every draw in the frame sees the
    /// same camera. Skyboxes go first so the scene draws over them.
    pub fn plan<S: DrawSink + ?Sized>(
        &self,
        camera: &VirtualCamera,
        projection: &Projection,
        objects: &[SceneObject],
        sink: &mut S,
    ) {
        let view = camera.view_matrix();
        let proj = projection.matrix();

        if self.display.show_skybox {
            let scale = Mat4::from_scale(Vec3::splat(self.display.skybox_scale));
            for object in objects.iter().filter(|o| o.kind == ObjectKind::Skybox) {
                let params = InstanceParams::skybox(proj, view, object.model * scale);
                sink.draw_skybox(object.mesh, &params);
            }
        }

        let scale = Mat4::from_scale(Vec3::splat(self.display.sphere_scale));
        for object in objects.iter().filter(|o| o.kind == ObjectKind::Textured) {
            let uniforms = Uniforms::new(proj, view, object.model * scale);
            sink.draw_textured(object.mesh, &uniforms);
        }
        log::trace!("planned frame with {} objects", objects.len());
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Draw {
        Textured(MeshId, Uniforms),
        Skybox(MeshId, InstanceParams),
    }

    #[derive(Default)]
    struct Recorder(Vec<Draw>);

    impl DrawSink for Recorder {
        fn draw_textured(&mut self, mesh: MeshId, uniforms: &Uniforms) {
            self.0.push(Draw::Textured(mesh, *uniforms));
        }

        fn draw_skybox(&mut self, mesh: MeshId, params: &InstanceParams) {
            self.0.push(Draw::Skybox(mesh, *params));
        }
    }

    fn scene() -> [SceneObject; 2] {
        [SceneObject::textured(MeshId(0)), SceneObject::skybox(MeshId(1))]
    }

    #[test]
    fn skybox_is_drawn_before_the_sphere() {
        let camera = VirtualCamera::new(Vec2::new(800.0, 600.0));
        let projection = Projection::from_options(camera.options(), camera.aspect());
        let mut sink = Recorder::default();
        FramePlanner::default().plan(&camera, &projection, &scene(), &mut sink);

        assert_eq!(sink.0.len(), 2);
        assert!(matches!(sink.0[0], Draw::Skybox(MeshId(1), _)));
        let Draw::Textured(mesh, uniforms) = &sink.0[1] else {
            panic!("expected a textured draw, got {:?}", sink.0[1]);
        };
        assert_eq!(*mesh, MeshId(0));
        assert_eq!(uniforms.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniforms.projection, projection.matrix().to_cols_array_2d());
    }

    #[test]
    fn hidden_skybox_is_skipped() {
        let camera = VirtualCamera::new(Vec2::new(640.0, 480.0));
        let projection = Projection::from_options(camera.options(), camera.aspect());
        let display = DisplayOptions {
            show_skybox: false,
            ..DisplayOptions::default()
        };
        let mut sink = Recorder::default();
        FramePlanner::new(display).plan(&camera, &projection, &scene(), &mut sink);
        assert_eq!(sink.0.len(), 1);
        assert!(matches!(sink.0[0], Draw::Textured(..)));
    }

    #[test]
    fn sphere_scale_reaches_the_model_matrix() {
        let camera = VirtualCamera::new(Vec2::new(640.0, 480.0));
        let projection = Projection::from_options(camera.options(), camera.aspect());
        let display = DisplayOptions {
            sphere_scale: 2.0,
            ..DisplayOptions::default()
        };
        let mut sink = Recorder::default();
        let objects = [SceneObject::textured(MeshId(3))];
        FramePlanner::new(display).plan(&camera, &projection, &objects, &mut sink);
        let Draw::Textured(_, uniforms) = &sink.0[0] else {
            panic!("expected a textured draw");
        };
        let model = Mat4::from_cols_array_2d(&uniforms.model);
        assert!(model.abs_diff_eq(Mat4::from_scale(Vec3::splat(2.0)), 1e-6));
    }

    #[test]
    fn zoom_does_not_move_the_skybox() {
        let mut camera = VirtualCamera::new(Vec2::new(800.0, 600.0));
        let projection = Projection::from_options(camera.options(), camera.aspect());
        let objects = [SceneObject::skybox(MeshId(1))];
        let planner = FramePlanner::default();

        let mut before = Recorder::default();
        planner.plan(&camera, &projection, &objects, &mut before);
        camera.zoom(-5.0);
        let mut after = Recorder::default();
        planner.plan(&camera, &projection, &objects, &mut after);
        assert_eq!(before.0, after.0);
    }
}
