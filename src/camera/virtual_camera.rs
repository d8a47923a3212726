use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use super::arcball::{project_to_sphere, rotation_between};
use super::command::CameraCommand;
use super::gesture::{DragSession, Gesture};
use super::momentum::{turntable_step, AngularVelocity, Momentum};
use crate::options::CameraOptions;

/// Arcball camera orbiting the origin.
///
/// The eye sits at `orientation * (0, 0, distance)` and always looks at the
/// origin. Every mutating call renormalizes `orientation` and recomputes
/// `position`, `euler_angles`, and `view_matrix` before returning, so the
/// accessors never observe stale or NaN state.
///
/// Input that cannot be used (non-finite pointer coordinates, negative
/// durations, a drag call with no drag in progress) is ignored and leaves
/// the camera exactly as it was.
#[derive(Debug, Clone)]
pub struct VirtualCamera {
    position: Vec3,
    orientation: Quat,
    euler_angles: Vec3,
    view_matrix: Mat4,
    screen_size: Vec2,
    distance: f32,

    gesture: Gesture,
    momentum: Momentum,
    auto_rotate: bool,

    options: CameraOptions,
}

impl VirtualCamera {
    /// Camera with default options for a viewport of `screen_size` pixels.
    #[must_use]
    pub fn new(screen_size: Vec2) -> Self {
        Self::with_options(screen_size, &CameraOptions::default())
    }

    /// Camera looking at the origin from +Z at the configured initial
    /// distance.
    ///
    /// A degenerate `screen_size` is replaced by a 1-pixel dimension on the
    /// offending axis; the camera is always usable.
    #[must_use]
    pub fn with_options(screen_size: Vec2, options: &CameraOptions) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            euler_angles: Vec3::ZERO,
            view_matrix: Mat4::IDENTITY,
            screen_size: sanitize_screen_size(screen_size),
            distance: 1.0,
            gesture: Gesture::Idle,
            momentum: Momentum::default(),
            auto_rotate: false,
            options: options.clone(),
        };
        camera.distance = camera.initial_distance();
        let _ = camera.commit(Quat::IDENTITY, camera.distance);
        camera
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit rotation of the camera frame relative to the reference frame.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// `orientation` as (pitch, yaw, roll): rotation about X, Y, Z in
    /// radians, applied yaw first.
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        self.euler_angles
    }

    /// World-to-eye transform, the inverse of `T(position) · R(orientation)`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    /// Viewport size in pixels; both components strictly positive.
    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.screen_size.x / self.screen_size.y
    }

    /// Eye distance from the look-at target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Unit viewing direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Whether an arcball drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.session().is_some()
    }

    /// Pointer position the active drag started from.
    #[must_use]
    pub fn drag_start(&self) -> Option<Vec2> {
        self.gesture.session().map(|s| s.start_point)
    }

    /// Whether turntable auto-rotation is on.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Current release momentum, if the camera is still coasting.
    #[must_use]
    pub fn momentum(&self) -> Option<AngularVelocity> {
        self.momentum.velocity()
    }

    /// Whether release momentum is still turning the camera. Hosts that
    /// render on demand keep requesting frames while this (or auto-rotate)
    /// is on.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.momentum.is_active()
    }

    /// Options the camera was configured with.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// Track a new viewport size. Only future pointer projections change;
    /// an active drag keeps its start vector and current orientation.
    pub fn resize(&mut self, new_size: Vec2) {
        self.screen_size = sanitize_screen_size(new_size);
        log::trace!("camera resized to {:?}", self.screen_size);
    }

    /// Apply new options, re-clamping the distance to the new limits.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = options.clone();
        if !self.options.momentum {
            self.momentum.stop();
        }
        let (min, max) = self.options.distance_limits();
        let _ = self.commit(self.orientation, self.distance.clamp(min, max));
    }

    /// Turn auto-rotation on or off.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Flip auto-rotation and return the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Back to identity orientation at the initial distance. Ends any drag
    /// and stops momentum.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.momentum.stop();
        let _ = self.commit(Quat::IDENTITY, self.initial_distance());
    }

    // ── Gestures ─────────────────────────────────────────────────────────

    /// Begin an arcball drag at `point` (viewport pixels).
    ///
    /// Ignored while a drag is already active: the running session keeps
    /// its start snapshot.
    pub fn start_drag(&mut self, point: Vec2) {
        if !point.is_finite() {
            log::debug!("start_drag ignored: non-finite point {point:?}");
            return;
        }
        if self.is_dragging() {
            log::debug!("start_drag ignored: drag already in progress");
            return;
        }
        let start_vector = project_to_sphere(point, self.screen_size);
        self.gesture = Gesture::Dragging(DragSession::new(
            point,
            start_vector,
            self.orientation,
        ));
        self.momentum.stop();
    }

    /// Continue the active drag to `point` (viewport pixels).
    ///
    /// The rotation is always rebuilt from the session's start snapshot,
    /// never accumulated event by event.
    pub fn drag_to(&mut self, point: Vec2) {
        if !point.is_finite() {
            log::debug!("drag_to ignored: non-finite point {point:?}");
            return;
        }
        let Some(session) = self.gesture.session() else {
            log::debug!("drag_to ignored: no drag in progress");
            return;
        };
        // Sphere vectors live in the camera frame; take the arc in world
        // space so the drag follows the view the user sees.
        let frame = session.start_orientation;
        let current = project_to_sphere(point, self.screen_size);
        let delta = rotation_between(frame * session.start_vector, frame * current);
        let orientation = (delta * frame).normalize();

        if self.commit(orientation, self.distance) {
            if let Some(session) = self.gesture.session_mut() {
                session.record(self.orientation);
            }
        }
    }

    /// Release the active drag. The orientation reached by the last
    /// [`drag_to`](Self::drag_to) becomes the resting orientation; if the
    /// pointer was still moving and momentum is enabled, the camera keeps
    /// coasting during subsequent [`update`](Self::update) calls.
    pub fn end_drag(&mut self) {
        let Some(session) = self.gesture.take() else {
            log::debug!("end_drag ignored: no drag in progress");
            return;
        };
        if self.options.momentum {
            if let Some(velocity) = session.release_velocity() {
                log::trace!("releasing with {velocity:?}");
                self.momentum.launch(velocity);
            }
        }
    }

    /// Move the eye along the viewing axis by `amount * radius_scale`
    /// (positive = closer), clamped to the configured distance limits.
    pub fn zoom(&mut self, amount: f32) {
        if !amount.is_finite() {
            log::debug!("zoom ignored: non-finite amount {amount}");
            return;
        }
        let (min, max) = self.options.distance_limits();
        let distance = (self.distance - amount * self.radius_scale()).clamp(min, max);
        let _ = self.commit(self.orientation, distance);
    }

    // ── Per-frame ────────────────────────────────────────────────────────

    /// Advance time-based motion by `duration` seconds.
    ///
    /// While dragging, only feeds the release-velocity estimate. While idle,
    /// applies release momentum and auto-rotation. Zero, negative, and
    /// non-finite durations are no-ops.
    pub fn update(&mut self, duration: f32) {
        if duration <= 0.0 || !duration.is_finite() {
            return;
        }
        if let Some(session) = self.gesture.session_mut() {
            session.advance(duration);
            return;
        }

        let mut orientation = self.orientation;
        let mut changed = false;
        if let Some(spin) = self.momentum.step(duration, self.options.momentum_damping) {
            orientation = spin * orientation;
            changed = true;
        }
        if self.auto_rotate {
            if let Some(turn) = turntable_step(self.options.auto_rotate_speed, duration) {
                orientation = turn * orientation;
                changed = true;
            }
        }
        if changed && !self.commit(orientation.normalize(), self.distance) {
            self.momentum.stop();
        }
    }

    /// Run one [`CameraCommand`].
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::StartDrag { point } => self.start_drag(point),
            CameraCommand::DragTo { point } => self.drag_to(point),
            CameraCommand::EndDrag => self.end_drag(),
            CameraCommand::Zoom { amount } => self.zoom(amount),
            CameraCommand::Resize { size } => self.resize(size),
            CameraCommand::ToggleAutoRotate => {
                let _ = self.toggle_auto_rotate();
            }
            CameraCommand::Reset => self.reset(),
        }
    }

    // ── Move-style names ─────────────────────────────────────────────────
    //
    // Hosts written against the start/move/end vocabulary drive the same
    // state machine through these.

    /// Same as [`start_drag`](Self::start_drag).
    pub fn start_move(&mut self, point: Vec2) {
        self.start_drag(point);
    }

    /// Same as [`drag_to`](Self::drag_to).
    pub fn move_to_point(&mut self, point: Vec2) {
        self.drag_to(point);
    }

    /// Same as [`end_drag`](Self::end_drag).
    pub fn end_move(&mut self) {
        self.end_drag();
    }

    /// Same as [`is_dragging`](Self::is_dragging).
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.is_dragging()
    }

    /// Same as [`zoom`](Self::zoom).
    pub fn scroll(&mut self, amount: f32) {
        self.zoom(amount);
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn initial_distance(&self) -> f32 {
        let (min, max) = self.options.distance_limits();
        let initial = self.options.initial_distance;
        if initial.is_finite() {
            initial.clamp(min, max)
        } else {
            min
        }
    }

    fn radius_scale(&self) -> f32 {
        let scale = self.options.radius_scale;
        if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            CameraOptions::default().radius_scale
        }
    }

    /// Install a new orientation and distance and rebuild every derived
    /// field. Returns `false` (and changes nothing) if the result would not
    /// be finite.
    fn commit(&mut self, orientation: Quat, distance: f32) -> bool {
        let orientation = orientation.normalize();
        let position = orientation * Vec3::new(0.0, 0.0, distance);
        // Inverse of a rigid transform: R⁻¹ · T(-p).
        let view_matrix = Mat4::from_quat(orientation.conjugate())
            * Mat4::from_translation(-position);

        if !orientation.is_finite() || !view_matrix.is_finite() {
            log::debug!("camera update rejected: non-finite result");
            return false;
        }

        let (yaw, pitch, roll) = orientation.to_euler(EulerRot::YXZ);
        self.orientation = orientation;
        self.distance = distance;
        self.position = position;
        self.euler_angles = Vec3::new(pitch, yaw, roll);
        self.view_matrix = view_matrix;
        true
    }
}

/// Replace any non-finite or non-positive dimension with 1 pixel.
fn sanitize_screen_size(size: Vec2) -> Vec2 {
    let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 1.0 };
    let sanitized = Vec2::new(fix(size.x), fix(size.y));
    if sanitized != size {
        log::debug!("degenerate screen size {size:?} replaced by {sanitized:?}");
    }
    sanitized
}
