//! Drag-session bookkeeping for the arcball gesture state machine.

use glam::{Quat, Vec2, Vec3};

use super::momentum::AngularVelocity;

/// A drag that has been still for longer than this (seconds) at release
/// leaves no momentum behind.
const RELEASE_WINDOW: f32 = 0.1;

/// State captured when a drag starts, plus the running velocity estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    /// Pointer position (viewport pixels) at gesture start.
    pub(crate) start_point: Vec2,
    /// Arcball projection of `start_point` at gesture start.
    pub(crate) start_vector: Vec3,
    /// Orientation snapshot every `drag_to` is composed against.
    pub(crate) start_orientation: Quat,
    /// Orientation at the last velocity sample.
    sample_orientation: Quat,
    /// Seconds of frame time since the last velocity sample.
    since_sample: f32,
    velocity: Option<AngularVelocity>,
}

impl DragSession {
    pub(crate) fn new(start_point: Vec2, start_vector: Vec3, orientation: Quat) -> Self {
        Self {
            start_point,
            start_vector,
            start_orientation: orientation,
            sample_orientation: orientation,
            since_sample: 0.0,
            velocity: None,
        }
    }

    /// Frame time passed while the pointer was held.
    pub(crate) fn advance(&mut self, dt: f32) {
        self.since_sample += dt;
    }

    /// Record the orientation reached by a `drag_to`.
    ///
    /// Several pointer events can arrive inside one frame; until frame time
    /// has passed the sample anchor stays put, so the next estimate spans
    /// all of them.
    pub(crate) fn record(&mut self, orientation: Quat) {
        if self.since_sample <= 0.0 {
            return;
        }
        let delta = orientation * self.sample_orientation.inverse();
        self.velocity = AngularVelocity::from_delta(delta, self.since_sample);
        self.sample_orientation = orientation;
        self.since_sample = 0.0;
    }

    /// Velocity to hand to momentum on release, if the pointer was still
    /// moving.
    pub(crate) fn release_velocity(&self) -> Option<AngularVelocity> {
        if self.since_sample > RELEASE_WINDOW {
            return None;
        }
        self.velocity
    }
}

/// Arcball gesture state. At most one session exists at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Gesture {
    /// No pointer held.
    #[default]
    Idle,
    /// Rotation drag in progress.
    Dragging(DragSession),
}

impl Gesture {
    pub(crate) fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// End the current session, returning it.
    pub(crate) fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DragSession {
        DragSession::new(Vec2::new(10.0, 20.0), Vec3::Z, Quat::IDENTITY)
    }

    #[test]
    fn no_velocity_without_frame_time() {
        let mut s = session();
        s.record(Quat::from_rotation_y(0.5));
        assert!(s.release_velocity().is_none());
    }

    #[test]
    fn events_without_frame_time_keep_the_sample_anchor() {
        let mut s = session();
        s.advance(0.1);
        s.record(Quat::from_rotation_y(0.1));
        s.advance(0.05);
        s.record(Quat::from_rotation_y(0.2));
        // Same frame: anchor must not move.
        s.record(Quat::from_rotation_y(0.3));
        let v = s.release_velocity().unwrap();
        assert!((v.axis - Vec3::Y).length() < 1e-4);
        assert!((v.speed - 2.0).abs() < 1e-3, "speed {}", v.speed);
    }

    #[test]
    fn held_still_pointer_releases_without_velocity() {
        let mut s = session();
        s.advance(0.016);
        s.record(Quat::from_rotation_x(0.2));
        assert!(s.release_velocity().is_some());
        s.advance(0.5);
        assert!(s.release_velocity().is_none());
    }

    #[test]
    fn take_returns_session_once() {
        let mut g = Gesture::Dragging(session());
        assert!(g.session().is_some());
        assert!(g.take().is_some());
        assert_eq!(g, Gesture::Idle);
        assert!(g.take().is_none());
    }
}
