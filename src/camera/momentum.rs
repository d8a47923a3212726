//! Time-based camera motion: release momentum and turntable auto-rotation.

use glam::{Quat, Vec3};

/// Spin speed (rad/s) below which momentum stops.
const STOP_SPEED: f32 = 0.01;

/// Release speeds are clamped to this many rad/s.
pub(crate) const MAX_SPEED: f32 = 4.0 * std::f32::consts::PI;

/// Rotation rate about a world-space axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularVelocity {
    /// Unit rotation axis in world space.
    pub axis: Vec3,
    /// Speed in radians per second, non-negative.
    pub speed: f32,
}

impl AngularVelocity {
    /// Velocity that carries `delta` over `elapsed` seconds.
    ///
    /// Returns `None` for a zero rotation, a non-positive interval, or any
    /// non-finite intermediate.
    pub(crate) fn from_delta(delta: Quat, elapsed: f32) -> Option<Self> {
        if elapsed <= 0.0 || !elapsed.is_finite() {
            return None;
        }
        // Keep w ≥ 0 so the axis-angle decomposition is the short way round.
        let delta = if delta.w < 0.0 { -delta } else { delta };
        let (axis, angle) = delta.to_axis_angle();
        let speed = (angle / elapsed).min(MAX_SPEED);
        if !axis.is_finite() || !speed.is_finite() || speed < STOP_SPEED {
            return None;
        }
        Some(Self {
            axis: axis.normalize(),
            speed,
        })
    }
}

/// Decaying spin left over after a drag is released.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Momentum {
    velocity: Option<AngularVelocity>,
}

impl Momentum {
    /// Start spinning with the given velocity.
    pub(crate) fn launch(&mut self, velocity: AngularVelocity) {
        self.velocity = Some(velocity);
    }

    /// Stop spinning immediately.
    pub(crate) fn stop(&mut self) {
        self.velocity = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.velocity.is_some()
    }

    pub(crate) fn velocity(&self) -> Option<AngularVelocity> {
        self.velocity
    }

    /// Advance by `dt` seconds and return the world-space rotation covered.
    ///
    /// The speed decays by `exp(-damping * dt)`, clamped to `[0, 1]` so a
    /// huge step can only bring the spin to rest, never reverse it. The
    /// angle covered is the integral of the decaying speed over the step,
    /// which is bounded by `speed / damping` however long the step is.
    pub(crate) fn step(&mut self, dt: f32, damping: f32) -> Option<Quat> {
        let velocity = self.velocity.as_mut()?;
        let damping = damping.max(0.0);
        let decay = (-damping * dt).exp().clamp(0.0, 1.0);
        let angle = if damping > 0.0 {
            velocity.speed * (1.0 - decay) / damping
        } else {
            velocity.speed * dt
        };
        let rotation = Quat::from_axis_angle(velocity.axis, angle);

        velocity.speed *= decay;
        if velocity.speed < STOP_SPEED || !velocity.speed.is_finite() {
            self.velocity = None;
        }
        Some(rotation)
    }
}

/// Rotation about world +Y covered by a turntable spinning at `speed` rad/s
/// for `dt` seconds.
pub(crate) fn turntable_step(speed: f32, dt: f32) -> Option<Quat> {
    let angle = speed * dt;
    if angle == 0.0 || !angle.is_finite() {
        return None;
    }
    Some(Quat::from_rotation_y(angle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_from_quarter_turn_over_half_second() {
        let delta = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let v = AngularVelocity::from_delta(delta, 0.5).unwrap();
        assert!((v.axis - Vec3::Y).length() < 1e-4);
        assert!((v.speed - std::f32::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn velocity_needs_elapsed_time_and_motion() {
        let delta = Quat::from_rotation_x(0.3);
        assert!(AngularVelocity::from_delta(delta, 0.0).is_none());
        assert!(AngularVelocity::from_delta(delta, -1.0).is_none());
        assert!(AngularVelocity::from_delta(Quat::IDENTITY, 0.1).is_none());
    }

    #[test]
    fn velocity_is_clamped() {
        let delta = Quat::from_rotation_z(3.0);
        let v = AngularVelocity::from_delta(delta, 1e-4).unwrap();
        assert_eq!(v.speed, MAX_SPEED);
    }

    #[test]
    fn momentum_decays_to_rest() {
        let mut m = Momentum::default();
        m.launch(AngularVelocity {
            axis: Vec3::Y,
            speed: 2.0,
        });
        let mut steps = 0;
        while m.is_active() {
            assert!(m.step(1.0 / 60.0, 4.0).is_some());
            steps += 1;
            assert!(steps < 10_000, "momentum never settled");
        }
        assert!(m.step(1.0 / 60.0, 4.0).is_none());
    }

    #[test]
    fn huge_step_does_not_overshoot_decay() {
        let mut m = Momentum::default();
        m.launch(AngularVelocity {
            axis: Vec3::X,
            speed: 1.0,
        });
        let q = m.step(1.0e6, 4.0).unwrap();
        assert!(!m.is_active());
        // Total coast is speed / damping = 0.25 rad.
        assert!((q.angle_between(Quat::IDENTITY) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn zero_damping_keeps_spinning() {
        let mut m = Momentum::default();
        m.launch(AngularVelocity {
            axis: Vec3::X,
            speed: 1.0,
        });
        let _ = m.step(0.5, 0.0);
        assert_eq!(m.velocity().map(|v| v.speed), Some(1.0));
    }

    #[test]
    fn turntable_rotates_about_world_up() {
        let q = turntable_step(1.0, 0.5).unwrap();
        let (axis, angle) = q.to_axis_angle();
        assert!((axis - Vec3::Y).length() < 1e-4);
        assert!((angle - 0.5).abs() < 1e-4);
        assert!(turntable_step(0.0, 0.5).is_none());
    }
}
