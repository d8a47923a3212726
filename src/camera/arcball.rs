//! Arcball (trackball) math: screen-to-sphere projection and shortest-arc
//! rotation between two unit vectors.
//!
//! A pointer position in viewport pixels is lifted onto a virtual unit sphere
//! centered on the viewport. Two such points define the rotation that a drag
//! gesture applies.

use glam::{Quat, Vec2, Vec3};

/// Dot-product tolerance below which two unit vectors count as parallel or
/// anti-parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Shortest-arc unit quaternion that rotates `from` onto `to`.
///
/// Both inputs are expected to be unit length; they are normalized again so
/// slightly drifted inputs still produce a unit result. Zero-length or
/// non-finite inputs yield [`Quat::IDENTITY`].
///
/// Nearly parallel vectors give the identity. Nearly anti-parallel vectors
/// give a half turn about an axis perpendicular to `from`.
#[must_use]
pub fn rotation_between(from: Vec3, to: Vec3) -> Quat {
    let from = from.normalize_or_zero();
    let to = to.normalize_or_zero();
    if from == Vec3::ZERO || to == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let d = from.dot(to);
    if d >= 1.0 - PARALLEL_EPSILON {
        return Quat::IDENTITY;
    }
    if d <= -1.0 + PARALLEL_EPSILON {
        let axis = from.any_orthonormal_vector();
        return Quat::from_axis_angle(axis, std::f32::consts::PI);
    }

    // Half-angle form: w = cos(θ/2) = s/2, xyz = axis·sin(θ/2) = cross/s
    // where s = sqrt(2(1 + cos θ)).
    let axis = from.cross(to);
    let s = (2.0 * (1.0 + d)).sqrt();
    let inv_s = 1.0 / s;
    Quat::from_xyzw(axis.x * inv_s, axis.y * inv_s, axis.z * inv_s, s * 0.5)
        .normalize()
}

/// Map a pointer position in viewport pixels to normalized device
/// coordinates in `[-1, 1]²`, +Y up.
///
/// `screen_size` must be strictly positive; the camera guarantees this.
#[must_use]
pub fn to_normalized(point: Vec2, screen_size: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * point.x / screen_size.x - 1.0,
        1.0 - 2.0 * point.y / screen_size.y,
    )
}

/// Lift a pointer position onto the unit arcball sphere.
///
/// Inside the sphere's silhouette the point sits on the front hemisphere
/// (`z = sqrt(1 - r²)`). Outside it is pulled onto the rim (`z = 0`), so a
/// drag that leaves the sphere still has a well-defined rotation axis.
#[must_use]
pub fn project_to_sphere(point: Vec2, screen_size: Vec2) -> Vec3 {
    let ndc = to_normalized(point, screen_size);
    let r2 = ndc.length_squared();
    if r2 <= 1.0 {
        Vec3::new(ndc.x, ndc.y, (1.0 - r2).sqrt())
    } else {
        let rim = ndc / r2.sqrt();
        Vec3::new(rim.x, rim.y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn identical_vectors_give_identity() {
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, 2.0, 3.0).normalize()]
        {
            let q = rotation_between(v, v);
            assert!(q.abs_diff_eq(Quat::IDENTITY, EPS), "{q:?}");
        }
    }

    #[test]
    fn opposite_vectors_give_half_turn_about_perpendicular_axis() {
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(-0.3, 0.5, 0.8).normalize()]
        {
            let q = rotation_between(v, -v);
            let (axis, angle) = q.to_axis_angle();
            assert!((angle - PI).abs() < 1e-4, "angle {angle}");
            assert!(axis.dot(v).abs() < 1e-4, "axis {axis:?} not ⟂ {v:?}");
            assert_vec_close(q * v, -v);
            assert!((q.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn rotation_maps_from_onto_to() {
        let pairs = [
            (Vec3::X, Vec3::Y),
            (Vec3::Z, Vec3::X),
            (
                Vec3::new(1.0, 1.0, 0.0).normalize(),
                Vec3::new(0.0, -1.0, 1.0).normalize(),
            ),
            (
                Vec3::new(0.2, 0.9, -0.4).normalize(),
                Vec3::new(-0.7, 0.1, 0.7).normalize(),
            ),
        ];
        for (a, b) in pairs {
            let q = rotation_between(a, b);
            assert!((q.length() - 1.0).abs() < EPS);
            assert_vec_close(q * a, b);
        }
    }

    #[test]
    fn rotation_is_shortest_arc() {
        let q = rotation_between(Vec3::Z, Vec3::X);
        let (axis, angle) = q.to_axis_angle();
        assert!((angle - FRAC_PI_2).abs() < 1e-4);
        assert_vec_close(axis, Vec3::Y);
    }

    #[test]
    fn degenerate_inputs_give_identity() {
        assert_eq!(rotation_between(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
        assert_eq!(
            rotation_between(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X),
            Quat::IDENTITY
        );
    }

    #[test]
    fn viewport_center_projects_to_front_pole() {
        let p = project_to_sphere(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
        assert_vec_close(p, Vec3::Z);
    }

    #[test]
    fn viewport_edge_projects_to_rim() {
        let size = Vec2::new(800.0, 600.0);
        assert_vec_close(project_to_sphere(Vec2::new(800.0, 300.0), size), Vec3::X);
        assert_vec_close(project_to_sphere(Vec2::new(400.0, 0.0), size), Vec3::Y);
    }

    #[test]
    fn corner_is_clamped_onto_unit_rim() {
        let p = project_to_sphere(Vec2::new(800.0, 0.0), Vec2::new(800.0, 600.0));
        assert!((p.length() - 1.0).abs() < EPS);
        assert_eq!(p.z, 0.0);
        assert!(p.x > 0.0 && p.y > 0.0);
    }

    #[test]
    fn projected_points_are_unit_length() {
        let size = Vec2::new(640.0, 480.0);
        for (x, y) in [(0.0, 0.0), (100.0, 50.0), (320.0, 240.0), (700.0, 900.0)] {
            let p = project_to_sphere(Vec2::new(x, y), size);
            assert!((p.length() - 1.0).abs() < 1e-4, "{p:?}");
        }
    }
}
