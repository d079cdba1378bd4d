//! 2D vector helpers shared by the simulation and renderer.
//!
//! Everything here is a thin layer over [`glam::Vec2`]. Operations are
//! value-returning and total: degenerate inputs (zero-length vectors,
//! zero-sized bounds) produce zeros or leave the input unchanged rather
//! than raising or propagating NaN into the hot loop.

use glam::Vec2;
use rand::Rng;

/// A unit vector with a uniformly random angle.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}

/// Cap `v` to `max` magnitude. Vectors already within the cap pass through
/// unchanged; the zero vector stays zero.
#[inline]
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}

/// Classic steering: the force that turns `velocity` toward `desired`,
/// capped at `max_force`. Returns zero when `desired` is zero, so callers
/// can feed it the raw output of an empty neighbor average.
#[inline]
pub fn steer(desired: Vec2, velocity: Vec2, max_force: f32) -> Vec2 {
    if desired == Vec2::ZERO {
        return Vec2::ZERO;
    }
    limit(desired - velocity, max_force)
}

/// Fold a coordinate into `[0, len)` toroidally. A non-positive `len`
/// passes the value through, so a mid-resize zero dimension is harmless.
#[inline]
pub fn wrap(value: f32, len: f32) -> f32 {
    if len <= 0.0 {
        return value;
    }
    let wrapped = value.rem_euclid(len);
    // rem_euclid can return `len` exactly when `value` is a tiny negative.
    if wrapped >= len {
        0.0
    } else {
        wrapped
    }
}

/// Fold a position into `[0, w) x [0, h)`.
#[inline]
pub fn wrap_point(p: Vec2, w: f32, h: f32) -> Vec2 {
    Vec2::new(wrap(p.x, w), wrap(p.y, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_unit_has_unit_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let v = random_unit(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn limit_caps_only_above_max() {
        assert_eq!(limit(Vec2::new(3.0, 4.0), 10.0), Vec2::new(3.0, 4.0));
        let capped = limit(Vec2::new(3.0, 4.0), 1.0);
        assert!((capped.length() - 1.0).abs() < 1e-5);
        assert_eq!(limit(Vec2::ZERO, 1.0), Vec2::ZERO);
    }

    #[test]
    fn steer_zero_desired_is_zero() {
        assert_eq!(steer(Vec2::ZERO, Vec2::new(5.0, -2.0), 0.1), Vec2::ZERO);
    }

    #[test]
    fn steer_respects_cap() {
        let force = steer(Vec2::new(100.0, 0.0), Vec2::new(-100.0, 0.0), 0.1);
        assert!(force.length() <= 0.1 + 1e-6);
    }

    #[test]
    fn wrap_folds_both_directions() {
        assert_eq!(wrap(105.0, 100.0), 5.0);
        assert_eq!(wrap(-5.0, 100.0), 95.0);
        assert_eq!(wrap(50.0, 100.0), 50.0);
        assert_eq!(wrap(200.0, 100.0), 0.0);
    }

    #[test]
    fn wrap_zero_len_is_identity() {
        assert_eq!(wrap(42.0, 0.0), 42.0);
    }

    #[test]
    fn wrap_result_stays_in_range() {
        let v = wrap(-1e-6, 100.0);
        assert!((0.0..100.0).contains(&v));
    }
}
