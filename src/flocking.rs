//! Flocking steering behaviors.
//!
//! The three classic behaviors - alignment, cohesion, separation - are
//! computed against whatever neighbor candidates the caller supplies and
//! combined with per-behavior weights. All three are pure functions of the
//! particle and its neighbors: with no neighbor inside the perception
//! radius they return exactly `Vec2::ZERO`, never NaN.

use glam::Vec2;

use crate::math;
use crate::particle::Particle;

/// Tuning for the flocking behaviors.
///
/// The defaults reproduce the reference effect: a 50-unit perception
/// radius, gentle alignment/cohesion and a separation force weighted
/// strongly enough (`0.2` cap, `1.2` blend) to prevent clumping.
#[derive(Clone, Copy, Debug)]
pub struct FlockConfig {
    /// Neighbor perception radius.
    pub radius: f32,
    /// Speed the steering tries to reach along the desired direction.
    pub desired_speed: f32,
    /// Cap on alignment and cohesion steering magnitude.
    pub max_force: f32,
    /// Cap on separation steering magnitude.
    pub max_separation_force: f32,
    /// Blend weight for alignment.
    pub alignment_weight: f32,
    /// Blend weight for cohesion.
    pub cohesion_weight: f32,
    /// Blend weight for separation.
    pub separation_weight: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            desired_speed: 0.5,
            max_force: 0.1,
            max_separation_force: 0.2,
            alignment_weight: 0.5,
            cohesion_weight: 0.5,
            separation_weight: 1.2,
        }
    }
}

/// Steer toward the average heading of neighbors within the radius.
pub fn alignment(p: &Particle, neighbors: &[Particle], index: usize, cfg: &FlockConfig) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;
    for (j, other) in neighbors.iter().enumerate() {
        if j == index {
            continue;
        }
        if p.position.distance(other.position) < cfg.radius {
            sum += other.velocity;
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    let desired = (sum / count as f32).normalize_or_zero() * cfg.desired_speed;
    math::steer(desired, p.velocity, cfg.max_force)
}

/// Steer toward the centroid of neighbors within the radius.
pub fn cohesion(p: &Particle, neighbors: &[Particle], index: usize, cfg: &FlockConfig) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;
    for (j, other) in neighbors.iter().enumerate() {
        if j == index {
            continue;
        }
        if p.position.distance(other.position) < cfg.radius {
            sum += other.position;
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    let centroid = sum / count as f32;
    let desired = (centroid - p.position).normalize_or_zero() * cfg.desired_speed;
    math::steer(desired, p.velocity, cfg.max_force)
}

/// Steer away from close neighbors with inverse-square weighting, so the
/// push grows sharply as particles overlap.
pub fn separation(p: &Particle, neighbors: &[Particle], index: usize, cfg: &FlockConfig) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;
    for (j, other) in neighbors.iter().enumerate() {
        if j == index {
            continue;
        }
        let d = p.position.distance(other.position);
        if d > 0.0 && d < cfg.radius {
            sum += (p.position - other.position) / (d * d);
            count += 1;
        }
    }
    if count == 0 {
        return Vec2::ZERO;
    }
    let desired = (sum / count as f32).normalize_or_zero() * cfg.desired_speed;
    math::steer(desired, p.velocity, cfg.max_separation_force)
}

/// The weighted blend of all three behaviors for one particle.
pub fn combined(p: &Particle, neighbors: &[Particle], index: usize, cfg: &FlockConfig) -> Vec2 {
    alignment(p, neighbors, index, cfg) * cfg.alignment_weight
        + cohesion(p, neighbors, index, cfg) * cfg.cohesion_weight
        + separation(p, neighbors, index, cfg) * cfg.separation_weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned(x: f32, y: f32) -> Particle {
        Particle::at(Vec2::new(x, y))
    }

    #[test]
    fn zero_neighbors_is_exactly_zero() {
        let cfg = FlockConfig::default();
        let flock = vec![pinned(0.0, 0.0), pinned(500.0, 500.0)];
        assert_eq!(alignment(&flock[0], &flock, 0, &cfg), Vec2::ZERO);
        assert_eq!(cohesion(&flock[0], &flock, 0, &cfg), Vec2::ZERO);
        assert_eq!(separation(&flock[0], &flock, 0, &cfg), Vec2::ZERO);
        assert_eq!(combined(&flock[0], &flock, 0, &cfg), Vec2::ZERO);
    }

    #[test]
    fn forces_never_exceed_caps() {
        let cfg = FlockConfig::default();
        let mut flock = vec![pinned(0.0, 0.0)];
        for i in 0..20 {
            let mut p = pinned(1.0 + i as f32, 0.5);
            p.velocity = Vec2::new(2.0, -2.0);
            flock.push(p);
        }
        // A fast mover surrounded by a dense cluster.
        flock[0].velocity = Vec2::new(-2.0, 2.0);

        assert!(alignment(&flock[0], &flock, 0, &cfg).length() <= cfg.max_force + 1e-6);
        assert!(cohesion(&flock[0], &flock, 0, &cfg).length() <= cfg.max_force + 1e-6);
        assert!(
            separation(&flock[0], &flock, 0, &cfg).length() <= cfg.max_separation_force + 1e-6
        );
    }

    #[test]
    fn results_are_always_finite() {
        let cfg = FlockConfig::default();
        // Coincident particles exercise the d == 0 guard in separation.
        let flock = vec![pinned(10.0, 10.0), pinned(10.0, 10.0), pinned(10.1, 10.0)];
        for i in 0..flock.len() {
            let f = combined(&flock[i], &flock, i, &cfg);
            assert!(f.is_finite());
        }
    }

    #[test]
    fn separation_pushes_apart() {
        let cfg = FlockConfig::default();
        let flock = vec![pinned(10.0, 10.0), pinned(12.0, 10.0)];
        let f = separation(&flock[0], &flock, 0, &cfg);
        assert!(f.x < 0.0, "left particle should be pushed further left");
    }

    #[test]
    fn cohesion_pulls_toward_centroid() {
        let cfg = FlockConfig::default();
        let flock = vec![pinned(0.0, 0.0), pinned(30.0, 0.0), pinned(30.0, 10.0)];
        let f = cohesion(&flock[0], &flock, 0, &cfg);
        assert!(f.x > 0.0);
    }

    #[test]
    fn alignment_matches_neighbor_heading() {
        let cfg = FlockConfig::default();
        let mut flock = vec![pinned(0.0, 0.0), pinned(10.0, 0.0)];
        flock[1].velocity = Vec2::new(0.0, 1.0);
        let f = alignment(&flock[0], &flock, 0, &cfg);
        assert!(f.y > 0.0);
    }
}
