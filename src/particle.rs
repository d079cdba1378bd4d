//! The simulated particle.
//!
//! A particle is a moving point with a force accumulator and a pulse phase
//! that drives its drawn size and brightness. Particles are created once at
//! simulation start and never destroyed; they wrap toroidally at the
//! surface edges instead of being respawned.

use glam::Vec2;
use rand::Rng;

use crate::math;

/// Hard cap on velocity magnitude, in surface units per tick.
pub const MAX_SPEED: f32 = 2.0;

/// Pulse phase advance per tick is `pulse_speed * PULSE_RATE`.
pub const PULSE_RATE: f32 = 0.02;

/// One simulated point.
///
/// Forces accumulate into `acceleration` via [`Particle::apply_force`] and
/// are consumed by the next [`Particle::update`]. Only the simulation
/// mutates particles; the renderer reads them.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Current location in surface coordinates.
    pub position: Vec2,
    /// Current direction and speed, clamped to [`MAX_SPEED`].
    pub velocity: Vec2,
    /// Force accumulator, zeroed every tick after integration.
    pub acceleration: Vec2,
    /// Phase of the size/brightness oscillation, in radians.
    pub pulse_phase: f32,
    /// Per-particle multiplier on the pulse advance rate.
    pub pulse_speed: f32,
    /// Drawn radius at rest.
    pub base_size: f32,
}

impl Particle {
    /// A particle with randomized position, drift and pulse, placed inside
    /// a `w` x `h` surface. This is the default spawner.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen_range(0.0..w.max(1.0)), rng.gen_range(0.0..h.max(1.0))),
            velocity: Vec2::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)),
            acceleration: Vec2::ZERO,
            pulse_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            pulse_speed: rng.gen_range(0.5..1.5),
            base_size: rng.gen_range(1.0..2.5),
        }
    }

    /// A motionless particle at `position`, useful for pinned setups.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            pulse_phase: 0.0,
            pulse_speed: 1.0,
            base_size: 1.5,
        }
    }

    /// Accumulate a force for the next update.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Integrate one tick: apply accumulated forces, clamp speed, move,
    /// wrap at the `w` x `h` bounds and advance the pulse.
    pub fn update(&mut self, w: f32, h: f32) {
        self.velocity = math::limit(self.velocity + self.acceleration, MAX_SPEED);
        self.position = math::wrap_point(self.position + self.velocity, w, h);
        self.acceleration = Vec2::ZERO;
        self.pulse_phase = (self.pulse_phase + self.pulse_speed * PULSE_RATE)
            .rem_euclid(std::f32::consts::TAU);
    }

    /// Current speed in units per tick.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Size multiplier from the pulse: `1 + 0.3 * sin(phase)`.
    #[inline]
    pub fn pulse(&self) -> f32 {
        1.0 + 0.3 * self.pulse_phase.sin()
    }

    /// Drawn core radius this tick.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.base_size * self.pulse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_bounded_after_update() {
        let mut p = Particle::at(Vec2::new(50.0, 50.0));
        p.apply_force(Vec2::new(1000.0, -500.0));
        p.update(100.0, 100.0);
        assert!(p.speed() <= MAX_SPEED + 1e-5);

        // Repeated huge forces never break the cap.
        for _ in 0..10 {
            p.apply_force(Vec2::new(-1e6, 1e6));
            p.update(100.0, 100.0);
            assert!(p.speed() <= MAX_SPEED + 1e-5);
        }
    }

    #[test]
    fn acceleration_resets_each_tick() {
        let mut p = Particle::at(Vec2::new(10.0, 10.0));
        p.apply_force(Vec2::new(0.5, 0.0));
        p.update(100.0, 100.0);
        assert_eq!(p.acceleration, Vec2::ZERO);
        let v = p.velocity;
        p.update(100.0, 100.0);
        // No new force: velocity unchanged.
        assert_eq!(p.velocity, v);
    }

    #[test]
    fn wraps_on_all_four_edges() {
        let mut p = Particle::at(Vec2::new(99.5, 0.5));
        p.velocity = Vec2::new(1.0, -1.0);
        p.update(100.0, 100.0);
        assert!((0.0..100.0).contains(&p.position.x));
        assert!((0.0..100.0).contains(&p.position.y));
        assert!((p.position.x - 0.5).abs() < 1e-4);
        assert!((p.position.y - 99.5).abs() < 1e-4);
    }

    #[test]
    fn pulse_phase_advances_by_rate() {
        let mut p = Particle::at(Vec2::ZERO);
        p.pulse_speed = 1.0;
        p.update(100.0, 100.0);
        assert!((p.pulse_phase - PULSE_RATE).abs() < 1e-6);
    }

    #[test]
    fn pulse_stays_within_band() {
        let mut p = Particle::at(Vec2::ZERO);
        for _ in 0..500 {
            p.update(100.0, 100.0);
            let s = p.pulse();
            assert!((0.7..=1.3).contains(&s));
        }
    }
}
