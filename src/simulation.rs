//! Simulation builder and state owner.
//!
//! `Simulation` owns every piece of mutable state in the engine: the
//! particle collection, the connection graph, the pointer channel and the
//! tick clock. It is deliberately scheduler-free - the host drives it by
//! calling [`Simulation::tick`] from a frame callback, a fixed-timestep
//! loop or a test harness, and renders the current state with a separate
//! read-only pass. Two instances on one page are independent.
//!
//! # Quick Start
//!
//! ```ignore
//! use synaptic::prelude::*;
//!
//! let mut sim = Simulation::new()
//!     .with_particle_count(3000)
//!     .with_size(1920.0, 1080.0)
//!     .with_rules(Rule::synaptic_defaults());
//! sim.start();
//!
//! // each animation frame:
//! sim.on_pointer_move(x, y);
//! sim.tick();
//! renderer.draw(&sim, &mut surface);
//! ```

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::connections::{ConnectionGraph, CONNECTION_RADIUS};
use crate::flocking;
use crate::input::Pointer;
use crate::particle::Particle;
use crate::rules::Rule;

/// Spawner signature: `(particle_index, rng) -> Particle`.
type Spawner = Box<dyn Fn(usize, &mut StdRng) -> Particle + Send + Sync>;

/// A particle simulation.
///
/// Configure with method chaining, then call [`start`](Self::start) and
/// drive ticks from the host's scheduler.
pub struct Simulation {
    width: f32,
    height: f32,
    particle_count: usize,
    rules: Vec<Rule>,
    spawner: Option<Spawner>,
    flock_stride: usize,

    particles: Vec<Particle>,
    connections: ConnectionGraph,
    pointer: Pointer,
    clock: Clock,
    rng: StdRng,
    running: bool,
}

impl Simulation {
    /// A simulation with default settings: 3000 particles on a 1280x720
    /// surface, no rules, entropy-seeded randomness.
    pub fn new() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            particle_count: 3000,
            rules: Vec::new(),
            spawner: None,
            flock_stride: 3,
            particles: Vec::new(),
            connections: ConnectionGraph::new(CONNECTION_RADIUS),
            pointer: Pointer::new(),
            clock: Clock::new(),
            rng: StdRng::from_entropy(),
            running: false,
        }
    }

    /// Set the number of particles. Fixed for the instance's lifetime
    /// once [`start`](Self::start) has spawned them.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the initial surface size in pixels.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Seed the random number generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the particle spawner, called with `(index, rng)` per particle.
    /// Without one, particles spawn with randomized position and drift.
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(usize, &mut StdRng) -> Particle + Send + Sync + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Add a rule to the per-tick force pipeline.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replace the rule list wholesale.
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Set the connection distance threshold.
    pub fn with_connection_radius(mut self, radius: f32) -> Self {
        self.connections = ConnectionGraph::new(radius);
        self
    }

    /// Set the flocking stride: each particle computes flocking once per
    /// `stride` ticks, on a rotating schedule. `1` means every tick.
    pub fn with_flock_stride(mut self, stride: usize) -> Self {
        self.flock_stride = stride.max(1);
        self
    }

    // ========== Lifecycle ==========

    /// Transition to Running. The first call spawns the particle
    /// collection; later calls only resume ticking. Idempotent.
    pub fn start(&mut self) {
        if self.particles.is_empty() && self.particle_count > 0 {
            let (w, h) = (self.width, self.height);
            self.particles = (0..self.particle_count)
                .map(|i| match &self.spawner {
                    Some(spawn) => spawn(i, &mut self.rng),
                    None => Particle::random(&mut self.rng, w, h),
                })
                .collect();
            debug!(
                particles = self.particles.len(),
                width = self.width,
                height = self.height,
                "simulation spawned"
            );
        }
        self.running = true;
    }

    /// Transition to Stopped: subsequent ticks are no-ops until the next
    /// `start`. Idempotent, and safe to call before `start`.
    pub fn stop(&mut self) {
        if self.running {
            debug!(ticks = self.clock.ticks(), "simulation stopped");
        }
        self.running = false;
    }

    /// Update the wrap-around bounds after a host resize. Particle
    /// positions are never reset; anything momentarily outside the new
    /// bounds self-corrects at its next wrap check.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        trace!(width, height, "surface resized");
        self.width = width;
        self.height = height;
    }

    /// Record a pointer move in surface coordinates.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    /// Record the pointer leaving the surface.
    pub fn on_pointer_leave(&mut self) {
        self.pointer.left();
    }

    // ========== Stepping ==========

    /// Advance the simulation by one frame. A no-op while Stopped.
    ///
    /// Order within a tick: accumulate forces from the rule list, integrate
    /// every particle, rebuild the connection graph against the already
    /// updated positions, advance connection animations, count the tick.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let forces = self.compute_forces();
        for (p, force) in self.particles.iter_mut().zip(forces) {
            p.apply_force(force);
            p.update(self.width, self.height);
        }

        self.connections.rebuild(&self.particles);
        self.connections.advance();
        self.clock.tick();
    }

    /// One force vector per particle, from all rules in list order.
    fn compute_forces(&mut self) -> Vec<Vec2> {
        let mut forces = vec![Vec2::ZERO; self.particles.len()];
        let phase = self.clock.ticks() as usize % self.flock_stride;

        for rule in &self.rules {
            match rule {
                Rule::Flock(cfg) => {
                    // Rotating stride: every particle flocks once per
                    // `flock_stride` ticks, never all of them at once.
                    for (i, p) in self.particles.iter().enumerate() {
                        if i % self.flock_stride == phase {
                            forces[i] += flocking::combined(p, &self.particles, i, cfg);
                        }
                    }
                }
                Rule::PointerAttract { radius, strength } => {
                    if !self.pointer.on_surface() {
                        continue;
                    }
                    let target = self.pointer.position();
                    for (i, p) in self.particles.iter().enumerate() {
                        let d = p.position.distance(target);
                        if d < *radius {
                            let pull = strength * (1.0 - d / radius);
                            forces[i] += (target - p.position).normalize_or_zero() * pull;
                        }
                    }
                }
                Rule::Jitter { strength } => {
                    for force in forces.iter_mut() {
                        *force += crate::math::random_unit(&mut self.rng) * *strength;
                    }
                }
            }
        }
        forces
    }

    // ========== Read access ==========

    /// The particle collection. Empty before the first `start`.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The current connection graph.
    pub fn connections(&self) -> &ConnectionGraph {
        &self.connections
    }

    /// Current surface size.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// The pointer channel.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Tick clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Whether the simulation is currently Running.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flocking::FlockConfig;

    /// Two motionless particles 40 units apart, no forces.
    fn pinned_pair() -> Simulation {
        Simulation::new()
            .with_particle_count(2)
            .with_size(400.0, 300.0)
            .with_seed(7)
            .with_spawner(|i, _| {
                Particle::at(Vec2::new(100.0 + 40.0 * i as f32, 100.0))
            })
    }

    #[test]
    fn pinned_pair_converges_to_half_opacity() {
        let mut sim = pinned_pair();
        sim.start();
        for _ in 0..50 {
            sim.tick();
        }

        let conn = sim.connections().get(0, 1).expect("pair stays connected");
        assert!((conn.opacity - 0.5).abs() < 0.01);

        // 50 light steps of 0.02 land on the wrap point: distance to 0
        // mod 1 must be tiny either side of the fold.
        let light = conn.light;
        let to_zero = light.min(1.0 - light);
        assert!(to_zero < 1e-3, "light = {light}");
    }

    #[test]
    fn tick_is_noop_while_stopped() {
        let mut sim = pinned_pair();
        sim.tick();
        assert_eq!(sim.clock().ticks(), 0);
        assert!(sim.particles().is_empty());

        sim.start();
        sim.tick();
        sim.stop();
        let positions: Vec<Vec2> = sim.particles().iter().map(|p| p.position).collect();
        sim.tick();
        assert_eq!(sim.clock().ticks(), 1);
        for (p, pos) in sim.particles().iter().zip(positions) {
            assert_eq!(p.position, pos);
        }
    }

    #[test]
    fn stop_is_idempotent_and_safe_before_start() {
        let mut sim = Simulation::new().with_particle_count(4);
        sim.stop();
        sim.stop();
        sim.start();
        sim.stop();
        sim.stop();
        assert!(!sim.is_running());
    }

    #[test]
    fn particle_count_is_fixed_across_restarts() {
        let mut sim = pinned_pair();
        sim.start();
        for _ in 0..10 {
            sim.tick();
        }
        sim.stop();
        sim.start();
        sim.tick();
        assert_eq!(sim.particles().len(), 2);
    }

    #[test]
    fn unmoved_pointer_attracts_nothing() {
        let mut sim = Simulation::new()
            .with_particle_count(1)
            .with_size(400.0, 300.0)
            .with_spawner(|_, _| Particle::at(Vec2::new(10.0, 10.0)))
            .with_rule(Rule::PointerAttract {
                radius: 300.0,
                strength: 0.15,
            });
        sim.start();
        for _ in 0..20 {
            sim.tick();
        }
        // The sentinel sits far off-surface; a particle near the origin
        // must feel nothing.
        assert_eq!(sim.particles()[0].velocity, Vec2::ZERO);
        assert_eq!(sim.particles()[0].position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn pointer_pulls_within_radius_only() {
        let mut sim = Simulation::new()
            .with_particle_count(2)
            .with_size(1000.0, 1000.0)
            .with_spawner(|i, _| {
                // One in range of the pointer, one far outside.
                Particle::at(Vec2::new(100.0 + 700.0 * i as f32, 500.0))
            })
            .with_rule(Rule::PointerAttract {
                radius: 300.0,
                strength: 0.15,
            });
        sim.start();
        sim.on_pointer_move(200.0, 500.0);
        sim.tick();

        assert!(sim.particles()[0].velocity.x > 0.0, "in-range particle pulled");
        assert_eq!(sim.particles()[1].velocity, Vec2::ZERO);
    }

    #[test]
    fn resize_preserves_positions() {
        let mut sim = pinned_pair();
        sim.start();
        sim.tick();
        let positions: Vec<Vec2> = sim.particles().iter().map(|p| p.position).collect();
        sim.on_resize(2000.0, 1500.0);
        for (p, pos) in sim.particles().iter().zip(positions) {
            assert_eq!(p.position, pos);
        }
        assert_eq!(sim.size(), (2000.0, 1500.0));
    }

    #[test]
    fn same_seed_same_trajectories() {
        let build = || {
            let mut sim = Simulation::new()
                .with_particle_count(50)
                .with_size(500.0, 500.0)
                .with_seed(42)
                .with_rules(Rule::synaptic_defaults());
            sim.start();
            for _ in 0..20 {
                sim.tick();
            }
            sim
        };
        let a = build();
        let b = build();
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
        }
    }

    #[test]
    fn speed_stays_bounded_under_full_rule_stack() {
        let mut sim = Simulation::new()
            .with_particle_count(100)
            .with_size(300.0, 300.0)
            .with_seed(3)
            .with_rules(Rule::synaptic_defaults());
        sim.start();
        sim.on_pointer_move(150.0, 150.0);
        for _ in 0..100 {
            sim.tick();
            for p in sim.particles() {
                assert!(p.speed() <= crate::particle::MAX_SPEED + 1e-4);
                let (w, h) = sim.size();
                assert!((0.0..w).contains(&p.position.x));
                assert!((0.0..h).contains(&p.position.y));
            }
        }
    }

    #[test]
    fn flock_stride_rotates_over_all_particles() {
        let mut sim = Simulation::new()
            .with_particle_count(3)
            .with_size(400.0, 400.0)
            .with_seed(1)
            .with_flock_stride(3)
            .with_spawner(|i, _| {
                let mut p = Particle::at(Vec2::new(100.0 + 10.0 * i as f32, 100.0));
                // Give neighbors a heading for alignment to pick up.
                p.velocity = Vec2::new(0.0, if i == 0 { 0.0 } else { 0.4 });
                p
            })
            .with_rule(Rule::Flock(FlockConfig::default()));
        sim.start();
        for _ in 0..3 {
            sim.tick();
        }
        // After one full rotation every particle has flocked once.
        assert!(sim.particles()[0].velocity.y.abs() > 0.0);
    }
}
