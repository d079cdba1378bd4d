//! # Synaptic - emergent particle network engine
//!
//! A real-time 2D particle simulation with flocking motion, pointer
//! attraction and proximity-based connection rendering - the "synaptic
//! network" background effect, packaged as a host-agnostic engine.
//!
//! ## Quick Start
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
//! let renderer = Renderer::new(VisualConfig::default());
//! let mut surface = RasterSurface::new(1920, 1080);
//!
//! // From whatever frame scheduler the host has:
//! sim.on_pointer_move(x, y);
//! sim.tick();
//! renderer.draw(&sim, &mut surface);
//! ```
//!
//! ## Core Concepts
//!
//! ### The simulation owns state, the host owns time and pixels
//!
//! [`Simulation`] holds the particle collection, the connection graph and
//! the pointer channel. It exposes `start()`, `stop()`, `tick()`,
//! `on_resize()` and `on_pointer_move()` - nothing schedules frames or
//! touches a window. The host calls `tick()` from a frame callback, a
//! fixed-timestep loop or a test harness, which is what makes the engine
//! deterministic under test.
//!
//! ### Rules
//!
//! Per-tick forces are data, applied in order:
//!
//! ```ignore
//! .with_rule(Rule::Flock(FlockConfig::default()))
//! .with_rule(Rule::PointerAttract { radius: 300.0, strength: 0.15 })
//! .with_rule(Rule::Jitter { strength: 0.05 })
//! ```
//!
//! Omit [`Rule::Jitter`] (and pair with [`Simulation::with_seed`]) for
//! fully reproducible runs.
//!
//! ### Connections
//!
//! Particle pairs closer than the connection radius get a visual edge
//! carrying a traveling light and an opacity that eases toward
//! `1 - distance/radius`. The graph is rebuilt from scratch every tick;
//! animated state survives as long as a pair stays close.
//!
//! ### Rendering
//!
//! [`Renderer`] is a stateless pass from the current snapshot to drawing
//! commands on a [`Surface2D`] the host provides. [`RasterSurface`] is the
//! built-in CPU implementation with PNG export, used by the demos.
//!
//! ## Performance shape
//!
//! Flocking runs on a rotating third of the particles per tick; the full
//! O(n²) pairwise pass is reserved for connection distances. At the default
//! 3000 particles this keeps a tick well inside a frame budget on CPU.

mod clock;
mod connections;
pub mod error;
pub mod flocking;
mod input;
mod math;
mod particle;
pub mod render;
mod rules;
mod simulation;
pub mod raster;
pub mod visuals;

pub use clock::Clock;
pub use connections::{Connection, ConnectionGraph, PairKey, CONNECTION_RADIUS};
pub use error::RasterError;
pub use flocking::FlockConfig;
pub use glam::{Vec2, Vec3};
pub use input::Pointer;
pub use particle::{Particle, MAX_SPEED};
pub use raster::RasterSurface;
pub use render::{Renderer, Surface2D};
pub use rules::Rule;
pub use simulation::Simulation;
pub use visuals::{ColorMapping, Palette, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use synaptic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::flocking::FlockConfig;
    pub use crate::raster::RasterSurface;
    pub use crate::render::{Renderer, Surface2D};
    pub use crate::rules::Rule;
    pub use crate::simulation::Simulation;
    pub use crate::visuals::{ColorMapping, Palette, VisualConfig};
    pub use crate::{Particle, Pointer};
    pub use crate::{Vec2, Vec3};
}
