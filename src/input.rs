//! Pointer input channel.
//!
//! The pointer is the only external input the simulation consumes. It is a
//! plain value the host writes from whatever event source it has - window
//! events, touch, or a synthetic sequence in tests - and the tick reads.
//! Until the host reports a move, the pointer sits at an off-surface
//! sentinel far outside any attraction radius, so no particle is ever
//! drawn toward a phantom origin.

use glam::Vec2;

/// Sentinel position used while the pointer is off-surface.
const OFF_SURFACE: Vec2 = Vec2::new(-10_000.0, -10_000.0);

/// Host-reported pointer state.
#[derive(Clone, Copy, Debug)]
pub struct Pointer {
    position: Vec2,
    on_surface: bool,
}

impl Pointer {
    /// A pointer that has never entered the surface.
    pub fn new() -> Self {
        Self {
            position: OFF_SURFACE,
            on_surface: false,
        }
    }

    /// Record a pointer move in surface coordinates.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.on_surface = true;
    }

    /// Record the pointer leaving the surface.
    pub fn left(&mut self) {
        self.position = OFF_SURFACE;
        self.on_surface = false;
    }

    /// Current pointer position, or the off-surface sentinel.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the pointer is currently on the surface.
    pub fn on_surface(&self) -> bool {
        self.on_surface
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}
