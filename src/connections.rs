//! Proximity connection graph.
//!
//! Every tick the graph is rebuilt from the current pairwise distances:
//! particle pairs closer than the connection radius get an entry, everyone
//! else is dropped. Entries carry two pieces of animated state - a
//! traveling light phase and a smoothed opacity - which survive rebuilds
//! for as long as the pair stays connected. A pair that separates loses its
//! entry immediately; reconnecting later starts a fresh entry at phase 0.

use std::collections::HashMap;

use crate::particle::Particle;

/// Default distance threshold for forming a connection.
pub const CONNECTION_RADIUS: f32 = 80.0;

/// Light phase advance per tick.
pub const LIGHT_RATE: f32 = 0.02;

/// Fraction of the remaining gap the opacity closes per tick.
pub const OPACITY_SMOOTHING: f32 = 0.1;

/// Ordered particle-index pair identifying a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairKey(pub usize, pub usize);

impl PairKey {
    /// Build a key with the smaller index first, so `(a, b)` and `(b, a)`
    /// identify the same connection.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            PairKey(a, b)
        } else {
            PairKey(b, a)
        }
    }
}

/// A transient visual edge between two nearby particles.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    /// Index of the first endpoint (always the smaller index).
    pub a: usize,
    /// Index of the second endpoint.
    pub b: usize,
    /// Phase of the traveling highlight along the edge, in `[0, 1)`.
    pub light: f32,
    /// Smoothed opacity in `[0, 1]`.
    pub opacity: f32,
    /// Endpoint distance measured at the last rebuild.
    distance: f32,
}

impl Connection {
    fn new(key: PairKey, distance: f32) -> Self {
        Self {
            a: key.0,
            b: key.1,
            light: 0.0,
            opacity: 0.0,
            distance,
        }
    }

    /// Opacity this connection is converging toward at its current
    /// distance: 1 at distance zero, fading to 0 at the radius edge.
    pub fn target_opacity(&self, radius: f32) -> f32 {
        (1.0 - self.distance / radius).max(0.0)
    }

    fn advance(&mut self, radius: f32) {
        self.light += LIGHT_RATE;
        if self.light >= 1.0 {
            self.light -= 1.0;
        }
        let target = self.target_opacity(radius);
        self.opacity += OPACITY_SMOOTHING * (target - self.opacity);
    }
}

/// The set of currently-connected particle pairs.
///
/// Owned by the simulation; rebuilt and advanced once per tick.
#[derive(Debug)]
pub struct ConnectionGraph {
    radius: f32,
    entries: HashMap<PairKey, Connection>,
}

impl ConnectionGraph {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            entries: HashMap::new(),
        }
    }

    /// Connection radius in surface units.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of live connections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The connection for a pair, if the pair is currently close.
    pub fn get(&self, a: usize, b: usize) -> Option<&Connection> {
        self.entries.get(&PairKey::new(a, b))
    }

    /// Iterate over all live connections.
    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.entries.values()
    }

    /// Rebuild the graph from current particle positions.
    ///
    /// This is the deliberate O(n^2) pass of the engine: every unordered
    /// pair is distance-checked against the radius. Entries for pairs that
    /// are still close keep their light phase and opacity; everything else
    /// is discarded.
    pub fn rebuild(&mut self, particles: &[Particle]) {
        let mut next = HashMap::with_capacity(self.entries.len());
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let d = particles[i].position.distance(particles[j].position);
                if d < self.radius {
                    let key = PairKey::new(i, j);
                    let mut conn = self
                        .entries
                        .remove(&key)
                        .unwrap_or_else(|| Connection::new(key, d));
                    conn.distance = d;
                    next.insert(key, conn);
                }
            }
        }
        self.entries = next;
    }

    /// Advance light phases and opacity smoothing for all connections.
    pub fn advance(&mut self) {
        for conn in self.entries.values_mut() {
            conn.advance(self.radius);
        }
    }
}

impl Default for ConnectionGraph {
    fn default() -> Self {
        Self::new(CONNECTION_RADIUS)
    }
}
