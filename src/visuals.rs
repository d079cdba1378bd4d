//! Visual configuration for the effect.
//!
//! Rendering options live here, separate from the behavioral rules: which
//! palette colors the particles, how colors map to motion, glow scale,
//! trail fade and the connection visibility floor.
//!
//! # Usage
//!
//! ```ignore
//! let visuals = VisualConfig::new()
//!     .palette(Palette::Neon, ColorMapping::Speed { max_speed: 2.0 })
//!     .glow_scale(3.0)
//!     .fade_alpha(0.12);
//! let renderer = Renderer::new(visuals);
//! ```

use glam::Vec3;

/// Pre-defined five-stop color gradients, sampled by a [`ColorMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Vibrant cyan-through-magenta, the reference look of the effect.
    #[default]
    Neon,

    /// Cool blues and teals.
    Ocean,

    /// White through light blue to deep blue.
    Ice,

    /// Perceptually uniform purple to yellow through pink.
    Plasma,

    /// Black to white.
    Grayscale,
}

impl Palette {
    /// The five color stops of this palette, dark/slow end first.
    pub fn colors(&self) -> [Vec3; 5] {
        match self {
            Palette::Neon => [
                Vec3::new(0.10, 0.05, 0.35),
                Vec3::new(0.25, 0.20, 0.75),
                Vec3::new(0.25, 0.65, 0.95),
                Vec3::new(0.55, 0.85, 1.00),
                Vec3::new(1.00, 0.45, 0.85),
            ],
            Palette::Ocean => [
                Vec3::new(0.00, 0.05, 0.15),
                Vec3::new(0.00, 0.20, 0.40),
                Vec3::new(0.00, 0.40, 0.60),
                Vec3::new(0.20, 0.60, 0.80),
                Vec3::new(0.60, 0.90, 1.00),
            ],
            Palette::Ice => [
                Vec3::new(1.00, 1.00, 1.00),
                Vec3::new(0.80, 0.90, 1.00),
                Vec3::new(0.40, 0.70, 1.00),
                Vec3::new(0.10, 0.40, 0.80),
                Vec3::new(0.00, 0.10, 0.40),
            ],
            Palette::Plasma => [
                Vec3::new(0.050, 0.030, 0.528),
                Vec3::new(0.494, 0.012, 0.658),
                Vec3::new(0.798, 0.280, 0.470),
                Vec3::new(0.973, 0.580, 0.254),
                Vec3::new(0.940, 0.975, 0.131),
            ],
            Palette::Grayscale => [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.25, 0.25, 0.25),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.75, 0.75, 0.75),
                Vec3::new(1.0, 1.0, 1.0),
            ],
        }
    }

    /// Sample the gradient at `t` in `[0, 1]`, interpolating linearly
    /// between stops. Out-of-range `t` clamps.
    pub fn sample(&self, t: f32) -> Vec3 {
        let stops = self.colors();
        let t = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
        let i = (t as usize).min(stops.len() - 2);
        let frac = t - i as f32;
        stops[i].lerp(stops[i + 1], frac)
    }
}

/// How a particle's state maps to a palette position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMapping {
    /// Palette position = `speed / max_speed`. Slow particles take the
    /// first stop, particles at the speed cap take the last.
    Speed {
        /// Speed mapped to the end of the palette.
        max_speed: f32,
    },
}

impl Default for ColorMapping {
    fn default() -> Self {
        ColorMapping::Speed {
            max_speed: crate::particle::MAX_SPEED,
        }
    }
}

impl ColorMapping {
    /// Palette position for a particle moving at `speed`.
    pub fn position(&self, speed: f32) -> f32 {
        match *self {
            ColorMapping::Speed { max_speed } => {
                if max_speed <= 0.0 {
                    0.0
                } else {
                    (speed / max_speed).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// Rendering options, consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct VisualConfig {
    /// Particle/connection palette.
    pub palette: Palette,
    /// State-to-palette mapping.
    pub mapping: ColorMapping,
    /// Background color for the fade pass.
    pub background: Vec3,
    /// Per-tick fade strength; lower values leave longer trails.
    pub fade_alpha: f32,
    /// Glow radius as a multiple of the pulsed core radius.
    pub glow_scale: f32,
    /// Connections dimmer than this are skipped entirely.
    pub connection_floor: f32,
    /// Connection line width.
    pub connection_width: f32,
    /// Radius of the traveling light dot.
    pub light_size: f32,
}

impl VisualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette and its mapping.
    pub fn palette(mut self, palette: Palette, mapping: ColorMapping) -> Self {
        self.palette = palette;
        self.mapping = mapping;
        self
    }

    /// Set the glow radius multiplier.
    pub fn glow_scale(mut self, scale: f32) -> Self {
        self.glow_scale = scale;
        self
    }

    /// Set the per-tick background fade strength.
    pub fn fade_alpha(mut self, alpha: f32) -> Self {
        self.fade_alpha = alpha;
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: Vec3) -> Self {
        self.background = color;
        self
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            palette: Palette::Neon,
            mapping: ColorMapping::default(),
            background: Vec3::new(0.01, 0.01, 0.04),
            fade_alpha: 0.12,
            glow_scale: 3.0,
            connection_floor: 0.05,
            connection_width: 1.0,
            light_size: 1.5,
        }
    }
}
