//! Drawing pass and the host surface seam.
//!
//! The engine never owns a canvas, window or GPU surface. The host hands
//! in anything implementing [`Surface2D`] - a small canvas-style command
//! set - and [`Renderer::draw`] issues one frame's worth of operations
//! against it from the current simulation snapshot. The renderer keeps no
//! state between calls, so hosts can swap surfaces freely.

use glam::{Vec2, Vec3};

use crate::simulation::Simulation;
use crate::visuals::VisualConfig;

/// A 2D drawing surface owned by the host.
///
/// Colors are linear RGB in `[0, 1]`; `alpha` is coverage for blending.
/// Implementations decide how to realize each primitive - a browser
/// canvas, a CPU raster buffer or a test recorder are all valid targets.
pub trait Surface2D {
    /// Blend a full-surface rectangle of `color` at `alpha` over the
    /// current contents. Low alpha values leave motion trails.
    fn fade(&mut self, color: Vec3, alpha: f32);

    /// Fill a solid circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32);

    /// Fill a radial glow: full color at the center falling off to
    /// transparent at `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32);

    /// Stroke a line whose color interpolates from `from_color` at `from`
    /// to `to_color` at `to`.
    fn gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Vec3,
        to_color: Vec3,
        width: f32,
        alpha: f32,
    );
}

/// Stateless draw pass over a simulation snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    visuals: VisualConfig,
}

impl Renderer {
    pub fn new(visuals: VisualConfig) -> Self {
        Self { visuals }
    }

    /// The active visual configuration.
    pub fn visuals(&self) -> &VisualConfig {
        &self.visuals
    }

    /// Draw one frame: fade pass, then connections, then particles on top.
    pub fn draw<S: Surface2D>(&self, sim: &Simulation, surface: &mut S) {
        let v = &self.visuals;
        surface.fade(v.background, v.fade_alpha);

        let particles = sim.particles();
        for conn in sim.connections().iter() {
            if conn.opacity <= v.connection_floor {
                continue;
            }
            let (pa, pb) = (&particles[conn.a], &particles[conn.b]);
            let ca = v.palette.sample(v.mapping.position(pa.speed()));
            let cb = v.palette.sample(v.mapping.position(pb.speed()));
            surface.gradient_line(
                pa.position,
                pb.position,
                ca,
                cb,
                v.connection_width,
                conn.opacity,
            );

            // Traveling highlight along the edge.
            let dot = pa.position.lerp(pb.position, conn.light);
            let bright = ca.lerp(cb, conn.light).lerp(Vec3::ONE, 0.6);
            surface.fill_circle(dot, v.light_size, bright, conn.opacity);
        }

        for p in particles {
            let color = v.palette.sample(v.mapping.position(p.speed()));
            let glow_alpha = 0.25 + 0.15 * p.pulse_phase.sin();
            surface.fill_glow(p.position, p.radius() * v.glow_scale, color, glow_alpha);
            surface.fill_circle(p.position, p.radius(), color, 0.9);
        }
    }
}
