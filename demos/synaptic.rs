//! Full-viewport synaptic network effect, rendered offline.
//!
//! Runs the default rule stack for a few hundred ticks and writes the
//! final frame (plus a few progress frames) as PNGs under `target/demo/`.
//!
//! Run with: cargo run --example synaptic --release

use synaptic::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (1280u32, 720u32);

    let mut sim = Simulation::new()
        .with_particle_count(1200)
        .with_size(width as f32, height as f32)
        .with_seed(2024)
        .with_rules(Rule::synaptic_defaults());
    sim.start();

    let renderer = Renderer::new(
        VisualConfig::new()
            .palette(Palette::Neon, ColorMapping::Speed { max_speed: 2.0 })
            .fade_alpha(0.12),
    );
    let mut surface = RasterSurface::new(width, height);

    let ticks = 300;
    for frame in 0..ticks {
        sim.tick();
        renderer.draw(&sim, &mut surface);

        if frame % 100 == 99 {
            let path = format!("target/demo/synaptic_{:04}.png", frame + 1);
            surface.save_png(&path)?;
            println!(
                "tick {:4}  connections {:5}  -> {}",
                frame + 1,
                sim.connections().len(),
                path
            );
        }
    }

    sim.stop();
    println!(
        "done: {} ticks, {:.1}s wall clock",
        sim.clock().ticks(),
        sim.clock().elapsed()
    );
    Ok(())
}
