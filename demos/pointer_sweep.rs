//! Pointer attraction demo with a synthetic input sequence.
//!
//! Sweeps the pointer around an ellipse while the simulation runs, showing
//! how the engine consumes pointer input without any window system: the
//! pointer is just a value the host writes between ticks.
//!
//! Run with: cargo run --example pointer_sweep --release

use synaptic::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (960u32, 540u32);

    let mut sim = Simulation::new()
        .with_particle_count(800)
        .with_size(width as f32, height as f32)
        .with_seed(7)
        .with_rule(Rule::Flock(FlockConfig::default()))
        .with_rule(Rule::PointerAttract {
            radius: 300.0,
            strength: 0.15,
        });
    sim.start();

    let renderer = Renderer::new(VisualConfig::new().palette(
        Palette::Ocean,
        ColorMapping::Speed { max_speed: 2.0 },
    ));
    let mut surface = RasterSurface::new(width, height);

    for tick in 0..400 {
        // Ellipse sweep around the surface center.
        let angle = tick as f32 * 0.02;
        sim.on_pointer_move(
            width as f32 * 0.5 + 300.0 * angle.cos(),
            height as f32 * 0.5 + 160.0 * angle.sin(),
        );
        sim.tick();
        renderer.draw(&sim, &mut surface);
    }

    sim.on_pointer_leave();
    sim.stop();

    let path = "target/demo/pointer_sweep.png";
    surface.save_png(path)?;
    println!("wrote {path} after {} ticks", sim.clock().ticks());
    Ok(())
}
