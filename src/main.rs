//! Verlet Arena headless demo
//!
//! Drops bodies into the arena at a fixed cadence and logs solver stats.
//! Set `RUST_LOG=debug` for per-update output.

use verlet_arena::{Solver, SolverSettings};

/// Frame time fed to the solver (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Total frames to simulate
const FRAMES: u32 = 1200;
/// Spawn one body every this many frames
const SPAWN_INTERVAL: u32 = 4;
/// Stop spawning once this many bodies exist
const MAX_BODIES: usize = 250;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Verlet Arena (headless) starting...");

    let settings = SolverSettings::default();
    let mut solver = match Solver::new(settings) {
        Ok(solver) => solver,
        Err(err) => {
            log::error!("Invalid settings: {err}");
            std::process::exit(1);
        }
    };

    for frame in 0..FRAMES {
        if frame % SPAWN_INTERVAL == 0 && solver.body_count() < MAX_BODIES {
            solver.add_object();
        }
        solver.update(FRAME_DT);

        if frame % 60 == 0 {
            let stats = solver.stats();
            log::info!(
                "t={:.1}s bodies={} collisions/substep={:.2} avg radius={:.2}",
                frame as f32 * FRAME_DT,
                stats.body_count,
                stats.collisions_per_substep,
                stats.average_radius
            );
        }
    }

    match serde_json::to_string_pretty(&solver.stats()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize stats: {err}"),
    }
}
