//! Throw Sim - headless hammer throw
//!
//! Run with: `cargo run --bin throw_sim -- --power 22`
//!
//! Runs one throw from idle to rest at a fixed timestep and prints the
//! distance. Power comes from `--power`, else from `--effort` (0..1) through
//! the configured power range, else it is drawn at random from that range.
//! Set `RUST_LOG=hammer_throw_engine=debug` for phase logging.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hammer_throw_engine::game::{ThrowConfig, ThrowEvent, ThrowPhase, ThrowScene, format_distance};

#[derive(Parser)]
#[command(name = "throw_sim")]
#[command(about = "Simulate a single hammer throw without rendering", long_about = None)]
struct Cli {
    /// Launch speed (m/s)
    #[arg(short = 'p', long)]
    power: Option<f32>,

    /// Effort score in 0..1, mapped through the power range
    #[arg(short = 'e', long, conflicts_with = "power")]
    effort: Option<f32>,

    /// Fixed timestep (seconds)
    #[arg(long, default_value = "0.016666668")]
    dt: f32,

    /// Seed for the hammer tumble and random power
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// JSON config overriding the defaults
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print one JSON line per tick
    #[arg(long)]
    trace: bool,

    /// Give up after this much simulated time (seconds)
    #[arg(long, default_value = "60.0")]
    max_time: f32,
}

#[derive(Serialize)]
struct TraceLine {
    time: f32,
    phase: ThrowPhase,
    head: [f32; 3],
    anchor: [f32; 3],
    velocity: [f32; 3],
}

impl TraceLine {
    fn capture(scene: &ThrowScene) -> Self {
        Self {
            time: scene.system.clock(),
            phase: scene.phase(),
            head: scene.system.head_position().to_array(),
            anchor: scene.system.anchor_position().to_array(),
            velocity: scene.system.velocity().to_array(),
        }
    }
}

/// Throw at `power` and tick by `dt` until the hammer rests or `max_time`
/// of simulated time has passed.
///
/// The limit is measured on the scene clock, so a `dt` above the scene's
/// `max_dt` still gets the full `max_time`. Returns the distance if the
/// hammer landed.
fn simulate(
    scene: &mut ThrowScene,
    power: f32,
    dt: f32,
    max_time: f32,
    mut on_tick: impl FnMut(&ThrowScene) -> Result<()>,
) -> Result<Option<f32>> {
    if !(dt.is_finite() && dt > 0.0) {
        bail!("--dt must be a positive number, got {dt}");
    }

    scene.input.request_throw_with_power(power);
    let deadline = scene.system.clock() + max_time;

    while scene.system.clock() < deadline {
        let event = scene.tick(dt);
        on_tick(scene)?;

        match event {
            Some(ThrowEvent::Released) => info!(time = scene.system.clock(), "released"),
            Some(ThrowEvent::Landed { distance }) => return Ok(Some(distance)),
            None => {}
        }
        if scene.phase() == ThrowPhase::Idle {
            bail!("throw with power {power} was not accepted");
        }
    }
    Ok(None)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("throw_sim=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ThrowConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ThrowConfig::default(),
    };

    let mut scene = match cli.seed {
        Some(seed) => ThrowScene::with_seed(config, seed),
        None => ThrowScene::new(config),
    };

    let power = match (cli.power, cli.effort) {
        (Some(power), _) => power,
        (None, Some(effort)) => {
            scene.input.record_effort(effort);
            scene.input.current_power()
        }
        (None, None) => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            scene.input.power_range.sample(&mut rng)
        }
    };
    info!(power, dt = cli.dt, "starting throw");

    let trace = cli.trace;
    let distance = simulate(&mut scene, power, cli.dt, cli.max_time, |scene| {
        if trace {
            println!("{}", serde_json::to_string(&TraceLine::capture(scene))?);
        }
        Ok(())
    })?;

    let Some(distance) = distance else {
        bail!("hammer still moving after {}s", cli.max_time);
    };

    let marker = scene
        .field
        .nearest_marker(distance)
        .map(|m| format!(" (near the {}m line)", m.distance))
        .unwrap_or_default();
    println!("distance: {}{marker}", format_distance(distance));
    Ok(())
}
