use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use disc_physics::{PhysicsWorld, ScenarioConfig};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

mod visual;

const PRESETS: [(&str, &str); 3] = [
    ("bouncing", include_str!("../scenarios/bouncing.yaml")),
    ("gravity", include_str!("../scenarios/gravity.yaml")),
    ("pegs", include_str!("../scenarios/pegs.yaml")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Open a window and draw the discs.
    Visual,
    /// Step without a window and log positions.
    Headless,
}

#[derive(Parser, Debug)]
#[command(about = "Bouncing disc playground")]
struct Args {
    #[arg(value_enum, default_value_t = Mode::Visual)]
    mode: Mode,

    /// Preset name (bouncing, gravity, pegs) or path to a YAML scenario.
    #[arg(short, long, default_value = "bouncing")]
    scenario: String,

    /// Frames to simulate in headless mode.
    #[arg(short, long, default_value_t = 600)]
    frames: usize,

    /// Log body positions every this many frames in headless mode.
    #[arg(long, default_value_t = 60)]
    log_every: usize,
}

fn load_scenario(name: &str) -> Result<ScenarioConfig> {
    let path = Path::new(name);
    if path.is_file() {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let scenario = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        return Ok(scenario);
    }

    match PRESETS.iter().find(|(preset, _)| *preset == name) {
        Some((_, yaml)) => serde_yaml::from_str(yaml)
            .with_context(|| format!("failed to parse preset {name}")),
        None => {
            let known: Vec<&str> = PRESETS.iter().map(|(preset, _)| *preset).collect();
            bail!("unknown scenario {name}; presets are {}", known.join(", "))
        }
    }
}

fn run_headless(world: &mut PhysicsWorld, frames: usize, log_every: usize) {
    let log_every = log_every.max(1);
    for frame in 0..frames {
        world.step_frame();
        if frame % log_every != 0 {
            continue;
        }

        info!("frame {frame}: {} contacts", world.contacts().len());
        for (i, body) in world.bodies().iter().enumerate() {
            let (p, v) = (body.position(), body.velocity());
            info!(
                "  body {i}: pos ({:.2}, {:.2}) vel ({:.2}, {:.2})",
                p.x, p.y, v.x, v.y
            );
        }
    }

    let momentum = world.total_momentum();
    info!(
        "finished {frames} frames: momentum ({:.3}, {:.3}), kinetic energy {:.3}",
        momentum.x,
        momentum.y,
        world.kinetic_energy()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = load_scenario(&args.scenario)?;
    let mut world = scenario
        .build_world()
        .with_context(|| format!("invalid scenario {}", args.scenario))?;
    info!(
        "loaded {} with {} bodies",
        args.scenario,
        world.bodies().len()
    );

    match args.mode {
        Mode::Headless => {
            run_headless(&mut world, args.frames, args.log_every);
            Ok(())
        }
        Mode::Visual => visual::run(world, scenario.player, scenario.player_speed)
            .map_err(|e| anyhow!("playground window failed: {e}")),
    }
}
