//! Cat Runner headless driver
//!
//! Plays a full run without rendering, standing in for the browser's frame
//! scheduler: one tick per frame until game over or the tick limit.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cat_runner::Tuning;
use cat_runner::sim::{GameEvent, Simulation, TickInput, autopilot_input};

#[derive(Parser, Debug)]
#[command(name = "cat-runner", about = "Run the endless-runner simulation headless")]
struct Args {
    /// Run seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the run is still going
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// JSON file with balance overrides
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Let the built-in autopilot play; otherwise the runner only starts
    /// the run and then stands still
    #[arg(long)]
    autopilot: bool,

    /// Print the default tuning as JSON and exit
    #[arg(long)]
    dump_tuning: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.dump_tuning {
        println!("{}", Tuning::default().to_json()?);
        return Ok(());
    }

    let tuning = match &args.tuning {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading tuning file {}", path.display()))?;
            Tuning::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Tuning::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Cat Runner (headless) starting...");
    let mut sim = Simulation::new(seed, tuning)?;

    for _ in 0..args.max_ticks {
        let input = if args.autopilot {
            autopilot_input(&sim)
        } else {
            TickInput {
                start: true,
                ..Default::default()
            }
        };
        sim.tick(&input);

        for event in sim.drain_events() {
            match event {
                GameEvent::EnteredPlaying => log::info!("Playing (seed {})", seed),
                GameEvent::ItemCollected { kind, value } => {
                    log::debug!("Picked up {:?} (+{}) at score {}", kind, value, sim.world.score)
                }
                GameEvent::GameOver { score, ticks } => {
                    log::info!("Game over after {} ticks with score {}", ticks, score)
                }
            }
        }

        if sim.is_over() {
            break;
        }
    }

    if !sim.is_over() {
        log::warn!("Tick limit {} reached before game over", args.max_ticks);
    }

    println!("{}", sim.snapshot().to_json()?);
    Ok(())
}
