use std::path::PathBuf;

use anyhow::{Context, Result};
use boid_cli::{load_settings, world_bounds, ResizeEvent, Simulation};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the boid flocking simulation headless", long_about = None)]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World width
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// World height
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Override the boid count from the settings file
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for the initial conditions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Change the population at a given frame, e.g. --resize-at 300:50
    #[arg(long = "resize-at", value_name = "FRAME:COUNT")]
    resize_at: Vec<ResizeEvent>,

    /// Print a status line every N frames (0 disables)
    #[arg(short, long, default_value_t = 60)]
    report_every: u64,

    /// Print the final boid positions and headings as JSON
    #[arg(long)]
    dump: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let bounds = world_bounds(args.width, args.height)?;

    let mut settings = load_settings(args.config.as_deref()).context("Failed to load settings")?;
    if let Some(count) = args.count {
        settings.boid_count = count;
    }

    let mut schedule = args.resize_at.clone();
    schedule.sort_by_key(|event| event.frame);
    let mut schedule = schedule.into_iter().peekable();

    let mut sim = Simulation::new(settings, bounds, args.seed);

    for frame in 0..args.frames {
        while let Some(event) = schedule.next_if(|event| event.frame <= frame) {
            sim.set_boid_count(event.count);
        }

        sim.tick();

        if args.report_every > 0 && (frame + 1) % args.report_every == 0 {
            let status = serde_json::to_string(&sim.status())?;
            println!("{}", status);
        }
    }

    log::info!("Finished {} frames with {} boids", args.frames, sim.flock().len());

    if args.dump {
        let states = serde_json::to_string_pretty(&sim.states()).context("Failed to encode boid states")?;
        println!("{}", states);
    }

    Ok(())
}
