//! Circle Hell headless runner
//!
//! Drives the simulation with the autopilot at a fixed frame rate and reports
//! the outcome. A windowed front end plugs its own `InputSource` and
//! `Renderer` into the same `Driver`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use circle_hell::autopilot::Autopilot;
use circle_hell::consts::SIM_DT;
use circle_hell::renderer::LogRenderer;
use circle_hell::sim::GameEvent;
use circle_hell::{Driver, HighScores, HitPolicy, Tuning};

#[derive(Parser, Debug)]
#[command(name = "circle-hell", version, about, long_about = None)]
struct Cli {
    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated seconds to play
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// JSON file overriding game balance
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// JSON file the leaderboard is read from and written to
    #[arg(long)]
    scores: Option<PathBuf>,

    /// End the run on the first hit instead of resetting
    #[arg(long)]
    game_over: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    if cli.game_over {
        tuning.hit_policy = HitPolicy::GameOver;
    }

    let high_scores = match &cli.scores {
        Some(path) => HighScores::load(path)?,
        None => HighScores::new(),
    };

    let seed = cli.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!(
        "Circle Hell starting with seed {} (arcs live {} ticks)",
        seed,
        tuning.arc_lifetime_ticks()
    );

    let mut driver = Driver::new(seed, tuning)?.with_high_scores(high_scores);
    let mut input = Autopilot;
    let mut renderer = LogRenderer::default();

    let frames = (cli.seconds / SIM_DT).ceil() as u64;
    let mut hits = 0u32;
    let mut cleared = 0u64;
    for _ in 0..frames {
        for event in driver.advance(SIM_DT, &mut input, &mut renderer)? {
            match event {
                GameEvent::Hit { .. } => hits += 1,
                GameEvent::ArcCleared { .. } => cleared += 1,
                GameEvent::ArcSpawned { .. } | GameEvent::Restarted => {}
            }
        }
    }
    driver.finish();

    println!(
        "{} ticks, {} arcs cleared, {} hits, final score {}, best {}",
        driver.state.time_ticks,
        cleared,
        hits,
        driver.state.score,
        driver.high_scores.top_score().unwrap_or(0)
    );

    if let Some(path) = &cli.scores {
        driver
            .high_scores
            .save(path)
            .with_context(|| format!("saving high scores to {}", path.display()))?;
    }

    Ok(())
}
