mod app;
mod engine;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use antcolony::config::{SimulationConfig, window_conf};
use antcolony::simulation::{AgentRole, Simulation};
use app::ColonyApp;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the colony simulation.
#[derive(Parser)]
#[command(name = "antcolony", version, about = "Ant colony foraging simulation")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random source. Overrides the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run this many ticks without a window, then log a summary.
    #[arg(long)]
    headless: Option<u64>,

    /// Clock advance per headless tick, in time units.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    tick_step: f32,

    /// Multiplier applied to the wall clock in windowed mode.
    #[arg(long, default_value_t = 1.0)]
    time_scale: f32,

    /// Print the final snapshot as TOML after a headless run.
    #[arg(long)]
    dump: bool,
}

/// Loads the simulation configuration from a TOML file or uses defaults.
fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            let config = toml::from_str(&content)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => {
            info!("no config file provided, using defaults");
            Ok(SimulationConfig::default())
        }
    }
}

fn run_headless(mut simulation: Simulation, ticks: u64, step: f32, dump: bool) -> Result<()> {
    for i in 1..=ticks {
        simulation.tick(i as f32 * step);
    }

    let snapshot = simulation.snapshot();
    info!(
        time = snapshot.time,
        foragers = snapshot.count_role(AgentRole::Forager),
        nurses = snapshot.count_role(AgentRole::Nurse),
        guards = snapshot.count_role(AgentRole::Guard),
        foods = snapshot.foods.len(),
        threats = snapshot.threats.len(),
        nest = snapshot.nest.resources,
        victory = snapshot.victory,
        next_threat_in = simulation.threat_spawn_timer.remaining(),
        "headless run finished"
    );

    if dump {
        let text = toml::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
        println!("{text}");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let simulation = Simulation::initialize(config).context("invalid simulation config")?;

    match cli.headless {
        Some(ticks) => run_headless(simulation, ticks, cli.tick_step, cli.dump),
        None => {
            let conf = window_conf(simulation.config());
            let mut app = ColonyApp::new(simulation, cli.time_scale);
            macroquad::Window::from_config(conf, async move { app.run().await });
            Ok(())
        }
    }
}
