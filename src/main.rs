use gluesim::{bench_break_curve, bench_step};
use gluesim::{Driver, EventConfig, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::ops::ControlFlow;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "center_star.yaml")]
    file_name: String,

    /// Override the number of ticks to run
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run the engine benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let cfg = ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    log::info!("loaded scenario {}", config_path.display());
    Ok(cfg)
}

/// Tick the driver headless, replaying scripted events in place of keyboard input
fn run_headless(driver: &mut Driver, ticks: u64, log_every: u64, mut events: Vec<EventConfig>) -> Result<()> {
    events.sort_by_key(|e| e.tick);
    let mut pending = events.into_iter().peekable();

    'run: for t in 0..ticks {
        while let Some(e) = pending.next_if(|e| e.tick <= t) {
            if let ControlFlow::Break(()) = driver.handle(e.event) {
                break 'run;
            }
        }

        driver.tick()?;

        if log_every > 0 && driver.ticks() % log_every == 0 {
            log::info!(
                "tick {:6}: {} bodies, {} glued, g = {}",
                driver.ticks(),
                driver.bodies().len(),
                driver.glued_count(),
                driver.gravity()
            );
        }
    }

    log::info!(
        "finished after {} ticks: {} bodies, {} glued, gravity mode {}",
        driver.ticks(),
        driver.bodies().len(),
        driver.glued_count(),
        driver.gravity_mode()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_break_curve();
        return Ok(());
    }

    let mut cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    let ticks = args.ticks.unwrap_or(cfg.run.ticks);

    let scenario = Scenario::build_scenario(&cfg)?;
    let mut driver = Driver::new(scenario)?;

    run_headless(&mut driver, ticks, cfg.run.log_every, cfg.events.clone())
}
