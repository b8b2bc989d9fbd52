use starsim::{Mode, Scenario, ScenarioConfig};
use starsim::run_3d;
use starsim::{bench_forces, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive n-body gravity visualizer")]
struct Args {
    /// Scenario YAML, looked up under scenarios/ when given as a bare name
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override the mode from the scenario file
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Run without a window and log the final state
    #[arg(long)]
    headless: bool,

    /// Steps to run in headless mode
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Print force and step timings as CSV and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file_name {
        Some(file_name) => {
            let mut config_path = PathBuf::from(file_name);
            if !config_path.exists() {
                config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            }
            ScenarioConfig::load(&config_path)
                .with_context(|| format!("failed to load scenario {}", config_path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(mode) = args.mode {
        if mode != cfg.engine.mode {
            // Bodies laid out for another mode make no sense here
            cfg.bodies.clear();
        }
        cfg.engine.mode = mode;
    }
    Ok(cfg)
}

fn run_headless(mut scenario: Scenario, steps: usize) {
    scenario.start();
    for _ in 0..steps {
        scenario.step();
    }
    scenario.stop();

    let days = scenario.system.t / 86_400.0;
    info!("ran {steps} steps, {days:.1} simulated days");
    for b in &scenario.system.bodies {
        info!(
            "{:>10}  x = [{:9.2}, {:9.2}, {:9.2}]  |v| = {:.3e} m/s",
            b.name, b.x.x, b.x.y, b.x.z, b.v.norm()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::init();
        bench_forces();
        bench_step_curve();
        return Ok(());
    }

    let cfg = load_scenario(&args)?;

    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let scenario = Scenario::build_scenario(&cfg).context("invalid scenario")?;
        run_headless(scenario, args.steps);
    } else {
        // bevy's LogPlugin picks up our log records in the viewer
        let scenario = Scenario::build_scenario(&cfg).context("invalid scenario")?;
        run_3d(scenario);
    }

    Ok(())
}
