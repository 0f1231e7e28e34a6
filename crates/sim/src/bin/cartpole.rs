//! Runs one cart-pole scenario and logs a summary of the result.
//!
//! ```text
//! cartpole --scenario swing_up.toml --duration 30
//! RUST_LOG=debug cartpole
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cartpole_sim::{Scenario, fitness};

/// Simulate the cart-pole swing-up and stabilization controller.
#[derive(Parser)]
#[command(name = "cartpole")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Scenario file (.toml or .json); the baseline swing-up if omitted
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the simulated duration (s)
    #[arg(long)]
    duration: Option<f64>,

    /// Override the sample spacing (s)
    #[arg(long)]
    time_step: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::from_path(path)?,
        None => Scenario::default(),
    };
    if let Some(duration) = cli.duration {
        scenario.duration = duration;
    }
    if let Some(time_step) = cli.time_step {
        scenario.time_step = time_step;
    }

    let trajectory = scenario.simulation().run()?;
    let Some(last) = trajectory.last() else {
        return Ok(());
    };

    info!(
        time = last.time,
        x = last.state.x,
        theta = last.state.theta,
        x_dot = last.state.x_dot,
        theta_dot = last.state.theta_dot,
        "final state"
    );
    info!(
        theta_error = last.theta_error(&scenario.reference),
        mode = ?last.command.mode,
        peak_force = trajectory.peak_force(),
        saturated = trajectory.saturated_count(),
        fitness = fitness(&trajectory, &scenario.reference, &scenario.fitness),
        "summary"
    );

    Ok(())
}
