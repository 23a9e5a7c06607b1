use anyhow::Result;
use clap::Parser;
use tracing::info;

use simulator::{load_config, run_simulation, Args, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    args.apply(&mut cfg);
    info!(?cfg, "Simulator config loaded");

    let summary = run_simulation(&cfg)?;
    let s = &summary.final_state;
    info!(
        steps = summary.steps,
        sim_time_s = summary.sim_time_s,
        x = s.x,
        y = s.y,
        heading = s.phi,
        heel = s.theta,
        displacement = summary.displacement,
        max_abs_heel = summary.max_abs_heel,
        "Run finished"
    );
    Ok(())
}
