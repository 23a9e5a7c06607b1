//! Headless driver for the sailboat model: loads a TOML config, applies CLI
//! overrides, steps one boat at a fixed rate and logs its track.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use sailboat::{BoatSpec, BoatState, ConstantWind, Sailboat};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sailboat-sim")]
#[command(about = "Headless sailboat dynamics run", long_about = None)]
pub struct Args {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of steps to run (overrides [run].steps)
    #[arg(long)]
    pub steps: Option<usize>,
    /// Time step in seconds (overrides [run].dt)
    #[arg(long)]
    pub dt: Option<f64>,
    /// Wind speed (overrides [wind].speed)
    #[arg(long)]
    pub wind_speed: Option<f64>,
    /// Wind direction in radians, world frame (overrides [wind].direction)
    #[arg(long, allow_hyphen_values = true)]
    pub wind_dir: Option<f64>,
    /// Log the boat state every N steps (overrides [run].log_every)
    #[arg(long)]
    pub log_every: Option<usize>,
}

impl Args {
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(steps) = self.steps { cfg.run.steps = steps; }
        if let Some(dt) = self.dt { cfg.run.dt = dt; }
        if let Some(speed) = self.wind_speed { cfg.wind.speed = speed; }
        if let Some(dir) = self.wind_dir { cfg.wind.direction = dir; }
        if let Some(n) = self.log_every { cfg.run.log_every = n; }
    }
}

/// Rudder and sail held until `until_s` seconds of simulated time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSegment {
    pub until_s: f64,
    pub rudder: f64,
    pub sail: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSpec {
    pub dt: f64,
    pub steps: usize,
    pub log_every: usize,
    /// Evaluated in order; the last segment is held once time runs past it.
    pub controls: Vec<ControlSegment>,
}

impl Default for RunSpec {
    fn default() -> Self {
        Self {
            dt: 0.02,
            steps: 500,
            log_every: 50,
            controls: vec![ControlSegment { until_s: 0.0, rudder: 0.0, sail: 0.3 }],
        }
    }
}

impl RunSpec {
    /// `(rudder, sail)` commanded at simulated time `t`.
    pub fn controls_at(&self, t: f64) -> (f64, f64) {
        self.controls
            .iter()
            .find(|c| t < c.until_s)
            .or_else(|| self.controls.last())
            .map(|c| (c.rudder, c.sail))
            .unwrap_or((0.0, 0.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub boat: BoatSpec,
    pub wind: ConstantWind,
    pub run: RunSpec,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: usize,
    pub sim_time_s: f64,
    pub final_state: BoatState,
    /// Straight-line distance from the start position.
    pub displacement: f64,
    pub max_abs_heel: f64,
}

pub fn run_simulation(cfg: &Config) -> Result<RunSummary> {
    let dt = cfg.run.dt;
    if !(dt.is_finite() && dt > 0.0) {
        bail!("run.dt must be a positive finite number of seconds (got {dt})");
    }
    let mut boat = Sailboat::from_spec(cfg.boat.clone()).context("invalid [boat] parameters")?;
    let (x0, y0) = (boat.x(), boat.y());
    let mut max_abs_heel = boat.heel().abs();
    let mut t = 0.0_f64;

    for step in 1..=cfg.run.steps {
        let (rudder, sail) = cfg.run.controls_at(t);
        boat.advance(dt, rudder, sail, &cfg.wind);
        t += dt;

        let s = boat.state();
        if !s.is_finite() {
            bail!("state became non-finite at step {step} (t = {t:.3} s): {s:?}");
        }
        max_abs_heel = max_abs_heel.max(s.theta.abs());

        if cfg.run.log_every > 0 && step % cfg.run.log_every == 0 {
            info!(
                step,
                t,
                x = s.x,
                y = s.y,
                heading = s.phi,
                heel = s.theta,
                speed = s.speed(),
                sail_force = s.sail_force,
                "boat"
            );
        }
    }

    let final_state = boat.state().clone();
    let displacement = (final_state.x - x0).hypot(final_state.y - y0);
    Ok(RunSummary {
        steps: cfg.run.steps,
        sim_time_s: t,
        final_state,
        displacement,
        max_abs_heel,
    })
}
