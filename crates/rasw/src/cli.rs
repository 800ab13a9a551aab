use anyhow::Result;
use clap::Args;
use rasw::config::Config;
use rasw_core::{Arm, Coord, Pose};
use std::path::PathBuf;

pub mod animate;
pub mod fk;
pub mod ik;

/// Largest end-effector miss, in link units, still counted as on target.
pub const REACH_TOLERANCE: f64 = 1e-6;

/// Where the arm geometry comes from.
#[derive(Args, Debug, Default)]
pub struct ArmArgs {
    /// Path to an arm configuration file (TOML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Link lengths, base link first. Overrides the configuration file.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub links: Option<Vec<f64>>,
}

impl ArmArgs {
    /// Load the configuration, apply overrides and validate it.
    pub fn load(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let config = Config::from_file(path)?;
                tracing::info!("Loaded arm configuration from {}", path.display());
                config
            }
            None => Config::default(),
        };

        if let Some(links) = &self.links {
            // a rest pose sized for the old arm no longer applies
            if config.arm.rest.as_ref().is_some_and(|r| r.len() != links.len()) {
                tracing::warn!("Ignoring configured rest pose; link count changed");
                config.arm.rest = None;
            }
            config.arm.links = links.clone();
        }

        config.validate()?;
        tracing::debug!(links = ?config.arm.links, "Arm geometry");
        Ok(config)
    }
}

/// Warn when `pose` leaves the end-effector off `target`; returns the miss.
///
/// The 3-link solver returns a best-effort pose for some reachable targets,
/// such as those behind the second joint.
pub fn warn_on_miss(arm: &Arm, pose: &Pose, target: Coord) -> Result<f64> {
    let miss = arm.end_effector(pose)?.distance(&target);
    if miss > REACH_TOLERANCE {
        tracing::warn!(
            x = target.x,
            y = target.y,
            miss,
            "Solved pose misses the target"
        );
    }
    Ok(miss)
}
