use super::{ArmArgs, warn_on_miss};
use anyhow::{Context, Result};
use clap::Args;
use rasw::export::{MAX_PRECISION, write_frames};
use rasw_core::{Coord, Pose, Trajectory};
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::PathBuf,
};

#[derive(Args)]
pub struct AnimateArgs {
    /// Target point `X,Y` for the end-effector; joint angles are solved for.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with = "angles"
    )]
    pub target: Option<Vec<f64>>,

    /// Target joint angles in degrees, base joint first.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub angles: Option<Vec<f64>>,

    #[command(flatten)]
    pub arm: ArmArgs,

    /// Frames spent moving from rest to target.
    #[arg(long)]
    pub frames: Option<usize>,

    /// Frames spent holding the target afterwards.
    #[arg(long)]
    pub hold: Option<usize>,

    /// Round exported values to this many decimals (at most 15).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64))]
    pub precision: Option<u32>,

    /// Write frames to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl AnimateArgs {
    pub fn run(&self) -> Result<()> {
        let config = self.arm.load()?;
        let arm = config.arm()?;

        let target = match (&self.target, &self.angles) {
            (Some(point), _) => {
                let &[x, y] = point.as_slice() else {
                    anyhow::bail!("--target takes exactly two values, X,Y");
                };
                let target = Coord::new(x, y);
                let pose = arm
                    .solve(target, &config.ik_options())
                    .with_context(|| format!("cannot reach ({x}, {y})"))?;
                warn_on_miss(&arm, &pose, target)?;
                tracing::info!(x, y, angles = ?pose.to_degrees(), "Solved target pose");
                pose
            }
            (None, Some(angles)) => Pose::from_degrees(angles),
            (None, None) => anyhow::bail!("either --target or --angles is required"),
        };

        let trajectory = Trajectory::new(arm.links(), config.rest_pose(), target)
            .context("target pose does not match the arm")?
            .with_frames(self.frames.unwrap_or(config.animation.frames))
            .with_hold(self.hold.unwrap_or(config.animation.hold));

        let count = match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                let count =
                    write_frames(BufWriter::new(file), trajectory.frames(), self.precision)?;
                println!("Wrote {count} frames to {}", path.display());
                count
            }
            None => write_frames(io::stdout().lock(), trajectory.frames(), self.precision)?,
        };

        tracing::info!(frames = count, "Animation exported");
        Ok(())
    }
}
