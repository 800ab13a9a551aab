use super::ArmArgs;
use anyhow::{Context, Result};
use clap::Args;
use rasw_core::{Coord, Pose};
use std::io::{self, Write};

#[derive(Args)]
pub struct FkArgs {
    /// Joint angles in degrees, base joint first.
    #[arg(long, required = true, value_delimiter = ',', allow_negative_numbers = true)]
    pub angles: Vec<f64>,

    #[command(flatten)]
    pub arm: ArmArgs,

    /// Print positions as a JSON array instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl FkArgs {
    pub fn run(&self) -> Result<()> {
        let config = self.arm.load()?;
        let arm = config.arm()?;
        let pose = Pose::from_degrees(&self.angles);
        let positions = arm
            .forward(&pose)
            .context("joint angles do not match the arm")?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.json {
            serde_json::to_writer(&mut out, &positions)?;
            writeln!(out)?;
        } else {
            print_table(&mut out, &positions)?;
        }
        Ok(())
    }
}

fn print_table(out: &mut impl Write, positions: &[Coord]) -> Result<()> {
    let last = positions.len().saturating_sub(1);
    for (i, p) in positions.iter().enumerate() {
        let label = match i {
            0 => "base".to_string(),
            i if i == last => "end effector".to_string(),
            i => format!("joint {i}"),
        };
        writeln!(out, "{label:>12}: ({:.2}, {:.2})", p.x, p.y)?;
    }
    Ok(())
}
