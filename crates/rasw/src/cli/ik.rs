use super::{ArmArgs, warn_on_miss};
use anyhow::{Context, Result};
use clap::Args;
use rasw_core::{Coord, ElbowBranch, TwoLinkIk};
use std::io::{self, BufRead, Write};

#[derive(Args)]
pub struct IkArgs {
    /// Target x coordinate. Prompted for when omitted.
    #[arg(allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Target y coordinate. Prompted for when omitted.
    #[arg(allow_negative_numbers = true)]
    pub y: Option<f64>,

    #[command(flatten)]
    pub arm: ArmArgs,

    /// Elbow branch for 2-link arms: `down` or `up`.
    #[arg(long, value_parser = parse_branch)]
    pub branch: Option<ElbowBranch>,
}

fn parse_branch(s: &str) -> Result<ElbowBranch, String> {
    ElbowBranch::parse(s)
        .ok_or_else(|| format!("unknown elbow branch '{s}', expected down or up"))
}

impl IkArgs {
    pub fn run(&self) -> Result<()> {
        let mut config = self.arm.load()?;
        if let Some(branch) = self.branch {
            config.ik.branch = branch;
        }
        let arm = config.arm()?;

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let x = match self.x {
            Some(x) => x,
            None => prompt(&mut input, &mut out, "What is your x target?")?,
        };
        let y = match self.y {
            Some(y) => y,
            None => prompt(&mut input, &mut out, "What is your y target?")?,
        };
        let target = Coord::new(x, y);
        tracing::info!(x, y, links = arm.len(), "Solving inverse kinematics");

        let options = config.ik_options();
        let result = match *arm.links() {
            [l1, l2] => TwoLinkIk::new(l1, l2)?
                .with_branch(options.branch)
                .solve(target)
                .map(|solution| {
                    let pose = solution.pose().to_degrees();
                    report_two_link(&mut out, solution.shoulder, solution.elbow, &pose)
                }),
            _ => arm.solve(target, &options).map(|pose| -> Result<()> {
                warn_on_miss(&arm, &pose, target)?;
                report_joints(&mut out, &pose.to_degrees())
            }),
        };

        match result {
            Ok(written) => written,
            Err(err) => {
                tracing::warn!(x, y, "No solution: {err}");
                Err(err).context(format!("cannot reach ({x}, {y})"))
            }
        }
    }
}

/// Ask for a number until one parses.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> Result<f64> {
    loop {
        write!(out, "{question} ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            anyhow::bail!("no input for \"{question}\"");
        }
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            _ => writeln!(out, "'{}' is not a number", line.trim())?,
        }
    }
}

fn report_two_link(
    out: &mut impl Write,
    shoulder: f64,
    elbow: f64,
    pose_deg: &[f64],
) -> Result<()> {
    writeln!(out, "Shoulder Angle: {:.2} degrees", shoulder.to_degrees())?;
    writeln!(out, "Elbow Angle: {:.2} degrees", elbow.to_degrees())?;
    report_joints(out, pose_deg)
}

fn report_joints(out: &mut impl Write, pose_deg: &[f64]) -> Result<()> {
    for (i, angle) in pose_deg.iter().enumerate() {
        writeln!(out, "Joint {}: {angle:.2} degrees", i + 1)?;
    }
    Ok(())
}
