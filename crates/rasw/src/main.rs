use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fk(args) => args.run(),
        Command::Ik(args) => args.run(),
        Command::Animate(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(name = "rasw", about = "Planar robotic arm kinematics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print joint positions for a set of joint angles.
    Fk(cli::fk::FkArgs),
    /// Solve joint angles that reach a target point.
    Ik(cli::ik::IkArgs),
    /// Emit rest-to-target animation frames as JSON lines.
    Animate(cli::animate::AnimateArgs),
}
