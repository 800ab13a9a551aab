use anyhow::Result;
use clap::{Args, Subcommand};
use xshell::Shell;

use super::common;

#[derive(Args)]
pub struct Ci {
    #[command(subcommand)]
    step: Option<Step>,
}

/// A single CI step. `cargo xtask ci` runs them all in declaration order.
#[derive(Subcommand, Clone)]
pub enum Step {
    /// Check formatting
    Fmt,
    /// Lint with clippy, warnings denied
    Clippy,
    /// Build docs, warnings denied
    Doc,
    /// Run the test suite
    Test(TestArgs),
    /// Compile benchmarks without running them
    Bench,
}

#[derive(Args, Default, Clone)]
pub struct TestArgs {
    /// Additional arguments to pass to cargo test
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Ci {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        let steps = match &self.step {
            Some(step) => vec![step.clone()],
            None => vec![
                Step::Fmt,
                Step::Clippy,
                Step::Doc,
                Step::Test(TestArgs::default()),
                Step::Bench,
            ],
        };
        for step in steps {
            step.run(sh)?;
        }
        Ok(())
    }
}

impl Step {
    fn run(&self, sh: &Shell) -> Result<()> {
        match self {
            Step::Fmt => common::run_fmt_check(sh),
            Step::Clippy => common::run_clippy(sh),
            Step::Doc => common::run_doc(sh),
            Step::Test(test_args) => common::run_tests(sh, &test_args.args),
            Step::Bench => common::build_benches(sh),
        }
    }
}
