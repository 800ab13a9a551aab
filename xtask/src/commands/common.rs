use anyhow::Result;
use xshell::{Shell, cmd};

/// Crates published from this workspace, in dependency order
pub const PUBLISHED_CRATES: &[&str] = &["rasw-core"];

/// Run rustfmt check (does not modify files)
pub fn run_fmt_check(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo fmt check...");
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    Ok(())
}

/// Apply rustfmt to all files
pub fn run_fmt(sh: &Shell) -> Result<()> {
    eprintln!("Applying cargo fmt...");
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

/// Run clippy with all warnings treated as errors
pub fn run_clippy(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo clippy...");
    cmd!(
        sh,
        "cargo clippy --all-features --all-targets --workspace -- -D warnings"
    )
    .run()?;
    Ok(())
}

/// Build rustdoc for the workspace, failing on warnings
pub fn run_doc(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo doc...");
    let _env = sh.push_env("RUSTDOCFLAGS", "-D warnings");
    cmd!(sh, "cargo doc --workspace --no-deps").run()?;
    Ok(())
}

/// Compile the benchmarks so they do not rot
pub fn build_benches(sh: &Shell) -> Result<()> {
    eprintln!("Building benchmarks...");
    cmd!(sh, "cargo bench --workspace --no-run").run()?;
    Ok(())
}

/// Run the workspace tests with extra cargo arguments
pub fn run_tests(sh: &Shell, args: &[String]) -> Result<()> {
    eprintln!("Running cargo test...");
    cmd!(sh, "cargo test --workspace {args...}").run()?;
    Ok(())
}
