use anyhow::{Context, Result};
use clap::Args;
use xshell::{Shell, cmd};

use super::common::PUBLISHED_CRATES;

#[derive(Args)]
pub struct Package {
    /// Publish to crates.io after packaging succeeds
    #[arg(long)]
    upload: bool,

    /// Package even with uncommitted changes
    #[arg(long)]
    allow_dirty: bool,
}

impl Package {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        let package_dir = sh.current_dir().join("target/package");
        if package_dir.exists() {
            eprintln!("Removing {}...", package_dir.display());
            sh.remove_path(&package_dir)
                .with_context(|| format!("failed to remove {}", package_dir.display()))?;
        }

        let dirty = self.allow_dirty.then_some("--allow-dirty");
        for krate in PUBLISHED_CRATES {
            eprintln!("Packaging {krate}...");
            cmd!(sh, "cargo package -p {krate} {dirty...}")
                .run()
                .with_context(|| format!("failed to package {krate}"))?;
        }

        let crates: Vec<_> = sh
            .read_dir(&package_dir)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "crate"))
            .collect();
        if crates.is_empty() {
            eprintln!("Warning: no .crate file found in {}", package_dir.display());
        }
        for path in &crates {
            eprintln!("Created {}", path.display());
        }

        if !self.upload {
            eprintln!("Packages built. Run with --upload to publish to crates.io");
            return Ok(());
        }

        for krate in PUBLISHED_CRATES {
            eprintln!("Publishing {krate}...");
            cmd!(sh, "cargo publish -p {krate} {dirty...}")
                .run()
                .with_context(|| format!("failed to publish {krate}"))?;
        }
        eprintln!("Published. Add it with: cargo add rasw-core");
        Ok(())
    }
}
