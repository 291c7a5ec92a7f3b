use anyhow::{bail, Context, Result};
use std::env;
use std::process::Command;

/// Environment variable holding extra crate features, space separated.
pub const FEATURES_ENV: &str = "SIGOPS_FEATURES";

/// Options used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
    /// Build without the default `std` feature.
    pub no_std: bool,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    fn apply(&self, cmd: &mut Command) {
        if self.no_std {
            cmd.arg("--no-default-features");
        }
        if let Some(f) = self.features_arg() {
            cmd.arg("--features").arg(f);
        }
    }
}

/// Read the build configuration from the environment.
pub fn detect_config(no_std: bool) -> BuildConfig {
    let extra = env::var(FEATURES_ENV).unwrap_or_default();
    compute_config(&extra, no_std)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(extra: &str, no_std: bool) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    // Without std the proptest-backed internal tests cannot build.
    if no_std {
        features.retain(|f| f != "std" && f != "internal-tests");
    }
    BuildConfig { features, no_std }
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "-p", "sigops"]);
    cfg.apply(&mut cmd);
    cmd
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["test", "-p", "sigops"]);
    cfg.apply(&mut cmd);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(filter: Option<&str>) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "sigops-bench"]);
    if let Some(filter) = filter {
        cmd.args(["--", filter]);
    }
    cmd
}

pub fn demo_command(name: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-p", "sigops", "--example", name]);
    if name == "verbose_logging" {
        cmd.args(["--features", "verbose-logging"]);
    }
    cmd
}

/// Run `cmd` to completion, failing if it exits unsuccessfully.
pub fn run(mut cmd: Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd.get_program(), status);
    }
    Ok(())
}
