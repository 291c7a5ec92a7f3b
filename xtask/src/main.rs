#[cfg(not(test))]
use anyhow::Result;
use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for sigops")]
struct Cli {
    /// Build without the default `std` feature.
    #[arg(long, global = true)]
    no_std: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// Format, lint, then run the tests.
    Analyze,
    /// Run the criterion benchmarks, optionally filtered by name.
    Bench { filter: Option<String> },
    /// Run one of the demos.
    Demo {
        #[arg(default_value = "basic_usage")]
        name: String,
    },
}

#[cfg(not(test))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config(cli.no_std);

    match cli.command {
        Commands::Build => run(build_command(&cfg)),
        Commands::Test => run(test_command(&cfg)),
        Commands::Clippy => run(clippy_command()),
        Commands::Fmt => run(fmt_command()),
        Commands::Analyze => {
            run(fmt_command())?;
            run(clippy_command())?;
            run(test_command(&cfg))
        }
        Commands::Bench { filter } => run(bench_command(filter.as_deref())),
        Commands::Demo { name } => run(demo_command(&name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bench_with_filter() {
        let cli = Cli::parse_from(["xtask", "bench", "sort"]);
        match cli.command {
            Commands::Bench { filter } => assert_eq!(filter.as_deref(), Some("sort")),
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_global_no_std() {
        let cli = Cli::parse_from(["xtask", "build", "--no-std"]);
        assert!(cli.no_std);
        assert!(matches!(cli.command, Commands::Build));
    }
}
