use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pubver::cli::{orchestration, Cli};
use pubver::ui::{ConsoleReporter, Reporter};

fn init_logging(verbose: bool) {
    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "pubver=debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<()> {
    orchestration::run(cli, reporter).with_context(|| format!("{} failed", cli.command.name()))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reporter = ConsoleReporter;
    if let Err(e) = run(&cli, &reporter) {
        reporter.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
