//! Command execution for the CLI.

use anyhow::Context;
use tracing::debug;

use hyphen_normalizer::run_with;

use crate::cli::args::Cli;
use crate::cli::output::{print_change, print_summary};

/// Scan, normalize and report.
pub fn normalize_command(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.to_config();
    debug!("Running with configuration: {:?}", config);

    let summary = run_with(&config, |outcome| {
        print_change(outcome, config.dry_run, cli.format);
    })
    .with_context(|| format!("Normalization under {} aborted", config.root.display()))?;

    print_summary(&summary, cli.format)
}
