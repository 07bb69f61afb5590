//! CLI Argument Structures
//!
//! Flag definitions for the `normalize-hyphens` binary and their conversion
//! into a library [`NormalizeConfig`].

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use hyphen_normalizer::core::config::DEFAULT_EXTENSION;
use hyphen_normalizer::io::reports::ReportFormat;
use hyphen_normalizer::{NormalizeConfig, SoftHyphenMode};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Normalize hidden hyphenation and invisible joining characters in text files
#[derive(Parser, Debug)]
#[command(name = "normalize-hyphens")]
#[command(version = VERSION)]
#[command(about = "Normalize hidden/Unicode hyphenation artifacts in text sources")]
#[command(long_about = "
Scan a directory tree for files with a given suffix and normalize characters
that break text extraction and search in typeset documents:

  - Unicode hyphen/dash variants are replaced with ASCII '-'
  - zero-width spaces, joiners and BOMs are removed
  - SOFT HYPHEN (U+00AD) is converted to '-' or removed

Only files whose content changes are rewritten, each via an atomic replace.

Common Usage:

  # Normalize every .tex file under ./sections
  normalize-hyphens --root sections --ext .tex

  # Preview what would change without touching files
  normalize-hyphens --root . --ext .tex --dry-run
")]
pub struct Cli {
    /// Root directory to scan recursively
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// File name suffix to match, including the leading dot
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// How to handle U+00AD soft hyphen
    #[arg(long, value_enum, default_value_t = SoftHyphenMode::Hyphen)]
    pub soft_hyphen: SoftHyphenMode,

    /// Do not modify files; just report
    #[arg(long)]
    pub dry_run: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Pretty)]
    pub format: ReportFormat,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration, resolving the root to an absolute path
    /// when it exists.
    pub fn to_config(&self) -> NormalizeConfig {
        let root = fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());

        NormalizeConfig::new(root)
            .with_extension(self.ext.clone())
            .with_soft_hyphen(self.soft_hyphen)
            .with_dry_run(self.dry_run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["normalize-hyphens"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.ext, ".tex");
        assert_eq!(cli.soft_hyphen, SoftHyphenMode::Hyphen);
        assert!(!cli.dry_run);
        assert_eq!(cli.format, ReportFormat::Pretty);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "normalize-hyphens",
            "--root",
            "sections",
            "--ext",
            ".md",
            "--soft-hyphen",
            "remove",
            "--dry-run",
            "--format",
            "json",
        ])
        .unwrap();

        let config = cli.to_config();
        assert_eq!(config.extension, ".md");
        assert_eq!(config.soft_hyphen, SoftHyphenMode::Remove);
        assert!(config.dry_run);
        assert_eq!(cli.format, ReportFormat::Json);
    }

    #[test]
    fn rejects_unknown_soft_hyphen_mode() {
        assert!(Cli::try_parse_from(["normalize-hyphens", "--soft-hyphen", "keep"]).is_err());
    }
}
