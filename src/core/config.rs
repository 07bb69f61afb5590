//! Run configuration for the normalizer.
//!
//! There is no configuration file: a [`NormalizeConfig`] is assembled from the
//! command line (or built directly by library users) and validated before the
//! pipeline starts.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::errors::{NormalizeError, Result};

/// Default file suffix to scan for.
pub const DEFAULT_EXTENSION: &str = ".tex";

/// How U+00AD SOFT HYPHEN is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SoftHyphenMode {
    /// Replace with ASCII `-`
    #[default]
    Hyphen,
    /// Drop entirely
    Remove,
}

impl SoftHyphenMode {
    /// Replacement emitted for a soft hyphen, if any.
    #[inline]
    pub fn replacement(self) -> Option<char> {
        match self {
            Self::Hyphen => Some('-'),
            Self::Remove => None,
        }
    }

    /// Name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hyphen => "hyphen",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for SoftHyphenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoftHyphenMode {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hyphen" => Ok(Self::Hyphen),
            "remove" => Ok(Self::Remove),
            other => Err(NormalizeError::config_field(
                format!("soft hyphen mode must be 'hyphen' or 'remove', got '{other}'"),
                "soft_hyphen",
            )),
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Directory scanned recursively
    pub root: PathBuf,

    /// File name suffix to match, including the leading separator (e.g. `.tex`)
    pub extension: String,

    /// Soft hyphen handling
    pub soft_hyphen: SoftHyphenMode,

    /// Report changes without writing
    pub dry_run: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            soft_hyphen: SoftHyphenMode::default(),
            dry_run: false,
        }
    }
}

impl NormalizeConfig {
    /// Config for `root` with every other setting at its default.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the file suffix
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the soft hyphen mode
    pub fn with_soft_hyphen(mut self, mode: SoftHyphenMode) -> Self {
        self.soft_hyphen = mode;
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(NormalizeError::config_field(
                "extension must not be empty",
                "extension",
            ));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(NormalizeError::config_field(
                format!(
                    "extension must be a file name suffix, got '{}'",
                    self.extension
                ),
                "extension",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_command_line_defaults() {
        let config = NormalizeConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.extension, ".tex");
        assert_eq!(config.soft_hyphen, SoftHyphenMode::Hyphen);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn soft_hyphen_mode_parses_only_legal_values() {
        assert_eq!("hyphen".parse::<SoftHyphenMode>().unwrap(), SoftHyphenMode::Hyphen);
        assert_eq!("remove".parse::<SoftHyphenMode>().unwrap(), SoftHyphenMode::Remove);
        assert!("Hyphen".parse::<SoftHyphenMode>().is_err());
        assert!("drop".parse::<SoftHyphenMode>().is_err());
    }

    #[test]
    fn replacement_per_mode() {
        assert_eq!(SoftHyphenMode::Hyphen.replacement(), Some('-'));
        assert_eq!(SoftHyphenMode::Remove.replacement(), None);
    }

    #[test]
    fn validate_rejects_bad_extensions() {
        let empty = NormalizeConfig::new("docs").with_extension("");
        assert!(matches!(
            empty.validate(),
            Err(NormalizeError::Config { field: Some(ref f), .. }) if f == "extension"
        ));

        let nested = NormalizeConfig::new("docs").with_extension("sub/.tex");
        assert!(nested.validate().is_err());
    }

    #[test]
    fn serializes_mode_in_lowercase() {
        let config = NormalizeConfig::new("sections").with_soft_hyphen(SoftHyphenMode::Remove);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["soft_hyphen"], "remove");
        assert_eq!(json["extension"], ".tex");
    }
}
