//! # hyphen-normalizer
//!
//! Scans a directory tree for text files with a given suffix and normalizes
//! hidden or non-ASCII hyphenation that corrupts text extraction from typeset
//! documents:
//!
//! - **Dash-like** characters (U+2010..U+2014, U+2212, U+FE63, U+FF0D) become `-`
//! - **Invisible** joiners and zero-width characters (U+200B..U+200D, U+2060,
//!   U+FEFF) are removed
//! - **Soft hyphens** (U+00AD) become `-` or are removed, depending on the mode
//!
//! Only files whose content actually changes are rewritten, each through an
//! atomic temp-file-and-rename replace.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hyphen_normalizer::{run, NormalizeConfig, SoftHyphenMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NormalizeConfig::new("sections")
//!         .with_extension(".tex")
//!         .with_soft_hyphen(SoftHyphenMode::Remove)
//!         .with_dry_run(true);
//!
//!     let summary = run(&config)?;
//!     println!("{} of {} files need changes", summary.files_modified, summary.files_scanned);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Core normalization engine
pub mod core {
    //! Character tables, normalization, discovery and the run pipeline.

    pub mod charset;
    pub mod config;
    pub mod errors;
    pub mod file_discovery;
    pub mod file_utils;
    pub mod normalizer;
    pub mod pipeline;
}

// Reporting
pub mod io {
    //! Rendering of run results.

    #[allow(missing_docs)]
    pub mod reports;
}

// Re-export primary types for convenience
pub use crate::core::config::{NormalizeConfig, SoftHyphenMode};
pub use crate::core::errors::{NormalizeError, Result, ResultExt};
pub use crate::core::normalizer::{normalize_text, HitCounts};
pub use crate::core::pipeline::{process, run, run_with, FileOutcome, RunSummary};
