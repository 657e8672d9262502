//! Frontpatch - CLI tool for pointing static frontend assets at a configurable API base URL.
//!
//! This library provides the core functionality for frontpatch, including:
//! - Ordered literal replacements that route API calls through `API_BASE_URL`
//! - Config script injection into HTML entry points
//! - Directory traversal with dependency-cache and reserved-name exclusion
//! - Per-file patching that only writes files whose content changed
//!
//! # Example
//!
//! ```no_run
//! use frontpatch_cli::config::Settings;
//! use frontpatch_cli::patch::patch_tree;
//!
//! let settings = Settings::default();
//! let summary = patch_tree(&settings, |outcome| {
//!     if let Ok(report) = outcome {
//!         println!("{}: {:?}", report.path.display(), report.status);
//!     }
//! })
//! .unwrap();
//!
//! println!("Patched {} of {} files", summary.patched, summary.processed());
//! ```

pub mod config;
pub mod error;
pub mod patch;
pub mod rules;
pub mod walk;

pub use error::{PatchError, Result};
