//! Run settings for frontpatch.
//!
//! Settings come from command-line flags only; this module holds the
//! resolved values and their defaults.

pub mod types;

pub use types::{DEFAULT_CONFIG_SCRIPT, DEFAULT_EXCLUDE_DIR, SELF_NAME, Settings};
