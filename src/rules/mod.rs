//! Text rules for frontpatch.
//!
//! This module handles:
//! - Ordered literal replacements that route API calls through `API_BASE_URL`
//! - Injecting the config script tag into HTML documents

pub mod inject;
pub mod replacements;

pub use inject::{Injection, inject_config_script, references_script, script_tag};
pub use replacements::{API_REPLACEMENTS, Replacement, apply_replacements};
