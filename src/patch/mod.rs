//! Per-file patching for frontpatch.
//!
//! `transform` is the pure content rewrite; `patch_file` wraps it with the
//! read, compare and conditional write for one file on disk.

pub mod run;

pub use run::{RunSummary, patch_tree};

use crate::config::Settings;
use crate::error::{PatchError, Result};
use crate::rules::{API_REPLACEMENTS, Injection, apply_replacements, inject_config_script};
use std::path::{Path, PathBuf};

/// Result of transforming one file's content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
	/// Content after injection and replacements.
	pub content: String,

	/// True when the file is HTML and has no `</head>` to inject before.
	pub head_tag_missing: bool,
}

/// What happened to a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
	/// Content changed and was written back.
	Patched,

	/// Content changed but was not written (dry run).
	WouldPatch,

	/// Content was identical after transformation; nothing written.
	Unchanged,
}

/// Report for a single processed file.
#[derive(Debug)]
pub struct FileReport {
	pub path: PathBuf,
	pub status: FileStatus,

	/// Non-fatal problems, e.g. `PatchError::HeadTagMissing`.
	pub warnings: Vec<PatchError>,
}

impl FileReport {
	/// Whether the file's content differs from what was read.
	pub fn changed(&self) -> bool {
		self.status != FileStatus::Unchanged
	}
}

/// Whether a filename is treated as HTML for script injection.
pub fn is_html(file_name: &str) -> bool {
	file_name.ends_with(".html")
}

/// Rewrite `content` of the file named `file_name`.
///
/// HTML files get the config script tag first; every file then goes through
/// the API replacements regardless of whether injection succeeded.
pub fn transform(content: &str, file_name: &str, config_script: &str) -> Transformed {
	let mut head_tag_missing = false;

	let injected = if is_html(file_name) {
		match inject_config_script(content, config_script) {
			Injection::Inserted(new_content) => Some(new_content),
			Injection::AlreadyPresent => None,
			Injection::HeadTagMissing => {
				head_tag_missing = true;
				None
			}
		}
	} else {
		None
	};

	let content = apply_replacements(injected.as_deref().unwrap_or(content), &API_REPLACEMENTS);

	Transformed {
		content,
		head_tag_missing,
	}
}

/// Read, transform and (if changed) rewrite one file.
pub fn patch_file(path: &Path, settings: &Settings) -> Result<FileReport> {
	let original = std::fs::read_to_string(path).map_err(|source| PatchError::ReadFailed {
		path: path.to_path_buf(),
		source,
	})?;

	let file_name = path
		.file_name()
		.map(|n| n.to_string_lossy())
		.unwrap_or_default();

	let transformed = transform(&original, &file_name, &settings.config_script);

	let mut warnings = Vec::new();
	if transformed.head_tag_missing {
		warnings.push(PatchError::HeadTagMissing {
			path: path.to_path_buf(),
		});
	}

	let status = if transformed.content == original {
		FileStatus::Unchanged
	} else if settings.dry_run {
		FileStatus::WouldPatch
	} else {
		std::fs::write(path, &transformed.content).map_err(|source| PatchError::WriteFailed {
			path: path.to_path_buf(),
			source,
		})?;
		FileStatus::Patched
	};

	Ok(FileReport {
		path: path.to_path_buf(),
		status,
		warnings,
	})
}
