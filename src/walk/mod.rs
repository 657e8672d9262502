//! Candidate discovery for frontpatch.
//!
//! Walks the root directory, pruning excluded directories, and yields every
//! `.html` and `.js` file that is not a reserved name.

use crate::config::Settings;
use crate::error::{PatchError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions (as filename suffixes) eligible for patching.
pub const CANDIDATE_SUFFIXES: [&str; 2] = [".html", ".js"];

/// Whether a file with this name should be patched.
///
/// The suffix is matched on the raw name so files whose names are not valid
/// UTF-8 are still candidates.
pub fn is_candidate(file_name: &OsStr, settings: &Settings) -> bool {
	let bytes = file_name.as_encoded_bytes();
	CANDIDATE_SUFFIXES
		.iter()
		.any(|suffix| bytes.ends_with(suffix.as_bytes()))
		&& !settings.is_reserved(file_name)
}

/// Whether a directory should be skipped along with everything below it.
///
/// Matches when any excluded name occurs anywhere in the directory's path
/// relative to the root. The root itself is never excluded.
pub fn is_excluded_dir(dir: &Path, root: &Path, exclude_dirs: &[&str]) -> bool {
	let relative = dir.strip_prefix(root).unwrap_or(dir);
	if relative.as_os_str().is_empty() {
		return false;
	}
	let relative = relative.to_string_lossy();
	exclude_dirs
		.iter()
		.any(|name| !name.is_empty() && relative.contains(name))
}

fn is_file(entry: &DirEntry) -> bool {
	entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Iterate over candidate files under `settings.root`.
///
/// Files are yielded lazily so each one can be patched before the next is
/// discovered. Directory read failures are yielded as `WalkFailed`.
pub fn candidate_files(settings: &Settings) -> Result<impl Iterator<Item = Result<PathBuf>> + '_> {
	let root = settings.root.as_path();
	if !root.is_dir() {
		return Err(PatchError::InvalidRoot {
			path: root.to_path_buf(),
		});
	}

	let exclude_dirs = settings.excluded_dirs();
	let walker = WalkDir::new(root).into_iter().filter_entry(move |entry| {
		!(entry.file_type().is_dir() && is_excluded_dir(entry.path(), root, &exclude_dirs))
	});

	Ok(walker.filter_map(move |entry| match entry {
		Ok(entry) => {
			if is_file(&entry) && is_candidate(entry.file_name(), settings) {
				Some(Ok(entry.into_path()))
			} else {
				None
			}
		}
		Err(source) => {
			let path = source
				.path()
				.map(Path::to_path_buf)
				.unwrap_or_else(|| root.to_path_buf());
			Some(Err(PatchError::WalkFailed { path, source }))
		}
	}))
}
