use std::path::PathBuf;

/// Library-level structured errors for frontpatch.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
	/// Non-fatal: reported as a warning in a `FileReport`, never returned as `Err`.
	#[error("No </head> tag in {path}")]
	HeadTagMissing { path: PathBuf },

	#[error("Failed to read file: {path}")]
	ReadFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	WriteFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to walk directory: {path}")]
	WalkFailed {
		path: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Root is not a directory: {path}")]
	InvalidRoot { path: PathBuf },
}

/// Result type alias using PatchError.
pub type Result<T> = std::result::Result<T, PatchError>;
