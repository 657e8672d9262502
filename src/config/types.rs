use std::ffi::OsStr;
use std::path::PathBuf;

/// Name of the script that defines `API_BASE_URL` at runtime.
pub const DEFAULT_CONFIG_SCRIPT: &str = "config.js";

/// Dependency-cache directory skipped during traversal.
pub const DEFAULT_EXCLUDE_DIR: &str = "node_modules";

/// The patcher's own filename, never patched.
pub const SELF_NAME: &str = "frontpatch";

/// Resolved settings for a patch run.
///
/// There is no settings file; the binary builds this from command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Directory to walk.
	pub root: PathBuf,

	/// Script referenced by the injected `<script>` tag. Also a reserved name.
	pub config_script: String,

	/// Extra directory-name substrings whose subtrees are skipped entirely.
	/// `DEFAULT_EXCLUDE_DIR` is always skipped as well.
	pub exclude_dirs: Vec<String>,

	/// Extra filenames that are never touched.
	pub skip_names: Vec<String>,

	/// Compute and report changes without writing them.
	pub dry_run: bool,

	/// Report per-file I/O failures and continue instead of aborting.
	pub keep_going: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			root: PathBuf::from("."),
			config_script: DEFAULT_CONFIG_SCRIPT.to_string(),
			exclude_dirs: Vec::new(),
			skip_names: Vec::new(),
			dry_run: false,
			keep_going: false,
		}
	}
}

impl Settings {
	/// All directory-name substrings that prune a subtree.
	pub fn excluded_dirs(&self) -> Vec<&str> {
		let mut names = vec![DEFAULT_EXCLUDE_DIR];
		names.extend(self.exclude_dirs.iter().map(String::as_str));
		names
	}

	/// All filenames that are excluded regardless of extension.
	pub fn reserved_names(&self) -> Vec<&str> {
		let mut names = vec![self.config_script.as_str(), SELF_NAME];
		names.extend(self.skip_names.iter().map(String::as_str));
		names
	}

	/// Whether `name` is one of the reserved filenames.
	///
	/// Compares OS strings so names that are not valid UTF-8 are handled too.
	pub fn is_reserved(&self, name: impl AsRef<OsStr>) -> bool {
		let name = name.as_ref();
		self.reserved_names()
			.iter()
			.any(|reserved| OsStr::new(reserved) == name)
	}
}
