use crate::config::Settings;
use crate::error::Result;
use crate::patch::{FileReport, patch_file};
use crate::walk::candidate_files;

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
	/// Files written back (or, in a dry run, that would be).
	pub patched: usize,

	/// Files read but left untouched.
	pub unchanged: usize,

	/// Non-fatal warnings across all files.
	pub warnings: usize,

	/// Files or directory entries skipped after an I/O failure (`keep_going` only).
	pub failed: usize,
}

impl RunSummary {
	/// Total files that were fully processed.
	pub fn processed(&self) -> usize {
		self.patched + self.unchanged
	}

	fn record(&mut self, report: &FileReport) {
		if report.changed() {
			self.patched += 1;
		} else {
			self.unchanged += 1;
		}
		self.warnings += report.warnings.len();
	}
}

/// Patch every candidate file under `settings.root`, one at a time.
///
/// `on_file` sees each file's outcome as soon as it is known, in traversal
/// order. Without `keep_going` the first I/O failure is returned as `Err`
/// after being passed to `on_file`; with it, failures are counted and the
/// walk continues.
pub fn patch_tree<F>(settings: &Settings, mut on_file: F) -> Result<RunSummary>
where
	F: FnMut(&Result<FileReport>),
{
	let mut summary = RunSummary::default();

	for candidate in candidate_files(settings)? {
		let outcome = candidate.and_then(|path| patch_file(&path, settings));
		on_file(&outcome);

		match outcome {
			Ok(report) => summary.record(&report),
			Err(_) if settings.keep_going => summary.failed += 1,
			Err(e) => return Err(e),
		}
	}

	Ok(summary)
}
