use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use frontpatch_cli::PatchError;
use frontpatch_cli::config::{DEFAULT_CONFIG_SCRIPT, Settings};
use frontpatch_cli::patch::{FileReport, FileStatus, patch_tree};
use frontpatch_cli::rules::{API_REPLACEMENTS, script_tag};

#[derive(Parser)]
#[command(name = "frontpatch")]
#[command(
	author,
	version,
	about = "CLI tool for pointing static frontend assets at a configurable API base URL"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Directory to patch (defaults to the current directory)
	#[arg(long, value_name = "DIR", default_value = ".")]
	root: PathBuf,

	/// Script that defines API_BASE_URL; injected into HTML and never patched
	#[arg(long, value_name = "NAME", default_value = DEFAULT_CONFIG_SCRIPT, global = true)]
	config_script: String,

	/// Skip directories whose path contains this name, in addition to node_modules (repeatable)
	#[arg(long = "exclude-dir", value_name = "NAME")]
	exclude_dirs: Vec<String>,

	/// Never patch files with this name (repeatable)
	#[arg(long = "skip", value_name = "NAME")]
	skip_names: Vec<String>,

	/// Report what would change without writing anything
	#[arg(long)]
	dry_run: bool,

	/// Like --dry-run, but exit with failure if any file would change
	#[arg(long, conflicts_with = "dry_run")]
	check: bool,

	/// Report unreadable or unwritable files and continue
	#[arg(long)]
	keep_going: bool,

	/// Don't print a line for files that need no changes
	#[arg(short, long)]
	quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// List the replacement rules and the injected script tag
	Rules,
}

impl Cli {
	fn settings(&self) -> Settings {
		Settings {
			root: self.root.clone(),
			config_script: self.config_script.clone(),
			exclude_dirs: self.exclude_dirs.clone(),
			skip_names: self.skip_names.clone(),
			dry_run: self.dry_run || self.check,
			keep_going: self.keep_going,
		}
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if let Some(Commands::Rules) = cli.command {
		return handle_rules(&cli.config_script);
	}

	handle_patch(&cli)
}

fn handle_rules(config_script: &str) -> Result<ExitCode> {
	println!("Replacement rules (applied in order):\n");
	for (i, rule) in API_REPLACEMENTS.iter().enumerate() {
		println!("  {}. {}  ->  {}", i + 1, rule.search, rule.replace);
	}
	println!();
	println!("Injected before </head> in .html files:");
	print!("{}", script_tag(config_script));
	Ok(ExitCode::SUCCESS)
}

fn handle_patch(cli: &Cli) -> Result<ExitCode> {
	let settings = cli.settings();

	let summary = patch_tree(&settings, |outcome| match outcome {
		Ok(report) => print_report(report, cli.quiet),
		Err(e) if settings.keep_going => print_error(e),
		// Fatal errors are reported by main with their full context chain.
		Err(_) => {}
	})
	.with_context(|| format!("Failed to patch {}", settings.root.display()))?;

	if summary.warnings > 0 {
		eprintln!("{} warning(s)", summary.warnings);
	}

	if cli.check && summary.patched > 0 {
		eprintln!("{} file(s) would be patched", summary.patched);
		return Ok(ExitCode::FAILURE);
	}

	if summary.failed > 0 {
		eprintln!("{} file(s) could not be processed", summary.failed);
		return Ok(ExitCode::FAILURE);
	}

	Ok(ExitCode::SUCCESS)
}

fn print_error(e: &PatchError) {
	match std::error::Error::source(e) {
		Some(source) => eprintln!("error: {}: {}", e, source),
		None => eprintln!("error: {}", e),
	}
}

fn print_report(report: &FileReport, quiet: bool) {
	for warning in &report.warnings {
		eprintln!("Warning: {}", warning);
	}

	let path = report.path.display();
	match report.status {
		FileStatus::Patched => println!("Patched {}", path),
		FileStatus::WouldPatch => println!("Would patch {}", path),
		FileStatus::Unchanged if !quiet => println!("No changes for {}", path),
		FileStatus::Unchanged => {}
	}
}
