//! Argset probe binary.
//!
//! Feeds compiler-style arguments through a settings registry and prints
//! the settings that left their defaults, followed by residual operands.

use std::fmt;

use argset_settings::{ErrorLog, ImmutableSettings, MutableSettings, SettingInfo, Settings};
use clap::Parser;

mod catalog;
mod cmdline;
mod help;

/// Probe command line arguments.
#[derive(Parser, Debug)]
#[command(name = "argset")]
#[command(about = "Feed compiler-style arguments through a settings registry")]
struct Args {
	/// Use snapshot storage instead of in-place updates
	#[arg(long)]
	immutable: bool,

	/// Print settings on a single line
	#[arg(long)]
	concise: bool,

	/// List available settings and exit
	#[arg(long)]
	help_settings: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	/// Arguments to process
	#[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
	args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let log = ErrorLog::new();
	if args.immutable {
		let settings = ImmutableSettings::new(log.reporter(), catalog::definitions())?;
		if args.help_settings {
			print!("{}", help::render(&settings));
			return Ok(());
		}
		tracing::debug!(count = args.args.len(), "processing with snapshot registry");
		match cmdline::process_immutable(settings, &args.args) {
			Some((settings, residual)) => finish(&settings, &residual, args.concise, &log),
			None => fail(&log),
		}
	} else {
		let mut settings = MutableSettings::with_settings(log.reporter(), catalog::definitions())?;
		if args.help_settings {
			print!("{}", help::render(&settings));
			return Ok(());
		}
		tracing::debug!(count = args.args.len(), "processing with in-place registry");
		match cmdline::process_mutable(&mut settings, &args.args) {
			Some(residual) => finish(&settings, &residual, args.concise, &log),
			None => fail(&log),
		}
	}
}

fn finish<S>(settings: &S, residual: &[String], concise: bool, log: &ErrorLog) -> anyhow::Result<()>
where
	S: Settings + fmt::Display,
{
	if !settings.check_dependencies() {
		return fail(log);
	}

	for setting in settings.user_set_settings() {
		if let Some(msg) = setting.deprecation_message() {
			eprintln!("warning: {} is deprecated: {msg}", setting.name());
		}
	}

	if concise {
		println!("{}", settings.to_concise_string());
	} else {
		print!("{settings}");
	}
	for operand in residual {
		println!("{operand}");
	}
	Ok(())
}

fn fail(log: &ErrorLog) -> anyhow::Result<()> {
	let messages = log.take();
	for msg in &messages {
		eprintln!("error: {msg}");
	}
	anyhow::bail!("{} error(s) found", messages.len())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	if let Ok(filter) = EnvFilter::try_from_default_env() {
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.init();
		return;
	}

	tracing_subscriber::fmt()
		.with_max_level(if verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::WARN
		})
		.with_writer(std::io::stderr)
		.init();
}
