mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use std::{io::Write, process::ExitCode};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Read one value from a JSON document
	Get(tools::get::Subcommand),

	/// Check that keys exist, or that they are null
	Check(tools::check::Subcommand),

	/// Set, update or delete top-level entries and print the result
	Edit(tools::edit::Subcommand),
}

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli, &mut std::io::stdout().lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
	match &cli.command {
		Commands::Get(arguments) => tools::get::run(arguments, out)?,
		Commands::Check(arguments) => {
			if !tools::check::run(arguments, out)? {
				return Ok(ExitCode::FAILURE);
			}
		}
		Commands::Edit(arguments) => tools::edit::run(arguments, out)?,
	}
	Ok(ExitCode::SUCCESS)
}
