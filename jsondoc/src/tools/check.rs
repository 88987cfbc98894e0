use super::{parse_key, read_document};
use anyhow::Result;
use jsondoc::Key;
use std::io::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file to read, or "-" for stdin
	#[arg()]
	input: String,

	/// top-level keys; keys made of digits index arrays
	#[arg(required = true)]
	keys: Vec<String>,

	/// check that every key is missing or null instead
	#[arg(long)]
	nil: bool,
}

/// Prints the outcome and returns it. The caller turns `false` into exit code 1.
pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<bool> {
	let document = read_document(&arguments.input)?.document;
	let keys: Vec<Key> = arguments.keys.iter().map(|key| parse_key(key)).collect();

	let passed = if arguments.nil {
		document.is_nil(keys)
	} else {
		document.has(keys)
	};
	writeln!(out, "{passed}")?;
	Ok(passed)
}
