use super::{parse_key, parse_value, read_document};
use anyhow::{Result, bail};
use jsondoc::{JsonValue, Key};
use jsondoc_core::json::stringify_pretty;
use std::io::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file to read, or "-" for stdin
	#[arg()]
	input: String,

	/// write KEY, creating it (arrays are padded with null); applied first
	#[arg(long, value_name = "KEY=VALUE", display_order = 1)]
	set: Vec<String>,

	/// write KEY only if it already exists; applied after --set
	#[arg(long, value_name = "KEY=VALUE", display_order = 1)]
	update: Vec<String>,

	/// remove KEY, shifting later array elements down; applied last
	#[arg(long, value_name = "KEY", display_order = 1)]
	delete: Vec<String>,

	/// indent the output
	#[arg(long, short, display_order = 2)]
	pretty: bool,
}

pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<()> {
	let input = read_document(&arguments.input)?;
	let document = input.document;
	let mutator = document.mutator();

	for assignment in &arguments.set {
		let (key, value) = split_assignment(assignment)?;
		if mutator.set(key, value) {
			log::info!("set {key}");
		}
	}
	for assignment in &arguments.update {
		let (key, value) = split_assignment(assignment)?;
		if !mutator.update(key, value) {
			log::warn!("skipped update of missing {key}");
		}
	}
	for key in &arguments.delete {
		let key = parse_key(key);
		if !mutator.delete(key) {
			log::warn!("skipped delete of missing {key}");
		}
	}

	let result = if input.is_array {
		JsonValue::Array(document.elements())
	} else {
		JsonValue::Object(document.fields())
	};
	let text = if arguments.pretty {
		stringify_pretty(&result)
	} else {
		result.stringify()
	};
	writeln!(out, "{text}")?;
	Ok(())
}

fn split_assignment(assignment: &str) -> Result<(Key<'_>, JsonValue)> {
	let Some((key, value)) = assignment.split_once('=') else {
		bail!("expected KEY=VALUE, got '{assignment}'");
	};
	Ok((parse_key(key), parse_value(value)))
}
