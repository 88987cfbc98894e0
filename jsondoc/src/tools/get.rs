use super::{parse_key, parse_value, read_document};
use anyhow::{Context, Result};
use jsondoc::{JsonValue, Key};
use std::io::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// JSON file to read, or "-" for stdin
	#[arg()]
	input: String,

	/// keys leading to the value; segments made of digits index arrays
	#[arg(required = true)]
	path: Vec<String>,

	/// how the value is read
	#[arg(long = "type", short = 't', value_enum, default_value_t = ValueType::Any, display_order = 1)]
	value_type: ValueType,

	/// fallback values, tried in order; empty and zero values are skipped
	#[arg(long = "default", short = 'd', value_name = "VALUE", display_order = 1)]
	defaults: Vec<String>,

	/// treat empty strings, false, 0 and null as missing
	#[arg(long, short = 's', display_order = 2)]
	strict: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ValueType {
	String,
	Bool,
	Float,
	Int,
	Any,
}

pub fn run(arguments: &Subcommand, out: &mut impl Write) -> Result<()> {
	let mut document = read_document(&arguments.input)?.document.with_strict_mode(arguments.strict);

	let (last, parents) = arguments.path.split_last().context("missing path")?;
	for segment in parents {
		document = document.narrow_any(parse_key(segment), &[]);
	}
	let key = parse_key(last);
	log::debug!("reading {key} as {:?}", arguments.value_type);

	let text = match arguments.value_type {
		ValueType::String => {
			let defaults: Vec<&str> = arguments.defaults.iter().map(String::as_str).collect();
			document.get_string(key, &defaults)
		}
		ValueType::Bool => document.get_bool(key, &parse_defaults::<bool>(&arguments.defaults)?).to_string(),
		ValueType::Float => document.get_f64(key, &parse_defaults::<f64>(&arguments.defaults)?).to_string(),
		ValueType::Int => document.get_i64(key, &parse_defaults::<i64>(&arguments.defaults)?).to_string(),
		ValueType::Any => read_any(&document, key, &arguments.defaults),
	};
	writeln!(out, "{text}")?;
	Ok(())
}

fn read_any(document: &jsondoc::Document, key: Key, defaults: &[String]) -> String {
	let defaults: Vec<JsonValue> = defaults.iter().map(|text| parse_value(text)).collect();
	document.get_any(key, &defaults).stringify()
}

fn parse_defaults<T>(defaults: &[String]) -> Result<Vec<T>>
where
	T: std::str::FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	defaults
		.iter()
		.map(|text| text.parse::<T>().with_context(|| format!("invalid default '{text}'")))
		.collect()
}
