use std::path::PathBuf;

use xmlavro::convert::{Field, Result, Schema};

use crate::cmd::json::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the parsed schema tree.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, json } = args;
	let schema = Schema::from_path(&path)?;

	if json {
		emit_json(&summarize(&schema));
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("root: {}", describe(&schema));
	for line in tree_lines(&schema) {
		println!("{line}");
	}
	Ok(())
}

#[derive(Debug, serde::Serialize)]
struct SchemaJson {
	kind: &'static str,
	name: Option<String>,
	fields: Vec<FieldJson>,
}

#[derive(Debug, serde::Serialize)]
struct FieldJson {
	name: String,
	schema: String,
	source: Option<String>,
	fields: Vec<FieldJson>,
}

fn summarize(schema: &Schema) -> SchemaJson {
	SchemaJson {
		kind: schema.kind().as_str(),
		name: schema.name().map(str::to_owned),
		fields: record_fields(schema).iter().map(summarize_field).collect(),
	}
}

fn summarize_field(field: &Field) -> FieldJson {
	FieldJson {
		name: field.name.to_string(),
		schema: describe(&field.schema),
		source: field.source.as_ref().map(ToString::to_string),
		fields: record_fields(&field.schema).iter().map(summarize_field).collect(),
	}
}

/// Fields of the first record reachable through arrays, maps, and unions.
fn record_fields(schema: &Schema) -> &[Field] {
	match schema {
		Schema::Record(record) => &record.fields,
		Schema::Array(inner) | Schema::Map(inner) => record_fields(inner),
		Schema::Union(branches) => branches
			.iter()
			.map(record_fields)
			.find(|fields| !fields.is_empty())
			.unwrap_or_default(),
		_ => &[],
	}
}

/// Compact type notation, e.g. `array<record book>` or `union[null, int]`.
fn describe(schema: &Schema) -> String {
	match schema {
		Schema::Array(inner) => format!("array<{}>", describe(inner)),
		Schema::Map(inner) => format!("map<{}>", describe(inner)),
		Schema::Union(branches) => {
			let branches: Vec<String> = branches.iter().map(describe).collect();
			format!("union[{}]", branches.join(", "))
		}
		Schema::Fixed(fixed) => format!("fixed {}({})", fixed.name, fixed.size),
		other => other.label(),
	}
}

fn tree_lines(schema: &Schema) -> Vec<String> {
	let mut lines = Vec::new();
	push_fields(record_fields(schema), 1, &mut lines);
	lines
}

fn push_fields(fields: &[Field], depth: usize, lines: &mut Vec<String>) {
	let indent = "  ".repeat(depth);
	for field in fields {
		let source = field.source.as_ref().map(|source| format!(" ({source})")).unwrap_or_default();
		lines.push(format!("{indent}{}: {}{source}", field.name, describe(&field.schema)));
		push_fields(record_fields(&field.schema), depth + 1, lines);
	}
}
