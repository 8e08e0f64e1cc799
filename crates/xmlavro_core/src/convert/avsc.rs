use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::convert::{ConvertError, EnumSchema, Field, FixedSchema, RecordSchema, Result, Schema, Source};

/// Raw Avro JSON schema notation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SchemaDef {
	Name(String),
	Union(Vec<SchemaDef>),
	Complex(Box<ComplexDef>),
}

#[derive(Debug, Deserialize)]
struct ComplexDef {
	#[serde(rename = "type")]
	kind: SchemaDef,
	name: Option<String>,
	fields: Option<Vec<FieldDef>>,
	symbols: Option<Vec<String>>,
	size: Option<usize>,
	items: Option<SchemaDef>,
	values: Option<SchemaDef>,
}

#[derive(Debug, Deserialize)]
struct FieldDef {
	name: String,
	#[serde(rename = "type")]
	schema: SchemaDef,
	source: Option<String>,
}

impl Schema {
	/// Parse an Avro JSON schema (`.avsc` notation).
	///
	/// Named types may be referenced by name after their definition. The
	/// optional field attribute `"source": "element <name>"` or
	/// `"source": "attribute <name>"` declares the XML origin of a field.
	pub fn from_json(text: &str) -> Result<Self> {
		let def: SchemaDef = serde_json::from_str(text)?;
		SchemaBuilder::default().build(&def)
	}

	/// Read and parse an Avro JSON schema file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let text = fs::read_to_string(path)?;
		Self::from_json(&text)
	}
}

#[derive(Default)]
struct SchemaBuilder {
	named: HashMap<String, Schema>,
}

impl SchemaBuilder {
	fn build(&mut self, def: &SchemaDef) -> Result<Schema> {
		match def {
			SchemaDef::Name(name) => self.build_name(name),
			SchemaDef::Union(branches) => {
				let mut out = Vec::with_capacity(branches.len());
				for branch in branches {
					let schema = self.build(branch)?;
					if matches!(schema, Schema::Union(_)) {
						return Err(invalid("unions may not immediately contain unions"));
					}
					out.push(schema);
				}
				Ok(Schema::Union(out))
			}
			SchemaDef::Complex(item) => self.build_complex(item),
		}
	}

	fn build_name(&self, name: &str) -> Result<Schema> {
		if let Some(schema) = primitive(name) {
			return Ok(schema);
		}
		self.named.get(name).cloned().ok_or_else(|| invalid(format!("unknown type {name}")))
	}

	fn build_complex(&mut self, item: &ComplexDef) -> Result<Schema> {
		let keyword = match &item.kind {
			SchemaDef::Name(keyword) => keyword.as_str(),
			nested => return self.build(nested),
		};

		let schema = match keyword {
			"record" | "error" => {
				let name = required_name(item, keyword)?;
				let defs = item.fields.as_ref().ok_or_else(|| invalid(format!("record {name} has no fields")))?;
				let mut fields = Vec::with_capacity(defs.len());
				for def in defs {
					let source = match &def.source {
						Some(text) => Some(Source::parse(text).ok_or_else(|| invalid(format!("field {}: bad source {text:?}", def.name)))?),
						None => None,
					};
					fields.push(Field {
						name: def.name.as_str().into(),
						schema: self.build(&def.schema)?,
						source,
					});
				}
				Schema::Record(RecordSchema { name: name.into(), fields })
			}
			"enum" => {
				let name = required_name(item, keyword)?;
				let symbols = item.symbols.as_ref().ok_or_else(|| invalid(format!("enum {name} has no symbols")))?;
				Schema::Enum(EnumSchema {
					name: name.into(),
					symbols: symbols.iter().map(|symbol| symbol.as_str().into()).collect(),
				})
			}
			"fixed" => {
				let name = required_name(item, keyword)?;
				let size = item.size.ok_or_else(|| invalid(format!("fixed {name} has no size")))?;
				Schema::Fixed(FixedSchema { name: name.into(), size })
			}
			"array" => {
				let items = item.items.as_ref().ok_or_else(|| invalid("array has no items"))?;
				Schema::array(self.build(items)?)
			}
			"map" => {
				let values = item.values.as_ref().ok_or_else(|| invalid("map has no values"))?;
				Schema::map(self.build(values)?)
			}
			other => return self.build_name(other),
		};

		if let Some(name) = schema.name() {
			self.named.insert(name.to_owned(), schema.clone());
		}
		Ok(schema)
	}
}

fn required_name<'a>(item: &'a ComplexDef, keyword: &str) -> Result<&'a str> {
	item.name.as_deref().ok_or_else(|| invalid(format!("{keyword} is missing a name")))
}

fn primitive(name: &str) -> Option<Schema> {
	let schema = match name {
		"null" => Schema::Null,
		"boolean" => Schema::Boolean,
		"int" => Schema::Int,
		"long" => Schema::Long,
		"float" => Schema::Float,
		"double" => Schema::Double,
		"bytes" => Schema::Bytes,
		"string" => Schema::String,
		_ => return None,
	};
	Some(schema)
}

fn invalid(reason: impl Into<String>) -> ConvertError {
	ConvertError::InvalidSchema { reason: reason.into() }
}
