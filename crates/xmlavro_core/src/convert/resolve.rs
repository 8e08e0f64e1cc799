use std::borrow::Cow;
use std::fmt;

use crate::convert::coerce::coerce_text;
use crate::convert::{ConvertError, RecordSchema, Result, Schema, Value};

/// Structural origin of a value: an element or an attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
	/// Local element or attribute name.
	pub name: Box<str>,
	/// True for attributes.
	pub attribute: bool,
}

impl Source {
	/// Reserved record field name collecting otherwise unmatched children.
	pub const WILDCARD: &'static str = "others";

	/// Element origin.
	pub fn element(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			attribute: false,
		}
	}

	/// Attribute origin.
	pub fn attribute(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			attribute: true,
		}
	}

	/// Parse `element <name>` / `attribute <name>` notation.
	pub fn parse(text: &str) -> Option<Self> {
		let (kind, name) = text.trim().split_once(' ')?;
		let name = name.trim();
		if name.is_empty() {
			return None;
		}
		match kind {
			"element" => Some(Self::element(name)),
			"attribute" => Some(Self::attribute(name)),
			_ => None,
		}
	}

	/// `element` or `attribute`.
	pub fn origin(&self) -> &'static str {
		if self.attribute { "attribute" } else { "element" }
	}

	fn matches(&self, name: &str, attribute: bool) -> bool {
		self.attribute == attribute && self.name.as_ref() == name
	}
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.origin(), self.name)
	}
}

/// Field selected for an element or attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField<'s> {
	/// Name under which the value is stored in the parent record.
	pub name: Cow<'s, str>,
	/// Schema of the value to materialize.
	pub schema: &'s Schema,
	/// Routed through the wildcard map; `schema` is the map value schema.
	pub wildcard: bool,
}

/// Maps structural names onto schema fields and coerces lexical text.
///
/// The decoder treats every operation as a side-effect-free lookup.
pub trait FieldResolver {
	/// Resolve `name` inside `container`.
	fn resolve_by_source<'s>(&self, container: &'s Schema, name: &str, attribute: bool) -> Result<ResolvedField<'s>>;

	/// Resolve an element standing for a whole value of `schema`: the
	/// document element, an array item, or a union branch.
	fn resolve_item<'s>(&self, schema: &'s Schema, name: &str) -> Result<ResolvedField<'s>>;

	/// Coerce lexical text into a value of `schema`.
	fn coerce(&self, schema: &Schema, text: &str) -> Result<Value>;
}

/// Default resolver following xml-avro source conventions.
///
/// Lookup order inside a record: declared `source`, same-named field without
/// a declared source, then the wildcard field. Document elements, array
/// items and union children first match a record (or union branch) named
/// like the element.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatumBuilder;

impl FieldResolver for DatumBuilder {
	fn resolve_by_source<'s>(&self, container: &'s Schema, name: &str, attribute: bool) -> Result<ResolvedField<'s>> {
		resolve_in(container, name, attribute).ok_or_else(|| ConvertError::FieldNotFound {
			name: name.to_owned(),
			origin: if attribute { "attribute" } else { "element" },
			container: container.label(),
		})
	}

	fn resolve_item<'s>(&self, schema: &'s Schema, name: &str) -> Result<ResolvedField<'s>> {
		match named_record(schema, name) {
			Some(field) => Ok(field),
			None => self.resolve_by_source(schema, name, false),
		}
	}

	fn coerce(&self, schema: &Schema, text: &str) -> Result<Value> {
		coerce_text(schema, text)
	}
}

fn resolve_in<'s>(container: &'s Schema, name: &str, attribute: bool) -> Option<ResolvedField<'s>> {
	match container {
		Schema::Union(branches) => match unwrap_optional(container) {
			Schema::Union(_) => branches
				.iter()
				.filter(|branch| !matches!(branch, Schema::Null))
				.find_map(|branch| resolve_in(branch, name, attribute)),
			only => resolve_in(only, name, attribute),
		},
		Schema::Array(element) => resolve_in(element, name, attribute),
		Schema::Record(record) => resolve_in_record(record, name, attribute),
		scalar => Some(ResolvedField {
			name: Cow::Owned(name.to_owned()),
			schema: scalar,
			wildcard: false,
		}),
	}
}

fn resolve_in_record<'s>(record: &'s RecordSchema, name: &str, attribute: bool) -> Option<ResolvedField<'s>> {
	let declared = record
		.fields
		.iter()
		.find(|field| field.source.as_ref().is_some_and(|source| source.matches(name, attribute)));
	let by_name = || {
		record
			.fields
			.iter()
			.find(|field| field.source.is_none() && field.name.as_ref() == name && field.name.as_ref() != Source::WILDCARD)
	};
	if let Some(field) = declared.or_else(by_name) {
		return Some(ResolvedField {
			name: Cow::Borrowed(field.name.as_ref()),
			schema: unwrap_optional(&field.schema),
			wildcard: false,
		});
	}

	let wildcard = record.wildcard()?;
	let schema = match &wildcard.schema {
		Schema::Map(value) => unwrap_optional(value),
		other => other,
	};
	Some(ResolvedField {
		name: Cow::Owned(name.to_owned()),
		schema,
		wildcard: true,
	})
}

fn named_record<'s>(schema: &'s Schema, name: &str) -> Option<ResolvedField<'s>> {
	let schema = unwrap_optional(schema);
	match schema {
		Schema::Union(branches) => branches.iter().find_map(|branch| named_record(branch, name)),
		Schema::Record(record) if record.name.as_ref() == name => Some(ResolvedField {
			name: Cow::Borrowed(record.name.as_ref()),
			schema,
			wildcard: false,
		}),
		_ => None,
	}
}

/// Collapse `["null", T]` style unions to `T`.
fn unwrap_optional(schema: &Schema) -> &Schema {
	if let Schema::Union(branches) = schema {
		let mut concrete = branches.iter().filter(|branch| !matches!(branch, Schema::Null));
		if let (Some(only), None) = (concrete.next(), concrete.next()) {
			return only;
		}
	}
	schema
}
