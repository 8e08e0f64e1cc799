use std::fmt;

use crate::convert::Source;

/// Avro-style schema node.
///
/// Nodes form an owned, immutable tree. The decoder borrows nodes for the
/// duration of a document and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
	/// `null`
	Null,
	/// `boolean`
	Boolean,
	/// 32-bit signed integer.
	Int,
	/// 64-bit signed integer.
	Long,
	/// 32-bit float.
	Float,
	/// 64-bit float.
	Double,
	/// Raw byte sequence.
	Bytes,
	/// UTF-8 text.
	String,
	/// Named enumeration.
	Enum(EnumSchema),
	/// Named fixed-size byte sequence.
	Fixed(FixedSchema),
	/// Homogeneous sequence of the boxed element schema.
	Array(Box<Schema>),
	/// String-keyed association of the boxed value schema.
	Map(Box<Schema>),
	/// Named record with ordered fields.
	Record(RecordSchema),
	/// Ordered branches.
	Union(Vec<Schema>),
}

/// Fieldless tag for each [`Schema`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
	/// [`Schema::Null`]
	Null,
	/// [`Schema::Boolean`]
	Boolean,
	/// [`Schema::Int`]
	Int,
	/// [`Schema::Long`]
	Long,
	/// [`Schema::Float`]
	Float,
	/// [`Schema::Double`]
	Double,
	/// [`Schema::Bytes`]
	Bytes,
	/// [`Schema::String`]
	String,
	/// [`Schema::Enum`]
	Enum,
	/// [`Schema::Fixed`]
	Fixed,
	/// [`Schema::Array`]
	Array,
	/// [`Schema::Map`]
	Map,
	/// [`Schema::Record`]
	Record,
	/// [`Schema::Union`]
	Union,
}

impl SchemaKind {
	/// Stable lowercase label, matching the Avro type name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::Int => "int",
			Self::Long => "long",
			Self::Float => "float",
			Self::Double => "double",
			Self::Bytes => "bytes",
			Self::String => "string",
			Self::Enum => "enum",
			Self::Fixed => "fixed",
			Self::Array => "array",
			Self::Map => "map",
			Self::Record => "record",
			Self::Union => "union",
		}
	}
}

impl fmt::Display for SchemaKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Record declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
	/// Record type name.
	pub name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<Field>,
}

/// One record field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	/// Field name in the produced record.
	pub name: Box<str>,
	/// Field value schema.
	pub schema: Schema,
	/// Declared XML origin, if any.
	pub source: Option<Source>,
}

/// Enumeration declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
	/// Enum type name.
	pub name: Box<str>,
	/// Declared symbols.
	pub symbols: Vec<Box<str>>,
}

/// Fixed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSchema {
	/// Fixed type name.
	pub name: Box<str>,
	/// Declared byte length.
	pub size: usize,
}

impl Schema {
	/// Return the variant tag.
	pub fn kind(&self) -> SchemaKind {
		match self {
			Self::Null => SchemaKind::Null,
			Self::Boolean => SchemaKind::Boolean,
			Self::Int => SchemaKind::Int,
			Self::Long => SchemaKind::Long,
			Self::Float => SchemaKind::Float,
			Self::Double => SchemaKind::Double,
			Self::Bytes => SchemaKind::Bytes,
			Self::String => SchemaKind::String,
			Self::Enum(_) => SchemaKind::Enum,
			Self::Fixed(_) => SchemaKind::Fixed,
			Self::Array(_) => SchemaKind::Array,
			Self::Map(_) => SchemaKind::Map,
			Self::Record(_) => SchemaKind::Record,
			Self::Union(_) => SchemaKind::Union,
		}
	}

	/// Build a record schema from `(name, schema)` pairs without sources.
	pub fn record<N, F, S>(name: N, fields: F) -> Self
	where
		N: Into<Box<str>>,
		F: IntoIterator<Item = (S, Schema)>,
		S: Into<Box<str>>,
	{
		Self::Record(RecordSchema {
			name: name.into(),
			fields: fields
				.into_iter()
				.map(|(name, schema)| Field {
					name: name.into(),
					schema,
					source: None,
				})
				.collect(),
		})
	}

	/// Build an array schema.
	pub fn array(element: Schema) -> Self {
		Self::Array(Box::new(element))
	}

	/// Build a map schema.
	pub fn map(value: Schema) -> Self {
		Self::Map(Box::new(value))
	}

	/// Return the declared name of named types (`record`, `enum`, `fixed`).
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Record(item) => Some(&item.name),
			Self::Enum(item) => Some(&item.name),
			Self::Fixed(item) => Some(&item.name),
			_ => None,
		}
	}

	/// Short label for diagnostics, e.g. `record Person` or `array`.
	pub fn label(&self) -> String {
		match self.name() {
			Some(name) => format!("{} {}", self.kind(), name),
			None => self.kind().as_str().to_owned(),
		}
	}

	/// Whether this schema can contain nested elements.
	pub fn is_structural_parent(&self) -> bool {
		matches!(self, Self::Union(_) | Self::Array(_) | Self::Record(_))
	}
}

impl RecordSchema {
	/// Look up a field by name.
	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|field| field.name.as_ref() == name)
	}

	/// Return the wildcard field, when declared.
	pub fn wildcard(&self) -> Option<&Field> {
		self.field(Source::WILDCARD)
	}
}

impl Field {
	/// Build a field with an explicit XML origin.
	pub fn with_source(name: impl Into<Box<str>>, schema: Schema, source: Source) -> Self {
		Self {
			name: name.into(),
			schema,
			source: Some(source),
		}
	}
}

#[cfg(test)]
mod tests;
