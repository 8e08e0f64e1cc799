use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::convert::coerce::coerce_text;
use crate::convert::{Attribute, ConvertError, Event, FieldResolver, RecordValue, Result, Schema, Sink, Source, Value};

/// Runtime limits and behavior switches for structural decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum schema stack depth, including the document level.
	pub max_depth: usize,
	/// Emit nested values as well as the outermost materialized value.
	pub emit_nested: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			emit_nested: true,
		}
	}
}

impl DecodeOptions {
	/// Preset that hands only outermost materialized values to the sink.
	pub fn top_level_only() -> Self {
		Self {
			emit_nested: false,
			..Self::default()
		}
	}
}

/// One open structural level on the schema stack.
#[derive(Debug)]
struct Level<'s> {
	schema: &'s Schema,
	element: Box<str>,
	field: Cow<'s, str>,
	wildcard: bool,
}

/// In-progress value of a materialized level.
#[derive(Debug)]
enum Frame {
	Record(RecordValue),
	Array(Vec<Value>),
	Map(BTreeMap<String, Value>),
	Text(String),
	Null,
}

impl Frame {
	fn label(&self) -> &'static str {
		match self {
			Self::Record(_) => "record",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
			Self::Text(_) => "text",
			Self::Null => "null",
		}
	}
}

/// Event-driven converter from hierarchical markup to schema-typed values.
///
/// Keeps a schema stack mirroring the open elements (plus the document
/// level) and a value stack for the levels being materialized.
/// Materialization starts at the element named `root_name` or below an
/// already materialized ancestor; everything else is walked but never
/// materialized. Each finalized value is handed to the sink in closing
/// order and then attached to its parent.
///
/// A decoder that returned an error mid-document must not be fed further
/// events for that document.
pub struct StructuralDecoder<'s, R, S> {
	root: &'s Schema,
	root_name: Box<str>,
	resolver: R,
	sink: S,
	options: DecodeOptions,
	schemas: Vec<Level<'s>>,
	values: Vec<Frame>,
}

impl<'s, R: FieldResolver, S: Sink> StructuralDecoder<'s, R, S> {
	/// Create a decoder for documents described by `root`.
	pub fn new(root: &'s Schema, root_name: impl Into<Box<str>>, resolver: R, sink: S) -> Self {
		Self {
			root,
			root_name: root_name.into(),
			resolver,
			sink,
			options: DecodeOptions::default(),
			schemas: Vec::new(),
			values: Vec::new(),
		}
	}

	/// Replace decode options.
	pub fn with_options(mut self, options: DecodeOptions) -> Self {
		self.options = options;
		self
	}

	/// Active decode options.
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Number of entries on the schema stack.
	pub fn schema_depth(&self) -> usize {
		self.schemas.len()
	}

	/// Number of levels currently being materialized.
	pub fn value_depth(&self) -> usize {
		self.values.len()
	}

	/// Borrow the sink.
	pub fn sink(&self) -> &S {
		&self.sink
	}

	/// Consume the decoder and return the sink.
	pub fn into_sink(self) -> S {
		self.sink
	}

	/// Dispatch one event to the matching operation.
	pub fn feed(&mut self, event: Event<'_>) -> Result<()> {
		match event {
			Event::DocumentStart => {
				self.start_document();
				Ok(())
			}
			Event::ElementStart { name, attributes } => self.start_element(&name, &attributes),
			Event::Text(text) => {
				self.text(&text);
				Ok(())
			}
			Event::ElementEnd { name } => self.end_element(&name),
			Event::DocumentEnd => self.end_document(),
		}
	}

	/// Reset both stacks and push the document-level schema.
	pub fn start_document(&mut self) {
		self.schemas.clear();
		self.values.clear();
		self.schemas.push(Level {
			schema: self.root,
			element: "".into(),
			field: Cow::Borrowed(""),
			wildcard: false,
		});
	}

	/// Open an element level.
	pub fn start_element(&mut self, name: &str, attributes: &[Attribute<'_>]) -> Result<()> {
		let parent = self.schemas.last().ok_or(ConvertError::SchemaStackEmpty { event: "element_start" })?.schema;
		if !parent.is_structural_parent() {
			return Err(ConvertError::UnsupportedParent {
				name: name.to_owned(),
				parent: parent.kind(),
			});
		}
		if self.schemas.len() >= self.options.max_depth {
			return Err(ConvertError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		let field = match parent {
			Schema::Array(element) => self.resolver.resolve_item(element, name)?,
			item if self.schemas.len() == 1 || matches!(item, Schema::Union(_)) => self.resolver.resolve_item(item, name)?,
			other => self.resolver.resolve_by_source(other, name, false)?,
		};
		let schema = field.schema;
		self.schemas.push(Level {
			schema,
			element: name.into(),
			field: field.name,
			wildcard: field.wildcard,
		});

		if !self.values.is_empty() || name == self.root_name.as_ref() {
			let frame = self.instantiate(name, attributes, schema)?;
			self.values.push(frame);
		}
		Ok(())
	}

	/// Append character data to the innermost text buffer, if any.
	///
	/// Text outside the materialized subtree, or between structured children,
	/// is discarded.
	pub fn text(&mut self, text: &str) {
		if let Some(Frame::Text(buffer)) = self.values.last_mut() {
			buffer.push_str(text);
		}
	}

	/// Close an element level, emitting and attaching its value.
	pub fn end_element(&mut self, name: &str) -> Result<()> {
		let level = self.schemas.pop().ok_or(ConvertError::SchemaStackEmpty { event: "element_end" })?;
		let Some(frame) = self.values.pop() else {
			return Ok(());
		};
		let value = finalize(&level, name, frame)?;

		match self.values.last_mut() {
			Some(parent) if !self.schemas.is_empty() => {
				if self.options.emit_nested {
					self.sink.accept(value.clone())?;
				}
				attach(parent, &level, value)
			}
			_ => self.sink.accept(value),
		}
	}

	/// Check that every opened level was closed.
	pub fn end_document(&mut self) -> Result<()> {
		if self.schemas.len() != 1 {
			return Err(ConvertError::UnbalancedDocument { depth: self.schemas.len() });
		}
		Ok(())
	}

	fn instantiate(&self, name: &str, attributes: &[Attribute<'_>], schema: &'s Schema) -> Result<Frame> {
		let frame = match schema {
			Schema::Union(_) => return Err(ConvertError::UnexpectedUnion { name: name.to_owned() }),
			Schema::Record(record) => {
				// Every declared field is present, in declaration order; unset fields stay null.
				let mut value = RecordValue::new(record.name.as_ref());
				for field in &record.fields {
					let initial = if field.name.as_ref() == Source::WILDCARD {
						Value::Map(BTreeMap::new())
					} else if matches!(field.schema, Schema::Array(_)) {
						Value::Array(Vec::new())
					} else {
						Value::Null
					};
					value.put(&field.name, initial);
				}

				for attribute in attributes {
					let field = self.resolver.resolve_by_source(schema, &attribute.name, true)?;
					if matches!(field.schema, Schema::Union(_)) {
						return Err(ConvertError::UnexpectedUnion {
							name: attribute.name.clone().into_owned(),
						});
					}
					let typed = self.resolver.coerce(field.schema, &attribute.value)?;
					if field.wildcard {
						put_wildcard(&mut value, &attribute.name, typed)?;
					} else {
						value.put(&field.name, typed);
					}
				}
				Frame::Record(value)
			}
			Schema::Array(_) => Frame::Array(Vec::new()),
			Schema::Map(_) => Frame::Map(BTreeMap::new()),
			Schema::Null => Frame::Null,
			Schema::Enum(_)
			| Schema::Fixed(_)
			| Schema::String
			| Schema::Bytes
			| Schema::Int
			| Schema::Long
			| Schema::Float
			| Schema::Double
			| Schema::Boolean => Frame::Text(String::new()),
		};
		Ok(frame)
	}
}

fn finalize(level: &Level<'_>, name: &str, frame: Frame) -> Result<Value> {
	match (level.schema, frame) {
		(Schema::Union(_), _) => Err(ConvertError::UnexpectedUnion { name: name.to_owned() }),
		(Schema::String, Frame::Text(text)) => Ok(Value::String(text)),
		(schema, Frame::Text(text)) => coerce_text(schema, &text),
		(_, Frame::Record(record)) => Ok(Value::Record(record)),
		(_, Frame::Array(items)) => Ok(Value::Array(items)),
		(_, Frame::Map(entries)) => Ok(Value::Map(entries)),
		(_, Frame::Null) => Ok(Value::Null),
	}
}

fn attach(parent: &mut Frame, level: &Level<'_>, value: Value) -> Result<()> {
	match parent {
		Frame::Array(items) => items.push(value),
		Frame::Map(entries) => {
			entries.insert(level.element.to_string(), value);
		}
		Frame::Record(record) if level.wildcard => put_wildcard(record, &level.element, value)?,
		Frame::Record(record) => record.put(&level.field, value),
		Frame::Text(_) | Frame::Null => {
			return Err(ConvertError::UnattachableValue {
				name: level.element.to_string(),
				parent: parent.label(),
			});
		}
	}
	Ok(())
}

/// Insert into the record's wildcard map; duplicate keys keep the last value.
fn put_wildcard(record: &mut RecordValue, key: &str, value: Value) -> Result<()> {
	match record.get_mut(Source::WILDCARD) {
		Some(Value::Map(entries)) => {
			entries.insert(key.to_owned(), value);
			Ok(())
		}
		Some(_) => Err(ConvertError::UnattachableValue {
			name: key.to_owned(),
			parent: "record",
		}),
		None => {
			record.put(Source::WILDCARD, Value::Map(BTreeMap::from([(key.to_owned(), value)])));
			Ok(())
		}
	}
}
