use std::collections::BTreeMap;

/// Completed, schema-typed value handed to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Boolean(bool),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	Bytes(Vec<u8>),
	String(String),
	Enum(Box<str>),
	Fixed(Vec<u8>),
	Array(Vec<Value>),
	Map(BTreeMap<String, Value>),
	Record(RecordValue),
}

/// Record value with fields in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	pub name: Box<str>,
	pub fields: Vec<FieldValue>,
}

/// One named field of a [`RecordValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	pub name: Box<str>,
	pub value: Value,
}

impl Value {
	/// Short label of the value variant.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Boolean(_) => "boolean",
			Self::Int(_) => "int",
			Self::Long(_) => "long",
			Self::Float(_) => "float",
			Self::Double(_) => "double",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "string",
			Self::Enum(_) => "enum",
			Self::Fixed(_) => "fixed",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
			Self::Record(_) => "record",
		}
	}
}

impl RecordValue {
	/// Create an empty record of the given type name.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// Look up a field value by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Mutable field lookup.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
		self.fields.iter_mut().find(|field| field.name.as_ref() == name).map(|field| &mut field.value)
	}

	/// Store `value` under `name`, replacing an existing entry in place.
	pub fn put(&mut self, name: &str, value: Value) {
		match self.get_mut(name) {
			Some(slot) => *slot = value,
			None => self.fields.push(FieldValue { name: name.into(), value }),
		}
	}
}

#[cfg(test)]
mod tests;
