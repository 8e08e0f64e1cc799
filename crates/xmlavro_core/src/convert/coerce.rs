//! Lexical text to typed value coercion.
//!
//! Shared by eager attribute coercion and lazy element-text finalization so
//! both produce identical values for identical input.

use std::str::FromStr;

use crate::convert::{ConvertError, Result, Schema, SchemaKind, Value};

/// Coerce `text` into a value of `schema`.
///
/// Numeric kinds fail on malformed or out-of-range literals. `boolean` is
/// lenient: only `"true"` and `"1"` are true. `fixed` copies the UTF-8 bytes
/// of the text and ignores the declared size.
pub(crate) fn coerce_text(schema: &Schema, text: &str) -> Result<Value> {
	let value = match schema {
		Schema::Null => Value::Null,
		Schema::Boolean => Value::Boolean(text == "true" || text == "1"),
		Schema::Int => Value::Int(parse_int(text, SchemaKind::Int)?),
		Schema::Long => Value::Long(parse_int(text, SchemaKind::Long)?),
		Schema::Float => Value::Float(parse_float(text, SchemaKind::Float)?),
		Schema::Double => Value::Double(parse_float(text, SchemaKind::Double)?),
		Schema::Bytes => Value::Bytes(text.as_bytes().to_vec()),
		Schema::String => Value::String(text.to_owned()),
		Schema::Enum(_) => Value::Enum(text.into()),
		// TODO: honor `size` once fixed fields declare a lexical encoding (hex or base64).
		Schema::Fixed(_) => Value::Fixed(text.as_bytes().to_vec()),
		Schema::Array(_) | Schema::Map(_) | Schema::Record(_) | Schema::Union(_) => {
			return Err(ConvertError::UnsupportedCoercion { kind: schema.kind() });
		}
	};
	Ok(value)
}

fn parse_int<T: FromStr>(text: &str, kind: SchemaKind) -> Result<T> {
	text.parse::<T>().map_err(|_| coercion(kind, text))
}

// Floats tolerate surrounding whitespace, integers do not. Accepted forms are
// those of `f32`/`f64::from_str`: `inf`, `infinity` and `nan` in any case are
// allowed, type suffixes such as `1.5f` or `2d` are rejected.
fn parse_float<T: FromStr>(text: &str, kind: SchemaKind) -> Result<T> {
	text.trim().parse::<T>().map_err(|_| coercion(kind, text))
}

fn coercion(kind: SchemaKind, text: &str) -> ConvertError {
	ConvertError::Coercion { kind, text: text.to_owned() }
}

#[cfg(test)]
mod tests;
