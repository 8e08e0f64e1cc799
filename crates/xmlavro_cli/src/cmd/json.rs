use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use xmlavro::convert::Value;

/// Borrowed [`Value`] serialized in Avro JSON style.
///
/// Records keep field order. Bytes and fixed render as one char per byte
/// (ISO-8859-1), and non-finite floats render as `null`.
pub struct JsonValue<'a>(pub &'a Value);

impl Serialize for JsonValue<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.0 {
			Value::Null => serializer.serialize_unit(),
			Value::Boolean(value) => serializer.serialize_bool(*value),
			Value::Int(value) => serializer.serialize_i32(*value),
			Value::Long(value) => serializer.serialize_i64(*value),
			Value::Float(value) => serializer.serialize_f32(*value),
			Value::Double(value) => serializer.serialize_f64(*value),
			Value::Bytes(bytes) | Value::Fixed(bytes) => serializer.serialize_str(&latin1(bytes)),
			Value::String(text) => serializer.serialize_str(text),
			Value::Enum(symbol) => serializer.serialize_str(symbol),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(&JsonValue(item))?;
				}
				seq.end()
			}
			Value::Map(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, value) in entries {
					map.serialize_entry(key, &JsonValue(value))?;
				}
				map.end()
			}
			Value::Record(record) => {
				let mut map = serializer.serialize_map(Some(record.fields.len()))?;
				for field in &record.fields {
					map.serialize_entry(field.name.as_ref(), &JsonValue(&field.value))?;
				}
				map.end()
			}
		}
	}
}

fn latin1(bytes: &[u8]) -> String {
	bytes.iter().map(|&byte| char::from(byte)).collect()
}

/// Print a serializable payload as pretty JSON on stdout.
pub fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to serialize json: {err}"),
	}
}
