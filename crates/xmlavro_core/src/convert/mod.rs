mod avsc;
mod coerce;
mod decode;
mod error;
mod event;
mod resolve;
mod schema;
mod sink;
mod value;
mod xml;

/// Structural decoder and its options.
pub use decode::{DecodeOptions, StructuralDecoder};
/// Error and result aliases.
pub use error::{ConvertError, ErrorCategory, Result};
/// Markup events accepted by the decoder.
pub use event::{Attribute, Event};
/// Field resolution seam and its default implementation.
pub use resolve::{DatumBuilder, FieldResolver, ResolvedField, Source};
/// Schema representation.
pub use schema::{EnumSchema, Field, FixedSchema, RecordSchema, Schema, SchemaKind};
/// Destination for materialized values.
pub use sink::Sink;
/// Generic runtime value types.
pub use value::{FieldValue, RecordValue, Value};
/// XML reader adapter.
pub use xml::{FeedStats, decode_xml, decode_xml_str};
