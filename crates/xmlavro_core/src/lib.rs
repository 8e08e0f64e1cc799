//! Streaming conversion of XML documents into Avro generic values.

/// Schema model, structural decoder, field resolution, and XML adapter.
pub mod convert;
