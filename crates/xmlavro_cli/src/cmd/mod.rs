/// XML to JSON conversion command.
pub mod convert;
/// JSON rendering of decoded values.
pub mod json;
/// Schema inspection command.
pub mod schema;
