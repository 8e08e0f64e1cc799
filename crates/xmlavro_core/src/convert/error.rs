use thiserror::Error;

use crate::convert::SchemaKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors produced while loading schemas and converting XML documents.
///
/// Every error is fatal for the document being converted; the decoder does
/// not attempt recovery.
#[derive(Debug, Error)]
pub enum ConvertError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed XML reported by the event source.
	#[error("xml: {0}")]
	Xml(#[from] quick_xml::Error),
	/// Schema document is not valid JSON.
	#[error("schema json: {0}")]
	SchemaJson(#[from] serde_json::Error),
	/// Schema document is valid JSON but not a supported schema.
	#[error("invalid schema: {reason}")]
	InvalidSchema {
		/// Human-readable rejection reason.
		reason: String,
	},
	/// An event arrived while the schema stack was empty.
	#[error("schema stack is empty at {event}")]
	SchemaStackEmpty {
		/// Event that found the stack empty.
		event: &'static str,
	},
	/// Parent schema type cannot hold structural children.
	#[error("element {name} cannot nest under {parent}: expected union, array or record")]
	UnsupportedParent {
		/// Child element name.
		name: String,
		/// Offending parent schema kind.
		parent: SchemaKind,
	},
	/// Document ended with unclosed levels on the schema stack.
	#[error("expected schema stack size 1 at document end, got {depth}")]
	UnbalancedDocument {
		/// Schema stack depth observed at document end.
		depth: usize,
	},
	/// A finalized value could not be stored into its parent frame.
	#[error("cannot attach {name} into parent {parent}")]
	UnattachableValue {
		/// Child element name.
		name: String,
		/// Parent frame label.
		parent: &'static str,
	},
	/// Element or attribute has no corresponding schema field.
	#[error("no field for {origin} {name} in {container}")]
	FieldNotFound {
		/// Structural name being resolved.
		name: String,
		/// `element` or `attribute`.
		origin: &'static str,
		/// Label of the container schema searched.
		container: String,
	},
	/// A union schema reached instantiation or finalization unresolved.
	#[error("unexpected union type at {name}")]
	UnexpectedUnion {
		/// Element or attribute name.
		name: String,
	},
	/// Lexical text does not parse as the declared numeric type.
	#[error("cannot coerce {text:?} to {kind}")]
	Coercion {
		/// Target schema kind.
		kind: SchemaKind,
		/// Offending lexical text.
		text: String,
	},
	/// Lexical text cannot be coerced into a structured schema kind.
	#[error("cannot coerce text to structured type {kind}")]
	UnsupportedCoercion {
		/// Target schema kind.
		kind: SchemaKind,
	},
	/// Schema stack grew beyond the configured ceiling.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
	/// Sink refused a completed value.
	#[error("sink rejected value: {reason}")]
	Sink {
		/// Sink-provided reason.
		reason: String,
	},
}

/// Coarse error classes used by callers that only care about the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
	/// Stack underflow, leftover levels, or unsupported nesting.
	Structural,
	/// Unresolvable element or attribute name.
	FieldNotFound,
	/// Union schema reached a point where a concrete branch is required.
	UnexpectedUnion,
	/// Lexical text rejected by a numeric or structured coercion.
	Coercion,
	/// IO, XML, schema loading, or sink failure outside the decoder proper.
	Input,
}

impl ConvertError {
	/// Classify this error.
	pub fn category(&self) -> ErrorCategory {
		match self {
			Self::SchemaStackEmpty { .. }
			| Self::UnsupportedParent { .. }
			| Self::UnbalancedDocument { .. }
			| Self::UnattachableValue { .. }
			| Self::DepthExceeded { .. } => ErrorCategory::Structural,
			Self::FieldNotFound { .. } => ErrorCategory::FieldNotFound,
			Self::UnexpectedUnion { .. } => ErrorCategory::UnexpectedUnion,
			Self::Coercion { .. } | Self::UnsupportedCoercion { .. } => ErrorCategory::Coercion,
			Self::Io(_) | Self::Xml(_) | Self::SchemaJson(_) | Self::InvalidSchema { .. } | Self::Sink { .. } => ErrorCategory::Input,
		}
	}
}
