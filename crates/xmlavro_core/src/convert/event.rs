use std::borrow::Cow;

/// One attribute of an element start event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
	/// Local attribute name.
	pub name: Cow<'a, str>,
	/// Unescaped attribute text.
	pub value: Cow<'a, str>,
}

impl<'a> Attribute<'a> {
	/// Build an attribute from borrowed or owned text.
	pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Hierarchical parse event consumed by the structural decoder.
///
/// A well-formed document is `DocumentStart`, a balanced sequence of
/// `ElementStart`/`Text`/`ElementEnd`, then `DocumentEnd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
	/// Beginning of a document.
	DocumentStart,
	/// Element start with its attributes in document order.
	ElementStart {
		/// Local element name.
		name: Cow<'a, str>,
		/// Attributes present on the element.
		attributes: Vec<Attribute<'a>>,
	},
	/// Character data; one element's text may arrive in several fragments.
	Text(Cow<'a, str>),
	/// Element end.
	ElementEnd {
		/// Local element name.
		name: Cow<'a, str>,
	},
	/// End of the document.
	DocumentEnd,
}

impl Event<'_> {
	/// Stable lowercase label.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::DocumentStart => "document_start",
			Self::ElementStart { .. } => "element_start",
			Self::Text(_) => "text",
			Self::ElementEnd { .. } => "element_end",
			Self::DocumentEnd => "document_end",
		}
	}
}
