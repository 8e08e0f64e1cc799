use std::borrow::Cow;
use std::io::{self, BufRead};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event as XmlEvent};

use crate::convert::{Attribute, FieldResolver, Result, Sink, StructuralDecoder};

/// Event counts observed while feeding one XML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
	/// Element start events, including empty elements.
	pub elements: usize,
	/// Text and CDATA fragments.
	pub text_fragments: usize,
}

/// Drive `decoder` with the events of one XML document read from `input`.
///
/// Element and attribute names are reduced to their local part, namespace
/// declarations are skipped, and empty elements produce a start and an end.
pub fn decode_xml<I, R, S>(input: I, decoder: &mut StructuralDecoder<'_, R, S>) -> Result<FeedStats>
where
	I: BufRead,
	R: FieldResolver,
	S: Sink,
{
	let mut reader = Reader::from_reader(input);
	let mut buf = Vec::new();
	let mut stats = FeedStats::default();

	decoder.start_document();
	tracing::debug!("xml document start");

	loop {
		match reader.read_event_into(&mut buf)? {
			XmlEvent::Start(start) => {
				let (name, attributes) = element_start(&start)?;
				decoder.start_element(&name, &attributes)?;
				stats.elements += 1;
			}
			XmlEvent::Empty(start) => {
				let (name, attributes) = element_start(&start)?;
				decoder.start_element(&name, &attributes)?;
				decoder.end_element(&name)?;
				stats.elements += 1;
			}
			XmlEvent::End(end) => {
				let name = utf8(end.local_name().into_inner())?;
				decoder.end_element(name)?;
			}
			XmlEvent::Text(text) => {
				decoder.text(&text.unescape()?);
				stats.text_fragments += 1;
			}
			XmlEvent::CData(data) => {
				decoder.text(utf8(&data)?);
				stats.text_fragments += 1;
			}
			XmlEvent::Eof => break,
			_ => {}
		}
		buf.clear();
	}

	decoder.end_document()?;
	tracing::debug!(elements = stats.elements, text_fragments = stats.text_fragments, "xml document end");
	Ok(stats)
}

/// Drive `decoder` with an in-memory XML document.
pub fn decode_xml_str<R, S>(input: &str, decoder: &mut StructuralDecoder<'_, R, S>) -> Result<FeedStats>
where
	R: FieldResolver,
	S: Sink,
{
	decode_xml(input.as_bytes(), decoder)
}

fn element_start(start: &BytesStart<'_>) -> Result<(String, Vec<Attribute<'static>>)> {
	let name = utf8(start.local_name().as_ref())?.to_owned();
	let mut attributes = Vec::new();
	for attr in start.attributes() {
		let attr = attr.map_err(quick_xml::Error::from)?;
		if attr.key.as_namespace_binding().is_some() {
			continue;
		}
		let key = utf8(attr.key.local_name().as_ref())?.to_owned();
		let value = attr.unescape_value()?.into_owned();
		attributes.push(Attribute::new(Cow::Owned(key), Cow::Owned(value)));
	}
	Ok((name, attributes))
}

fn utf8(bytes: &[u8]) -> Result<&str> {
	std::str::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}
