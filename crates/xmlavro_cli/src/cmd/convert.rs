use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use xmlavro::convert::{ConvertError, DatumBuilder, DecodeOptions, Result, Schema, Sink, StructuralDecoder, Value, decode_xml};

use crate::cmd::json::JsonValue;

#[derive(clap::Args)]
pub struct Args {
	/// XML document, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long)]
	pub schema: PathBuf,
	#[arg(long)]
	pub root: String,
	#[arg(long = "emit-nested")]
	pub emit_nested: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<usize>,
	#[arg(long)]
	pub pretty: bool,
}

/// Convert one XML document and print every emitted value as JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		schema: schema_path,
		root,
		emit_nested,
		max_depth,
		pretty,
	} = args;

	let schema = Schema::from_path(&schema_path)?;
	let mut options = if emit_nested {
		DecodeOptions::default()
	} else {
		DecodeOptions::top_level_only()
	};
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let input: Box<dyn BufRead> = if file.as_os_str() == "-" {
		Box::new(io::stdin().lock())
	} else {
		Box::new(BufReader::new(File::open(&file)?))
	};

	let sink = JsonLines::new(io::BufWriter::new(io::stdout().lock()), pretty);
	let mut decoder = StructuralDecoder::new(&schema, root, DatumBuilder, sink).with_options(options);
	let stats = decode_xml(input, &mut decoder)?;
	let written = decoder.into_sink().finish()?;

	tracing::info!(path = %file.display(), elements = stats.elements, values = written, "conversion finished");
	Ok(())
}

/// Sink writing one JSON document per value.
pub struct JsonLines<W> {
	out: W,
	pretty: bool,
	written: usize,
}

impl<W: Write> JsonLines<W> {
	pub fn new(out: W, pretty: bool) -> Self {
		Self { out, pretty, written: 0 }
	}

	/// Flush the writer and return the number of values written.
	pub fn finish(mut self) -> Result<usize> {
		self.out.flush()?;
		Ok(self.written)
	}
}

impl<W: Write> Sink for JsonLines<W> {
	fn accept(&mut self, value: Value) -> Result<()> {
		let json = JsonValue(&value);
		let encoded = if self.pretty {
			serde_json::to_writer_pretty(&mut self.out, &json)
		} else {
			serde_json::to_writer(&mut self.out, &json)
		};
		encoded.map_err(|err| ConvertError::Sink { reason: err.to_string() })?;
		self.out.write_all(b"\n")?;
		self.written += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests;
