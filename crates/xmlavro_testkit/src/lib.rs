//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Parse a stream of concatenated or newline-separated JSON documents.
pub fn parse_json_stream(bytes: &[u8]) -> Vec<serde_json::Value> {
	serde_json::Deserializer::from_slice(bytes)
		.into_iter::<serde_json::Value>()
		.collect::<Result<_, _>>()
		.unwrap_or_else(|err| panic!("output should be a json stream: {err}"))
}
