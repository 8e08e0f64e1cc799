#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use xmlavro_testkit::{fixture_path, parse_json_stream};

fn convert(xml: &str, extra: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_xmlavro"))
		.arg("convert")
		.arg(fixture_path(xml))
		.arg("--schema")
		.arg(fixture_path("library.avsc"))
		.args(extra)
		.output()
		.expect("command executes")
}

fn convert_json(xml: &str, extra: &[&str]) -> Vec<Value> {
	let output = convert(xml, extra);
	assert!(output.status.success(), "convert failed: {}", String::from_utf8_lossy(&output.stderr));
	parse_json_stream(&output.stdout)
}

#[test]
fn top_level_books_follow_schema_field_order() {
	let output = convert("library.xml", &["--root", "book"]);
	assert!(output.status.success(), "convert failed: {}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(
		lines,
		[
			r#"{"id":1,"heading":"Dune","year":1965,"format":"PAPERBACK","authors":["Frank Herbert"],"others":{"shelf":"B2"}}"#,
			r#"{"id":2,"heading":"Good Omens","year":null,"format":"HARDCOVER","authors":["Terry Pratchett","Neil Gaiman"],"others":{"lang":"en"}}"#,
		]
	);
}

#[test]
fn emit_nested_streams_children_first() {
	let values = convert_json("library.xml", &["--root", "book", "--emit-nested", "--pretty"]);

	assert_eq!(values.len(), 13);
	assert_eq!(values[0], json!("Dune"));
	assert_eq!(values[1], json!(1965));
	assert_eq!(values[4], json!(["Frank Herbert"]));
	assert_eq!(values[6]["id"], json!(1));
	assert_eq!(values[12]["id"], json!(2));
}

#[test]
fn unknown_root_emits_nothing() {
	assert!(convert_json("library.xml", &["--root", "magazine"]).is_empty());
}

#[test]
fn reads_document_from_stdin() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_xmlavro"))
		.arg("convert")
		.arg("-")
		.arg("--schema")
		.arg(fixture_path("library.avsc"))
		.args(["--root", "book"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	let xml = std::fs::read(fixture_path("library.xml")).expect("fixture reads");
	child.stdin.take().expect("stdin piped").write_all(&xml).expect("stdin accepts document");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success(), "convert failed: {}", String::from_utf8_lossy(&output.stderr));
	let values = parse_json_stream(&output.stdout);
	assert_eq!(values.len(), 2);
	assert_eq!(values[0]["heading"], json!("Dune"));
	assert_eq!(values[1]["authors"], json!(["Terry Pratchett", "Neil Gaiman"]));
}

#[test]
fn coercion_failure_exits_with_error() {
	let output = convert("library_bad_year.xml", &["--root", "book"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: cannot coerce \"sometime\" to int"), "stderr was: {stderr}");
}

#[test]
fn depth_limit_is_configurable() {
	let output = convert("library.xml", &["--root", "book", "--max-depth", "3"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("decode depth exceeded (max=3)"), "stderr was: {stderr}");
}
