#![allow(missing_docs)]

use std::process::{Command, Output};

use xmlavro_testkit::{fixture_path, parse_json_stream};

fn schema(file: &str, extra: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_xmlavro"))
		.arg("schema")
		.arg(fixture_path(file))
		.args(extra)
		.output()
		.expect("command executes")
}

#[test]
fn prints_root_and_nested_fields() {
	let output = schema("library.avsc", &[]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("root: record library"), "stdout was: {stdout}");
	assert!(stdout.contains("    heading: string (element title)"), "stdout was: {stdout}");
}

#[test]
fn json_summary_lists_sources() {
	let output = schema("library.avsc", &["--json"]);
	assert!(output.status.success());

	let values = parse_json_stream(&output.stdout);
	assert_eq!(values.len(), 1);
	let summary = &values[0];
	assert_eq!(summary["kind"], "record");
	assert_eq!(summary["name"], "library");
	assert_eq!(summary["fields"][1]["schema"], "array<record book>");
	assert_eq!(summary["fields"][1]["fields"][0]["source"], "attribute id");
}

#[test]
fn rejects_non_json_schema() {
	let output = schema("library.xml", &[]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: schema json:"));
}
