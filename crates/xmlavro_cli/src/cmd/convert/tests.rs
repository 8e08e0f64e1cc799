use xmlavro::convert::{RecordValue, Sink, Value};

use super::JsonLines;

#[test]
fn json_lines_sink_writes_one_document_per_value() {
	let mut sink = JsonLines::new(Vec::new(), false);
	sink.accept(Value::Int(1)).expect("int accepted");
	let mut record = RecordValue::new("r");
	record.put("k", Value::String("v".into()));
	sink.accept(Value::Record(record)).expect("record accepted");

	let out = sink.out.clone();
	assert_eq!(sink.finish().expect("flush"), 2);
	assert_eq!(String::from_utf8(out).expect("utf8"), "1\n{\"k\":\"v\"}\n");
}

#[test]
fn json_lines_sink_pretty_output_is_still_a_stream() {
	let mut sink = JsonLines::new(Vec::new(), true);
	sink.accept(Value::Array(vec![Value::Int(1)])).expect("array accepted");
	sink.accept(Value::Null).expect("null accepted");

	let out = sink.out.clone();
	assert_eq!(sink.finish().expect("flush"), 2);
	let values = xmlavro_testkit::parse_json_stream(&out);
	assert_eq!(values, [serde_json::json!([1]), serde_json::Value::Null]);
}
