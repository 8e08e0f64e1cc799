use crate::convert::{RecordValue, Value};

#[test]
fn put_replaces_in_place_and_keeps_order() {
	let mut record = RecordValue::new("person");
	record.put("tags", Value::Array(Vec::new()));
	record.put("name", Value::String("Alice".into()));
	record.put("tags", Value::Array(vec![Value::String("a".into())]));

	let names: Vec<&str> = record.fields.iter().map(|field| field.name.as_ref()).collect();
	assert_eq!(names, ["tags", "name"]);
	assert_eq!(record.get("tags"), Some(&Value::Array(vec![Value::String("a".into())])));
	assert_eq!(record.get("missing"), None);
}

#[test]
fn kind_labels_follow_variant() {
	assert_eq!(Value::Null.kind_label(), "null");
	assert_eq!(Value::Fixed(vec![1]).kind_label(), "fixed");
	assert_eq!(Value::Record(RecordValue::new("r")).kind_label(), "record");
}
