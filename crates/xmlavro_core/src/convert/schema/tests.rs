use crate::convert::{Field, Schema, SchemaKind, Source};

#[test]
fn kind_labels_match_avro_type_names() {
	assert_eq!(Schema::Int.kind().as_str(), "int");
	assert_eq!(Schema::array(Schema::String).kind(), SchemaKind::Array);
	assert_eq!(SchemaKind::Double.to_string(), "double");
}

#[test]
fn label_includes_name_for_named_types() {
	let schema = Schema::record("Person", [("name", Schema::String)]);
	assert_eq!(schema.label(), "record Person");
	assert_eq!(Schema::map(Schema::Int).label(), "map");
}

#[test]
fn only_union_array_and_record_accept_children() {
	assert!(Schema::record("R", Vec::<(&str, Schema)>::new()).is_structural_parent());
	assert!(Schema::array(Schema::Int).is_structural_parent());
	assert!(Schema::Union(vec![Schema::Null, Schema::Int]).is_structural_parent());
	assert!(!Schema::map(Schema::Int).is_structural_parent());
	assert!(!Schema::String.is_structural_parent());
	assert!(!Schema::Null.is_structural_parent());
}

#[test]
fn wildcard_lookup_uses_reserved_field_name() {
	let Schema::Record(record) = Schema::record("R", [("id", Schema::Int), (Source::WILDCARD, Schema::map(Schema::String))]) else {
		panic!("expected record");
	};
	assert_eq!(record.wildcard().map(|field| field.name.as_ref()), Some(Source::WILDCARD));
	assert!(record.field("missing").is_none());
}

#[test]
fn with_source_keeps_declared_origin() {
	let field = Field::with_source("ident", Schema::Int, Source::attribute("id"));
	assert_eq!(field.source, Some(Source::attribute("id")));
}
