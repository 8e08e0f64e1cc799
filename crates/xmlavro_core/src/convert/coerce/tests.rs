use crate::convert::coerce::coerce_text;
use crate::convert::{ConvertError, EnumSchema, FixedSchema, Schema, SchemaKind, Value};

#[test]
fn integers_parse_exact_literals() {
	assert_eq!(coerce_text(&Schema::Int, "42").expect("int"), Value::Int(42));
	assert_eq!(coerce_text(&Schema::Int, "-17").expect("negative int"), Value::Int(-17));
	assert_eq!(coerce_text(&Schema::Long, "9000000000").expect("long"), Value::Long(9_000_000_000));
}

#[test]
fn integers_reject_whitespace_garbage_and_overflow() {
	for text in [" 42", "42 ", "", "4x2", "3.5", "2147483648"] {
		let err = coerce_text(&Schema::Int, text).expect_err("int literal should fail");
		assert!(matches!(err, ConvertError::Coercion { kind: SchemaKind::Int, .. }), "{text:?} -> {err:?}");
	}
}

#[test]
fn floats_parse_and_trim() {
	assert_eq!(coerce_text(&Schema::Float, "3.5").expect("float"), Value::Float(3.5));
	assert_eq!(coerce_text(&Schema::Double, " 1e3\n").expect("double"), Value::Double(1000.0));
	let Value::Double(nan) = coerce_text(&Schema::Double, "NaN").expect("nan parses") else {
		panic!("expected double");
	};
	assert!(nan.is_nan());

	let err = coerce_text(&Schema::Double, "three").expect_err("word should fail");
	assert!(matches!(err, ConvertError::Coercion { kind: SchemaKind::Double, .. }));
}

#[test]
fn boolean_accepts_only_true_and_one() {
	assert_eq!(coerce_text(&Schema::Boolean, "true").expect("true"), Value::Boolean(true));
	assert_eq!(coerce_text(&Schema::Boolean, "1").expect("one"), Value::Boolean(true));
	for text in ["false", "0", "", "yes", "TRUE", " true"] {
		assert_eq!(coerce_text(&Schema::Boolean, text).expect("boolean never fails"), Value::Boolean(false), "{text:?}");
	}
}

#[test]
fn fixed_copies_utf8_bytes_regardless_of_size() {
	let schema = Schema::Fixed(FixedSchema { name: "Md5".into(), size: 16 });
	assert_eq!(coerce_text(&schema, "é1").expect("fixed"), Value::Fixed(vec![0xc3, 0xa9, b'1']));
}

#[test]
fn lexical_kinds_keep_text() {
	let schema = Schema::Enum(EnumSchema {
		name: "Color".into(),
		symbols: vec!["RED".into()],
	});
	assert_eq!(coerce_text(&schema, "BLUE").expect("enum"), Value::Enum("BLUE".into()));
	assert_eq!(coerce_text(&Schema::String, " a b ").expect("string"), Value::String(" a b ".to_owned()));
	assert_eq!(coerce_text(&Schema::Bytes, "ab").expect("bytes"), Value::Bytes(b"ab".to_vec()));
	assert_eq!(coerce_text(&Schema::Null, "ignored").expect("null"), Value::Null);
}

#[test]
fn structured_kinds_cannot_be_coerced() {
	let err = coerce_text(&Schema::map(Schema::Int), "x").expect_err("map should fail");
	assert!(matches!(err, ConvertError::UnsupportedCoercion { kind: SchemaKind::Map }));
	let err = coerce_text(&Schema::Union(vec![Schema::Int, Schema::String]), "x").expect_err("union should fail");
	assert!(matches!(err, ConvertError::UnsupportedCoercion { kind: SchemaKind::Union }));
}

#[test]
fn float_special_values_and_suffixes() {
	assert_eq!(coerce_text(&Schema::Float, "inf").expect("inf"), Value::Float(f32::INFINITY));
	assert_eq!(coerce_text(&Schema::Double, "-Infinity").expect("-infinity"), Value::Double(f64::NEG_INFINITY));
	let Value::Float(nan) = coerce_text(&Schema::Float, "nan").expect("lowercase nan") else {
		panic!("expected float");
	};
	assert!(nan.is_nan());

	for text in ["1.5f", "2d", "0x1p3"] {
		let err = coerce_text(&Schema::Float, text).expect_err("suffixed literal should fail");
		assert!(matches!(err, ConvertError::Coercion { kind: SchemaKind::Float, .. }), "{text:?} -> {err:?}");
	}
}
