use crate::FormatError;
use crate::Value;
use crate::format::format_value;

type Result<T> = std::result::Result<T, FormatError>;

#[test]
fn scalars_render_as_literals() -> Result<()> {
    assert_eq!(format_value(&Value::Int(42), false)?, "42");
    assert_eq!(format_value(&Value::Int(-7), false)?, "-7");
    assert_eq!(format_value(&Value::Boolean(true), false)?, "true");
    assert_eq!(format_value(&Value::Boolean(false), false)?, "false");
    assert_eq!(format_value(&Value::Null, false)?, "null");
    assert_eq!(format_value(&Value::enum_value("SHEEP"), false)?, "SHEEP");
    Ok(())
}

#[test]
fn floats_keep_a_fractional_part() -> Result<()> {
    assert_eq!(format_value(&Value::Float(1.5), false)?, "1.5");
    assert_eq!(format_value(&Value::Float(3.0), false)?, "3.0");
    assert_eq!(format_value(&Value::Float(-0.25), false)?, "-0.25");
    Ok(())
}

#[test]
fn non_finite_floats_are_rejected() {
    for float in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = format_value(&Value::Float(float), false);
        assert!(
            matches!(result, Err(FormatError::UnsupportedValue { .. })),
            "expected UnsupportedValue for {float}, got {result:?}",
        );
    }
}

#[test]
fn empty_enum_and_variable_names_are_rejected() {
    assert!(matches!(
        format_value(&Value::Enum(String::new()), false),
        Err(FormatError::UnsupportedValue { .. }),
    ));
    assert!(matches!(
        format_value(&Value::Variable(String::new()), false),
        Err(FormatError::UnsupportedValue { .. }),
    ));
}

#[test]
fn strings_are_quoted_and_escaped() -> Result<()> {
    assert_eq!(format_value(&Value::from("Value"), false)?, r#""Value""#);
    assert_eq!(format_value(&Value::from(""), false)?, r#""""#);
    assert_eq!(
        format_value(&Value::from("say \"hi\"\\\n\tbye\r"), false)?,
        r#""say \"hi\"\\\n\tbye\r""#,
    );
    assert_eq!(
        format_value(&Value::from("\u{8}\u{c}\u{1}"), false)?,
        r#""\b\f\u0001""#,
    );
    Ok(())
}

#[test]
fn non_ascii_strings_use_unicode_escapes() -> Result<()> {
    assert_eq!(format_value(&Value::from("café"), false)?, r#""caf\u00E9""#);
    assert_eq!(
        format_value(&Value::from("\u{1F600}"), false)?,
        r#""\uD83D\uDE00""#,
    );
    Ok(())
}

#[test]
fn variables_render_with_dollar_sign() -> Result<()> {
    assert_eq!(format_value(&Value::variable("id"), false)?, "$id");
    assert_eq!(format_value(&Value::tag("$id"), false)?, "$id");
    Ok(())
}

#[test]
fn variables_are_rejected_in_constant_context() {
    assert_eq!(
        format_value(&Value::variable("id"), true),
        Err(FormatError::ConstantContext {
            variable_name: "id".to_string(),
        }),
    );
}

#[test]
fn constant_context_reaches_nested_values() {
    let nested = Value::object([
        ("a", Value::from(1)),
        ("b", Value::List(vec![Value::Null, Value::variable("deep")])),
    ]);
    assert_eq!(
        format_value(&nested, true),
        Err(FormatError::ConstantContext {
            variable_name: "deep".to_string(),
        }),
    );
}

#[test]
fn lists_render_comma_separated() -> Result<()> {
    let list = Value::List(vec![
        Value::from(1),
        Value::from("two"),
        Value::tag("THREE"),
    ]);
    assert_eq!(format_value(&list, false)?, r#"[1, "two", THREE]"#);
    assert_eq!(format_value(&Value::List(vec![]), false)?, "[]");
    Ok(())
}

#[test]
fn objects_render_in_insertion_order() -> Result<()> {
    let object = Value::object([
        ("b", Value::from(true)),
        ("a", Value::List(vec![Value::from(1), Value::Null])),
        ("c", Value::object([("d", Value::variable("e"))])),
    ]);
    assert_eq!(
        format_value(&object, false)?,
        "{b: true, a: [1, null], c: {d: $e}}",
    );
    Ok(())
}

#[test]
fn optional_values_map_to_null() -> Result<()> {
    assert_eq!(format_value(&Value::from(None::<i32>), false)?, "null");
    assert_eq!(format_value(&Value::from(Some("x")), false)?, r#""x""#);
    Ok(())
}
