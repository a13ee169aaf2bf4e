use crate::BuildError;
use crate::Directive;
use crate::IntoVariableDefinition;
use crate::Value;
use crate::VariableDefinition;
use crate::arguments;

type Result<T> = std::result::Result<T, BuildError>;

#[test]
fn bare_type_has_no_default() -> Result<()> {
    let definition = "String".into_variable_definition()?;

    assert_eq!(definition.type_annotation(), "String");
    assert_eq!(definition.default_value(), None);
    assert!(definition.directives().is_empty());
    Ok(())
}

#[test]
fn null_default_is_distinct_from_no_default() -> Result<()> {
    let definition = ("String", Value::Null).into_variable_definition()?;

    assert_eq!(definition.default_value(), Some(&Value::Null));
    assert_ne!(definition, VariableDefinition::new("String")?);
    Ok(())
}

#[test]
fn missing_type_is_rejected() {
    assert_eq!(
        VariableDefinition::new(""),
        Err(BuildError::MissingType {
            context: "variable definition".to_string(),
        }),
    );
    assert!(matches!(
        Value::object([("type", Value::Null)]).into_variable_definition(),
        Err(BuildError::MissingType { .. }),
    ));
}

#[test]
fn every_shape_normalizes_to_the_same_definition() -> Result<()> {
    let expected =
        VariableDefinition::new("String")?
            .set_default_value("Value")
            .add_directive(("directive1", arguments! { a: 1 }))?;

    let shapes = vec![
        ("String", "Value", vec![Directive::with_arguments("directive1", arguments! { a: 1 })?])
            .into_variable_definition()?,
        Value::List(vec![
            Value::tag("String"),
            Value::from("Value"),
            Value::List(vec![Value::List(vec![
                Value::tag("directive1"),
                Value::object([("a", 1)]),
            ])]),
        ]).into_variable_definition()?,
        Value::object([
            ("type", Value::tag("String")),
            ("default", Value::from("Value")),
            ("directives", Value::List(vec![Value::object([
                ("name", Value::tag("directive1")),
                ("args", Value::object([("a", 1)])),
            ])])),
        ]).into_variable_definition()?,
    ];
    for shape in shapes {
        assert_eq!(shape, expected);
    }
    Ok(())
}

#[test]
fn normalizing_a_definition_is_identity() -> Result<()> {
    let definition = VariableDefinition::new("Int")?.set_default_value(1);

    assert_eq!(definition.clone().into_variable_definition()?, definition);
    Ok(())
}

#[test]
fn unsupported_shapes_are_rejected() {
    let shapes = vec![
        Value::Int(1),
        Value::List(vec![]),
        Value::List(vec![Value::tag("A"), Value::Null, Value::List(vec![]), Value::Null]),
        Value::List(vec![Value::Int(1)]),
        Value::List(vec![Value::tag("A"), Value::Null, Value::Int(1)]),
    ];
    for shape in shapes {
        assert_eq!(
            shape.clone().into_variable_definition(),
            Err(BuildError::UnsupportedVariableDefinitionShape { shape }),
        );
    }
}

#[test]
fn directive_errors_surface_from_definitions() {
    assert_eq!(
        VariableDefinition::new("Int").and_then(|definition| definition.add_directive("")),
        Err(BuildError::MissingName {
            context: "directive",
        }),
    );
}
