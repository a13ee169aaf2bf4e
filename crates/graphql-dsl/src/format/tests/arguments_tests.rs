use crate::FormatError;
use crate::Value;
use crate::arguments;
use crate::format::format_arguments;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, FormatError>;

#[test]
fn empty_arguments_render_as_empty_string() -> Result<()> {
    assert_eq!(format_arguments(&IndexMap::new(), false)?, "");
    assert_eq!(format_arguments(&IndexMap::new(), true)?, "");
    Ok(())
}

#[test]
fn arguments_render_in_insertion_order() -> Result<()> {
    let args = arguments! { a: 1, b: "x" };
    assert_eq!(format_arguments(&args, false)?, r#"(a: 1, b: "x")"#);

    let args = arguments! { b: "x", a: 1 };
    assert_eq!(format_arguments(&args, false)?, r#"(b: "x", a: 1)"#);
    Ok(())
}

#[test]
fn arguments_accept_variables_outside_constant_context() -> Result<()> {
    let args = arguments! { id: Value::variable("id") };
    assert_eq!(format_arguments(&args, false)?, "(id: $id)");
    Ok(())
}

#[test]
fn arguments_reject_variables_in_constant_context() {
    let args = arguments! { id: Value::variable("id") };
    assert_eq!(
        format_arguments(&args, true),
        Err(FormatError::ConstantContext {
            variable_name: "id".to_string(),
        }),
    );
}
