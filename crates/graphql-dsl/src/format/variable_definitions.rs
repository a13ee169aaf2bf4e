use crate::FormatError;
use crate::VariableDefinition;
use crate::format::format_directives;
use crate::format::format_value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, FormatError>;

/// Render one variable definition as `$name: Type [= default] [@directives]`.
///
/// Default values and directive arguments are constant positions, so a
/// variable reference in either fails with
/// [`FormatError::ConstantContext`].
pub fn format_variable_definition(
    name: &str,
    definition: &VariableDefinition,
) -> Result<String> {
    let mut parts = vec![
        format!("${name}:"),
        definition.type_annotation().to_string(),
    ];
    if let Some(default_value) = definition.default_value() {
        parts.push(format!("= {}", format_value(default_value, true)?));
    }
    if let Some(directives) = format_directives(definition.directives(), true)? {
        parts.push(directives);
    }
    Ok(parts.join(" "))
}

/// Render variable definitions as `($a: A, $b: B = 1)`, or `None` when there
/// are none.
pub fn format_variable_definitions(
    definitions: &IndexMap<String, VariableDefinition>,
) -> Result<Option<String>> {
    if definitions.is_empty() {
        return Ok(None);
    }

    let definitions =
        definitions.iter()
            .map(|(name, definition)| format_variable_definition(name, definition))
            .collect::<Result<Vec<_>>>()?;

    Ok(Some(format!("({})", definitions.join(", "))))
}
