use crate::FormatError;
use crate::Value;
use crate::format::format_value;
use indexmap::IndexMap;

/// Render an argument list as `(name: value, ...)`.
///
/// An empty map renders as an empty string, never as `()`.
pub fn format_arguments(
    arguments: &IndexMap<String, Value>,
    is_const: bool,
) -> Result<String, FormatError> {
    if arguments.is_empty() {
        return Ok(String::new());
    }

    let arguments =
        arguments.iter()
            .map(|(name, value)| Ok(format!(
                "{name}: {}",
                format_value(value, is_const)?,
            )))
            .collect::<Result<Vec<_>, FormatError>>()?;

    Ok(format!("({})", arguments.join(", ")))
}
