use crate::FormatError;
use crate::Value;

type Result<T> = std::result::Result<T, FormatError>;

/// Render `value` as a GraphQL literal.
///
/// When `is_const` is set the value sits in a constant position (a variable
/// default value or a directive argument on a variable definition) and any
/// variable reference fails with [`FormatError::ConstantContext`]. The flag
/// is carried into nested list and object values.
pub fn format_value(value: &Value, is_const: bool) -> Result<String> {
    match value {
        Value::Boolean(value) => Ok(value.to_string()),
        Value::Enum(name) => format_enum(value, name),
        Value::Float(float) => format_float(value, *float),
        Value::Int(int) => Ok(int.to_string()),
        Value::List(items) => {
            let items =
                items.iter()
                    .map(|item| format_value(item, is_const))
                    .collect::<Result<Vec<_>>>()?;
            Ok(format!("[{}]", items.join(", ")))
        },
        Value::Null => Ok("null".to_string()),
        Value::Object(entries) => {
            let entries =
                entries.iter()
                    .map(|(key, value)| Ok(format!(
                        "{key}: {}",
                        format_value(value, is_const)?,
                    )))
                    .collect::<Result<Vec<_>>>()?;
            Ok(format!("{{{}}}", entries.join(", ")))
        },
        Value::String(text) => Ok(quote_string(text)),
        Value::Variable(name) => format_variable(value, name, is_const),
    }
}

fn format_enum(value: &Value, name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(FormatError::UnsupportedValue {
            reason: "enum values must have a name",
            value: value.to_owned(),
        });
    }
    Ok(name.to_string())
}

fn format_float(value: &Value, float: f64) -> Result<String> {
    if !float.is_finite() {
        log::debug!("Rejecting non-finite float `{float}`.");
        return Err(FormatError::UnsupportedValue {
            reason: "GraphQL has no literal for NaN or infinite floats",
            value: value.to_owned(),
        });
    }

    // `Debug` always keeps a fractional part or an exponent.
    Ok(format!("{float:?}"))
}

fn format_variable(value: &Value, name: &str, is_const: bool) -> Result<String> {
    if name.is_empty() {
        return Err(FormatError::UnsupportedValue {
            reason: "variable references must have a name",
            value: value.to_owned(),
        });
    }
    if is_const {
        log::debug!("Rejecting variable `${name}` in a constant context.");
        return Err(FormatError::ConstantContext {
            variable_name: name.to_string(),
        });
    }
    Ok(format!("${name}"))
}

/// Quote `text` as a GraphQL string literal.
///
/// Control characters and every non-ASCII character are written as
/// `\uXXXX` escapes (surrogate pairs above U+FFFF), so the output is always
/// printable ASCII.
pub(crate) fn quote_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ' '..='~' => quoted.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    quoted.push_str(&format!("\\u{unit:04X}"));
                }
            },
        }
    }
    quoted.push('"');
    quoted
}
