use crate::Value;
use thiserror::Error;

/// Errors raised while rendering a document to GraphQL text.
///
/// No partial text is ever returned alongside one of these.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormatError {
    #[error(
        "Variable `${variable_name}` was used where only constant values are \
        allowed"
    )]
    ConstantContext {
        variable_name: String,
    },

    #[error("Encountered an unknown {context} node while formatting")]
    UnknownNode {
        context: &'static str,
    },

    #[error("Unsupported value `{value:?}`: {reason}")]
    UnsupportedValue {
        reason: &'static str,
        value: Value,
    },
}
