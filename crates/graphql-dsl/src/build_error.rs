use crate::Value;
use thiserror::Error;

/// Structural errors raised while a document is being constructed.
///
/// These fire at the point of violation (a node constructor, a directive or
/// variable-definition normalization) and propagate out of every enclosing
/// builder block, so a partially-built node is never handed back.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("A name must be specified for this {context}")]
    MissingName {
        context: &'static str,
    },

    #[error(
        "Inline fragments must declare at least one selection (type \
        condition: `{type_condition:?}`)"
    )]
    MissingSelection {
        type_condition: Option<String>,
    },

    #[error("A type must be specified for {context}")]
    MissingType {
        context: String,
    },

    #[error("Unsupported directive shape: `{shape:?}`")]
    UnsupportedDirectiveShape {
        shape: Value,
    },

    #[error("Unsupported variable definition shape: `{shape:?}`")]
    UnsupportedVariableDefinitionShape {
        shape: Value,
    },
}
