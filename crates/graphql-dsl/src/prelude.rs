//! Everything a builder closure usually needs in scope.

pub use crate::BuildError;
pub use crate::Directive;
pub use crate::FormatError;
pub use crate::GraphQLNode;
pub use crate::IntoDirective;
pub use crate::IntoVariableDefinition;
pub use crate::OperationKind;
pub use crate::SelectionSetBuilder;
pub use crate::Value;
pub use crate::VariableDefinition;
pub use crate::arguments;
pub use crate::selections;
