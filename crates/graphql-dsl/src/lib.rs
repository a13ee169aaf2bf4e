//! Build GraphQL executable documents (operations and fragments) in Rust
//! and render them as canonical, indented GraphQL text.
//!
//! Documents are assembled by builder closures that receive the node under
//! construction, then rendered with a [`Formatter`]:
//!
//! ```
//! use graphql_dsl::prelude::*;
//!
//! let query = graphql_dsl::query(Some("sheep"), |query| {
//!     query.field_with("animal", |animal| {
//!         animal.add_argument("type", Value::tag("SHEEP"))?;
//!         animal.field("name")?.field("age")?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     query.to_graphql()?,
//!     "query sheep\n{\n  animal(type: SHEEP)\n  {\n    name\n    age\n  }\n}",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate does not parse GraphQL, validate documents against a schema,
//! or execute operations. The only checks it performs are structural
//! (required names and types, no variables in constant positions).

mod build_error;
mod directive;
mod entry_points;
pub mod format;
mod format_error;
mod macros;
mod nodes;
mod operation_kind;
pub mod prelude;
mod value;
mod variable_definition;

pub use build_error::BuildError;
pub use directive::Directive;
pub use directive::IntoDirective;
pub use entry_points::document;
pub use entry_points::fragment;
pub use entry_points::mutation;
pub use entry_points::operation;
pub use entry_points::query;
pub use entry_points::subscription;
pub use entry_points::to_graphql;
pub use format::Formatter;
pub use format_error::FormatError;
pub use nodes::Definition;
pub use nodes::Document;
pub use nodes::Field;
pub use nodes::FragmentDefinition;
pub use nodes::FragmentSpread;
pub use nodes::GraphQLNode;
pub use nodes::InlineFragment;
pub use nodes::Node;
pub use nodes::Operation;
pub use nodes::Selection;
pub use nodes::SelectionSet;
pub use nodes::SelectionSetBuilder;
pub use operation_kind::OperationKind;
pub use value::Value;
pub use variable_definition::IntoVariableDefinition;
pub use variable_definition::VariableDefinition;

#[doc(hidden)]
pub use indexmap::IndexMap as __IndexMap;

#[cfg(test)]
mod tests;
