use crate::BuildError;
use crate::Document;
use crate::FormatError;
use crate::Formatter;
use crate::FragmentDefinition;
use crate::Node;
use crate::Operation;
use crate::OperationKind;

type Result<T> = std::result::Result<T, BuildError>;

/// Build an executable [`Document`].
///
/// ```
/// use graphql_dsl::prelude::*;
///
/// let document = graphql_dsl::document(|doc| {
///     doc.query(Some("sheep"), |query| {
///         query.field_with("animal", |animal| {
///             animal.fragment_spread("animal")?;
///             Ok(())
///         })?;
///         Ok(())
///     })?;
///     doc.fragment("animal", "Animal", |fragment| {
///         fragment.field("name")?;
///         Ok(())
///     })?;
///     Ok(())
/// })?;
///
/// assert_eq!(
///     document.to_graphql()?,
///     "query sheep\n{\n  animal\n  {\n    ...animal\n  }\n}\n\n\
///      fragment animal on Animal\n{\n  name\n}",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn document<F>(block: F) -> Result<Document>
where
    F: FnOnce(&mut Document) -> Result<()>,
{
    Document::build(block)
}

/// Build a [`FragmentDefinition`] named `name` on `type_condition`.
pub fn fragment<F>(
    name: impl Into<String>,
    type_condition: impl Into<String>,
    block: F,
) -> Result<FragmentDefinition>
where
    F: FnOnce(&mut FragmentDefinition) -> Result<()>,
{
    FragmentDefinition::build(name, type_condition, block)
}

/// Build a mutation [`Operation`].
pub fn mutation<F>(name: Option<&str>, block: F) -> Result<Operation>
where
    F: FnOnce(&mut Operation) -> Result<()>,
{
    Operation::build(OperationKind::Mutation, name, block)
}

/// Build an [`Operation`] of any kind.
pub fn operation<F>(
    kind: OperationKind,
    name: Option<&str>,
    block: F,
) -> Result<Operation>
where
    F: FnOnce(&mut Operation) -> Result<()>,
{
    Operation::build(kind, name, block)
}

/// Build a query [`Operation`].
pub fn query<F>(name: Option<&str>, block: F) -> Result<Operation>
where
    F: FnOnce(&mut Operation) -> Result<()>,
{
    Operation::build(OperationKind::Query, name, block)
}

/// Build a subscription [`Operation`].
pub fn subscription<F>(name: Option<&str>, block: F) -> Result<Operation>
where
    F: FnOnce(&mut Operation) -> Result<()>,
{
    Operation::build(OperationKind::Subscription, name, block)
}

/// Render any node as GraphQL text at indent level 0 with the default
/// [`Formatter`].
pub fn to_graphql<'a>(node: impl Into<Node<'a>>) -> std::result::Result<String, FormatError> {
    Formatter::new().format_node(node.into(), 0)
}
