use crate::BuildError;
use crate::Definition;
use crate::FormatError;
use crate::Formatter;
use crate::FragmentDefinition;
use crate::GraphQLNode;
use crate::Node;
use crate::Operation;
use crate::OperationKind;
use inherent::inherent;

type Result<T> = std::result::Result<T, BuildError>;

/// An executable document: any number of operations and fragment
/// definitions, rendered in declaration order and separated by blank lines.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub(crate) definitions: Vec<Definition>,
}
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`Document`] and run `block` against it.
    pub fn build<F>(block: F) -> Result<Self>
    where
        F: FnOnce(&mut Document) -> Result<()>,
    {
        let mut document = Self::new();
        block(&mut document)?;
        log::trace!(
            "Built document with {} definition(s).",
            document.definitions.len(),
        );
        Ok(document)
    }

    /// Append an already-built [`Definition`].
    pub fn add_definition(&mut self, definition: impl Into<Definition>) -> &mut Self {
        self.definitions.push(definition.into());
        self
    }

    /// Append a fragment definition whose selections are declared by
    /// `block`.
    pub fn fragment<F>(
        &mut self,
        name: impl Into<String>,
        type_condition: impl Into<String>,
        block: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut FragmentDefinition) -> Result<()>,
    {
        let fragment = FragmentDefinition::build(name, type_condition, block)?;
        Ok(self.add_definition(fragment))
    }

    pub fn mutation<F>(&mut self, name: Option<&str>, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Operation) -> Result<()>,
    {
        self.operation(OperationKind::Mutation, name, block)
    }

    /// Append an operation of the given kind whose variables, directives and
    /// selections are declared by `block`.
    pub fn operation<F>(
        &mut self,
        kind: OperationKind,
        name: Option<&str>,
        block: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut Operation) -> Result<()>,
    {
        let operation = Operation::build(kind, name, block)?;
        Ok(self.add_definition(operation))
    }

    pub fn query<F>(&mut self, name: Option<&str>, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Operation) -> Result<()>,
    {
        self.operation(OperationKind::Query, name, block)
    }

    pub fn subscription<F>(&mut self, name: Option<&str>, block: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Operation) -> Result<()>,
    {
        self.operation(OperationKind::Subscription, name, block)
    }

    pub fn definitions(&self) -> &Vec<Definition> {
        &self.definitions
    }
}

#[inherent]
impl GraphQLNode for Document {
    pub fn as_node(&self) -> Node<'_> {
        Node::Document(self)
    }

    pub fn to_graphql(&self) -> std::result::Result<String, FormatError> {
        Formatter::new().format_node(Node::Document(self), 0)
    }

    pub fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> std::result::Result<String, FormatError> {
        formatter.format_node(Node::Document(self), level)
    }
}
