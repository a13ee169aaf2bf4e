use crate::Definition;
use crate::Document;
use crate::Field;
use crate::FormatError;
use crate::Formatter;
use crate::FragmentDefinition;
use crate::FragmentSpread;
use crate::InlineFragment;
use crate::Operation;
use crate::Selection;

/// A borrowed view of any node in a document tree, used by the
/// [`Formatter`] to dispatch on node kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'a> {
    Document(&'a Document),
    Field(&'a Field),
    FragmentDefinition(&'a FragmentDefinition),
    FragmentSpread(&'a FragmentSpread),
    InlineFragment(&'a InlineFragment),
    Operation(&'a Operation),
}
impl<'a> Node<'a> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Field(_) => "field",
            Node::FragmentDefinition(_) => "fragment definition",
            Node::FragmentSpread(_) => "fragment spread",
            Node::InlineFragment(_) => "inline fragment",
            Node::Operation(_) => "operation",
        }
    }

    /// The node's name, if it has one. Documents, anonymous operations and
    /// inline fragments have none.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Node::Document(_) | Node::InlineFragment(_) => None,
            Node::Field(field) => Some(field.name()),
            Node::FragmentDefinition(fragment) => Some(fragment.name()),
            Node::FragmentSpread(spread) => Some(spread.name()),
            Node::Operation(operation) => operation.name(),
        }
    }
}

impl<'a> std::convert::From<&'a Document> for Node<'a> {
    fn from(value: &'a Document) -> Self {
        Node::Document(value)
    }
}
impl<'a> std::convert::From<&'a Field> for Node<'a> {
    fn from(value: &'a Field) -> Self {
        Node::Field(value)
    }
}
impl<'a> std::convert::From<&'a FragmentDefinition> for Node<'a> {
    fn from(value: &'a FragmentDefinition) -> Self {
        Node::FragmentDefinition(value)
    }
}
impl<'a> std::convert::From<&'a FragmentSpread> for Node<'a> {
    fn from(value: &'a FragmentSpread) -> Self {
        Node::FragmentSpread(value)
    }
}
impl<'a> std::convert::From<&'a InlineFragment> for Node<'a> {
    fn from(value: &'a InlineFragment) -> Self {
        Node::InlineFragment(value)
    }
}
impl<'a> std::convert::From<&'a Operation> for Node<'a> {
    fn from(value: &'a Operation) -> Self {
        Node::Operation(value)
    }
}
impl<'a> std::convert::TryFrom<&'a Definition> for Node<'a> {
    type Error = FormatError;

    fn try_from(value: &'a Definition) -> Result<Self, Self::Error> {
        match value {
            Definition::Fragment(fragment) => Ok(Node::FragmentDefinition(fragment)),
            Definition::Operation(operation) => Ok(Node::Operation(operation)),
            Definition::Unknown => Err(FormatError::UnknownNode {
                context: "definition",
            }),
        }
    }
}
impl<'a> std::convert::TryFrom<&'a Selection> for Node<'a> {
    type Error = FormatError;

    fn try_from(value: &'a Selection) -> Result<Self, Self::Error> {
        match value {
            Selection::Field(field) => Ok(Node::Field(field)),
            Selection::FragmentSpread(spread) => Ok(Node::FragmentSpread(spread)),
            Selection::InlineFragment(inline) => Ok(Node::InlineFragment(inline)),
            Selection::Unknown => Err(FormatError::UnknownNode {
                context: "selection",
            }),
        }
    }
}

/// Trait implemented by every document node. Provides GraphQL text
/// rendering.
///
/// All node types implement this trait via `#[inherent] impl GraphQLNode`,
/// so the rendering methods are callable without importing the trait.
pub trait GraphQLNode {
    /// A borrowed [`Node`] view of `self`.
    fn as_node(&self) -> Node<'_>;

    /// Render this node as canonical GraphQL text at indent level 0.
    ///
    /// Equivalent to `Formatter::new().format_node(self.as_node(), 0)`.
    fn to_graphql(&self) -> Result<String, FormatError>;

    /// Render this node with the given [`Formatter`], starting at `level`.
    fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> Result<String, FormatError>;
}
