use crate::BuildError;
use crate::Directive;
use crate::FormatError;
use crate::Formatter;
use crate::GraphQLNode;
use crate::IntoDirective;
use crate::Node;
use crate::SelectionSet;
use crate::SelectionSetBuilder;
use inherent::inherent;

type Result<T> = std::result::Result<T, BuildError>;

/// A fragment definition (`fragment name on Type @directives { ... }`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawFragmentDefinition")]
pub struct FragmentDefinition {
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: String,
}
impl FragmentDefinition {
    /// Create a [`FragmentDefinition`] with no selections.
    ///
    /// Fails with [`BuildError::MissingName`] when `name` is empty and with
    /// [`BuildError::MissingType`] when `type_condition` is empty.
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            log::debug!("Rejecting fragment definition without a name.");
            return Err(BuildError::MissingName {
                context: "fragment definition",
            });
        }

        let type_condition = type_condition.into();
        if type_condition.is_empty() {
            log::debug!("Rejecting fragment `{name}` without a type condition.");
            return Err(BuildError::MissingType {
                context: format!("fragment `{name}`"),
            });
        }

        Ok(Self {
            directives: vec![],
            name,
            selection_set: SelectionSet::new(),
            type_condition,
        })
    }

    /// Create a [`FragmentDefinition`] and run `block` against it.
    pub fn build<F>(
        name: impl Into<String>,
        type_condition: impl Into<String>,
        block: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut FragmentDefinition) -> Result<()>,
    {
        let mut fragment = Self::new(name, type_condition)?;
        log::trace!("Building fragment `{}`.", fragment.name);
        block(&mut fragment)?;
        Ok(fragment)
    }

    /// Add a [`Directive`] after any previously added directives.
    pub fn add_directive(
        &mut self,
        directive: impl IntoDirective,
    ) -> Result<&mut Self> {
        self.directives.push(directive.into_directive()?);
        Ok(self)
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[derive(serde::Deserialize)]
struct RawFragmentDefinition {
    directives: Vec<Directive>,
    name: String,
    selection_set: SelectionSet,
    type_condition: String,
}
impl TryFrom<RawFragmentDefinition> for FragmentDefinition {
    type Error = BuildError;

    fn try_from(raw: RawFragmentDefinition) -> Result<Self> {
        let mut fragment = Self::new(raw.name, raw.type_condition)?;
        fragment.directives = raw.directives;
        fragment.selection_set = raw.selection_set;
        Ok(fragment)
    }
}

impl SelectionSetBuilder for FragmentDefinition {
    fn selection_set_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

#[inherent]
impl GraphQLNode for FragmentDefinition {
    pub fn as_node(&self) -> Node<'_> {
        Node::FragmentDefinition(self)
    }

    pub fn to_graphql(&self) -> std::result::Result<String, FormatError> {
        Formatter::new().format_node(Node::FragmentDefinition(self), 0)
    }

    pub fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> std::result::Result<String, FormatError> {
        formatter.format_node(Node::FragmentDefinition(self), level)
    }
}
