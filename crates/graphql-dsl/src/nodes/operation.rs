use crate::BuildError;
use crate::Directive;
use crate::FormatError;
use crate::Formatter;
use crate::GraphQLNode;
use crate::IntoDirective;
use crate::IntoVariableDefinition;
use crate::Node;
use crate::OperationKind;
use crate::SelectionSet;
use crate::SelectionSetBuilder;
use crate::VariableDefinition;
use crate::directive::normalize_directives;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, BuildError>;

/// A query, mutation or subscription operation.
///
/// An anonymous query with no variables and no directives renders in the
/// shorthand form (a bare selection set).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawOperation")]
pub struct Operation {
    pub(crate) directives: Vec<Directive>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) variable_definitions: IndexMap<String, VariableDefinition>,
}
impl Operation {
    /// Create an [`Operation`] with no variables, directives or selections.
    ///
    /// Fails with [`BuildError::MissingName`] if `name` is `Some("")`.
    pub fn new(kind: OperationKind, name: Option<&str>) -> Result<Self> {
        if name.is_some_and(str::is_empty) {
            log::debug!("Rejecting {kind} with an empty name.");
            return Err(BuildError::MissingName {
                context: "operation",
            });
        }

        Ok(Self {
            directives: vec![],
            kind,
            name: name.map(str::to_string),
            selection_set: SelectionSet::new(),
            variable_definitions: IndexMap::new(),
        })
    }

    /// Create an [`Operation`] and run `block` against it.
    pub fn build<F>(
        kind: OperationKind,
        name: Option<&str>,
        block: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut Operation) -> Result<()>,
    {
        let mut operation = Self::new(kind, name)?;
        log::trace!("Building {kind} `{:?}`.", operation.name);
        block(&mut operation)?;
        Ok(operation)
    }

    /// Add a [`Directive`] after any previously added directives.
    pub fn add_directive(
        &mut self,
        directive: impl IntoDirective,
    ) -> Result<&mut Self> {
        self.directives.push(directive.into_directive()?);
        Ok(self)
    }

    /// Declare the variable `name` (with or without its leading `$`).
    ///
    /// Declaring a name that already exists replaces its definition while
    /// keeping its original position.
    pub fn add_variable(
        &mut self,
        name: impl AsRef<str>,
        definition: impl IntoVariableDefinition,
    ) -> Result<&mut Self> {
        let name = name.as_ref();
        let name = name.strip_prefix('$').unwrap_or(name);
        if name.is_empty() {
            log::debug!("Rejecting variable declaration without a name.");
            return Err(BuildError::MissingName {
                context: "variable",
            });
        }

        let definition =
            definition.into_variable_definition()
                .map_err(|err| match err {
                    BuildError::MissingType { .. } => BuildError::MissingType {
                        context: format!("variable `${name}`"),
                    },
                    err => err,
                })?;
        self.variable_definitions.insert(name.to_string(), definition);
        Ok(self)
    }

    /// Replace the list of directives.
    pub fn set_directives<D: IntoDirective>(
        &mut self,
        directives: impl IntoIterator<Item = D>,
    ) -> Result<&mut Self> {
        self.directives = normalize_directives(directives)?;
        Ok(self)
    }

    /// Replace all variable definitions.
    pub fn set_variable_definitions<N, V>(
        &mut self,
        variable_definitions: impl IntoIterator<Item = (N, V)>,
    ) -> Result<&mut Self>
    where
        N: AsRef<str>,
        V: IntoVariableDefinition,
    {
        self.variable_definitions.clear();
        for (name, definition) in variable_definitions {
            self.add_variable(name, definition)?;
        }
        Ok(self)
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variable_definitions(&self) -> &IndexMap<String, VariableDefinition> {
        &self.variable_definitions
    }
}

#[derive(serde::Deserialize)]
struct RawOperation {
    directives: Vec<Directive>,
    kind: OperationKind,
    name: Option<String>,
    selection_set: SelectionSet,
    variable_definitions: IndexMap<String, VariableDefinition>,
}
impl TryFrom<RawOperation> for Operation {
    type Error = BuildError;

    fn try_from(raw: RawOperation) -> Result<Self> {
        let mut operation = Self::new(raw.kind, raw.name.as_deref())?;
        operation.set_variable_definitions(raw.variable_definitions)?;
        operation.directives = raw.directives;
        operation.selection_set = raw.selection_set;
        Ok(operation)
    }
}

impl SelectionSetBuilder for Operation {
    fn selection_set_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

#[inherent]
impl GraphQLNode for Operation {
    pub fn as_node(&self) -> Node<'_> {
        Node::Operation(self)
    }

    pub fn to_graphql(&self) -> std::result::Result<String, FormatError> {
        Formatter::new().format_node(Node::Operation(self), 0)
    }

    pub fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> std::result::Result<String, FormatError> {
        formatter.format_node(Node::Operation(self), level)
    }
}
