use crate::BuildError;
use crate::Directive;
use crate::FormatError;
use crate::Formatter;
use crate::GraphQLNode;
use crate::IntoDirective;
use crate::Node;
use crate::SelectionSet;
use crate::SelectionSetBuilder;
use crate::Value;
use crate::directive::check_argument_names;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, BuildError>;

/// A field selection: `alias: name(arguments) @directives { ... }`.
///
/// A field without sub-selections is a leaf and renders without braces.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
}
impl Field {
    /// Create a leaf [`Field`].
    ///
    /// Fails with [`BuildError::MissingName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            log::debug!("Rejecting field without a name.");
            return Err(BuildError::MissingName {
                context: "field",
            });
        }

        Ok(Self {
            alias: None,
            arguments: IndexMap::new(),
            directives: vec![],
            name,
            selection_set: SelectionSet::new(),
        })
    }

    /// Create a [`Field`] and run `block` against it before returning.
    pub fn build<F>(name: impl Into<String>, block: F) -> Result<Self>
    where
        F: FnOnce(&mut Field) -> Result<()>,
    {
        let mut field = Self::new(name)?;
        log::trace!("Building field `{}`.", field.name);
        block(&mut field)?;
        Ok(field)
    }

    /// Add an argument. Re-adding an existing name replaces its value in
    /// place.
    pub fn add_argument(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if name.is_empty() {
            log::debug!("Rejecting argument without a name on `{}`.", self.name);
            return Err(BuildError::MissingName {
                context: "argument",
            });
        }
        self.arguments.insert(name, value.into());
        Ok(self)
    }

    /// Add a [`Directive`] after any previously added directives.
    pub fn add_directive(
        &mut self,
        directive: impl IntoDirective,
    ) -> Result<&mut Self> {
        self.directives.push(directive.into_directive()?);
        Ok(self)
    }

    /// Set the alias this field is selected under.
    pub fn set_alias(&mut self, alias: impl Into<String>) -> Result<&mut Self> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(BuildError::MissingName {
                context: "field alias",
            });
        }
        self.alias = Some(alias);
        Ok(self)
    }

    /// Replace all arguments. Leaves the current arguments untouched if
    /// any new argument name is empty.
    pub fn set_arguments(
        &mut self,
        arguments: IndexMap<String, Value>,
    ) -> Result<&mut Self> {
        check_argument_names(&arguments)?;
        self.arguments = arguments;
        Ok(self)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The alias when one is set, else the field name.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}

#[derive(serde::Deserialize)]
struct RawField {
    alias: Option<String>,
    arguments: IndexMap<String, Value>,
    directives: Vec<Directive>,
    name: String,
    selection_set: SelectionSet,
}
impl TryFrom<RawField> for Field {
    type Error = BuildError;

    fn try_from(raw: RawField) -> Result<Self> {
        let mut field = Self::new(raw.name)?;
        if let Some(alias) = raw.alias {
            field.set_alias(alias)?;
        }
        field.set_arguments(raw.arguments)?;
        field.directives = raw.directives;
        field.selection_set = raw.selection_set;
        Ok(field)
    }
}

impl SelectionSetBuilder for Field {
    fn selection_set_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

#[inherent]
impl GraphQLNode for Field {
    pub fn as_node(&self) -> Node<'_> {
        Node::Field(self)
    }

    pub fn to_graphql(&self) -> std::result::Result<String, FormatError> {
        Formatter::new().format_node(Node::Field(self), 0)
    }

    pub fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> std::result::Result<String, FormatError> {
        formatter.format_node(Node::Field(self), level)
    }
}
