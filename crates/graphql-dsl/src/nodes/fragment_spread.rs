use crate::BuildError;
use crate::Directive;
use crate::FormatError;
use crate::Formatter;
use crate::GraphQLNode;
use crate::IntoDirective;
use crate::Node;
use crate::directive::normalize_directives;
use inherent::inherent;

type Result<T> = std::result::Result<T, BuildError>;

/// A named fragment spread (`...name @directives`). Never carries a
/// selection set of its own.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawFragmentSpread")]
pub struct FragmentSpread {
    pub(crate) directives: Vec<Directive>,
    pub(crate) name: String,
}
impl FragmentSpread {
    /// Fails with [`BuildError::MissingName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            log::debug!("Rejecting fragment spread without a name.");
            return Err(BuildError::MissingName {
                context: "fragment spread",
            });
        }

        Ok(Self {
            directives: vec![],
            name,
        })
    }

    pub fn with_directives<D: IntoDirective>(
        name: impl Into<String>,
        directives: impl IntoIterator<Item = D>,
    ) -> Result<Self> {
        let mut spread = Self::new(name)?;
        spread.directives = normalize_directives(directives)?;
        Ok(spread)
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
}

#[derive(serde::Deserialize)]
struct RawFragmentSpread {
    directives: Vec<Directive>,
    name: String,
}
impl TryFrom<RawFragmentSpread> for FragmentSpread {
    type Error = BuildError;

    fn try_from(raw: RawFragmentSpread) -> Result<Self> {
        let mut spread = Self::new(raw.name)?;
        spread.directives = raw.directives;
        Ok(spread)
    }
}

#[inherent]
impl GraphQLNode for FragmentSpread {
    pub fn as_node(&self) -> Node<'_> {
        Node::FragmentSpread(self)
    }

    pub fn to_graphql(&self) -> std::result::Result<String, FormatError> {
        Formatter::new().format_node(Node::FragmentSpread(self), 0)
    }

    pub fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> std::result::Result<String, FormatError> {
        formatter.format_node(Node::FragmentSpread(self), level)
    }
}
