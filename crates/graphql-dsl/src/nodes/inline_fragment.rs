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

/// An inline fragment (`... on Type @directives { ... }`).
///
/// Always holds at least one selection: [`InlineFragment::build`] rejects a
/// block that declares none.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawInlineFragment")]
pub struct InlineFragment {
    pub(crate) directives: Vec<Directive>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragment {
    /// Create an [`InlineFragment`] and run `block` against it.
    ///
    /// An empty `type_condition` is treated as absent. Fails with
    /// [`BuildError::MissingSelection`] if `block` declares no selections.
    pub fn build<F>(type_condition: Option<&str>, block: F) -> Result<Self>
    where
        F: FnOnce(&mut InlineFragment) -> Result<()>,
    {
        let type_condition =
            type_condition
                .filter(|type_name| !type_name.is_empty())
                .map(str::to_string);
        log::trace!("Building inline fragment on `{type_condition:?}`.");

        let mut inline_fragment = Self {
            directives: vec![],
            selection_set: SelectionSet::new(),
            type_condition,
        };
        block(&mut inline_fragment)?;

        if inline_fragment.selection_set.is_empty() {
            log::debug!(
                "Rejecting inline fragment on `{:?}` without selections.",
                inline_fragment.type_condition,
            );
            return Err(BuildError::MissingSelection {
                type_condition: inline_fragment.type_condition,
            });
        }

        Ok(inline_fragment)
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

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}

#[derive(serde::Deserialize)]
struct RawInlineFragment {
    directives: Vec<Directive>,
    selection_set: SelectionSet,
    type_condition: Option<String>,
}
impl TryFrom<RawInlineFragment> for InlineFragment {
    type Error = BuildError;

    fn try_from(raw: RawInlineFragment) -> Result<Self> {
        let RawInlineFragment {
            directives,
            selection_set,
            type_condition,
        } = raw;
        Self::build(type_condition.as_deref(), move |inline_fragment| {
            inline_fragment.directives = directives;
            inline_fragment.selection_set = selection_set;
            Ok(())
        })
    }
}

impl SelectionSetBuilder for InlineFragment {
    fn selection_set_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

#[inherent]
impl GraphQLNode for InlineFragment {
    pub fn as_node(&self) -> Node<'_> {
        Node::InlineFragment(self)
    }

    pub fn to_graphql(&self) -> std::result::Result<String, FormatError> {
        Formatter::new().format_node(Node::InlineFragment(self), 0)
    }

    pub fn to_graphql_with(
        &self,
        formatter: &Formatter,
        level: usize,
    ) -> std::result::Result<String, FormatError> {
        formatter.format_node(Node::InlineFragment(self), level)
    }
}
