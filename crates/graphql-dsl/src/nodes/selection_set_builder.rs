use crate::BuildError;
use crate::Field;
use crate::FragmentSpread;
use crate::InlineFragment;
use crate::IntoDirective;
use crate::Selection;
use crate::SelectionSet;

type Result<T> = std::result::Result<T, BuildError>;

/// Selection-declaring capability shared by every node that owns a
/// [`SelectionSet`]: [`Operation`](crate::Operation), [`Field`],
/// [`FragmentDefinition`](crate::FragmentDefinition) and
/// [`InlineFragment`].
///
/// Each method appends one child after any previously declared ones. Nested
/// blocks run to completion before the method returns, and any
/// [`BuildError`] raised inside them is returned unchanged.
pub trait SelectionSetBuilder {
    fn selection_set_mut(&mut self) -> &mut SelectionSet;

    /// Append an already-built [`Selection`].
    fn add_selection(&mut self, selection: impl Into<Selection>) -> &mut Self {
        self.selection_set_mut().push(selection.into());
        self
    }

    /// Append a leaf field with no alias, arguments or directives.
    fn field(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let field = Field::new(name)?;
        Ok(self.add_selection(field))
    }

    /// Append a field whose alias, arguments, directives and sub-selections
    /// are declared by `block`.
    fn field_with<F>(
        &mut self,
        name: impl Into<String>,
        block: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut Field) -> Result<()>,
    {
        let field = Field::build(name, block)?;
        Ok(self.add_selection(field))
    }

    /// Append a named fragment spread (`...name`).
    fn fragment_spread(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let spread = FragmentSpread::new(name)?;
        Ok(self.add_selection(spread))
    }

    /// Append a named fragment spread carrying directives.
    fn fragment_spread_with_directives<D: IntoDirective>(
        &mut self,
        name: impl Into<String>,
        directives: impl IntoIterator<Item = D>,
    ) -> Result<&mut Self> {
        let spread = FragmentSpread::with_directives(name, directives)?;
        Ok(self.add_selection(spread))
    }

    /// Append an inline fragment (`... on Type { ... }`).
    ///
    /// `block` must declare at least one selection, otherwise
    /// [`BuildError::MissingSelection`] is returned.
    fn inline_fragment<F>(
        &mut self,
        type_condition: Option<&str>,
        block: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut InlineFragment) -> Result<()>,
    {
        let inline_fragment = InlineFragment::build(type_condition, block)?;
        Ok(self.add_selection(inline_fragment))
    }
}
