use crate::Field;
use crate::FragmentSpread;
use crate::InlineFragment;

/// One entry of a [`SelectionSet`](crate::SelectionSet).
///
/// `Unknown` only arises when deserializing a selection whose `node` tag is not
/// recognized; the formatter rejects it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
    #[serde(other)]
    Unknown,
}
impl Selection {
    /// The name of the selected field or spread fragment. Inline fragments
    /// have no name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::Field(field) => Some(field.name()),
            Selection::FragmentSpread(spread) => Some(spread.name()),
            Selection::InlineFragment(_) | Selection::Unknown => None,
        }
    }
}

impl std::convert::From<Field> for Selection {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Self::FragmentSpread(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
