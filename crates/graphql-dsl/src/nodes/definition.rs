use crate::FragmentDefinition;
use crate::Operation;

/// A top-level definition of a [`Document`](crate::Document).
///
/// `Unknown` only arises when deserializing a definition whose `node` tag is
/// not recognized; the formatter rejects it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(Operation),
    #[serde(other)]
    Unknown,
}

impl std::convert::From<FragmentDefinition> for Definition {
    fn from(value: FragmentDefinition) -> Self {
        Self::Fragment(value)
    }
}
impl std::convert::From<Operation> for Definition {
    fn from(value: Operation) -> Self {
        Self::Operation(value)
    }
}
