mod definition;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod graphql_node;
mod inline_fragment;
mod operation;
mod selection;
mod selection_set;
mod selection_set_builder;

pub use definition::Definition;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use graphql_node::GraphQLNode;
pub use graphql_node::Node;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_builder::SelectionSetBuilder;
