//! Proptest strategies for generating values and selection trees.

use crate::BuildError;
use crate::SelectionSetBuilder;
use crate::Value;
use proptest::prelude::*;

/// A selection tree to be declared through [`SelectionSetBuilder`].
#[derive(Clone, Debug)]
pub(super) enum SelectionShape {
    Branch(String, Vec<(String, Value)>, Vec<SelectionShape>),
    Inline(Option<String>, Vec<SelectionShape>),
    Leaf(String, Vec<(String, Value)>),
    Spread(String),
}

pub(super) fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}".prop_map(|name| format!("n{name}"))
}

pub(super) fn arb_type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}"
}

fn arb_enum_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z_]{0,6}"
}

/// Values that never contain a variable reference.
pub(super) fn arb_const_value() -> impl Strategy<Value = Value> {
    arb_value_with(Just(Value::Null).boxed())
}

/// Values that may contain variable references anywhere.
pub(super) fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_with(arb_name().prop_map(|name| Value::variable(name)).boxed())
}

fn arb_value_with(
    extra_leaf: BoxedStrategy<Value>,
) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        "[ -~é\n\t]{0,10}".prop_map(Value::from),
        arb_enum_name().prop_map(|name| Value::enum_value(name)),
        Just(Value::Null),
        extra_leaf,
    ];
    leaf.prop_recursive(3, 24, 4, |inner| prop_oneof![
        prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
        prop::collection::vec((arb_name(), inner), 0..4).prop_map(|entries| Value::object(entries)),
    ])
}

pub(super) fn arb_arguments() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((arb_name(), arb_value()), 0..3)
}

pub(super) fn arb_selections() -> impl Strategy<Value = Vec<SelectionShape>> {
    let leaf = prop_oneof![
        (arb_name(), arb_arguments())
            .prop_map(|(name, arguments)| SelectionShape::Leaf(name, arguments)),
        arb_name().prop_map(SelectionShape::Spread),
    ];
    let tree = leaf.prop_recursive(3, 32, 3, |inner| prop_oneof![
        (arb_name(), arb_arguments(), prop::collection::vec(inner.clone(), 1..3))
            .prop_map(|(name, arguments, children)| {
                SelectionShape::Branch(name, arguments, children)
            }),
        (
            prop::option::of(arb_type_name()),
            prop::collection::vec(inner, 1..3),
        ).prop_map(|(type_condition, children)| {
            SelectionShape::Inline(type_condition, children)
        }),
    ]);
    prop::collection::vec(tree, 1..4)
}

/// Declare `shapes` on `builder` in order.
pub(super) fn declare<B: SelectionSetBuilder>(
    builder: &mut B,
    shapes: &[SelectionShape],
) -> Result<(), BuildError> {
    for shape in shapes {
        match shape {
            SelectionShape::Branch(name, arguments, children) => {
                builder.field_with(name.as_str(), |field| {
                    field.set_arguments(arguments.iter().cloned().collect())?;
                    declare(field, children)
                })?;
            },
            SelectionShape::Inline(type_condition, children) => {
                builder.inline_fragment(type_condition.as_deref(), |inline| {
                    declare(inline, children)
                })?;
            },
            SelectionShape::Leaf(name, arguments) => {
                builder.field_with(name.as_str(), |field| {
                    field.set_arguments(arguments.iter().cloned().collect())?;
                    Ok(())
                })?;
            },
            SelectionShape::Spread(name) => {
                builder.fragment_spread(name.as_str())?;
            },
        }
    }
    Ok(())
}

pub(super) fn contains_variable(value: &Value) -> bool {
    match value {
        Value::Variable(_) => true,
        Value::List(items) => items.iter().any(contains_variable),
        Value::Object(entries) => entries.values().any(contains_variable),
        _ => false,
    }
}
