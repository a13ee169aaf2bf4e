/// Build an argument map (`IndexMap<String, Value>`) from `name: value`
/// pairs, converting each value with [`Value::from`](crate::Value).
///
/// Keywords are accepted as names, so `type: ...` works.
///
/// ```
/// use graphql_dsl::prelude::*;
///
/// let args = arguments! { type: Value::tag("SHEEP"), age: 5 };
/// assert_eq!(args["type"], Value::Enum("SHEEP".to_string()));
/// assert_eq!(args["age"], Value::Int(5));
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::__IndexMap::<::std::string::String, $crate::Value>::new()
    };

    ($($name:ident : $value:expr),+ $(,)?) => {{
        let mut arguments =
            $crate::__IndexMap::<::std::string::String, $crate::Value>::new();
        $(
            arguments.insert(
                ::std::string::String::from(stringify!($name)),
                $crate::Value::from($value),
            );
        )+
        arguments
    }};
}

/// Declare selections inside a builder block using bare identifiers.
///
/// Every bare identifier becomes a field. Supported entries (separated by
/// optional `;` or `,`):
///
/// - `name`
/// - `name(arg: value, ...)`
/// - `name { ... }` / `name(arg: value, ...) { ... }`
/// - `...fragmentName`
/// - `... on Type { ... }` / `... { ... }`
///
/// Expands to [`SelectionSetBuilder`](crate::SelectionSetBuilder) calls
/// using `?`, so it must appear in a block returning
/// `Result<_, BuildError>`.
///
/// ```
/// use graphql_dsl::prelude::*;
///
/// let query = graphql_dsl::query(None, |query| {
///     selections!(query, {
///         animal(type: Value::tag("SHEEP")) {
///             name;
///             ...animalAge;
///             ... on Sheep { wool }
///         }
///     });
///     Ok(())
/// })?;
///
/// assert_eq!(
///     query.to_graphql()?,
///     "{\n  animal(type: SHEEP)\n  {\n    name\n    ...animalAge\n    \
///      ... on Sheep\n    {\n      wool\n    }\n  }\n}",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! selections {
    (@munch ($parent:expr)) => {};

    (@munch ($parent:expr) ; $($rest:tt)*) => {
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) , $($rest:tt)*) => {
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) ... on $type_condition:ident { $($inner:tt)* } $($rest:tt)*) => {
        $crate::SelectionSetBuilder::inline_fragment(
            &mut *$parent,
            ::std::option::Option::Some(stringify!($type_condition)),
            |inline_fragment| {
                $crate::selections!(@munch (inline_fragment) $($inner)*);
                ::std::result::Result::Ok(())
            },
        )?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) ... { $($inner:tt)* } $($rest:tt)*) => {
        $crate::SelectionSetBuilder::inline_fragment(
            &mut *$parent,
            ::std::option::Option::None,
            |inline_fragment| {
                $crate::selections!(@munch (inline_fragment) $($inner)*);
                ::std::result::Result::Ok(())
            },
        )?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) ... $name:ident $($rest:tt)*) => {
        $crate::SelectionSetBuilder::fragment_spread(
            &mut *$parent,
            stringify!($name),
        )?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) $name:ident ( $($args:tt)* ) { $($inner:tt)* } $($rest:tt)*) => {
        $crate::SelectionSetBuilder::field_with(
            &mut *$parent,
            stringify!($name),
            |field| {
                field.set_arguments($crate::arguments!($($args)*))?;
                $crate::selections!(@munch (field) $($inner)*);
                ::std::result::Result::Ok(())
            },
        )?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) $name:ident ( $($args:tt)* ) $($rest:tt)*) => {
        $crate::SelectionSetBuilder::field_with(
            &mut *$parent,
            stringify!($name),
            |field| {
                field.set_arguments($crate::arguments!($($args)*))?;
                ::std::result::Result::Ok(())
            },
        )?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) $name:ident { $($inner:tt)* } $($rest:tt)*) => {
        $crate::SelectionSetBuilder::field_with(
            &mut *$parent,
            stringify!($name),
            |field| {
                $crate::selections!(@munch (field) $($inner)*);
                ::std::result::Result::Ok(())
            },
        )?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    (@munch ($parent:expr) $name:ident $($rest:tt)*) => {
        $crate::SelectionSetBuilder::field(&mut *$parent, stringify!($name))?;
        $crate::selections!(@munch ($parent) $($rest)*);
    };

    ($parent:expr, { $($body:tt)* }) => {
        $crate::selections!(@munch ($parent) $($body)*);
    };
}
