use crate::BuildError;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, BuildError>;

/// A directive annotation (e.g. `@include(if: $withAge)`) applied to an
/// operation, field, fragment or variable definition.
///
/// The stored name may or may not carry its leading `@`; the formatter
/// never doubles it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawDirective")]
pub struct Directive {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl Directive {
    /// Create a [`Directive`] without arguments.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_arguments(name, IndexMap::new())
    }

    /// Create a [`Directive`] with the given arguments.
    ///
    /// Fails with [`BuildError::MissingName`] when `name` is empty (or is
    /// just `@`) or when any argument name is empty.
    pub fn with_arguments(
        name: impl Into<String>,
        arguments: IndexMap<String, Value>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim_start_matches('@').is_empty() {
            log::debug!("Rejecting directive with an empty name `{name}`.");
            return Err(BuildError::MissingName {
                context: "directive",
            });
        }
        check_argument_names(&arguments)?;

        Ok(Self {
            arguments,
            name,
        })
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Normalize any supported shape into a [`Directive`].
    ///
    /// Normalizing an existing [`Directive`] returns it unchanged.
    pub fn from_shape(shape: impl IntoDirective) -> Result<Self> {
        shape.into_directive()
    }

    fn from_value(shape: Value) -> Result<Self> {
        let unsupported = || BuildError::UnsupportedDirectiveShape {
            shape: shape.to_owned(),
        };
        let missing_name = || BuildError::MissingName {
            context: "directive",
        };

        match &shape {
            Value::Enum(name) | Value::String(name) => Self::new(name.as_str()),

            Value::List(items) => match items.as_slice() {
                [Value::Null] | [Value::Null, Value::Object(_)] =>
                    Err(missing_name()),

                [name] => {
                    let name = name.as_name_like().ok_or_else(unsupported)?;
                    Self::new(name)
                },

                [name, Value::Object(arguments)] => {
                    let name = name.as_name_like().ok_or_else(unsupported)?;
                    Self::with_arguments(name, arguments.to_owned())
                },

                _ => Err(unsupported()),
            },

            Value::Object(record) => {
                let name = match record.get("name") {
                    None | Some(Value::Null) => return Err(missing_name()),
                    Some(name) => name.as_name_like().ok_or_else(unsupported)?,
                };

                match record.get("args") {
                    None => Self::new(name),
                    Some(Value::Object(arguments)) =>
                        Self::with_arguments(name, arguments.to_owned()),
                    Some(_) => Err(unsupported()),
                }
            },

            _ => Err(unsupported()),
        }
    }
}

#[derive(serde::Deserialize)]
struct RawDirective {
    arguments: IndexMap<String, Value>,
    name: String,
}
impl TryFrom<RawDirective> for Directive {
    type Error = BuildError;

    fn try_from(raw: RawDirective) -> Result<Self> {
        Self::with_arguments(raw.name, raw.arguments)
    }
}

/// Caller-supplied shapes that can be normalized into a [`Directive`].
///
/// Implemented for an existing [`Directive`], a bare name (`&str` /
/// `String`), a positional `(name, arguments)` pair and a dynamic [`Value`]
/// (`NAME`, `[NAME, {args}]` or `{name: NAME, args: {...}}`).
pub trait IntoDirective {
    fn into_directive(self) -> Result<Directive>;
}

impl IntoDirective for Directive {
    fn into_directive(self) -> Result<Directive> {
        Ok(self)
    }
}
impl IntoDirective for &Directive {
    fn into_directive(self) -> Result<Directive> {
        Ok(self.to_owned())
    }
}
impl IntoDirective for &str {
    fn into_directive(self) -> Result<Directive> {
        Directive::new(self)
    }
}
impl IntoDirective for String {
    fn into_directive(self) -> Result<Directive> {
        Directive::new(self)
    }
}
impl<N: Into<String>> IntoDirective for (N, IndexMap<String, Value>) {
    fn into_directive(self) -> Result<Directive> {
        Directive::with_arguments(self.0, self.1)
    }
}
impl IntoDirective for Value {
    fn into_directive(self) -> Result<Directive> {
        Directive::from_value(self)
    }
}

/// Normalize every item of `shapes`, stopping at the first failure.
pub(crate) fn normalize_directives<D: IntoDirective>(
    shapes: impl IntoIterator<Item = D>,
) -> Result<Vec<Directive>> {
    shapes.into_iter()
        .map(IntoDirective::into_directive)
        .collect()
}

/// Fails with [`BuildError::MissingName`] if any argument name is empty.
pub(crate) fn check_argument_names(arguments: &IndexMap<String, Value>) -> Result<()> {
    if arguments.keys().any(String::is_empty) {
        log::debug!("Rejecting argument without a name.");
        return Err(BuildError::MissingName {
            context: "argument",
        });
    }
    Ok(())
}
