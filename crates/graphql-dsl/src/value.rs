use indexmap::IndexMap;

/// A GraphQL input value as supplied by the caller.
///
/// Covers every literal form of the
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// grammar. [`Value::Variable`] holds the variable name *without* its
/// leading `$`.
///
/// Values are constructed transiently and only read by the formatter; use
/// the `From` conversions for scalars and collections and [`Value::tag`]
/// for enum literals and variable references.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    /// Build an enum literal (e.g. `SHEEP`).
    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    /// Build an object value from `(name, value)` pairs, preserving their
    /// order.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Interpret a bare tag: `$name` is a variable reference, anything else
    /// is an enum literal.
    pub fn tag(tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref();
        match tag.strip_prefix('$') {
            Some(var_name) => Self::Variable(var_name.to_string()),
            None => Self::Enum(tag.to_string()),
        }
    }

    /// Build a variable reference. A leading `$` is optional.
    pub fn variable(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self::Variable(name.strip_prefix('$').unwrap_or(name).to_string())
    }

    /// If this value is an enum literal or a string, return its text.
    ///
    /// Used when a dynamic [`Value`] stands in for a name or a type.
    pub(crate) fn as_name_like(&self) -> Option<&str> {
        match self {
            Value::Enum(text) | Value::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.to_owned())
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self::Object(value)
    }
}
