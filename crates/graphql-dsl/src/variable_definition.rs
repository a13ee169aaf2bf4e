use crate::BuildError;
use crate::Directive;
use crate::IntoDirective;
use crate::Value;
use crate::directive::normalize_directives;

type Result<T> = std::result::Result<T, BuildError>;

/// The type, optional default value and directives declared for one
/// operation variable (`$name: Type = default @directive`).
///
/// The variable's name is not stored here; it is the key under which the
/// definition lives in its operation's variable map.
///
/// `default_value` distinguishes "no default clause" (`None`) from an
/// explicit `null` default (`Some(Value::Null)`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawVariableDefinition")]
pub struct VariableDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) type_annotation: String,
}
impl VariableDefinition {
    /// Create a [`VariableDefinition`] with no default and no directives.
    ///
    /// `type_annotation` is emitted verbatim (e.g. `String`, `[ID!]!`).
    /// Fails with [`BuildError::MissingType`] when it is empty.
    pub fn new(type_annotation: impl Into<String>) -> Result<Self> {
        let type_annotation = type_annotation.into();
        if type_annotation.is_empty() {
            log::debug!("Rejecting variable definition without a type.");
            return Err(BuildError::MissingType {
                context: "variable definition".to_string(),
            });
        }

        Ok(Self {
            default_value: None,
            directives: vec![],
            type_annotation,
        })
    }

    /// Add a directive after any previously added directives.
    pub fn add_directive(mut self, directive: impl IntoDirective) -> Result<Self> {
        self.directives.push(directive.into_directive()?);
        Ok(self)
    }

    /// Set the default value. Passing [`Value::Null`] produces an explicit
    /// `= null` clause.
    pub fn set_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Replace the list of directives.
    pub fn set_directives<D: IntoDirective>(
        mut self,
        directives: impl IntoIterator<Item = D>,
    ) -> Result<Self> {
        self.directives = normalize_directives(directives)?;
        Ok(self)
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &Vec<Directive> {
        &self.directives
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }

    fn from_value(shape: Value) -> Result<Self> {
        let unsupported = || BuildError::UnsupportedVariableDefinitionShape {
            shape: shape.to_owned(),
        };
        let type_from = |value: Option<&Value>| -> Result<Self> {
            match value {
                None | Some(Value::Null) => Self::new(""),
                Some(value) => Self::new(
                    value.as_name_like().ok_or_else(unsupported)?,
                ),
            }
        };
        let directives_from = |value: &Value| -> Result<Vec<Directive>> {
            match value {
                Value::List(directives) =>
                    normalize_directives(directives.iter().cloned()),
                _ => Err(unsupported()),
            }
        };

        match &shape {
            Value::Enum(type_annotation) | Value::String(type_annotation) =>
                Self::new(type_annotation.as_str()),

            Value::List(items) => {
                if items.is_empty() || items.len() > 3 {
                    return Err(unsupported());
                }
                let mut var_def = type_from(items.first())?;
                var_def.default_value = items.get(1).cloned();
                if let Some(directives) = items.get(2) {
                    var_def.directives = directives_from(directives)?;
                }
                Ok(var_def)
            },

            Value::Object(record) => {
                let mut var_def = type_from(record.get("type"))?;
                var_def.default_value = record.get("default").cloned();
                if let Some(directives) = record.get("directives") {
                    var_def.directives = directives_from(directives)?;
                }
                Ok(var_def)
            },

            _ => Err(unsupported()),
        }
    }
}

#[derive(serde::Deserialize)]
struct RawVariableDefinition {
    default_value: Option<Value>,
    directives: Vec<Directive>,
    type_annotation: String,
}
impl TryFrom<RawVariableDefinition> for VariableDefinition {
    type Error = BuildError;

    fn try_from(raw: RawVariableDefinition) -> Result<Self> {
        let mut var_def = Self::new(raw.type_annotation)?;
        var_def.default_value = raw.default_value;
        var_def.directives = raw.directives;
        Ok(var_def)
    }
}

/// Caller-supplied shapes that can be normalized into a
/// [`VariableDefinition`].
///
/// Implemented for an existing [`VariableDefinition`], a bare type name
/// (`&str` / `String`), positional `(type, default)` and
/// `(type, default, directives)` tuples, and a dynamic [`Value`]
/// (`Type`, `[Type, default?, [directives]?]` or
/// `{type: Type, default?: ..., directives?: [...]}`).
pub trait IntoVariableDefinition {
    fn into_variable_definition(self) -> Result<VariableDefinition>;
}

impl IntoVariableDefinition for VariableDefinition {
    fn into_variable_definition(self) -> Result<VariableDefinition> {
        Ok(self)
    }
}
impl IntoVariableDefinition for &str {
    fn into_variable_definition(self) -> Result<VariableDefinition> {
        VariableDefinition::new(self)
    }
}
impl IntoVariableDefinition for String {
    fn into_variable_definition(self) -> Result<VariableDefinition> {
        VariableDefinition::new(self)
    }
}
impl<T, V> IntoVariableDefinition for (T, V)
where
    T: Into<String>,
    V: Into<Value>,
{
    fn into_variable_definition(self) -> Result<VariableDefinition> {
        Ok(VariableDefinition::new(self.0)?.set_default_value(self.1))
    }
}
impl<T, V, D> IntoVariableDefinition for (T, V, Vec<D>)
where
    T: Into<String>,
    V: Into<Value>,
    D: IntoDirective,
{
    fn into_variable_definition(self) -> Result<VariableDefinition> {
        VariableDefinition::new(self.0)?
            .set_default_value(self.1)
            .set_directives(self.2)
    }
}
impl IntoVariableDefinition for Value {
    fn into_variable_definition(self) -> Result<VariableDefinition> {
        VariableDefinition::from_value(self)
    }
}
