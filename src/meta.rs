//! Raw option metadata, as supplied by `derive(Options)` or a hand-written
//! [`Options`](crate::Options) impl.

use std::fmt;

/// Reads the current value of an option field.
pub type Getter<C> = fn(&C) -> Value;

/// Writes a new value into an option field.
///
/// The value is handed back unchanged if the field cannot hold it.
pub type Setter<C> = fn(&mut C, Value) -> Result<(), Value>;

/// The semantic type an option field declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Boolean,
    /// Anything else. Rejected when options are resolved.
    Other(&'static str),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// A value crossing the accessor boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `None` is the empty sentinel of a text field.
    Text(Option<String>),
    Boolean(bool),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Text(_) => ValueType::Text,
            Self::Boolean(_) => ValueType::Boolean,
        }
    }
}

/// Field types that can back an option.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a flagbind option field",
    label = "unsupported option type",
    note = "option fields must be `bool`, `String` or `Option<String>`"
)]
pub trait OptionValue: Sized {
    const VALUE_TYPE: ValueType;

    fn to_value(&self) -> Value;
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl OptionValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(other),
        }
    }
}

/// An empty string reads as unset.
impl OptionValue for String {
    const VALUE_TYPE: ValueType = ValueType::Text;

    fn to_value(&self) -> Value {
        Value::Text((!self.is_empty()).then(|| self.clone()))
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Text(s) => Ok(s.unwrap_or_default()),
            other => Err(other),
        }
    }
}

/// `Some("")` reads as unset, the same as an empty `String`.
impl OptionValue for Option<String> {
    const VALUE_TYPE: ValueType = ValueType::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone().filter(|s| !s.is_empty()))
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(other),
        }
    }
}

/// One declared option of a container type `C`, before validation.
pub struct OptionMeta<C> {
    pub(crate) flags: &'static [&'static str],
    pub(crate) value_type: ValueType,
    pub(crate) required: bool,
    pub(crate) description: Option<&'static str>,
    pub(crate) getter: Option<Getter<C>>,
    pub(crate) setter: Option<Setter<C>>,
}

impl<C> OptionMeta<C> {
    pub const fn new(flags: &'static [&'static str], value_type: ValueType) -> Self {
        Self {
            flags,
            value_type,
            required: false,
            description: None,
            getter: None,
            setter: None,
        }
    }

    /// Only has an effect on text options.
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn getter(mut self, getter: Getter<C>) -> Self {
        self.getter = Some(getter);
        self
    }

    pub const fn setter(mut self, setter: Setter<C>) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn flags(&self) -> &'static [&'static str] {
        self.flags
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

impl<C> fmt::Debug for OptionMeta<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionMeta")
            .field("flags", &self.flags)
            .field("value_type", &self.value_type)
            .field("required", &self.required)
            .field("description", &self.description)
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sentinel() {
        assert_eq!(String::new().to_value(), Value::Text(None));
        assert_eq!("x".to_owned().to_value(), Value::Text(Some("x".into())));
        assert_eq!(String::from_value(Value::Text(None)), Ok(String::new()));
        assert_eq!(Some(String::new()).to_value(), Value::Text(None));
        assert_eq!(None::<String>.to_value(), Value::Text(None));
    }

    #[test]
    fn mismatched_values_are_handed_back() {
        assert_eq!(bool::from_value(Value::Text(None)), Err(Value::Text(None)));
        assert_eq!(
            <Option<String>>::from_value(Value::Boolean(true)),
            Err(Value::Boolean(true))
        );
    }
}
