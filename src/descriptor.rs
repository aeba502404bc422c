use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::meta::{Getter, OptionMeta, Setter, Value, ValueType};
use crate::Options;

const ALLOWED_TYPES: &str = "Text, Boolean";

/// The semantic kind of a resolved option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Consumes the following token as its value.
    Text,
    /// Set to `true` on match. Consumes nothing.
    Boolean,
}

impl Kind {
    fn value_type(self) -> ValueType {
        match self {
            Self::Text => ValueType::Text,
            Self::Boolean => ValueType::Boolean,
        }
    }
}

/// A validated option of container type `C`, valid for one parse call.
pub struct Descriptor<C> {
    flags: &'static [&'static str],
    kind: Kind,
    required: bool,
    description: Option<&'static str>,
    get: Getter<C>,
    set: Setter<C>,
}

impl<C> Descriptor<C> {
    pub fn flags(&self) -> &'static [&'static str] {
        self.flags
    }

    /// The alias used in error messages.
    pub fn primary_flag(&self) -> &'static str {
        self.flags[0]
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    pub(crate) fn matches(&self, arg: &str) -> bool {
        self.flags.iter().any(|flag| eq_ignore_case(flag, arg))
    }

    pub(crate) fn assign(&self, container: &mut C, value: Value) -> Result<()> {
        (self.set)(container, value).map_err(|rejected| {
            Error::internal(format!(
                "option {} is declared as {}, but its setter rejected a {} value",
                self.primary_flag(),
                self.kind.value_type(),
                rejected.value_type(),
            ))
        })
    }

    pub(crate) fn read(&self, container: &C) -> Result<Value> {
        let value = (self.get)(container);
        if value.value_type() != self.kind.value_type() {
            return Err(Error::internal(format!(
                "option {} is declared as {}, but its getter returned a {} value",
                self.primary_flag(),
                self.kind.value_type(),
                value.value_type(),
            )));
        }
        Ok(value)
    }
}

impl<C> fmt::Debug for Descriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("flags", &self.flags)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Resolve the declared options of `C` into descriptors, in declaration order.
///
/// Options lacking either accessor are not options and are skipped.
pub fn resolve<C: Options>() -> Result<Vec<Descriptor<C>>> {
    let descriptors = C::options()
        .into_iter()
        .filter_map(eligible)
        .map(|(meta, get, set)| {
            let kind = match meta.value_type {
                ValueType::Text => Kind::Text,
                ValueType::Boolean => Kind::Boolean,
                ValueType::Other(name) => {
                    return Err(Error::configuration(format!(
                        "option field type must be one of {ALLOWED_TYPES}, not {name}"
                    )));
                }
            };
            if meta.flags.is_empty() {
                return Err(Error::configuration(format!(
                    "a {kind:?} option of {} declares no flags",
                    std::any::type_name::<C>(),
                )));
            }
            Ok(Descriptor {
                flags: meta.flags,
                kind,
                required: meta.required,
                description: meta.description,
                get,
                set,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        container = std::any::type_name::<C>(),
        options = descriptors.len(),
        "resolved options"
    );
    Ok(descriptors)
}

fn eligible<C>(meta: OptionMeta<C>) -> Option<(OptionMeta<C>, Getter<C>, Setter<C>)> {
    match (meta.getter, meta.setter) {
        (Some(get), Some(set)) => Some((meta, get, set)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folding() {
        assert!(eq_ignore_case("--flag", "--FLAG"));
        assert!(eq_ignore_case("--ÄRGER", "--ärger"));
        assert!(!eq_ignore_case("--flag", "--flags"));
    }
}
