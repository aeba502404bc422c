use tracing::debug;

use crate::descriptor::{Descriptor, Kind};
use crate::error::{Error, Result};
use crate::meta::Value;

/// Check that every required text option holds a value.
///
/// A field still holding its empty sentinel counts as not specified, even if
/// the user passed an empty string explicitly.
pub fn verify<C>(container: &C, descriptors: &[Descriptor<C>]) -> Result<()> {
    let mut unmet = Vec::new();
    for option in descriptors.iter().filter(|d| d.required() && d.kind() == Kind::Text) {
        if option.read(container)? == Value::Text(None) {
            unmet.push(option.primary_flag());
        }
    }

    if unmet.is_empty() {
        return Ok(());
    }
    debug!(?unmet, "required options missing");
    Err(Error::usage(format!(
        "the following required options were not specified: {}",
        unmet.join(", ")
    )))
}
