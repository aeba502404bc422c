use tracing::trace;

use crate::descriptor::{Descriptor, Kind};
use crate::error::{Error, Result};
use crate::meta::Value;

/// Walk `args` once, writing every matched option into `container`.
///
/// Unknown tokens are skipped. Writes happen as matches are found, so a
/// failure leaves earlier writes in place.
pub fn scan<C, I>(container: &mut C, descriptors: &[Descriptor<C>], args: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        // First declared option wins if aliases collide.
        let Some(option) = descriptors.iter().find(|d| d.matches(&arg)) else {
            trace!(arg = %arg, "ignoring unrecognized argument");
            continue;
        };

        match option.kind() {
            Kind::Boolean => {
                trace!(option = option.primary_flag(), "set flag");
                option.assign(container, Value::Boolean(true))?;
            }
            Kind::Text => {
                let Some(value) = args.next() else {
                    return Err(Error::usage(format!(
                        "value expected for option {}",
                        option.primary_flag()
                    )));
                };
                trace!(option = option.primary_flag(), "set value");
                option.assign(container, Value::Text(Some(value)))?;
            }
        }
    }
    Ok(())
}
