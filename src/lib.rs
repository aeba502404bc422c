//! A declarative CLI parser that fills annotated option structs.
//!
//! example usage:
//! ```
//! use flagbind::Options;
//!
//! #[derive(Options, Default, Debug)]
//! #[options(name = "myapp")]
//! struct MyOptions {
//!     #[opt("--named-option", "-no", required, description = "some option")]
//!     named_option: Option<String>,
//!     #[opt("--flag", "-f", description = "some flag")]
//!     flag: bool,
//! }
//!
//! let options = MyOptions::try_parse_from(["--named-option", "foobar", "-f"]).unwrap();
//! assert_eq!(options.named_option.as_deref(), Some("foobar"));
//! assert!(options.flag);
//! ```
//!
//! Text options take the following argument verbatim, boolean options are set
//! by their bare flag. Flags match case-insensitively and anything that matches
//! no flag is ignored.
#![forbid(unsafe_code)]

// Lets `derive(Options)` expand to `::flagbind` paths inside this crate too.
extern crate self as flagbind;

mod descriptor;
mod error;
mod help;
mod meta;
mod scan;
mod verify;

#[cfg(feature = "derive")]
pub use flagbind_derive::Options;

pub use crate::descriptor::{Descriptor, Kind, resolve};
pub use crate::error::{Error, Result};
pub use crate::meta::{Getter, OptionMeta, OptionValue, Setter, Value, ValueType};
pub use crate::scan::scan;
pub use crate::verify::verify;

/// An options container: a type whose fields are filled from flags.
///
/// Usually derived. A hand-written impl lists its options with
/// [`OptionMeta`]; options without both a getter and a setter are skipped.
pub trait Options: Default + Sized {
    /// Program name shown in the usage line of the help text.
    const NAME: Option<&'static str> = None;
    /// Text shown below the usage line.
    const ABOUT: Option<&'static str> = None;

    /// The declared options, in declaration order.
    fn options() -> Vec<OptionMeta<Self>>;

    fn try_parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        parse(args)
    }

    /// Parse the process arguments, exiting on a usage error.
    fn parse_env() -> Result<Self> {
        parse_or_exit(std::env::args().skip(1))
    }

    fn help() -> Result<String> {
        help_message::<Self>()
    }
}

/// Fill a default `C` from `args`.
///
/// Every error is returned to the caller.
pub fn parse<C, I>(args: I) -> Result<C>
where
    C: Options,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut container = C::default();
    let descriptors = resolve::<C>()?;
    scan(&mut container, &descriptors, args)?;
    verify(&container, &descriptors)?;
    Ok(container)
}

/// Like [`parse`], but a usage error is printed to stderr and terminates the
/// process with [`Error::exit_code`].
///
/// Configuration and internal errors are still returned.
pub fn parse_or_exit<C, I>(args: I) -> Result<C>
where
    C: Options,
    I: IntoIterator,
    I::Item: Into<String>,
{
    match parse(args) {
        Err(err) if err.is_usage() => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
        ret => ret,
    }
}

/// [`parse_or_exit`] if `handle_wrong_arguments` is set, [`parse`] otherwise.
pub fn parse_args<C, I>(args: I, handle_wrong_arguments: bool) -> Result<C>
where
    C: Options,
    I: IntoIterator,
    I::Item: Into<String>,
{
    if handle_wrong_arguments { parse_or_exit(args) } else { parse(args) }
}

/// Help text listing required and optional flags of `C` with descriptions.
pub fn help_message<C: Options>() -> Result<String> {
    let descriptors = resolve::<C>()?;
    Ok(help::render_help(C::NAME, C::ABOUT, &descriptors))
}
