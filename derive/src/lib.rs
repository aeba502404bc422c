//! Derive macro for flagbind. Use the re-export `flagbind::Options` instead.
//!
//! example usage:
//! ```ignore
//! #[derive(Options, Default)]
//! #[options(name = "myapp")]
//! struct MyOptions {
//!     #[opt("--output", "-o", required, description = "where to write")]
//!     output: Option<String>,
//!     /// Print more.
//!     #[opt("--verbose", "-v")]
//!     verbose: bool,
//! }
//! ```
#![forbid(unsafe_code)]

extern crate proc_macro;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attr;
mod expand;


#[proc_macro_derive(Options, attributes(opt, options))]
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand(&input).into()
}
