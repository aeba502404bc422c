use std::fmt::Write;

use crate::descriptor::{Descriptor, Kind};

/// Render help for resolved options, grouped into required and optional ones.
///
/// Only enforced options land under `Required:`, so a boolean declared
/// `required` is listed as optional. Grouping on the declaration alone would
/// list it as required.
///
/// The usage line is only emitted when the container names its program.
pub(crate) fn render_help<C>(
    name: Option<&str>,
    about: Option<&str>,
    descriptors: &[Descriptor<C>],
) -> String {
    let mut out = String::new();

    if let Some(name) = name {
        out.push_str("usage: ");
        out.push_str(name);
        for option in descriptors {
            let flag = option.primary_flag();
            let _ = match (option.kind(), is_required(option)) {
                (Kind::Text, true) => write!(out, " {flag} VALUE"),
                (Kind::Text, false) => write!(out, " [{flag} VALUE]"),
                (Kind::Boolean, _) => write!(out, " [{flag}]"),
            };
        }
        out.push('\n');
    }
    if let Some(about) = about {
        out.push_str(about);
        out.push('\n');
    }

    out.push_str("Required:\n");
    for option in descriptors.iter().filter(|o| is_required(o)) {
        help_line(&mut out, option);
    }
    out.push_str("Optional:\n");
    for option in descriptors.iter().filter(|o| !is_required(o)) {
        help_line(&mut out, option);
    }
    out
}

// Booleans are never enforced, whatever their declaration says.
fn is_required<C>(option: &Descriptor<C>) -> bool {
    option.required() && option.kind() == Kind::Text
}

fn help_line<C>(out: &mut String, option: &Descriptor<C>) {
    let _ = writeln!(
        out,
        "  {}: {}",
        option.flags().join(", "),
        option.description().unwrap_or_default()
    );
}
