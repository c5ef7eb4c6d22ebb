//! Reverse routing: build a concrete path from a registered pattern.

use routekit_core::path::find_wildcard;
use std::fmt::{Display, Write};

/// Substitute `args`, in order, for the wildcards of `pattern`.
///
/// A `:param` takes one argument, a `*catch_all` takes the next argument
/// verbatim (slashes included). Wildcards left over once `args` runs out
/// stay in the output unchanged; surplus arguments are ignored.
pub(crate) fn fill_pattern(pattern: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(pattern.len() + args.len() * 8);
    let mut rest = pattern;
    let mut args = args.iter();

    while let Some(wildcard) = find_wildcard(rest.as_bytes()) {
        let Some(arg) = args.next() else {
            break;
        };

        out.push_str(&rest[..wildcard.start]);
        let _ = write!(out, "{arg}");
        rest = &rest[wildcard.end..];
    }

    out.push_str(rest);
    out
}
