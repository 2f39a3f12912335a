//! Placeholder scanning and substitution.
//!
//! A placeholder is `{{name}}` where `name` matches `[A-Za-z_][A-Za-z0-9_.-]*`
//! with no surrounding whitespace. Anything else between double braces, such
//! as the JSX object literal `{{ type, close }}`, is ordinary text. A
//! backslash directly before a placeholder (`\{{name}}`) escapes it: the
//! output contains `{{name}}` verbatim and no substitution is required.
//! There is no way to emit a literal backslash directly before a substituted
//! value: `\\{{name}}` is still read as that escape preceded by `\`.

use crate::core::error::{EmitError, Result};
use crate::core::templates::types::Substitutions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\\)?\{\{([A-Za-z_][A-Za-z0-9_.\-]*)\}\}").expect("placeholder pattern is valid")
});

fn is_escaped(caps: &Captures<'_>) -> bool {
    caps.get(1).is_some()
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(body: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(body) {
        if is_escaped(&caps) {
            continue;
        }
        let name = &caps[2];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Render `body` against `substitutions`.
///
/// Resolution is all-or-nothing: the first placeholder without an entry
/// aborts with [`EmitError::MissingVariable`] and no partial text is
/// returned. Values are inserted verbatim and never re-scanned.
pub fn render(body: &str, substitutions: &Substitutions) -> Result<String> {
    if let Some(missing) = placeholders(body)
        .into_iter()
        .find(|name| !substitutions.contains_key(name))
    {
        return Err(EmitError::missing_variable(missing));
    }

    let mut output = String::with_capacity(body.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(body) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&body[last..whole.start()]);
        let name = &caps[2];
        if is_escaped(&caps) {
            output.push_str("{{");
            output.push_str(name);
            output.push_str("}}");
        } else if let Some(value) = substitutions.get(name) {
            output.push_str(value);
        }
        last = whole.end();
    }
    output.push_str(&body[last..]);

    Ok(output)
}
