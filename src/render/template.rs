//! The fixed part of the generated class.
//!
//! The boilerplate lives in `page_object.js.tmpl` and only sees the values
//! handed to [`fill`]; table rendering never edits the template text.

/// Bumped whenever the template text changes.
pub const TEMPLATE_VERSION: u32 = 1;

pub const PAGE_OBJECT_TEMPLATE: &str = include_str!("page_object.js.tmpl");

/// Replaces `{{NAME}}` placeholders in a single pass.
///
/// Substituted values are copied verbatim, so data that happens to contain
/// `{{...}}` is never expanded. Unknown placeholders are left as they are.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                ::log::warn!("Template placeholder {{{{{}}}}} has no value", name);
                out.push_str(&rest[start..start + end + 4]);
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
