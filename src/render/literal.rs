//! Source-literal encoders for values embedded in generated code.

/// Double-quoted literal, or `null` for an absent value.
///
/// Uses JSON string encoding, which parses back to the exact input.
pub fn js_str(value: Option<&str>) -> String {
    match value {
        Some(text) => serde_json::Value::String(text.to_string()).to_string(),
        None => "null".to_string(),
    }
}

/// Single-quoted literal, or `null` for an absent value.
///
/// Selectors go through this one because they are later interpolated into
/// template literals in the generated class, where double quotes are common.
pub fn single_quoted(value: Option<&str>) -> String {
    let Some(text) = value else {
        return "null".to_string();
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
