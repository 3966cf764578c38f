//! Escaping applied to every inbound response before it reaches presentation code

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Escape the five HTML-significant characters.
///
/// Returns the input unchanged (borrowed) when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Return a copy of `value` with every string leaf HTML-escaped.
///
/// Object keys, numbers, booleans and nulls are carried over as-is and the
/// shape of arrays and objects is preserved exactly.
pub fn sanitize(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_html(s).into_owned()),
        Value::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, v)| (key.clone(), sanitize(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Accept only `http:`, `https:` and non-HTML `data:` URLs.
///
/// Returns `None` for anything else, including `javascript:` and `vbscript:`.
pub fn sanitize_url(url: &str) -> Option<&str> {
    let allowed = ["http:", "https:", "data:"]
        .iter()
        .any(|scheme| has_scheme(url, scheme));
    if !allowed {
        return None;
    }

    let dangerous = ["javascript:", "vbscript:", "data:text/html"]
        .iter()
        .any(|scheme| has_scheme(url, scheme));
    if dangerous {
        return None;
    }

    Some(url)
}
