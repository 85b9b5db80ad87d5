// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded single-line rendering of JSON values.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt::Write as _;

/// Composites nested deeper than this below the root are elided.
pub const MAX_DEPTH: usize = 2;

/// Arrays show at most this many elements before summarizing the rest.
pub const MAX_ARRAY_LENGTH: usize = 5;

/// Placeholder for a context field the caller never supplied.
pub const UNDEFINED: &str = "undefined";

/// Render `value` for inline display with the default bounds.
///
/// A JSON string comes back verbatim, with no quoting or escaping, so
/// branch names and tag formats read naturally inside prose.
///
/// ```
/// use serde_json::json;
/// use semrel_render::stringify;
///
/// assert_eq!(stringify(&json!("v${version}")), "v${version}");
/// assert_eq!(stringify(&json!({"path": "x"})), "{ path: 'x' }");
/// assert_eq!(stringify(&json!([1, 2, 3, 4, 5, 6, 7])), "[ 1, 2, 3, 4, 5, ... 2 more items ]");
/// ```
pub fn stringify(value: &Value) -> String {
    Stringifier::default().stringify(value)
}

/// Like [`stringify`], rendering a missing value as `undefined`.
pub fn stringify_opt(value: Option<&Value>) -> String {
    match value {
        Some(v) => stringify(v),
        None => UNDEFINED.to_string(),
    }
}

/// Convert `value` through `serde_json` and render it.
///
/// A value that refuses to serialize still yields text.
pub fn stringify_serialize<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(v) => stringify(&v),
        Err(e) => format!("[unserializable: {e}]"),
    }
}

/// Depth and length bounds for the debug rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stringifier {
    /// Deepest nesting level (root = 0) whose composites are expanded.
    pub max_depth: usize,
    /// Maximum number of array elements rendered.
    pub max_array_length: usize,
}

impl Default for Stringifier {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_array_length: MAX_ARRAY_LENGTH,
        }
    }
}

impl Stringifier {
    /// Render `value`; strings pass through unchanged.
    pub fn stringify(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => {
                let mut out = String::new();
                self.write_value(&mut out, other, 0);
                out
            }
        }
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(out, n),
            Value::String(s) => write_quoted(out, s),
            Value::Array(items) => self.write_array(out, items, depth),
            Value::Object(map) => self.write_object(out, map, depth),
        }
    }

    fn write_array(&self, out: &mut String, items: &[Value], depth: usize) {
        if items.is_empty() {
            out.push_str("[]");
            return;
        }
        if depth > self.max_depth {
            out.push_str("[Array]");
            return;
        }

        out.push_str("[ ");
        let shown = items.len().min(self.max_array_length);
        for (i, item) in items.iter().take(shown).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_value(out, item, depth + 1);
        }

        let hidden = items.len() - shown;
        if hidden > 0 {
            if shown > 0 {
                out.push_str(", ");
            }
            let plural = if hidden == 1 { "" } else { "s" };
            let _ = write!(out, "... {hidden} more item{plural}");
        }
        out.push_str(" ]");
    }

    fn write_object(&self, out: &mut String, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            out.push_str("{}");
            return;
        }
        if depth > self.max_depth {
            out.push_str("[Object]");
            return;
        }

        out.push_str("{ ");
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            write_key(out, key);
            out.push_str(": ");
            self.write_value(out, value, depth + 1);
        }
        out.push_str(" }");
    }
}

fn write_number(out: &mut String, n: &Number) {
    if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
        // Integral floats print like integers; `-0` keeps its sign.
        if f == 0.0 && f.is_sign_negative() {
            out.push_str("-0");
        } else if f.fract() == 0.0 && f.abs() < 1e15 {
            let _ = write!(out, "{}", f as i64);
        } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
            write_exponent(out, f);
        } else {
            let _ = write!(out, "{f}");
        }
        return;
    }
    let _ = write!(out, "{n}");
}

/// `1e+300`, `1.5e-7`: the exponent always carries its sign.
fn write_exponent(out: &mut String, f: f64) {
    let s = format!("{f:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => {
            let _ = write!(out, "{mantissa}e+{exp}");
        }
        _ => out.push_str(&s),
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_quoted(out, key);
    }
}

/// Quote with `'`, falling back to `"` then `` ` `` when the text already
/// contains the preferred quote.
fn write_quoted(out: &mut String, s: &str) {
    let quote = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
