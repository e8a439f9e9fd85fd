//! Renders JSON as an HCL `jsonencode(...)` expression.
//!
//! Map entries are written `"key" = value`, one per line, tab-indented.
//! Keys stay quoted; HCL accepts them that way.

use serde_json::Value;

/// Wraps `value` in `jsonencode(...)` using HCL map syntax.
pub fn to_hcl(value: &Value) -> String {
    let mut out = String::from("jsonencode(");
    write_value(&mut out, value, 0);
    out.push(')');
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, depth + 1);
                out.push_str(&Value::String(key.clone()).to_string());
                out.push_str(" = ");
                write_value(out, item, depth + 1);
            }
            newline(out, depth);
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push('\t');
    }
}
