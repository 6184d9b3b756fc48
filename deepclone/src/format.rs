//! Pretty formatting for value graphs.
//!
//! Output is JSON-like and indented. Graphs may be cyclic, so a composite
//! that is already being printed further up is written as `<cycle>` instead
//! of being expanded again. Shared but acyclic sub-objects print in full at
//! every position.

use core::fmt::Write;

use crate::memo::Identity;
use crate::object::Prototype;
use crate::value::Value;

/// Format a value as indented JSON-like text.
pub fn format_value(value: &Value) -> String {
    let mut ctx = FormatContext::new();
    format_value_into(&mut ctx, value);
    ctx.output
}

struct FormatContext {
    output: String,
    indent: usize,
    ancestors: Vec<Identity>,
}

impl FormatContext {
    const fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
            ancestors: Vec::new(),
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.output, "\\u{:04x}", c as u32);
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

fn format_value_into(ctx: &mut FormatContext, value: &Value) {
    let id = Identity::of(value);
    if let Some(id) = id {
        if ctx.ancestors.contains(&id) {
            ctx.output.push_str("<cycle>");
            return;
        }
        ctx.ancestors.push(id);
    }

    match value {
        Value::Undefined => ctx.output.push_str("undefined"),
        Value::Null => ctx.output.push_str("null"),
        Value::Bool(b) => {
            let _ = write!(ctx.output, "{b}");
        }
        Value::Int(i) => {
            let _ = write!(ctx.output, "{i}");
        }
        Value::Float(f) => {
            let _ = write!(ctx.output, "{f}");
        }
        Value::String(s) => ctx.write_string(s.as_str()),
        Value::Function(func) => {
            let _ = write!(ctx.output, "<fn {}>", func.name());
        }
        Value::Host(host) => {
            let _ = write!(ctx.output, "<host {}>", host.type_name());
        }
        Value::Array(arr) => {
            let slots = arr.slots();
            if slots.is_empty() {
                ctx.output.push_str("[]");
            } else {
                ctx.output.push_str("[\n");
                ctx.indent += 1;
                for (i, slot) in slots.iter().enumerate() {
                    ctx.write_indent();
                    match slot {
                        Some(item) => format_value_into(ctx, item),
                        None => ctx.output.push_str("<hole>"),
                    }
                    if i < slots.len() - 1 {
                        ctx.output.push(',');
                    }
                    ctx.output.push('\n');
                }
                ctx.indent -= 1;
                ctx.write_indent();
                ctx.output.push(']');
            }
        }
        Value::Object(obj) => {
            if let Prototype::Class(name) = obj.prototype() {
                let _ = write!(ctx.output, "{name} ");
            }
            let entries = obj.entries();
            if entries.is_empty() {
                ctx.output.push_str("{}");
            } else {
                ctx.output.push_str("{\n");
                ctx.indent += 1;
                for (i, (key, val)) in entries.iter().enumerate() {
                    ctx.write_indent();
                    ctx.write_string(key);
                    ctx.output.push_str(": ");
                    format_value_into(ctx, val);
                    if i < entries.len() - 1 {
                        ctx.output.push(',');
                    }
                    ctx.output.push('\n');
                }
                ctx.indent -= 1;
                ctx.write_indent();
                ctx.output.push('}');
            }
        }
    }

    if id.is_some() {
        ctx.ancestors.pop();
    }
}
