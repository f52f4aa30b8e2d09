//! Push-style JSON writer that appends to a growing string.

use std::fmt::Write as _;

/// A JSON writer producing compact output.
///
/// Commas and colons are inserted automatically. The writer does not
/// validate call order: callers are expected to pair every `begin_*` with the
/// matching `end_*` and to precede object values with [`name`](Self::name).
///
/// # Example
///
/// ```
/// use connect_sdk_json_stream::JsonWriter;
///
/// let mut writer = JsonWriter::new();
/// writer.begin_object();
/// writer.name("Queues").begin_array();
/// writer.value_str("q-1").value_str("q-2");
/// writer.end_array();
/// writer.name("MaxResults").value_i64(100);
/// writer.end_object();
/// assert_eq!(writer.finish(), r#"{"Queues":["q-1","q-2"],"MaxResults":100}"#);
/// ```
#[derive(Debug, Default)]
pub struct JsonWriter {
    out: String,
    /// One entry per open container: `true` until the first element is written.
    stack: Vec<bool>,
    after_name: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with a pre-allocated output buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn begin_object(&mut self) -> &mut Self {
        self.before_value();
        self.out.push('{');
        self.stack.push(true);
        self
    }

    pub fn end_object(&mut self) -> &mut Self {
        self.stack.pop();
        self.out.push('}');
        self
    }

    pub fn begin_array(&mut self) -> &mut Self {
        self.before_value();
        self.out.push('[');
        self.stack.push(true);
        self
    }

    pub fn end_array(&mut self) -> &mut Self {
        self.stack.pop();
        self.out.push(']');
        self
    }

    /// Writes a property name. The next value call supplies its value.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.separator();
        write_escaped(&mut self.out, name);
        self.out.push(':');
        self.after_name = true;
        self
    }

    pub fn value_str(&mut self, value: &str) -> &mut Self {
        self.before_value();
        write_escaped(&mut self.out, value);
        self
    }

    pub fn value_bool(&mut self, value: bool) -> &mut Self {
        self.before_value();
        self.out.push_str(if value { "true" } else { "false" });
        self
    }

    pub fn value_i64(&mut self, value: i64) -> &mut Self {
        self.before_value();
        let _ = write!(self.out, "{value}");
        self
    }

    /// Writes a double. Non-finite values have no JSON literal and are
    /// written as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
    pub fn value_f64(&mut self, value: f64) -> &mut Self {
        match serde_json::Number::from_f64(value) {
            Some(number) => {
                self.before_value();
                let _ = write!(self.out, "{number}");
                self
            }
            None => self.value_str(non_finite_text(value)),
        }
    }

    /// Writes pre-formatted number text verbatim.
    pub fn value_raw_number(&mut self, text: &str) -> &mut Self {
        self.before_value();
        self.out.push_str(text);
        self
    }

    pub fn null_value(&mut self) -> &mut Self {
        self.before_value();
        self.out.push_str("null");
        self
    }

    /// Number of open objects and arrays.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out.into_bytes()
    }

    fn before_value(&mut self) {
        if self.after_name {
            self.after_name = false;
            return;
        }
        self.separator();
    }

    fn separator(&mut self) {
        if let Some(first) = self.stack.last_mut() {
            if !*first {
                self.out.push(',');
            }
            *first = false;
        }
    }
}

fn non_finite_text(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn write_escaped(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
