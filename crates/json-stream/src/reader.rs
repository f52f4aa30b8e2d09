//! Pull-style JSON reader with cursor tracking.

use std::str;

use crate::{JsonStreamError, JsonToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Inside an object, next token is a property name or `}`.
    ObjectName { first: bool },
    /// Inside an object, a name was consumed and its value comes next.
    ObjectValue,
    Array { first: bool },
}

/// Default nesting limit of objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A forward-only JSON reader over a UTF-8 byte slice.
///
/// The reader never materializes a document tree. Callers inspect the next
/// token with [`peek`](Self::peek) and consume it with the matching method.
/// Separators (`,` and `:`) are handled internally. Opening more than
/// [`DEFAULT_MAX_DEPTH`] nested containers fails with
/// [`JsonStreamError::DepthLimitExceeded`].
///
/// # Example
///
/// ```
/// use connect_sdk_json_stream::{JsonReader, JsonToken};
///
/// let mut reader = JsonReader::new(br#"{"tags":["a","b"],"extra":{"x":1}}"#);
/// reader.begin_object().unwrap();
/// assert_eq!(reader.next_name().unwrap(), "tags");
/// reader.begin_array().unwrap();
/// assert_eq!(reader.next_string().unwrap(), "a");
/// assert_eq!(reader.next_string().unwrap(), "b");
/// reader.end_array().unwrap();
/// assert_eq!(reader.next_name().unwrap(), "extra");
/// reader.skip_value().unwrap();
/// assert_eq!(reader.peek().unwrap(), JsonToken::EndObject);
/// reader.end_object().unwrap();
/// ```
pub struct JsonReader<'a> {
    uint8: &'a [u8],
    x: usize,
    stack: Vec<Scope>,
    peeked: Option<JsonToken>,
    done: bool,
    max_depth: usize,
}

impl<'a> JsonReader<'a> {
    /// Creates a reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self {
            uint8,
            x: 0,
            stack: Vec::new(),
            peeked: None,
            done: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the nesting limit of objects and arrays.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Current cursor position in bytes.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Number of open objects and arrays.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the kind of the next token without consuming it.
    pub fn peek(&mut self) -> Result<JsonToken, JsonStreamError> {
        if let Some(token) = self.peeked {
            return Ok(token);
        }
        let token = self.scan()?;
        self.peeked = Some(token);
        Ok(token)
    }

    /// Returns `true` when the next token opens an object or an array.
    pub fn is_container(&mut self) -> Result<bool, JsonStreamError> {
        Ok(self.peek()?.is_container())
    }

    /// Returns `true` while the current object or array has more elements.
    pub fn has_next(&mut self) -> Result<bool, JsonStreamError> {
        Ok(!matches!(
            self.peek()?,
            JsonToken::EndObject | JsonToken::EndArray | JsonToken::EndDocument
        ))
    }

    pub fn begin_object(&mut self) -> Result<(), JsonStreamError> {
        self.consume(JsonToken::BeginObject)?;
        self.check_depth()?;
        self.x += 1;
        self.stack.push(Scope::ObjectName { first: true });
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), JsonStreamError> {
        self.consume(JsonToken::EndObject)?;
        self.x += 1;
        self.stack.pop();
        self.after_value();
        Ok(())
    }

    pub fn begin_array(&mut self) -> Result<(), JsonStreamError> {
        self.consume(JsonToken::BeginArray)?;
        self.check_depth()?;
        self.x += 1;
        self.stack.push(Scope::Array { first: true });
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<(), JsonStreamError> {
        self.consume(JsonToken::EndArray)?;
        self.x += 1;
        self.stack.pop();
        self.after_value();
        Ok(())
    }

    /// Consumes a property name and the `:` that follows it.
    pub fn next_name(&mut self) -> Result<String, JsonStreamError> {
        self.consume(JsonToken::Name)?;
        let name = self.read_string()?;
        self.skip_whitespace();
        if self.current()? != b':' {
            return Err(JsonStreamError::Invalid(self.x));
        }
        self.x += 1;
        if let Some(scope) = self.stack.last_mut() {
            *scope = Scope::ObjectValue;
        }
        Ok(name)
    }

    /// Consumes a scalar and returns its text.
    ///
    /// String, number and boolean tokens are all accepted: numbers and
    /// booleans are returned as their literal JSON text.
    pub fn next_string(&mut self) -> Result<String, JsonStreamError> {
        let found = self.peek()?;
        let text = match found {
            JsonToken::String => {
                self.peeked = None;
                self.read_string()?
            }
            JsonToken::Number => {
                self.peeked = None;
                self.read_number()?
            }
            JsonToken::Bool => {
                self.peeked = None;
                self.read_bool()?.to_string()
            }
            _ => {
                return Err(JsonStreamError::UnexpectedToken {
                    expected: JsonToken::String.as_str(),
                    found,
                    at: self.x,
                })
            }
        };
        self.after_value();
        Ok(text)
    }

    pub fn next_bool(&mut self) -> Result<bool, JsonStreamError> {
        self.consume(JsonToken::Bool)?;
        let value = self.read_bool()?;
        self.after_value();
        Ok(value)
    }

    pub fn next_null(&mut self) -> Result<(), JsonStreamError> {
        self.consume(JsonToken::Null)?;
        self.read_literal(b"null")?;
        self.after_value();
        Ok(())
    }

    /// Skips the next value, including any nested objects and arrays.
    ///
    /// When positioned on a property name, the whole property is skipped.
    pub fn skip_value(&mut self) -> Result<(), JsonStreamError> {
        if self.peek()? == JsonToken::Name {
            self.next_name()?;
        }
        let base = self.stack.len();
        loop {
            match self.peek()? {
                JsonToken::BeginObject => self.begin_object()?,
                JsonToken::BeginArray => self.begin_array()?,
                JsonToken::EndObject if self.stack.len() > base => self.end_object()?,
                JsonToken::EndArray if self.stack.len() > base => self.end_array()?,
                JsonToken::Name => {
                    self.next_name()?;
                    continue;
                }
                JsonToken::String | JsonToken::Number | JsonToken::Bool => {
                    self.next_string()?;
                }
                JsonToken::Null => self.next_null()?,
                found => {
                    return Err(JsonStreamError::UnexpectedToken {
                        expected: "a value",
                        found,
                        at: self.x,
                    })
                }
            }
            if self.stack.len() == base {
                return Ok(());
            }
        }
    }

    /// Verifies that the top-level value was fully consumed and that only
    /// whitespace follows it.
    pub fn finish(&mut self) -> Result<(), JsonStreamError> {
        let found = self.peek()?;
        if found != JsonToken::EndDocument {
            return Err(JsonStreamError::UnexpectedToken {
                expected: JsonToken::EndDocument.as_str(),
                found,
                at: self.x,
            });
        }
        self.skip_whitespace();
        if self.x < self.uint8.len() {
            return Err(JsonStreamError::TrailingCharacters(self.x));
        }
        Ok(())
    }

    fn consume(&mut self, expected: JsonToken) -> Result<(), JsonStreamError> {
        let found = self.peek()?;
        if found != expected {
            return Err(JsonStreamError::UnexpectedToken {
                expected: expected.as_str(),
                found,
                at: self.x,
            });
        }
        self.peeked = None;
        Ok(())
    }

    fn check_depth(&self) -> Result<(), JsonStreamError> {
        if self.stack.len() >= self.max_depth {
            return Err(JsonStreamError::DepthLimitExceeded {
                limit: self.max_depth,
                at: self.x,
            });
        }
        Ok(())
    }

    fn after_value(&mut self) {
        match self.stack.last_mut() {
            None => self.done = true,
            Some(scope) => match scope {
                Scope::ObjectValue => *scope = Scope::ObjectName { first: false },
                Scope::Array { first } => *first = false,
                Scope::ObjectName { .. } => {}
            },
        }
    }

    fn scan(&mut self) -> Result<JsonToken, JsonStreamError> {
        self.skip_whitespace();
        match self.stack.last().copied() {
            None => {
                if self.done {
                    return Ok(JsonToken::EndDocument);
                }
                self.classify_value()
            }
            Some(Scope::ObjectName { first }) => {
                if self.current()? == b'}' {
                    return Ok(JsonToken::EndObject);
                }
                if !first {
                    self.separator()?;
                }
                match self.current()? {
                    b'"' => Ok(JsonToken::Name),
                    _ => Err(JsonStreamError::Invalid(self.x)),
                }
            }
            Some(Scope::ObjectValue) => self.classify_value(),
            Some(Scope::Array { first }) => {
                if self.current()? == b']' {
                    return Ok(JsonToken::EndArray);
                }
                if !first {
                    self.separator()?;
                }
                self.classify_value()
            }
        }
    }

    fn separator(&mut self) -> Result<(), JsonStreamError> {
        if self.current()? != b',' {
            return Err(JsonStreamError::Invalid(self.x));
        }
        self.x += 1;
        self.skip_whitespace();
        Ok(())
    }

    fn classify_value(&self) -> Result<JsonToken, JsonStreamError> {
        Ok(match self.current()? {
            b'{' => JsonToken::BeginObject,
            b'[' => JsonToken::BeginArray,
            b'"' => JsonToken::String,
            b't' | b'f' => JsonToken::Bool,
            b'n' => JsonToken::Null,
            b'-' | b'0'..=b'9' => JsonToken::Number,
            _ => return Err(JsonStreamError::Invalid(self.x)),
        })
    }

    #[inline]
    fn current(&self) -> Result<u8, JsonStreamError> {
        self.uint8
            .get(self.x)
            .copied()
            .ok_or(JsonStreamError::UnexpectedEnd(self.x))
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.uint8.get(self.x) {
            self.x += 1;
        }
    }

    fn read_literal(&mut self, literal: &[u8]) -> Result<(), JsonStreamError> {
        let rest = &self.uint8[self.x..];
        if rest.starts_with(literal) {
            self.x += literal.len();
            return Ok(());
        }
        if literal.starts_with(rest) {
            return Err(JsonStreamError::UnexpectedEnd(self.uint8.len()));
        }
        Err(JsonStreamError::Invalid(self.x))
    }

    fn read_bool(&mut self) -> Result<bool, JsonStreamError> {
        if self.current()? == b't' {
            self.read_literal(b"true")?;
            Ok(true)
        } else {
            self.read_literal(b"false")?;
            Ok(false)
        }
    }

    fn read_number(&mut self) -> Result<String, JsonStreamError> {
        let start = self.x;
        while let Some(b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E') = self.uint8.get(self.x) {
            self.x += 1;
        }
        let bytes = &self.uint8[start..self.x];
        if let Some(offset) = invalid_number_at(bytes) {
            return Err(JsonStreamError::Invalid(start + offset));
        }
        // only ASCII digits and signs were consumed
        let text = str::from_utf8(bytes).map_err(|_| JsonStreamError::InvalidUtf8)?;
        Ok(text.to_owned())
    }

    fn read_string(&mut self) -> Result<String, JsonStreamError> {
        let start = self.x;
        let end = find_ending_quote(self.uint8, start + 1)?;
        let inner = &self.uint8[start + 1..end];
        if let Some(offset) = inner.iter().position(|&b| b < 0x20) {
            return Err(JsonStreamError::Invalid(start + 1 + offset));
        }
        let value = if inner.contains(&b'\\') {
            serde_json::from_slice::<String>(&self.uint8[start..=end])?
        } else {
            str::from_utf8(inner)
                .map_err(|_| JsonStreamError::InvalidUtf8)?
                .to_owned()
        };
        self.x = end + 1;
        Ok(value)
    }
}

/// Checks `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?` and returns
/// the offset of the first offending byte.
fn invalid_number_at(bytes: &[u8]) -> Option<usize> {
    let digits = |x: usize| bytes[x..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut x = 0;
    if bytes.first() == Some(&b'-') {
        x += 1;
    }
    match bytes.get(x) {
        Some(b'0') => x += 1,
        Some(b'1'..=b'9') => x += digits(x),
        _ => return Some(x),
    }
    if bytes.get(x) == Some(&b'.') {
        x += 1;
        let n = digits(x);
        if n == 0 {
            return Some(x);
        }
        x += n;
    }
    if let Some(b'e' | b'E') = bytes.get(x) {
        x += 1;
        if let Some(b'+' | b'-') = bytes.get(x) {
            x += 1;
        }
        let n = digits(x);
        if n == 0 {
            return Some(x);
        }
        x += n;
    }
    (x < bytes.len()).then_some(x)
}

/// Finds the closing `"` of a JSON string whose contents start at `x`.
fn find_ending_quote(data: &[u8], mut x: usize) -> Result<usize, JsonStreamError> {
    let mut prev: u8 = 0;
    while x < data.len() {
        let ch = data[x];
        if ch == b'"' && prev != b'\\' {
            return Ok(x);
        }
        // double-backslash cancels the escape
        if ch == b'\\' && prev == b'\\' {
            prev = 0;
        } else {
            prev = ch;
        }
        x += 1;
    }
    Err(JsonStreamError::UnexpectedEnd(x))
}
