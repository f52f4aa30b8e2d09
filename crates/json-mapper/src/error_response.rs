//! Parsed JSON error responses and the common service error metadata.

use std::fmt;

use serde_json::{Map, Value};

use crate::{from_json_str_with, CodecSettings, JsonUnmarshall, MapperError};

/// Header carrying the error code, optionally followed by `:` and a URI.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";
/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";

/// Whether a failure was caused by the caller or by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorType {
    Client,
    Service,
    #[default]
    Unknown,
}

impl ErrorType {
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            400..=499 => Self::Client,
            500..=599 => Self::Service,
            _ => Self::Unknown,
        }
    }
}

/// An HTTP error response with its JSON body parsed into properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonErrorResponse {
    status_code: u16,
    error_code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    properties: Map<String, Value>,
}

impl JsonErrorResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    /// Builds an error response from raw HTTP parts.
    ///
    /// The error code comes from the `x-amzn-ErrorType` header when present,
    /// then from the body's `__type` (namespace prefix removed), then from
    /// `code`. A body that is not a JSON object yields no properties.
    pub fn from_response<I, K, V>(status_code: u16, headers: I, body: &[u8]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut error_type = None;
        let mut request_id = None;
        for (name, value) in headers {
            let name = name.as_ref();
            if name.eq_ignore_ascii_case(ERROR_TYPE_HEADER) {
                error_type = Some(value.as_ref().to_owned());
            } else if name.eq_ignore_ascii_case(REQUEST_ID_HEADER) {
                request_id = Some(value.as_ref().to_owned());
            }
        }

        let properties = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(properties)) => properties,
            Ok(other) => {
                tracing::debug!(status_code, found = ?other, "error body is not a JSON object");
                Map::new()
            }
            Err(err) => {
                if !body.iter().all(u8::is_ascii_whitespace) {
                    tracing::debug!(status_code, %err, "error body is not valid JSON");
                }
                Map::new()
            }
        };

        let error_code = error_type
            .as_deref()
            .and_then(code_from_header)
            .or_else(|| string_property(&properties, "__type").and_then(code_from_type))
            .or_else(|| {
                string_property(&properties, "code")
                    .or_else(|| string_property(&properties, "Code"))
                    .map(str::to_owned)
            });
        let message = string_property(&properties, "message")
            .or_else(|| string_property(&properties, "Message"))
            .map(str::to_owned);

        Self {
            status_code,
            error_code,
            message,
            request_id,
            properties,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Raw JSON value of a body property.
    pub fn raw_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Re-parses a body property with the unmarshaller for `T`.
    pub fn property<T: JsonUnmarshall>(
        &self,
        name: &str,
        settings: CodecSettings,
    ) -> Result<Option<T>, MapperError> {
        match self.properties.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => from_json_str_with(&value.to_string(), settings),
        }
    }

    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

fn string_property<'a>(properties: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    properties.get(name).and_then(Value::as_str)
}

fn code_from_header(value: &str) -> Option<String> {
    let code = value.split(':').next().unwrap_or_default().trim();
    (!code.is_empty()).then(|| code.to_owned())
}

fn code_from_type(value: &str) -> Option<String> {
    let code = value.rsplit('#').next().unwrap_or_default().trim();
    (!code.is_empty()).then(|| code.to_owned())
}

/// Metadata common to every service failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub error_code: Option<String>,
    pub message: Option<String>,
    pub status_code: u16,
    pub request_id: Option<String>,
    pub error_type: ErrorType,
}

impl ServiceError {
    pub fn from_response(response: &JsonErrorResponse) -> Self {
        Self {
            error_code: response.error_code.clone(),
            message: response.message.clone(),
            status_code: response.status_code,
            request_id: response.request_id.clone(),
            error_type: ErrorType::from_status(response.status_code),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or("no error message"))?;
        write!(
            f,
            " (status code: {}; error code: {}; request id: {})",
            self.status_code,
            self.error_code.as_deref().unwrap_or("unknown"),
            self.request_id.as_deref().unwrap_or("none"),
        )
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_code_from_header_wins() {
        let response = JsonErrorResponse::from_response(
            400,
            [
                ("X-Amzn-ErrorType", "InvalidRequestException:http://internal/"),
                ("x-amzn-requestid", "req-1"),
            ],
            br#"{"__type":"ns#Other","message":"bad"}"#,
        );
        assert_eq!(response.error_code(), Some("InvalidRequestException"));
        assert_eq!(response.message(), Some("bad"));
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_code_from_type_strips_namespace() {
        let response = JsonErrorResponse::from_response(
            404,
            Vec::<(String, String)>::new(),
            br#"{"__type":"com.amazonaws.connect#ResourceNotFoundException","Message":"gone"}"#,
        );
        assert_eq!(response.error_code(), Some("ResourceNotFoundException"));
        assert_eq!(response.message(), Some("gone"));
    }

    #[test]
    fn test_code_property_fallback() {
        let response = JsonErrorResponse::from_response(
            500,
            Vec::<(&str, &str)>::new(),
            br#"{"code":"InternalServiceException"}"#,
        );
        assert_eq!(response.error_code(), Some("InternalServiceException"));
        assert_eq!(response.message(), None);
    }

    #[test]
    fn test_non_object_body() {
        for body in [&b""[..], &b"[1,2]"[..], &b"<html>"[..], &b"\"text\""[..]] {
            let response = JsonErrorResponse::from_response(503, Vec::<(&str, &str)>::new(), body);
            assert_eq!(response.error_code(), None);
            assert!(response.properties().is_empty());
        }
    }

    #[test]
    fn test_property_reparse() {
        let response = JsonErrorResponse::new(400)
            .with_property("limit", json!("25"))
            .with_property("names", json!(["a", null, "b"]))
            .with_property("missing", Value::Null);
        let settings = CodecSettings::default();
        assert_eq!(response.property::<i32>("limit", settings).unwrap(), Some(25));
        assert_eq!(
            response.property::<Vec<String>>("names", settings).unwrap(),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(response.property::<String>("missing", settings).unwrap(), None);
        assert_eq!(response.property::<String>("absent", settings).unwrap(), None);
        assert_eq!(response.raw_property("limit"), Some(&json!("25")));
    }

    #[test]
    fn test_service_error_metadata() {
        let response = JsonErrorResponse::new(429)
            .with_error_code("ThrottlingException")
            .with_message("Rate exceeded")
            .with_request_id("abc");
        let error = ServiceError::from_response(&response);
        assert_eq!(error.error_type, ErrorType::Client);
        assert_eq!(
            error.to_string(),
            "Rate exceeded (status code: 429; error code: ThrottlingException; request id: abc)"
        );
    }

    #[test]
    fn test_error_type_from_status() {
        assert_eq!(ErrorType::from_status(400), ErrorType::Client);
        assert_eq!(ErrorType::from_status(502), ErrorType::Service);
        assert_eq!(ErrorType::from_status(302), ErrorType::Unknown);
    }
}
