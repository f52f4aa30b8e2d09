//! Error-code dispatch over modeled exception decoders.

use std::fmt;

use crate::{CodecSettings, JsonErrorResponse, MapperError, ServiceError};

/// Decodes one kind of service exception from an error response.
pub trait ErrorUnmarshaller<E>: Send + Sync {
    /// The code this decoder handles; `None` handles every response.
    fn error_code(&self) -> Option<&str>;

    /// Exact, case-sensitive comparison against the response's error code.
    fn matches(&self, error: &JsonErrorResponse) -> bool {
        match self.error_code() {
            None => true,
            Some(code) => error.error_code() == Some(code),
        }
    }

    fn unmarshall(&self, error: &JsonErrorResponse, settings: CodecSettings)
        -> Result<E, MapperError>;
}

/// A modeled exception generated by [`service_exception!`](crate::service_exception).
pub trait ServiceException: std::error::Error {
    const ERROR_CODE: &'static str;

    fn service_error(&self) -> &ServiceError;

    fn message(&self) -> Option<&str> {
        self.service_error().message.as_deref()
    }

    fn request_id(&self) -> Option<&str> {
        self.service_error().request_id.as_deref()
    }
}

/// Catch-all decoder producing the unmodeled service error.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericErrorUnmarshaller;

impl<E: From<ServiceError>> ErrorUnmarshaller<E> for GenericErrorUnmarshaller {
    fn error_code(&self) -> Option<&str> {
        None
    }

    fn unmarshall(
        &self,
        error: &JsonErrorResponse,
        _settings: CodecSettings,
    ) -> Result<E, MapperError> {
        Ok(E::from(ServiceError::from_response(error)))
    }
}

/// Ordered chain of exception decoders; the first whose code matches wins.
pub struct ErrorUnmarshallerRegistry<E> {
    unmarshallers: Vec<Box<dyn ErrorUnmarshaller<E>>>,
    settings: CodecSettings,
}

impl<E> Default for ErrorUnmarshallerRegistry<E> {
    fn default() -> Self {
        Self {
            unmarshallers: Vec::new(),
            settings: CodecSettings::default(),
        }
    }
}

impl<E> fmt::Debug for ErrorUnmarshallerRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorUnmarshallerRegistry")
            .field("error_codes", &self.error_codes().collect::<Vec<_>>())
            .field("settings", &self.settings)
            .finish()
    }
}

impl<E> ErrorUnmarshallerRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CodecSettings) -> Self {
        Self {
            unmarshallers: Vec::new(),
            settings,
        }
    }

    pub fn register(&mut self, unmarshaller: impl ErrorUnmarshaller<E> + 'static) -> &mut Self {
        self.unmarshallers.push(Box::new(unmarshaller));
        self
    }

    pub fn with(mut self, unmarshaller: impl ErrorUnmarshaller<E> + 'static) -> Self {
        self.register(unmarshaller);
        self
    }

    pub fn len(&self) -> usize {
        self.unmarshallers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unmarshallers.is_empty()
    }

    pub fn settings(&self) -> CodecSettings {
        self.settings
    }

    /// Registered codes in dispatch order; `None` marks a catch-all.
    pub fn error_codes(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.unmarshallers.iter().map(|u| u.error_code())
    }
}

impl<E: From<ServiceError>> ErrorUnmarshallerRegistry<E> {
    /// Decodes an error response with the first matching decoder.
    ///
    /// When no decoder matches, or the matching decoder cannot read the
    /// modeled properties, the unmodeled [`ServiceError`] is returned.
    pub fn unmarshall(&self, error: &JsonErrorResponse) -> E {
        let Some(unmarshaller) = self.unmarshallers.iter().find(|u| u.matches(error)) else {
            tracing::debug!(
                error_code = error.error_code(),
                status_code = error.status_code(),
                "no error unmarshaller matched"
            );
            return E::from(ServiceError::from_response(error));
        };
        match unmarshaller.unmarshall(error, self.settings) {
            Ok(decoded) => {
                tracing::debug!(
                    error_code = error.error_code(),
                    matched = unmarshaller.error_code(),
                    "decoded service error"
                );
                decoded
            }
            Err(err) => {
                tracing::warn!(
                    error_code = error.error_code(),
                    %err,
                    "failed to decode modeled error properties"
                );
                E::from(ServiceError::from_response(error))
            }
        }
    }

    /// Parses raw HTTP parts and decodes them.
    pub fn handle<I, K, V>(&self, status_code: u16, headers: I, body: &[u8]) -> E
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.unmarshall(&JsonErrorResponse::from_response(status_code, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Named(&'static str, Option<String>),
        Generic(ServiceError),
    }

    impl From<ServiceError> for TestError {
        fn from(err: ServiceError) -> Self {
            TestError::Generic(err)
        }
    }

    struct Named(&'static str);

    impl ErrorUnmarshaller<TestError> for Named {
        fn error_code(&self) -> Option<&str> {
            Some(self.0)
        }

        fn unmarshall(
            &self,
            error: &JsonErrorResponse,
            settings: CodecSettings,
        ) -> Result<TestError, MapperError> {
            Ok(TestError::Named(self.0, error.property("detail", settings)?))
        }
    }

    fn registry() -> ErrorUnmarshallerRegistry<TestError> {
        ErrorUnmarshallerRegistry::new()
            .with(Named("FirstException"))
            .with(Named("SecondException"))
            .with(GenericErrorUnmarshaller)
    }

    #[test]
    fn test_exact_code_match() {
        let err = registry().unmarshall(&JsonErrorResponse::new(400).with_error_code("SecondException"));
        assert_eq!(err, TestError::Named("SecondException", None));
    }

    #[test]
    fn test_code_match_is_case_sensitive() {
        let err = registry().unmarshall(&JsonErrorResponse::new(400).with_error_code("secondexception"));
        assert!(matches!(err, TestError::Generic(_)));
    }

    #[test]
    fn test_first_match_wins() {
        let registry = ErrorUnmarshallerRegistry::<TestError>::new()
            .with(GenericErrorUnmarshaller)
            .with(Named("FirstException"));
        let err = registry.unmarshall(&JsonErrorResponse::new(400).with_error_code("FirstException"));
        assert!(matches!(err, TestError::Generic(_)));
    }

    #[test]
    fn test_empty_registry_falls_back() {
        let registry = ErrorUnmarshallerRegistry::<TestError>::new();
        assert!(registry.is_empty());
        let err = registry.handle(503, [("x-amzn-RequestId", "r")], b"");
        match err {
            TestError::Generic(meta) => {
                assert_eq!(meta.status_code, 503);
                assert_eq!(meta.request_id.as_deref(), Some("r"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_property_shape_mismatch_reads_as_none() {
        let response = JsonErrorResponse::new(400)
            .with_error_code("FirstException")
            .with_property("detail", json!("x"));
        assert_eq!(
            registry().unmarshall(&response),
            TestError::Named("FirstException", Some("x".to_owned()))
        );
        let response = response.with_property("detail", json!(["x"]));
        assert_eq!(
            registry().unmarshall(&response),
            TestError::Named("FirstException", None)
        );
    }

    struct Limited;

    impl ErrorUnmarshaller<TestError> for Limited {
        fn error_code(&self) -> Option<&str> {
            Some("LimitException")
        }

        fn unmarshall(
            &self,
            error: &JsonErrorResponse,
            settings: CodecSettings,
        ) -> Result<TestError, MapperError> {
            let limit: Option<i32> = error.property("limit", settings)?;
            Ok(TestError::Named("LimitException", limit.map(|l| l.to_string())))
        }
    }

    #[test]
    fn test_undecodable_property_falls_back() {
        let registry = ErrorUnmarshallerRegistry::<TestError>::new().with(Limited);
        let response = JsonErrorResponse::new(400).with_error_code("LimitException");
        assert_eq!(
            registry.unmarshall(&response.clone().with_property("limit", json!(5))),
            TestError::Named("LimitException", Some("5".to_owned()))
        );
        let err = registry.unmarshall(&response.with_property("limit", json!("many")));
        assert!(matches!(err, TestError::Generic(meta) if meta.error_code.as_deref() == Some("LimitException")));
    }

    #[test]
    fn test_error_codes_in_order() {
        assert_eq!(
            registry().error_codes().collect::<Vec<_>>(),
            [Some("FirstException"), Some("SecondException"), None]
        );
    }
}
