//! Modeled service exceptions and the error decoder chain.

use connect_sdk_json_mapper::{
    json_record, service_exception, ErrorUnmarshallerRegistry, GenericErrorUnmarshaller,
    ServiceError, ServiceException,
};
use thiserror::Error;

json_record! {
    /// One problem found while validating a contact flow.
    pub struct ProblemDetail {
        message: String => "message",
    }
}

service_exception! {
    /// The contact with the given id does not exist.
    pub struct ContactNotFoundException => "ContactNotFoundException" {}
    unmarshaller ContactNotFoundExceptionUnmarshaller;
}

service_exception! {
    /// Outbound calls to the destination number are not allowed.
    pub struct DestinationNotAllowedException => "DestinationNotAllowedException" {}
    unmarshaller DestinationNotAllowedExceptionUnmarshaller;
}

service_exception! {
    /// A resource with the given name already exists.
    pub struct DuplicateResourceException => "DuplicateResourceException" {}
    unmarshaller DuplicateResourceExceptionUnmarshaller;
}

service_exception! {
    pub struct InternalServiceException => "InternalServiceException" {}
    unmarshaller InternalServiceExceptionUnmarshaller;
}

service_exception! {
    /// The contact flow is not valid.
    pub struct InvalidContactFlowException => "InvalidContactFlowException" {
        /// Problems found in the contact flow.
        problems: Vec<ProblemDetail> => "problems",
    }
    unmarshaller InvalidContactFlowExceptionUnmarshaller;
}

service_exception! {
    pub struct InvalidParameterException => "InvalidParameterException" {}
    unmarshaller InvalidParameterExceptionUnmarshaller;
}

service_exception! {
    pub struct InvalidRequestException => "InvalidRequestException" {}
    unmarshaller InvalidRequestExceptionUnmarshaller;
}

service_exception! {
    /// The allowed number of resources or requests was exceeded.
    pub struct LimitExceededException => "LimitExceededException" {}
    unmarshaller LimitExceededExceptionUnmarshaller;
}

service_exception! {
    /// The contact is not permitted to place outbound calls.
    pub struct OutboundContactNotPermittedException => "OutboundContactNotPermittedException" {}
    unmarshaller OutboundContactNotPermittedExceptionUnmarshaller;
}

service_exception! {
    pub struct ResourceNotFoundException => "ResourceNotFoundException" {}
    unmarshaller ResourceNotFoundExceptionUnmarshaller;
}

service_exception! {
    /// The throttling limit was exceeded.
    pub struct ThrottlingException => "ThrottlingException" {}
    unmarshaller ThrottlingExceptionUnmarshaller;
}

service_exception! {
    /// No user with the given id exists.
    pub struct UserNotFoundException => "UserNotFoundException" {}
    unmarshaller UserNotFoundExceptionUnmarshaller;
}

/// Any failure reported by the service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectError {
    #[error(transparent)]
    ContactNotFound(#[from] ContactNotFoundException),
    #[error(transparent)]
    DestinationNotAllowed(#[from] DestinationNotAllowedException),
    #[error(transparent)]
    DuplicateResource(#[from] DuplicateResourceException),
    #[error(transparent)]
    InternalService(#[from] InternalServiceException),
    #[error(transparent)]
    InvalidContactFlow(#[from] InvalidContactFlowException),
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterException),
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestException),
    #[error(transparent)]
    LimitExceeded(#[from] LimitExceededException),
    #[error(transparent)]
    OutboundContactNotPermitted(#[from] OutboundContactNotPermittedException),
    #[error(transparent)]
    ResourceNotFound(#[from] ResourceNotFoundException),
    #[error(transparent)]
    Throttling(#[from] ThrottlingException),
    #[error(transparent)]
    UserNotFound(#[from] UserNotFoundException),
    /// An error code with no modeled exception.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),
}

impl ConnectError {
    /// Metadata shared by every variant.
    pub fn service_error(&self) -> &ServiceError {
        match self {
            Self::ContactNotFound(e) => e.service_error(),
            Self::DestinationNotAllowed(e) => e.service_error(),
            Self::DuplicateResource(e) => e.service_error(),
            Self::InternalService(e) => e.service_error(),
            Self::InvalidContactFlow(e) => e.service_error(),
            Self::InvalidParameter(e) => e.service_error(),
            Self::InvalidRequest(e) => e.service_error(),
            Self::LimitExceeded(e) => e.service_error(),
            Self::OutboundContactNotPermitted(e) => e.service_error(),
            Self::ResourceNotFound(e) => e.service_error(),
            Self::Throttling(e) => e.service_error(),
            Self::UserNotFound(e) => e.service_error(),
            Self::Service(e) => e,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        self.service_error().error_code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.service_error().message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.service_error().request_id.as_deref()
    }
}

/// Decoder chain for every modeled exception, ending with the generic
/// service error.
pub fn connect_error_registry() -> ErrorUnmarshallerRegistry<ConnectError> {
    ErrorUnmarshallerRegistry::new()
        .with(ContactNotFoundExceptionUnmarshaller)
        .with(DestinationNotAllowedExceptionUnmarshaller)
        .with(DuplicateResourceExceptionUnmarshaller)
        .with(InternalServiceExceptionUnmarshaller)
        .with(InvalidContactFlowExceptionUnmarshaller)
        .with(InvalidParameterExceptionUnmarshaller)
        .with(InvalidRequestExceptionUnmarshaller)
        .with(LimitExceededExceptionUnmarshaller)
        .with(OutboundContactNotPermittedExceptionUnmarshaller)
        .with(ResourceNotFoundExceptionUnmarshaller)
        .with(ThrottlingExceptionUnmarshaller)
        .with(UserNotFoundExceptionUnmarshaller)
        .with(GenericErrorUnmarshaller)
}

#[cfg(test)]
mod tests {
    use connect_sdk_json_mapper::{ErrorType, JsonErrorResponse};

    use super::*;

    #[test]
    fn test_registry_order() {
        let registry = connect_error_registry();
        let codes: Vec<_> = registry.error_codes().collect();
        assert_eq!(codes.len(), 13);
        assert_eq!(codes[0], Some("ContactNotFoundException"));
        assert_eq!(codes[4], Some(InvalidContactFlowException::ERROR_CODE));
        assert_eq!(codes[11], Some("UserNotFoundException"));
        assert_eq!(codes[12], None);
    }

    #[test]
    fn test_throttling() {
        let err = connect_error_registry().unmarshall(
            &JsonErrorResponse::new(429)
                .with_error_code("ThrottlingException")
                .with_message("Rate exceeded")
                .with_request_id("r-9"),
        );
        let ConnectError::Throttling(exception) = &err else {
            panic!("unexpected {err:?}");
        };
        assert_eq!(exception.message(), Some("Rate exceeded"));
        assert_eq!(err.request_id(), Some("r-9"));
        assert_eq!(err.service_error().error_type, ErrorType::Client);
    }

    #[test]
    fn test_display() {
        let err = ConnectError::from(UserNotFoundException::new(ServiceError::from_response(
            &JsonErrorResponse::new(404)
                .with_error_code("UserNotFoundException")
                .with_message("no such user"),
        )));
        assert_eq!(
            err.to_string(),
            "UserNotFoundException: no such user (status code: 404; error code: UserNotFoundException; request id: none)"
        );
    }
}
