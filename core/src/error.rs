use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The error type for Aliyun Log Service operations.
///
/// Every failure carries a [`ErrorKind`], a service style error code and a message.
/// Errors raised after the service answered also carry the request id taken from
/// the `x-log-requestid` response header.
#[derive(Error, Debug)]
#[error("{code}: {message}{}", request_id_suffix(.request_id))]
pub struct Error {
    kind: ErrorKind,
    code: String,
    message: String,
    request_id: Option<String>,
    status: Option<StatusCode>,
    #[source]
    source: Option<anyhow::Error>,
}

fn request_id_suffix(request_id: &Option<String>) -> String {
    match request_id.as_deref() {
        Some(id) if !id.is_empty() => format!(" (request id: {id})"),
        _ => String::new(),
    }
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required parameter is missing or malformed.
    ParameterInvalid,

    /// A log batch exceeds the item count or serialized size limit.
    ///
    /// Always raised before any request is sent.
    InvalidLogSize,

    /// The service answered with a structured `errorCode`/`errorMessage` payload.
    Service,

    /// The service answered with a non-200 status and an unstructured body.
    RequestFailed,

    /// No HTTP response was obtained at all.
    Transport,

    /// Unexpected errors (encoding, decoding, I/O...)
    Unexpected,
}

impl ErrorKind {
    /// The error code used when the service did not provide one.
    pub fn default_code(&self) -> &'static str {
        match self {
            ErrorKind::ParameterInvalid => "ParameterInvalid",
            ErrorKind::InvalidLogSize => "InvalidLogSize",
            ErrorKind::Service => "ServiceError",
            ErrorKind::RequestFailed => "RequestError",
            ErrorKind::Transport => "TransportError",
            ErrorKind::Unexpected => "Unexpected",
        }
    }
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.default_code().to_string(),
            message: message.into(),
            request_id: None,
            status: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the request id returned by the service.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Attach the HTTP status returned by the service.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error code, e.g. `LogStoreNotExist` or `InvalidLogSize`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the request id, `None` if the error happened before the service answered.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Get the HTTP status of the failed response if there is one.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Check if this error was raised locally, before any request was sent.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ParameterInvalid | ErrorKind::InvalidLogSize
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a parameter invalid error
    pub fn parameter_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParameterInvalid, message)
    }

    /// Create an invalid log size error
    pub fn invalid_log_size(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLogSize, message)
    }

    /// Create a service error from the code and message the service returned.
    pub fn service(
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        let mut err = Self::new(ErrorKind::Service, message);
        err.code = code.into();
        err.with_request_id(request_id)
    }

    /// Create a request failed error for a non-200 response without error payload.
    pub fn request_failed(status: StatusCode, body: &str) -> Self {
        Self::new(
            ErrorKind::RequestFailed,
            format!(
                "Request is failed. Http code is {}. The return json is {}",
                status.as_u16(),
                body
            ),
        )
        .with_status(status)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ParameterInvalid => write!(f, "invalid parameter"),
            ErrorKind::InvalidLogSize => write!(f, "invalid log size"),
            ErrorKind::Service => write!(f, "service error"),
            ErrorKind::RequestFailed => write!(f, "request failed"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::parameter_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::parameter_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::parameter_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<prost::EncodeError> for Error {
    fn from(err: prost::EncodeError) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_error_fields() {
        let err = Error::service("LogStoreNotExist", "not found", "abc123");

        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), "LogStoreNotExist");
        assert_eq!(err.message(), "not found");
        assert_eq!(err.request_id(), Some("abc123"));
        assert_eq!(
            err.to_string(),
            "LogStoreNotExist: not found (request id: abc123)"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_request_failed_carries_status() {
        let err = Error::request_failed(StatusCode::INTERNAL_SERVER_ERROR, "oops")
            .with_request_id("10000");

        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.code(), "RequestError");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.message().contains("500"));
        assert!(err.message().contains("oops"));
        assert_eq!(err.request_id(), Some("10000"));
        assert!(err.to_string().ends_with("(request id: 10000)"));
    }

    #[test]
    fn test_empty_request_id_is_not_rendered() {
        let err = Error::service("Unauthorized", "denied", "");
        assert_eq!(err.request_id(), Some(""));
        assert_eq!(err.to_string(), "Unauthorized: denied");
    }

    #[test]
    fn test_local_errors_have_no_request_id() {
        let err = Error::invalid_log_size("too many");
        assert_eq!(err.code(), "InvalidLogSize");
        assert!(err.is_client_error());
        assert_eq!(err.request_id(), None);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "InvalidLogSize: too many");

        let err = Error::transport("connection refused");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.code(), "TransportError");
        assert_eq!(err.request_id(), None);
    }
}
