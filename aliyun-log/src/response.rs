use aliyun_log_core::{Error, Result};
use aliyun_log_signer::constants::X_LOG_REQUEST_ID;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Response is a successful (HTTP 200) answer of the service.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    request_id: String,
    body: Bytes,
}

/// The error payload returned by the service on failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorPayload {
    error_code: Option<String>,
    error_message: Option<String>,
}

impl Response {
    /// Classify a raw HTTP response.
    ///
    /// - `200` is a success.
    /// - Any other status whose JSON body has non-empty `errorCode` and `errorMessage`
    ///   becomes an [`aliyun_log_core::ErrorKind::Service`] error.
    /// - Everything else becomes an [`aliyun_log_core::ErrorKind::RequestFailed`] error
    ///   carrying the status and the raw body.
    pub fn classify(resp: http::Response<Bytes>) -> Result<Self> {
        let (parts, body) = resp.into_parts();
        let request_id = parts
            .headers
            .get(X_LOG_REQUEST_ID)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        if parts.status == StatusCode::OK {
            return Ok(Self {
                status: parts.status,
                headers: parts.headers,
                request_id: request_id.unwrap_or_default(),
                body,
            });
        }

        if let Ok(ErrorPayload {
            error_code: Some(code),
            error_message: Some(message),
        }) = serde_json::from_slice::<ErrorPayload>(&body)
        {
            if !code.is_empty() && !message.is_empty() {
                debug!(
                    "service returned {}: {code}: {message}, request id: {request_id:?}",
                    parts.status
                );
                return Err(Error::service(code, message, request_id.unwrap_or_default())
                    .with_status(parts.status));
            }
        }

        debug!("request failed with {} and unstructured body", parts.status);
        let err = Error::request_failed(parts.status, &String::from_utf8_lossy(&body));
        Err(match request_id {
            Some(id) => err.with_request_id(id),
            None => err,
        })
    }

    /// HTTP status, always `200 OK`.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The `x-log-requestid` header, empty if the service did not send one.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Raw response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Get a header value as string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub(crate) fn into_body(self) -> Bytes {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliyun_log_core::ErrorKind;
    use pretty_assertions::assert_eq;

    fn response(status: u16, request_id: Option<&str>, body: &'static str) -> http::Response<Bytes> {
        let mut builder = http::Response::builder().status(status);
        if let Some(id) = request_id {
            builder = builder.header(X_LOG_REQUEST_ID, id);
        }
        builder
            .body(Bytes::from_static(body.as_bytes()))
            .expect("response must be valid")
    }

    #[test]
    fn test_ok_exposes_request_id_and_body() -> anyhow::Result<()> {
        let resp = Response::classify(response(200, Some("abc123"), r#"{"foo":"bar"}"#))?;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.request_id(), "abc123");
        assert_eq!(
            resp.json::<serde_json::Value>()?,
            serde_json::json!({"foo": "bar"})
        );
        Ok(())
    }

    #[test]
    fn test_ok_without_request_id() -> anyhow::Result<()> {
        let resp = Response::classify(response(200, None, ""))?;
        assert_eq!(resp.request_id(), "");
        assert!(resp.body().is_empty());
        Ok(())
    }

    #[test]
    fn test_structured_error() {
        let err = Response::classify(response(
            404,
            Some("abc123"),
            r#"{"errorCode":"LogStoreNotExist","errorMessage":"not found"}"#,
        ))
        .expect_err("404 must fail");

        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), "LogStoreNotExist");
        assert_eq!(err.message(), "not found");
        assert_eq!(err.request_id(), Some("abc123"));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_structured_error_without_request_id() {
        let err = Response::classify(response(
            403,
            None,
            r#"{"errorCode":"Unauthorized","errorMessage":"denied"}"#,
        ))
        .expect_err("403 must fail");

        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.request_id(), Some(""));
    }

    #[test]
    fn test_unstructured_error() {
        let err = Response::classify(response(500, Some("def456"), "<html>bad gateway</html>"))
            .expect_err("500 must fail");

        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.code(), "RequestError");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.message().contains("500"));
        assert!(err.message().contains("<html>bad gateway</html>"));
        assert_eq!(err.request_id(), Some("def456"));
    }

    #[test]
    fn test_partial_error_payload_is_unstructured() {
        let err = Response::classify(response(400, None, r#"{"errorCode":"OnlyCode"}"#))
            .expect_err("400 must fail");
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.request_id(), None);

        let err = Response::classify(response(
            400,
            None,
            r#"{"errorCode":"","errorMessage":"empty code"}"#,
        ))
        .expect_err("400 must fail");
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
    }

    #[test]
    fn test_non_200_success_status_is_failure() {
        let err = Response::classify(response(204, None, "")).expect_err("only 200 is success");
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.status(), Some(StatusCode::NO_CONTENT));
    }
}
