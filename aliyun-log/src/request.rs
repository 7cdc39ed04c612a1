use bytes::Bytes;
use http::header::HeaderName;
use http::{HeaderMap, HeaderValue, Method};

/// PendingRequest is one logical API call before it has been addressed and signed.
///
/// It lives for a single call: the client consumes it to build the outgoing request.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub(crate) method: Method,
    pub(crate) project: Option<String>,
    pub(crate) resource: String,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Bytes>,
}

impl PendingRequest {
    /// Create a request for `resource`, e.g. `/logstores`.
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            project: None,
            resource: resource.into(),
            params: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Address the request to a project.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Push a query parameter. Values are sent url encoded and signed decoded.
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Push a query parameter if `value` is set.
    pub fn with_param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.with_param(key, v),
            None => self,
        }
    }

    /// Set a header, replacing any previous value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The project this request is addressed to.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The resource path.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Query parameters in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Headers set by the caller.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_params_are_skipped() {
        let req = PendingRequest::new(Method::GET, "/logstores")
            .with_param_opt("offset", Some(10))
            .with_param_opt("size", None::<u32>)
            .with_param("logstoreName", "app");

        assert_eq!(
            req.params(),
            &[
                ("offset".to_string(), "10".to_string()),
                ("logstoreName".to_string(), "app".to_string()),
            ]
        );
        assert_eq!(req.project(), None);
        assert!(req.body().is_none());
    }
}
