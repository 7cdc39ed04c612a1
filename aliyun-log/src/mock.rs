use aliyun_log_core::{HttpSend, Result};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, Uri};
use std::sync::{Arc, Mutex};

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Records every request and answers with one canned response.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    body: Bytes,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockHttpSend {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("status must be valid"),
            headers: vec![("x-log-requestid", "mock-request-id".to_string())],
            body: body.into(),
            requests: Arc::default(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl ToString) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock poisoned").clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("a request must have been sent")
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().expect("lock poisoned").push(Recorded {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });

        let mut resp = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            resp = resp.header(*name, value);
        }
        Ok(resp.body(self.body.clone())?)
    }
}

/// Build a client for `demo` on a domain endpoint that sends through `mock`.
pub fn mock_client(mock: &MockHttpSend) -> crate::Client {
    let ctx = aliyun_log_core::Context::new().with_http_send(mock.clone());
    let config = crate::Config::default()
        .with_endpoint("cn-hangzhou.log.aliyuncs.com")
        .with_project("demo")
        .with_access_key("access_key_id", "access_key_secret");
    crate::Client::new(ctx, config).expect("client must be built")
}
