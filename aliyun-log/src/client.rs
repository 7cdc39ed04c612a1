use crate::constants::{CONTENT_TYPE_JSON, USER_AGENT};
use crate::{Config, Endpoint, PendingRequest, Response};
use aliyun_log_core::hash::hex_md5;
use aliyun_log_core::time::{self, format_http_date, DateTime};
use aliyun_log_core::{Context, Error, Result};
use aliyun_log_signer::constants::*;
use aliyun_log_signer::{Credential, RequestSigner};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST};
use http::HeaderValue;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Client talks to one Log Service endpoint with one set of credentials.
///
/// Cloning is cheap: all state is immutable and shared.
///
/// ## Example
///
/// ```no_run
/// use aliyun_log::{Client, Config, ListLogstoresRequest};
/// use aliyun_log_core::Context;
///
/// # async fn example(ctx: Context) -> aliyun_log_core::Result<()> {
/// let config = Config::default()
///     .with_endpoint("cn-hangzhou.log.aliyuncs.com")
///     .with_project("demo")
///     .with_access_key("access_key_id", "access_key_secret");
/// let client = Client::new(ctx, config)?;
///
/// let stores = client.list_logstores(ListLogstoresRequest::default()).await?;
/// println!("{} logstores", stores.total);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    ctx: Context,
    endpoint: Endpoint,
    project: Option<String>,
    signer: RequestSigner,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.inner.endpoint)
            .field("project", &self.inner.project)
            .field("credential", self.inner.signer.credential())
            .finish()
    }
}

impl Client {
    /// Create a client from a resolved config.
    ///
    /// Only the endpoint is required. Missing access keys produce anonymous requests
    /// signed with an empty signature.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::parameter_invalid("missing parameter endpoint"))?;
        let endpoint = Endpoint::parse(endpoint)?;

        let mut credential = Credential::new(
            config.access_key_id.as_deref().unwrap_or_default(),
            config.access_key_secret.as_deref().unwrap_or_default(),
        );
        if let Some(token) = config.security_token.as_deref() {
            credential = credential.with_security_token(token);
        }
        if credential.is_anonymous() {
            debug!("no access key secret configured, requests will be sent anonymously");
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                ctx,
                endpoint,
                project: config.project.filter(|v| !v.is_empty()),
                signer: RequestSigner::new(credential),
            }),
        })
    }

    /// The parsed endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.inner.endpoint
    }

    /// The default project.
    pub fn project(&self) -> Option<&str> {
        self.inner.project.as_deref()
    }

    /// Pick the project of a call: the explicit one first, then the configured default.
    pub(crate) fn resolve_project(&self, project: Option<&str>) -> Result<String> {
        project
            .filter(|v| !v.is_empty())
            .or(self.project())
            .map(str::to_string)
            .ok_or_else(|| Error::parameter_invalid("missing parameter project"))
    }

    /// Fail with `missing parameter <name>` if `value` is empty.
    pub(crate) fn required<'a>(name: &str, value: &'a str) -> Result<&'a str> {
        if value.is_empty() {
            return Err(Error::parameter_invalid(format!("missing parameter {name}")));
        }
        Ok(value)
    }

    /// Turn a pending request into a signed http request as of `now`.
    pub fn build_request(&self, req: PendingRequest, now: DateTime) -> Result<http::Request<Bytes>> {
        let PendingRequest {
            method,
            project,
            resource,
            params,
            mut headers,
            body,
        } = req;
        let endpoint = &self.inner.endpoint;
        let credential = self.inner.signer.credential();

        let body = body.filter(|b| !b.is_empty());
        match &body {
            Some(body) => {
                headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
                headers.insert(
                    CONTENT_MD5,
                    HeaderValue::try_from(hex_md5(body).to_ascii_uppercase())?,
                );
                if !headers.contains_key(X_LOG_BODY_RAW_SIZE) {
                    headers.insert(X_LOG_BODY_RAW_SIZE, HeaderValue::from_static("0"));
                }
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
                }
            }
            None => {
                headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
                headers.insert(X_LOG_BODY_RAW_SIZE, HeaderValue::from_static("0"));
                headers.remove(CONTENT_TYPE);
                headers.remove(CONTENT_MD5);
            }
        }

        headers.insert(X_LOG_API_VERSION, HeaderValue::from_static(API_VERSION));
        headers.insert(http::header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            X_LOG_SIGNATURE_METHOD,
            HeaderValue::from_static(SIGNATURE_METHOD),
        );
        if let Some(token) = &credential.security_token {
            let mut value = HeaderValue::try_from(token.as_str())?;
            value.set_sensitive(true);
            headers.insert(X_ACS_SECURITY_TOKEN, value);
        }

        let project = project.as_deref().filter(|v| !v.is_empty());
        headers.insert(HOST, HeaderValue::try_from(endpoint.host_header(project))?);
        headers.insert(DATE, HeaderValue::try_from(format_http_date(now))?);

        let mut url = endpoint.base_url(project);
        url.push_str(&resource);
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        let mut req = http::Request::builder()
            .method(method)
            .uri(url)
            .body(body.unwrap_or_default())?;
        *req.headers_mut() = headers;

        let (mut parts, body) = req.into_parts();
        self.inner.signer.sign(&mut parts)?;
        Ok(http::Request::from_parts(parts, body))
    }

    /// Build, sign and send a pending request, then classify the response.
    pub async fn send(&self, req: PendingRequest) -> Result<Response> {
        let req = self.build_request(req, time::now())?;
        debug!("sending request: {} {}", req.method(), req.uri());

        let resp = self.inner.ctx.http_send(req).await?;
        Response::classify(resp)
    }
}
