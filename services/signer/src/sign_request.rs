use crate::canonicalize::{canonicalize_headers, canonicalize_resource};
use crate::constants::{AUTHORIZATION_SCHEME, CONTENT_MD5};
use crate::Credential;
use aliyun_log_core::hash::base64_hmac_sha1;
use aliyun_log_core::{Error, Result};
use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use http::request::Parts;
use http::{HeaderMap, HeaderValue};
use log::debug;

/// Build the string to sign.
///
/// ```text
/// VERB
/// CONTENT-MD5
/// CONTENT-TYPE
/// DATE
/// CanonicalizedLOGHeaders
/// CanonicalizedResource
/// ```
///
/// Missing `Content-MD5`, `Content-Type` or `Date` headers contribute an empty line.
pub fn string_to_sign(
    method: &str,
    resource: &str,
    params: &[(String, String)],
    headers: &HeaderMap,
) -> String {
    let mut s = String::with_capacity(256);
    s.push_str(&method.to_ascii_uppercase());
    s.push('\n');
    s.push_str(&header_value(headers, CONTENT_MD5));
    s.push('\n');
    s.push_str(&header_value(headers, CONTENT_TYPE.as_str()));
    s.push('\n');
    s.push_str(&header_value(headers, DATE.as_str()));
    s.push('\n');
    s.push_str(&canonicalize_headers(headers));
    s.push('\n');
    s.push_str(&canonicalize_resource(resource, params));
    s
}

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Calculate the signature of a request.
///
/// Returns an empty string when `secret` is empty, which is how anonymous
/// requests are sent. Otherwise returns `base64(hmac-sha1(secret, string_to_sign))`.
///
/// This is a pure function: the same inputs always produce the same signature.
pub fn sign(
    method: &str,
    resource: &str,
    secret: &str,
    params: &[(String, String)],
    headers: &HeaderMap,
) -> String {
    if secret.is_empty() {
        return String::new();
    }

    let string_to_sign = string_to_sign(method, resource, params, headers);
    debug!("calculated string to sign: {string_to_sign:?}");

    base64_hmac_sha1(secret.as_bytes(), string_to_sign.as_bytes())
}

/// RequestSigner signs requests for Aliyun Log Service.
///
/// The request must be fully populated before signing: every header that takes part
/// in the signature (`Content-MD5`, `Content-Type`, `Date`, `x-log-*`, `x-acs-*`)
/// has to be set already. The signer only adds `Authorization`.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
}

impl RequestSigner {
    /// Create a new signer for the given credential.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    /// The credential used by this signer.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Sign the request in place by inserting `Authorization: LOG <ak>:<signature>`.
    ///
    /// The canonicalized resource is built from the uri path and its decoded query.
    pub fn sign(&self, req: &mut Parts) -> Result<()> {
        if !req.headers.contains_key(DATE) {
            return Err(Error::parameter_invalid(
                "date header must be set before signing",
            ));
        }

        let params: Vec<(String, String)> = req
            .uri
            .query()
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        let signature = sign(
            req.method.as_str(),
            req.uri.path(),
            &self.credential.access_key_secret,
            &params,
            &req.headers,
        );

        let mut value: HeaderValue = format!(
            "{} {}:{}",
            AUTHORIZATION_SCHEME, self.credential.access_key_id, signature
        )
        .parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}
