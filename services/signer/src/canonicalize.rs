//! Canonicalization of headers and resources.
//!
//! Both functions only depend on the *set* of their inputs: callers may insert
//! headers and parameters in any order.
//!
//! Values are joined verbatim. A value containing `\n`, `&` or `=` is not escaped,
//! the service computes the same unescaped string on its side.

use crate::constants::{X_ACS_PREFIX, X_LOG_PREFIX};
use http::HeaderMap;

/// Build the canonicalized headers string.
///
/// Only `x-log-*` and `x-acs-*` headers are selected. Names are lowercased and
/// sorted by byte order, then rendered as `name:value` joined by `\n` without
/// trailing newline.
///
/// ```
/// use aliyun_log_signer::canonicalize_headers;
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-log-bodyrawsize", "0".parse().unwrap());
/// headers.insert("x-log-apiversion", "0.6.0".parse().unwrap());
/// headers.insert("content-type", "application/json".parse().unwrap());
///
/// assert_eq!(
///     canonicalize_headers(&headers),
///     "x-log-apiversion:0.6.0\nx-log-bodyrawsize:0"
/// );
/// ```
pub fn canonicalize_headers(headers: &HeaderMap) -> String {
    let mut selected: Vec<(String, String)> = headers
        .keys()
        .filter_map(|name| {
            let name = name.as_str().to_ascii_lowercase();
            if !(name.starts_with(X_LOG_PREFIX) || name.starts_with(X_ACS_PREFIX)) {
                return None;
            }
            // Only the first value of a repeated header is signed.
            let value = headers.get(name.as_str())?;
            Some((name, String::from_utf8_lossy(value.as_bytes()).into_owned()))
        })
        .collect();

    selected.sort_by(|a, b| a.0.cmp(&b.0));

    let mut s = String::with_capacity(16 * selected.len());
    for (idx, (k, v)) in selected.into_iter().enumerate() {
        if idx != 0 {
            s.push('\n');
        }
        s.push_str(&k);
        s.push(':');
        s.push_str(&v);
    }
    s
}

/// Build the canonicalized resource string.
///
/// Returns `path` unchanged when `params` is empty, otherwise
/// `path?k1=v1&k2=v2` with parameters sorted by name.
///
/// ```
/// use aliyun_log_signer::canonicalize_resource;
///
/// let params = vec![
///     ("type".to_string(), "log".to_string()),
///     ("from".to_string(), "1".to_string()),
/// ];
/// assert_eq!(
///     canonicalize_resource("/logstores/app", &params),
///     "/logstores/app?from=1&type=log"
/// );
/// ```
pub fn canonicalize_resource(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    // Full tuple order keeps repeated names deterministic as well.
    sorted.sort();

    let mut s = String::with_capacity(path.len() + 1 + 16 * sorted.len());
    s.push_str(path);
    s.push('?');
    for (idx, (k, v)) in sorted.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }
    s
}
