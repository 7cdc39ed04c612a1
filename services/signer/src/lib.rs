//! Aliyun Log Service signing implementation.
//!
//! Log Service authenticates every request with an HMAC-SHA1 signature over a
//! canonical string built from the request:
//!
//! ```text
//! Authorization: LOG <AccessKeyId>:<Signature>
//!
//! Signature = base64(hmac-sha1(AccessKeySecret,
//!     VERB + "\n"
//!     + CONTENT-MD5 + "\n"
//!     + CONTENT-TYPE + "\n"
//!     + DATE + "\n"
//!     + CanonicalizedLOGHeaders + "\n"
//!     + CanonicalizedResource))
//! ```
//!
//! ## Example
//!
//! ```
//! use aliyun_log_signer::{Credential, RequestSigner};
//!
//! # fn main() -> aliyun_log_core::Result<()> {
//! let mut req = http::Request::get("http://demo.cn-hangzhou.log.aliyuncs.com/logstores")
//!     .header("date", "Tue, 01 Jan 2019 00:00:00 GMT")
//!     .header("x-log-apiversion", "0.6.0")
//!     .body(())?
//!     .into_parts()
//!     .0;
//!
//! let signer = RequestSigner::new(Credential::new("access_key_id", "access_key_secret"));
//! signer.sign(&mut req)?;
//! assert!(req.headers.contains_key("authorization"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Header names and protocol values.
#[allow(missing_docs)]
pub mod constants;

mod canonicalize;
pub use canonicalize::{canonicalize_headers, canonicalize_resource};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{sign, string_to_sign, RequestSigner};
