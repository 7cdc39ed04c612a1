use aliyun_log_core::utils::Redact;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access_key and secret_key.
///
/// A credential is fixed for the lifetime of the client that owns it.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key id for aliyun services.
    pub access_key_id: String,
    /// Access key secret for aliyun services.
    ///
    /// An empty secret produces unsigned (anonymous) requests.
    pub access_key_secret: String,
    /// Security token issued by STS for temporary credentials.
    pub security_token: Option<String>,
}

impl Credential {
    /// Create a new credential from access key id and secret.
    pub fn new(access_key_id: &str, access_key_secret: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            access_key_secret: access_key_secret.to_string(),
            security_token: None,
        }
    }

    /// Set the security token.
    pub fn with_security_token(mut self, token: &str) -> Self {
        self.security_token = Some(token.to_string()).filter(|v| !v.is_empty());
        self
    }

    /// Requests signed with an anonymous credential carry an empty signature.
    pub fn is_anonymous(&self) -> bool {
        self.access_key_secret.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("access_key_secret", &Redact::from(&self.access_key_secret))
            .field("security_token", &Redact::from(&self.security_token))
            .finish()
    }
}
