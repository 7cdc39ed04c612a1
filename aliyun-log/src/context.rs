use crate::{Client, Config};
use aliyun_log_core::{Context, OsEnv, Result};
use aliyun_log_http_send_reqwest::ReqwestHttpSend;

/// A [`Context`] that sends requests with a default [`reqwest::Client`] and reads
/// the process environment.
pub fn default_context() -> Context {
    default_context_with_client(reqwest::Client::new())
}

/// Same as [`default_context`] with a caller configured [`reqwest::Client`].
pub fn default_context_with_client(client: reqwest::Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}

impl Client {
    /// Build a client from the process environment with the default context.
    pub fn from_env() -> Result<Self> {
        let ctx = default_context();
        let config = Config::default().from_env(&ctx);
        Self::new(ctx, config)
    }
}
