//! Client for Aliyun Log Service (SLS).
//!
//! Every call is assembled into a signed HTTP request, sent through the
//! [`HttpSend`](aliyun_log_core::HttpSend) of the client's
//! [`Context`](aliyun_log_core::Context), and its response is classified into either a
//! [`Response`] or an [`Error`](aliyun_log_core::Error).
//!
//! ## Example
//!
//! ```no_run
//! use aliyun_log::{Client, Log, PostLogsRequest};
//!
//! # async fn example() -> aliyun_log_core::Result<()> {
//! // Reads ALIYUN_LOG_ENDPOINT, ALIYUN_LOG_PROJECT and ALIBABA_CLOUD_ACCESS_KEY_* from env.
//! let client = Client::from_env()?;
//!
//! client
//!     .post_logs(PostLogsRequest {
//!         logstore_name: "app".to_string(),
//!         topic: Some("access".to_string()),
//!         logs: vec![Log::new(1546300800).with_content("status", "200")],
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use aliyun_log_core::{Context, Error, ErrorKind, Result};

mod client;
pub use client::Client;
mod config;
pub use config::Config;
/// Env names, limits and header values used by the client.
pub mod constants;
mod endpoint;
pub use endpoint::{is_ip_literal, Endpoint};
mod request;
pub use request::PendingRequest;
mod response;
pub use response::Response;

mod compress;
mod limits;
pub use limits::{check_log_count, check_log_group_size};
mod proto;
pub use proto::{Log, LogContent, LogGroup, LogGroupList, LogTag};

mod logs;
pub use logs::*;
mod logstore;
pub use logstore::*;
mod shard;
pub use shard::*;
mod shipper;
pub use shipper::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_context, default_context_with_client};

#[cfg(test)]
mod mock;
