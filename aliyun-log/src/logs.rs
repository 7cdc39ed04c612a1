//! Writing and querying logs.

use crate::compress::deflate;
use crate::constants::*;
use crate::limits::{check_log_count, check_log_group_size};
use crate::proto::{Log, LogGroup};
use crate::{Client, PendingRequest, Response};
use aliyun_log_core::Result;
use aliyun_log_signer::constants::{X_LOG_BODY_RAW_SIZE, X_LOG_COMPRESS_TYPE};
use http::header::{HeaderName, CONTENT_TYPE};
use http::{HeaderValue, Method};
use log::debug;
use prost::Message;
use serde::Deserialize;

/// Arguments of [`Client::post_logs`].
#[derive(Debug, Clone, Default)]
pub struct PostLogsRequest {
    /// Project owning the logstore, the client default if unset.
    pub project: Option<String>,
    /// Name of the logstore.
    pub logstore_name: String,
    /// Topic of the batch.
    pub topic: Option<String>,
    /// Source of the batch.
    pub source: Option<String>,
    /// At most 4096 logs.
    pub logs: Vec<Log>,
}

/// Arguments of [`Client::get_logs`].
#[derive(Debug, Clone, Default)]
pub struct GetLogsRequest {
    /// Project owning the logstore, the client default if unset.
    pub project: Option<String>,
    /// Name of the logstore.
    pub logstore_name: String,
    /// Start time, unix seconds, inclusive.
    pub from: u32,
    /// End time, unix seconds, exclusive.
    pub to: u32,
    /// Query statement.
    pub query: Option<String>,
    /// Topic filter.
    pub topic: Option<String>,
    /// Max number of logs returned.
    pub line: Option<u32>,
    /// Index of the first log returned.
    pub offset: Option<u32>,
    /// Return logs newest first.
    pub reverse: Option<bool>,
}

/// Result of [`Client::get_logs`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetLogsResponse {
    /// `Complete` when the result is final, `Incomplete` otherwise.
    pub progress: String,
    /// Number of logs returned.
    pub count: u64,
    /// Matched logs as field maps.
    pub logs: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Arguments of [`Client::get_histograms`].
#[derive(Debug, Clone, Default)]
pub struct GetHistogramsRequest {
    /// Project owning the logstore, the client default if unset.
    pub project: Option<String>,
    /// Name of the logstore.
    pub logstore_name: String,
    /// Start time, unix seconds, inclusive.
    pub from: u32,
    /// End time, unix seconds, exclusive.
    pub to: u32,
    /// Query statement.
    pub query: Option<String>,
    /// Topic filter.
    pub topic: Option<String>,
}

/// One bucket of a histogram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Histogram {
    /// Bucket start, unix seconds.
    pub from: u32,
    /// Bucket end, unix seconds.
    pub to: u32,
    /// Number of logs in this bucket.
    pub count: u64,
    /// `Complete` or `Incomplete`.
    pub progress: String,
}

/// Result of [`Client::get_histograms`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetHistogramsResponse {
    /// `Complete` when the result is final, `Incomplete` otherwise.
    pub progress: String,
    /// Total number of matched logs.
    pub count: u64,
    /// Buckets in time order.
    pub histograms: Vec<Histogram>,
}

fn progress_and_count(resp: &Response) -> (String, u64) {
    let progress = resp.header(X_LOG_PROGRESS).unwrap_or_default().to_string();
    let count = resp
        .header(X_LOG_COUNT)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    (progress, count)
}

impl Client {
    /// Write a batch of logs to a logstore.
    ///
    /// The batch is checked against the item and size limits before anything is sent,
    /// then sent as a zlib compressed protobuf `LogGroup`.
    pub async fn post_logs(&self, req: PostLogsRequest) -> Result<Response> {
        check_log_count(req.logs.len())?;
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;

        let count = req.logs.len();
        let group = LogGroup {
            logs: req.logs,
            topic: req.topic,
            source: req.source,
            ..Default::default()
        };
        let raw = group.encode_to_vec();
        check_log_group_size(raw.len())?;

        let body = deflate(&raw)?;
        debug!(
            "posting {count} logs to {project}/{name}, raw size {}, compressed size {}",
            raw.len(),
            body.len()
        );

        self.send(
            PendingRequest::new(Method::POST, format!("/logstores/{name}"))
                .with_project(project)
                .with_header(
                    HeaderName::from_static(X_LOG_BODY_RAW_SIZE),
                    HeaderValue::from(raw.len()),
                )
                .with_header(
                    HeaderName::from_static(X_LOG_COMPRESS_TYPE),
                    HeaderValue::from_static(COMPRESS_TYPE_DEFLATE),
                )
                .with_header(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_PROTOBUF))
                .with_body(body),
        )
        .await
    }

    /// Query logs of a logstore.
    pub async fn get_logs(&self, req: GetLogsRequest) -> Result<GetLogsResponse> {
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;

        let resp = self
            .send(
                PendingRequest::new(Method::GET, format!("/logstores/{name}"))
                    .with_project(project)
                    .with_param("type", "log")
                    .with_param("from", req.from)
                    .with_param("to", req.to)
                    .with_param_opt("line", req.line)
                    .with_param_opt("query", req.query)
                    .with_param_opt("topic", req.topic)
                    .with_param_opt("offset", req.offset)
                    .with_param_opt("reverse", req.reverse),
            )
            .await?;

        let (progress, count) = progress_and_count(&resp);
        Ok(GetLogsResponse {
            progress,
            count,
            logs: resp.json()?,
        })
    }

    /// Get the distribution of logs over time.
    pub async fn get_histograms(&self, req: GetHistogramsRequest) -> Result<GetHistogramsResponse> {
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;

        let resp = self
            .send(
                PendingRequest::new(Method::GET, format!("/logstores/{name}"))
                    .with_project(project)
                    .with_param("type", "histogram")
                    .with_param("from", req.from)
                    .with_param("to", req.to)
                    .with_param_opt("topic", req.topic.filter(|v| !v.is_empty()))
                    .with_param_opt("query", req.query.filter(|v| !v.is_empty())),
            )
            .await?;

        let (progress, count) = progress_and_count(&resp);
        Ok(GetHistogramsResponse {
            progress,
            count,
            histograms: resp.json()?,
        })
    }
}
