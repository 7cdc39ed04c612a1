//! Shard management and cursor based consumption.

use crate::compress::inflate;
use crate::constants::*;
use crate::proto::LogGroupList;
use crate::{Client, PendingRequest, Response};
use aliyun_log_core::Result;
use aliyun_log_signer::constants::{X_LOG_BODY_RAW_SIZE, X_LOG_COMPRESS_TYPE};
use http::header::{ACCEPT, ACCEPT_ENCODING};
use http::{HeaderValue, Method};
use log::debug;
use prost::Message;
use serde::{Deserialize, Serialize};

/// A shard of a logstore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shard {
    /// Shard id.
    #[serde(rename = "shardID")]
    pub shard_id: u32,
    /// `readwrite` or `readonly`.
    pub status: String,
    /// Hex encoded md5 range start, inclusive.
    pub inclusive_begin_key: String,
    /// Hex encoded md5 range end, exclusive.
    pub exclusive_end_key: String,
    /// Unix seconds.
    pub create_time: i64,
}

/// Where to place a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// The first log of the shard.
    Begin,
    /// After the last log of the shard.
    End,
    /// The first log received at or after this unix timestamp.
    Time(u32),
}

impl std::fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorPosition::Begin => f.write_str("begin"),
            CursorPosition::End => f.write_str("end"),
            CursorPosition::Time(t) => write!(f, "{t}"),
        }
    }
}

#[derive(Deserialize)]
struct CursorPayload {
    cursor: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitBody<'a> {
    logstore_name: &'a str,
    #[serde(rename = "shardid")]
    shard_id: u32,
    #[serde(rename = "splitkey")]
    split_key: &'a str,
}

/// Arguments of [`Client::pull_logs`].
#[derive(Debug, Clone, Default)]
pub struct PullLogsRequest {
    /// Project owning the logstore, the client default if unset.
    pub project: Option<String>,
    /// Name of the logstore.
    pub logstore_name: String,
    /// Shard to read from.
    pub shard_id: u32,
    /// Cursor returned by [`Client::get_cursor`] or a previous pull.
    pub cursor: String,
    /// Max number of log groups returned, up to 1000.
    pub count: u32,
}

/// Result of [`Client::pull_logs`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullLogsResponse {
    /// Log groups read.
    pub log_group_list: LogGroupList,
    /// Cursor to continue from.
    pub next_cursor: String,
    /// Request id of the pull.
    pub request_id: String,
}

impl Client {
    /// List the shards of a logstore.
    pub async fn list_shards(&self, project: Option<&str>, logstore_name: &str) -> Result<Vec<Shard>> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;

        self.send(
            PendingRequest::new(Method::GET, format!("/logstores/{name}/shards"))
                .with_project(project),
        )
        .await?
        .json()
    }

    /// Split a readwrite shard at `split_key`, returning the resulting shards.
    pub async fn split_shard(
        &self,
        project: Option<&str>,
        logstore_name: &str,
        shard_id: u32,
        split_key: &str,
    ) -> Result<Vec<Shard>> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;
        let split_key = Self::required("split_key", split_key)?;
        let body = serde_json::to_vec(&SplitBody {
            logstore_name: name,
            shard_id,
            split_key,
        })?;
        debug!("splitting shard {project}/{name}/{shard_id} at {split_key}");

        self.send(
            PendingRequest::new(Method::POST, format!("/logstores/{name}/shards/{shard_id}"))
                .with_project(project)
                .with_param("action", "split")
                .with_param("key", split_key)
                .with_body(body),
        )
        .await?
        .json()
    }

    /// Merge a readwrite shard with its right neighbour.
    pub async fn merge_shards(
        &self,
        project: Option<&str>,
        logstore_name: &str,
        shard_id: u32,
    ) -> Result<Vec<Shard>> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;
        debug!("merging shard {project}/{name}/{shard_id}");

        self.send(
            PendingRequest::new(Method::POST, format!("/logstores/{name}/shards/{shard_id}"))
                .with_project(project)
                .with_param("action", "merge"),
        )
        .await?
        .json()
    }

    /// Delete a readonly shard.
    pub async fn delete_shard(
        &self,
        project: Option<&str>,
        logstore_name: &str,
        shard_id: u32,
    ) -> Result<Response> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;

        self.send(
            PendingRequest::new(Method::DELETE, format!("/logstores/{name}/shards/{shard_id}"))
                .with_project(project),
        )
        .await
    }

    /// Get a cursor of a shard.
    pub async fn get_cursor(
        &self,
        project: Option<&str>,
        logstore_name: &str,
        shard_id: u32,
        from: CursorPosition,
    ) -> Result<String> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;

        let payload: CursorPayload = self
            .send(
                PendingRequest::new(Method::GET, format!("/logstores/{name}/shards/{shard_id}"))
                    .with_project(project)
                    .with_param("type", "cursor")
                    .with_param("from", from),
            )
            .await?
            .json()?;
        Ok(payload.cursor)
    }

    /// Read log groups of a shard starting at a cursor.
    pub async fn pull_logs(&self, req: PullLogsRequest) -> Result<PullLogsResponse> {
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;
        let cursor = Self::required("cursor", &req.cursor)?;

        let resp = self
            .send(
                PendingRequest::new(
                    Method::GET,
                    format!("/logstores/{name}/shards/{}", req.shard_id),
                )
                .with_project(project)
                .with_param("type", "logs")
                .with_param("count", req.count)
                .with_param("cursor", cursor)
                .with_header(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_PROTOBUF))
                .with_header(ACCEPT_ENCODING, HeaderValue::from_static(COMPRESS_TYPE_DEFLATE)),
            )
            .await?;

        let next_cursor = resp.header(X_LOG_CURSOR).unwrap_or_default().to_string();
        let request_id = resp.request_id().to_string();
        let compressed = resp.header(X_LOG_COMPRESS_TYPE) == Some(COMPRESS_TYPE_DEFLATE);
        let raw_size = resp
            .header(X_LOG_BODY_RAW_SIZE)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or_default();

        let body = resp.into_body();
        let log_group_list = if compressed {
            LogGroupList::decode(inflate(&body, raw_size)?.as_slice())?
        } else {
            LogGroupList::decode(body)?
        };
        debug!(
            "pulled {} log groups from shard {}, next cursor {next_cursor}",
            log_group_list.log_group_list.len(),
            req.shard_id
        );

        Ok(PullLogsResponse {
            log_group_list,
            next_cursor,
            request_id,
        })
    }
}
