//! Logstore management: list, create, update, get and delete.

use crate::{Client, PendingRequest, Response};
use aliyun_log_core::Result;
use http::Method;
use log::debug;
use serde::{Deserialize, Serialize};

/// Arguments of [`Client::list_logstores`].
#[derive(Debug, Clone, Default)]
pub struct ListLogstoresRequest {
    /// Project to list, the client default if unset.
    pub project: Option<String>,
    /// Only list logstores whose name contains this value.
    pub logstore_name: Option<String>,
    /// Index of the first logstore returned.
    pub offset: Option<u32>,
    /// Max number of logstores returned.
    pub size: Option<u32>,
}

/// Arguments of [`Client::create_logstore`] and [`Client::update_logstore`].
#[derive(Debug, Clone, Default)]
pub struct LogstoreRequest {
    /// Project owning the logstore, the client default if unset.
    pub project: Option<String>,
    /// Name of the logstore.
    pub logstore_name: String,
    /// Retention in days.
    pub ttl: u32,
    /// Number of shards.
    pub shard_count: u32,
}

/// Result of [`Client::list_logstores`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogstoreList {
    /// Number of logstores in this page.
    pub count: u64,
    /// Number of logstores matching the request.
    pub total: u64,
    /// Logstore names.
    pub logstores: Vec<String>,
}

/// Attributes of a logstore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Logstore {
    /// Name of the logstore.
    pub logstore_name: String,
    /// Retention in days.
    pub ttl: u32,
    /// Number of shards.
    pub shard_count: u32,
    /// Unix seconds.
    pub create_time: i64,
    /// Unix seconds.
    pub last_modify_time: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogstoreBody<'a> {
    logstore_name: &'a str,
    ttl: u32,
    shard_count: u32,
}

impl Client {
    /// List logstores of a project.
    pub async fn list_logstores(&self, req: ListLogstoresRequest) -> Result<LogstoreList> {
        let project = self.resolve_project(req.project.as_deref())?;
        let pending = PendingRequest::new(Method::GET, "/logstores")
            .with_project(project)
            .with_param_opt("size", req.size)
            .with_param_opt("offset", req.offset)
            .with_param_opt("logstoreName", req.logstore_name);

        self.send(pending).await?.json()
    }

    /// Create a logstore.
    pub async fn create_logstore(&self, req: LogstoreRequest) -> Result<Response> {
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;
        let body = serde_json::to_vec(&LogstoreBody {
            logstore_name: name,
            ttl: req.ttl,
            shard_count: req.shard_count,
        })?;
        debug!("creating logstore {project}/{name}");

        self.send(
            PendingRequest::new(Method::POST, "/logstores")
                .with_project(project)
                .with_body(body),
        )
        .await
    }

    /// Update the ttl and shard count of a logstore.
    pub async fn update_logstore(&self, req: LogstoreRequest) -> Result<Response> {
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;
        let body = serde_json::to_vec(&LogstoreBody {
            logstore_name: name,
            ttl: req.ttl,
            shard_count: req.shard_count,
        })?;

        self.send(
            PendingRequest::new(Method::PUT, format!("/logstores/{name}"))
                .with_project(project)
                .with_body(body),
        )
        .await
    }

    /// Get the attributes of a logstore.
    pub async fn get_logstore(&self, project: Option<&str>, logstore_name: &str) -> Result<Logstore> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;

        self.send(PendingRequest::new(Method::GET, format!("/logstores/{name}")).with_project(project))
            .await?
            .json()
    }

    /// Delete a logstore with all its shards and indexes.
    pub async fn delete_logstore(&self, project: Option<&str>, logstore_name: &str) -> Result<Response> {
        let project = self.resolve_project(project)?;
        let name = Self::required("logstore_name", logstore_name)?;
        debug!("deleting logstore {project}/{name}");

        self.send(
            PendingRequest::new(Method::DELETE, format!("/logstores/{name}")).with_project(project),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{mock_client, MockHttpSend};
    use aliyun_log_core::ErrorKind;
    use http::header::CONTENT_TYPE;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_list_logstores() -> anyhow::Result<()> {
        let mock = MockHttpSend::new(
            200,
            r#"{"count":2,"total":2,"logstores":["access","error"]}"#,
        );
        let client = mock_client(&mock);

        let list = client
            .list_logstores(ListLogstoresRequest {
                offset: Some(0),
                size: Some(100),
                ..Default::default()
            })
            .await?;
        assert_eq!(
            list,
            LogstoreList {
                count: 2,
                total: 2,
                logstores: vec!["access".to_string(), "error".to_string()],
            }
        );

        let req = mock.last_request();
        assert_eq!(req.method, Method::GET);
        assert_eq!(
            req.uri.to_string(),
            "http://demo.cn-hangzhou.log.aliyuncs.com:80/logstores?size=100&offset=0"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_create_logstore_sends_json() -> anyhow::Result<()> {
        let mock = MockHttpSend::new(200, "");
        let client = mock_client(&mock);

        let resp = client
            .create_logstore(LogstoreRequest {
                project: Some("other".to_string()),
                logstore_name: "app".to_string(),
                ttl: 30,
                shard_count: 2,
            })
            .await?;
        assert_eq!(resp.request_id(), "mock-request-id");

        let req = mock.last_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.uri.host(), Some("other.cn-hangzhou.log.aliyuncs.com"));
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        let body: serde_json::Value = serde_json::from_slice(&req.body)?;
        assert_eq!(
            body,
            serde_json::json!({"logstoreName": "app", "ttl": 30, "shardCount": 2})
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_get_and_delete_logstore() -> anyhow::Result<()> {
        let mock = MockHttpSend::new(
            200,
            r#"{"logstoreName":"app","ttl":30,"shardCount":2,"createTime":1546300800,"lastModifyTime":1546300800}"#,
        );
        let client = mock_client(&mock);

        let store = client.get_logstore(None, "app").await?;
        assert_eq!(store.logstore_name, "app");
        assert_eq!(store.shard_count, 2);

        client.delete_logstore(None, "app").await?;
        let req = mock.last_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.uri.path(), "/logstores/app");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_logstore_name() {
        let mock = MockHttpSend::new(200, "");
        let client = mock_client(&mock);

        let err = client
            .update_logstore(LogstoreRequest::default())
            .await
            .expect_err("name is required");
        assert_eq!(err.kind(), ErrorKind::ParameterInvalid);
        assert_eq!(err.message(), "missing parameter logstore_name");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_service_error_is_returned() {
        let mock = MockHttpSend::new(
            404,
            r#"{"errorCode":"LogStoreNotExist","errorMessage":"logstore app does not exist"}"#,
        );
        let client = mock_client(&mock);

        let err = client
            .get_logstore(None, "app")
            .await
            .expect_err("404 must fail");
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), "LogStoreNotExist");
        assert_eq!(err.request_id(), Some("mock-request-id"));
    }
}
