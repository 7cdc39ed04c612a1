use crate::{Client, PendingRequest};
use aliyun_log_core::Result;
use http::Method;
use serde::Deserialize;

/// Arguments of [`Client::get_shipper_status`].
#[derive(Debug, Clone, Default)]
pub struct GetShipperStatusRequest {
    /// Project owning the logstore, the client default if unset.
    pub project: Option<String>,
    /// Name of the logstore.
    pub logstore_name: String,
    /// Name of the shipper.
    pub shipper_name: String,
    /// Start time, unix seconds.
    pub from: u32,
    /// End time, unix seconds.
    pub to: u32,
    /// `success`, `fail` or `running`; all tasks if unset.
    pub status: Option<String>,
    /// Index of the first task returned.
    pub offset: Option<u32>,
    /// Max number of tasks returned.
    pub size: Option<u32>,
}

/// Task counters of a shipper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipperStatistics {
    /// Tasks still running.
    pub running: u64,
    /// Tasks finished successfully.
    pub success: u64,
    /// Tasks that failed.
    pub fail: u64,
}

/// One shipping task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShipperTask {
    /// Task id.
    pub id: String,
    /// `success`, `fail` or `running`.
    pub task_status: String,
    /// Failure reason, empty unless the task failed.
    pub task_message: String,
    /// Unix seconds.
    pub task_create_time: i64,
    /// Receive time of the last log shipped by this task, unix seconds.
    pub task_last_data_receive_time: i64,
    /// Unix seconds.
    pub task_finish_time: i64,
}

/// Result of [`Client::get_shipper_status`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShipperStatus {
    /// Number of tasks in this page.
    pub count: u64,
    /// Number of tasks matching the request.
    pub total: u64,
    /// Task counters over the whole time range.
    pub statistics: ShipperStatistics,
    /// Tasks in this page.
    pub tasks: Vec<ShipperTask>,
}

impl Client {
    /// List the tasks of a shipper between `from` and `to`.
    pub async fn get_shipper_status(&self, req: GetShipperStatusRequest) -> Result<ShipperStatus> {
        let project = self.resolve_project(req.project.as_deref())?;
        let name = Self::required("logstore_name", &req.logstore_name)?;
        let shipper = Self::required("shipper_name", &req.shipper_name)?;

        self.send(
            PendingRequest::new(
                Method::GET,
                format!("/logstores/{name}/shipper/{shipper}/tasks"),
            )
            .with_project(project)
            .with_param("from", req.from)
            .with_param("to", req.to)
            .with_param_opt("status", req.status)
            .with_param_opt("offset", req.offset)
            .with_param_opt("size", req.size),
        )
        .await?
        .json()
    }
}
