//! Protobuf messages of the Log Service wire format.
//!
//! ```protobuf
//! message Log {
//!     required uint32 Time = 1;
//!     message Content {
//!         required string Key = 1;
//!         required string Value = 2;
//!     }
//!     repeated Content Contents = 2;
//! }
//! message LogTag {
//!     required string Key = 1;
//!     required string Value = 2;
//! }
//! message LogGroup {
//!     repeated Log Logs = 1;
//!     optional string Reserved = 2;
//!     optional string Topic = 3;
//!     optional string Source = 4;
//!     repeated LogTag LogTags = 6;
//! }
//! message LogGroupList {
//!     repeated LogGroup logGroupList = 1;
//! }
//! ```

/// A single key/value pair inside a [`Log`].
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct LogContent {
    /// Field name.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// Field value.
    #[prost(string, required, tag = "2")]
    pub value: String,
}

/// One log record.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct Log {
    /// Unix timestamp in seconds.
    #[prost(uint32, required, tag = "1")]
    pub time: u32,
    /// Fields of the record, in insertion order.
    #[prost(message, repeated, tag = "2")]
    pub contents: Vec<LogContent>,
}

impl Log {
    /// Create an empty log at `time` (unix seconds).
    pub fn new(time: u32) -> Self {
        Self {
            time,
            contents: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.contents.push(LogContent {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Get the value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.contents
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.value.as_str())
    }
}

/// A tag attached to a whole [`LogGroup`].
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct LogTag {
    /// Tag name.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// Tag value.
    #[prost(string, required, tag = "2")]
    pub value: String,
}

/// A batch of logs sharing topic and source.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct LogGroup {
    /// Logs in this group.
    #[prost(message, repeated, tag = "1")]
    pub logs: Vec<Log>,
    /// Reserved by the service.
    #[prost(string, optional, tag = "2")]
    pub reserved: Option<String>,
    /// Topic of the group.
    #[prost(string, optional, tag = "3")]
    pub topic: Option<String>,
    /// Source of the group, usually the producer's ip.
    #[prost(string, optional, tag = "4")]
    pub source: Option<String>,
    /// Tags of the group.
    #[prost(message, repeated, tag = "6")]
    pub log_tags: Vec<LogTag>,
}

/// The payload returned by `PullLogs`.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct LogGroupList {
    /// Log groups in cursor order.
    #[prost(message, repeated, tag = "1")]
    pub log_group_list: Vec<LogGroup>,
}
