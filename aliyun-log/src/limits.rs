//! Payload limits of `PostLogStoreLogs`.
//!
//! Both checks run before any request is built so that an oversized batch is
//! never partially sent.

use crate::constants::{MAX_LOG_GROUP_SIZE, MAX_LOG_ITEMS};
use aliyun_log_core::{Error, Result};

/// Reject batches with more than [`MAX_LOG_ITEMS`] logs.
pub fn check_log_count(count: usize) -> Result<()> {
    if count > MAX_LOG_ITEMS {
        return Err(Error::invalid_log_size(format!(
            "logItems' length exceeds maximum limitation: {MAX_LOG_ITEMS} lines, got {count}."
        )));
    }
    Ok(())
}

/// Reject batches whose serialized size exceeds [`MAX_LOG_GROUP_SIZE`].
pub fn check_log_group_size(size: usize) -> Result<()> {
    if size > MAX_LOG_GROUP_SIZE {
        return Err(Error::invalid_log_size(format!(
            "logItems' size exceeds maximum limitation: 3 MB, got {size} bytes."
        )));
    }
    Ok(())
}
