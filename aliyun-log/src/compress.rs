// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! `deflate` compression as Log Service names it, which is zlib framed deflate.

use crate::constants::MAX_LOG_GROUP_SIZE;
use aliyun_log_core::Result;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress `data` with zlib.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress zlib `data`, `raw_size` is used as a capacity hint.
///
/// The hint is capped at [`MAX_LOG_GROUP_SIZE`].
pub fn inflate(data: &[u8], raw_size: usize) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::with_capacity(raw_size.min(MAX_LOG_GROUP_SIZE));
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_deflated() -> anyhow::Result<()> {
        let data = b"level=error status=500 ".repeat(64);
        let compressed = deflate(&data)?;
        assert!(compressed.len() < data.len());
        // zlib header
        assert_eq!(compressed[0], 0x78);
        assert_eq!(inflate(&compressed, data.len())?, data);
        Ok(())
    }

    #[test]
    fn test_inflate_ignores_oversized_hint() -> anyhow::Result<()> {
        let data = b"status=200".repeat(8);
        assert_eq!(inflate(&deflate(&data)?, usize::MAX)?, data);
        Ok(())
    }

    #[test]
    fn test_inflate_garbage() {
        let err = inflate(b"not zlib at all", 0).expect_err("must fail");
        assert_eq!(err.kind(), aliyun_log_core::ErrorKind::Unexpected);
    }
}
