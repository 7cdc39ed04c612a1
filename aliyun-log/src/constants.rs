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

// Env values used to configure the client.
pub const ALIYUN_LOG_ENDPOINT: &str = "ALIYUN_LOG_ENDPOINT";
pub const ALIYUN_LOG_PROJECT: &str = "ALIYUN_LOG_PROJECT";
pub const ALIBABA_CLOUD_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
pub const ALIBABA_CLOUD_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";
pub const ALIBABA_CLOUD_SECURITY_TOKEN: &str = "ALIBABA_CLOUD_SECURITY_TOKEN";

pub const USER_AGENT: &str = concat!("aliyun-log-rs/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_PORT: u16 = 80;

// Limits enforced before a log group is sent.
pub const MAX_LOG_ITEMS: usize = 4096;
pub const MAX_LOG_GROUP_SIZE: usize = 3 * 1024 * 1024;

pub const X_LOG_CURSOR: &str = "x-log-cursor";
pub const X_LOG_COUNT: &str = "x-log-count";
pub const X_LOG_PROGRESS: &str = "x-log-progress";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_PROTOBUF: &str = "application/x-protobuf";
pub const COMPRESS_TYPE_DEFLATE: &str = "deflate";
