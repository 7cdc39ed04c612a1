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

// Header name prefixes that take part in the canonicalized headers.
pub const X_LOG_PREFIX: &str = "x-log-";
pub const X_ACS_PREFIX: &str = "x-acs-";

// Headers used by the signing protocol.
pub const CONTENT_MD5: &str = "content-md5";
pub const X_LOG_API_VERSION: &str = "x-log-apiversion";
pub const X_LOG_SIGNATURE_METHOD: &str = "x-log-signaturemethod";
pub const X_LOG_BODY_RAW_SIZE: &str = "x-log-bodyrawsize";
pub const X_LOG_COMPRESS_TYPE: &str = "x-log-compresstype";
pub const X_LOG_REQUEST_ID: &str = "x-log-requestid";
pub const X_ACS_SECURITY_TOKEN: &str = "x-acs-security-token";

// Values used by the signing protocol.
pub const API_VERSION: &str = "0.6.0";
pub const SIGNATURE_METHOD: &str = "hmac-sha1";
pub const AUTHORIZATION_SCHEME: &str = "LOG";
