/* Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use scribe_common::defaults::{DEFAULT_HTTP_ADDRESS, DEFAULT_TOKEN_LIFETIME_SECS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub address: String,
    pub cors: HttpCorsConfig,
    pub jwt: HttpJwtConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpCorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
}

/// Token codec configuration. The signing secret is process-wide state,
/// loaded once at startup and injected into the codec; it must never be
/// logged, so `Debug` redacts it.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpJwtConfig {
    pub secret: String,
    pub token_lifetime_secs: u64,
    pub clock_skew_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_HTTP_ADDRESS.to_string(),
            cors: HttpCorsConfig::default(),
            jwt: HttpJwtConfig::default(),
        }
    }
}

impl Default for HttpCorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
        }
    }
}

impl Default for HttpJwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            clock_skew_secs: 0,
        }
    }
}

impl fmt::Debug for HttpJwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpJwtConfig")
            .field("secret", &"<redacted>")
            .field("token_lifetime_secs", &self.token_lifetime_secs)
            .field("clock_skew_secs", &self.clock_skew_secs)
            .finish()
    }
}
