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

use crate::configs::server::ServerConfig;
use crate::server_error::ServerError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "SCRIBE_CONFIG_PATH";
pub const JWT_SECRET_ENV: &str = "SCRIBE_JWT_SECRET";
const DEFAULT_CONFIG_PATH: &str = "configs/server.toml";
const ENV_PREFIX: &str = "SCRIBE_";
const ENV_SEPARATOR: &str = "__";

/// Layered configuration: compiled defaults, then the TOML file, then
/// `SCRIBE_`-prefixed environment variables (`__` separates key segments,
/// e.g. `SCRIBE_HTTP__ADDRESS`). The JWT secret may additionally be supplied
/// via the dedicated `SCRIBE_JWT_SECRET` variable.
pub struct FileConfigProvider {
    path: String,
}

impl FileConfigProvider {
    pub fn new(path: Option<String>) -> Self {
        let path = path
            .or_else(|| env::var(CONFIG_PATH_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self { path }
    }

    pub fn load_config(&self) -> Result<ServerConfig, ServerError> {
        info!("Loading config from path: '{}'...", self.path);
        let mut config: ServerConfig = Figment::new()
            .merge(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(&self.path))
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
            .extract()
            .map_err(|error| ServerError::CannotLoadConfig(error.to_string()))?;

        if let Ok(secret) = env::var(JWT_SECRET_ENV) {
            config.http.jwt.secret = secret;
        }

        info!("Config loaded: {config:?}");
        Ok(config)
    }
}
