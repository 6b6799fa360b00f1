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

use clap::Parser;
use server::configs::config_provider::FileConfigProvider;
use server::http::http_server;
use server::server_error::ServerError;
use server::storage::InMemoryStore;
use server::system::System;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scribe-server", about = "Scribe blog platform server")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = FileConfigProvider::new(args.config).load_config()?;

    let store = Arc::new(InMemoryStore::new());
    let system = Arc::new(System::new(store));

    // Repair any owner/owned-set divergence left behind by a crash between
    // the two write phases before accepting traffic.
    match system.reconcile().await {
        Ok(report) if !report.is_clean() => {
            info!("Startup reconciliation repaired collections: {report:?}");
        }
        Ok(_) => {}
        Err(err) => {
            error!("Startup reconciliation failed: {err}");
        }
    }

    http_server::start(&config, system).await?;

    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Cannot listen for the shutdown signal: {err}");
    }
    info!("Scribe server is shutting down.");
    Ok(())
}
