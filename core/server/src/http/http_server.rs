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

use crate::configs::http::HttpCorsConfig;
use crate::configs::server::ServerConfig;
use crate::http::jwt::jwt_manager::JwtManager;
use crate::http::jwt::middleware::resolve_identity;
use crate::http::shared::AppState;
use crate::http::{blogs, login, system, testing, users};
use crate::server_error::ServerError;
use crate::system::System;
use axum::Router;
use axum::middleware;
use axum_server::Handle;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Builds the application and starts serving it. Resolves once the listener
/// is bound, returning the bound address (which matters when the configured
/// port is 0).
pub async fn start(config: &ServerConfig, system: Arc<System>) -> Result<SocketAddr, ServerError> {
    let jwt_manager = JwtManager::from_config(&config.http.jwt)?;
    let state = Arc::new(AppState {
        system,
        jwt_manager: Arc::new(jwt_manager),
    });

    let mut app = Router::new()
        .merge(system::router(state.clone()))
        .merge(login::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(blogs::router(state.clone()));

    if config.testing.enabled {
        warn!("Testing API is enabled; never enable it in a deployment.");
        app = app.merge(testing::router(state.clone()));
    }

    app = app
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_identity,
        ))
        .layer(TraceLayer::new_for_http());

    if config.http.cors.enabled {
        app = app.layer(configure_cors(&config.http.cors));
    }

    let address: SocketAddr = config
        .http
        .address
        .parse()
        .map_err(|_| ServerError::InvalidHttpAddress(config.http.address.clone()))?;

    let handle = Handle::new();
    let server_handle = handle.clone();
    tokio::spawn(async move {
        if let Err(err) = axum_server::bind(address)
            .handle(server_handle)
            .serve(app.into_make_service())
            .await
        {
            error!("HTTP server has failed: {err}");
        }
    });

    match handle.listening().await {
        Some(bound_address) => {
            info!("Started HTTP API on: {bound_address}");
            Ok(bound_address)
        }
        None => Err(ServerError::CannotBindHttp(config.http.address.clone())),
    }
}

fn configure_cors(config: &HttpCorsConfig) -> CorsLayer {
    let allow_any = config.allowed_origins.is_empty()
        || config.allowed_origins.iter().any(|origin| origin == "*");
    let allowed_origins = if allow_any {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
