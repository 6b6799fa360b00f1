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

use crate::http::error::CustomError;
use crate::http::mapper;
use crate::http::shared::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router, debug_handler};
use scribe_common::{IdentityInfo, LoginUser, Validatable};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login_user))
        .with_state(state)
}

#[debug_handler]
async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(command): Json<LoginUser>,
) -> Result<Json<IdentityInfo>, CustomError> {
    command.validate()?;
    let user = state
        .system
        .login_user(
            command.username.as_deref().unwrap_or_default(),
            command.password.as_deref().unwrap_or_default(),
        )
        .await?;
    let token = state.jwt_manager.generate(&user)?;
    Ok(Json(mapper::map_identity(&user, token)))
}
