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
use crate::http::jwt::json_web_token::Identity;
use crate::http::mapper;
use crate::http::parse_identifier;
use crate::http::shared::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router, debug_handler};
use scribe_common::{BlogInfo, CreateBlog, UpdateBlog, Validatable};
use std::sync::Arc;
use tracing::instrument;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/blogs", get(get_blogs).post(create_blog))
        .route(
            "/blogs/{blog_id}",
            axum::routing::put(update_blog).delete(delete_blog),
        )
        .with_state(state)
}

#[debug_handler]
async fn get_blogs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<BlogInfo>>, CustomError> {
    let blogs = state.system.get_blogs().await?;
    let users = state.system.get_users().await?;
    Ok(Json(mapper::map_blogs(&blogs, &users)))
}

#[debug_handler]
#[instrument(skip_all, name = "trace_create_blog")]
async fn create_blog(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(command): Json<CreateBlog>,
) -> Result<(StatusCode, Json<BlogInfo>), CustomError> {
    let actor = identity.require_authenticated()?;
    command.validate()?;

    let blog = state.system.create_blog(&actor, &command).await?;
    let owner = state.system.find_user(blog.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(mapper::map_blog(&blog, owner.as_ref())),
    ))
}

#[debug_handler]
#[instrument(skip_all, name = "trace_update_blog", fields(blog_id = %blog_id))]
async fn update_blog(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(blog_id): Path<String>,
    Json(command): Json<UpdateBlog>,
) -> Result<Json<BlogInfo>, CustomError> {
    let actor = identity.require_authenticated()?;
    let blog_id = parse_identifier(&blog_id)?;
    command.validate()?;

    let blog = state.system.update_blog(&actor, blog_id, &command).await?;
    let owner = state.system.find_user(blog.user_id).await?;
    Ok(Json(mapper::map_blog(&blog, owner.as_ref())))
}

#[debug_handler]
#[instrument(skip_all, name = "trace_delete_blog", fields(blog_id = %blog_id))]
async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(blog_id): Path<String>,
) -> Result<StatusCode, CustomError> {
    let actor = identity.require_authenticated()?;
    let blog_id = parse_identifier(&blog_id)?;

    state.system.delete_blog(&actor, blog_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
