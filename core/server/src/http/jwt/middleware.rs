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
use crate::http::jwt::json_web_token::{Identity, ResolvedUser};
use crate::http::shared::AppState;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use scribe_common::ScribeError;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// Pulls the bearer token out of an authorization header value, if any.
///
/// The scheme is matched case-insensitively with exactly one separating
/// space; everything after it is the token, verbatim. An absent header, a
/// different scheme or an empty remainder all mean "no token". Absence is a
/// valid state, not an error.
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?;
    let prefix = header.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    let token = &header[BEARER_PREFIX.len()..];
    if token.is_empty() { None } else { Some(token) }
}

/// Resolves the request's identity and inserts it as a typed extension.
///
/// Policy, applied uniformly on every route: a present-but-invalid or
/// expired token is a hard authentication failure; only a fully absent token
/// is anonymous. A valid token whose user no longer exists resolves to
/// anonymous: a deleted user's still-valid token grants nothing.
pub async fn resolve_identity(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, CustomError> {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = match extract_bearer_token(header) {
        None => Identity::Anonymous,
        Some(token) => {
            let claims = state.jwt_manager.decode(token)?;
            let user_id = Uuid::parse_str(&claims.sub)
                .map_err(|_| ScribeError::InvalidAccessToken)?;
            match state.system.find_user(user_id).await? {
                Some(user) => Identity::User(ResolvedUser {
                    user_id: user.id,
                    username: user.username,
                }),
                None => {
                    debug!("Valid access token for missing user with ID: {user_id}.");
                    Identity::Anonymous
                }
            }
        }
    };

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_should_yield_the_token() {
        assert_eq!(extract_bearer_token(Some("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn scheme_should_match_case_insensitively() {
        assert_eq!(extract_bearer_token(Some("bearer abc123")), Some("abc123"));
        assert_eq!(extract_bearer_token(Some("BEARER abc123")), Some("abc123"));
    }

    #[test]
    fn other_scheme_should_yield_no_token() {
        assert_eq!(extract_bearer_token(Some("Basic abc123")), None);
    }

    #[test]
    fn missing_header_should_yield_no_token() {
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn bare_scheme_should_yield_no_token() {
        assert_eq!(extract_bearer_token(Some("Bearer")), None);
        assert_eq!(extract_bearer_token(Some("Bearer ")), None);
    }

    #[test]
    fn scheme_without_separating_space_should_yield_no_token() {
        assert_eq!(extract_bearer_token(Some("Bearerabc123")), None);
    }
}
