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

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scribe_common::ScribeError;
use serde_json::json;
use tracing::error;

/// HTTP boundary error. Every failure leaves the server as a single
/// `{"error": <message>}` body; internal faults are collapsed into a generic
/// message so that storage details, hashes and secrets can never leak.
#[derive(Debug)]
pub enum CustomError {
    Error(ScribeError),
    ResourceNotFound,
}

impl From<ScribeError> for CustomError {
    fn from(error: ScribeError) -> Self {
        CustomError::Error(error)
    }
}

impl IntoResponse for CustomError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CustomError::ResourceNotFound => {
                (StatusCode::NOT_FOUND, "Resource not found".to_string())
            }
            CustomError::Error(error) => {
                let status = match &error {
                    ScribeError::InvalidUsername
                    | ScribeError::InvalidPassword
                    | ScribeError::InvalidName
                    | ScribeError::InvalidBlogFields
                    | ScribeError::InvalidIdentifier(_)
                    | ScribeError::UserAlreadyExists => StatusCode::BAD_REQUEST,
                    ScribeError::InvalidCredentials
                    | ScribeError::Unauthenticated
                    | ScribeError::InvalidAccessToken
                    | ScribeError::AccessTokenExpired => StatusCode::UNAUTHORIZED,
                    ScribeError::Forbidden => StatusCode::FORBIDDEN,
                    ScribeError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
                    ScribeError::CannotGenerateToken
                    | ScribeError::StorageFailure(_)
                    | ScribeError::IntegrityFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let message = if error.is_internal() {
                    error!("Internal error: {error}");
                    "internal server error".to_string()
                } else {
                    error.to_string()
                };
                (status, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: ScribeError) -> StatusCode {
        CustomError::from(error).into_response().status()
    }

    #[test]
    fn taxonomy_should_map_to_expected_status_codes() {
        assert_eq!(status_of(ScribeError::InvalidBlogFields), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ScribeError::UserAlreadyExists), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ScribeError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ScribeError::AccessTokenExpired),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(ScribeError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(ScribeError::ResourceNotFound("id".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ScribeError::IntegrityFault("id".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
