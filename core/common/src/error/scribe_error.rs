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

use thiserror::Error;

/// Domain errors for the Scribe server.
///
/// Message text is what clients see in the `{"error": ...}` body, so it must
/// never carry password hashes, token material or the signing secret.
/// Internal variants render as a generic message at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScribeError {
    #[error("Username must be at least {min} characters long", min = crate::defaults::MIN_USERNAME_LENGTH)]
    InvalidUsername,
    #[error("Password must be at least {min} characters long", min = crate::defaults::MIN_PASSWORD_LENGTH)]
    InvalidPassword,
    #[error("Name is required")]
    InvalidName,
    #[error("title or url missing")]
    InvalidBlogFields,
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("Username must be unique")]
    UserAlreadyExists,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("token missing or invalid")]
    Unauthenticated,
    #[error("Token invalid")]
    InvalidAccessToken,
    #[error("Token expired")]
    AccessTokenExpired,
    #[error("only the creator can modify a blog")]
    Forbidden,
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Cannot generate access token")]
    CannotGenerateToken,
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),
    #[error("Owner link diverged for blog: {0}")]
    IntegrityFault(String),
}

impl ScribeError {
    /// Whether the error must be hidden behind a generic server-error message
    /// at the HTTP boundary.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ScribeError::CannotGenerateToken
                | ScribeError::StorageFailure(_)
                | ScribeError::IntegrityFault(_)
        )
    }
}
