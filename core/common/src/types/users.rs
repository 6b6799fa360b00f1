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

use crate::ScribeError;
use crate::Validatable;
use crate::defaults::{
    MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::types::blogs::BlogSummary;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `POST /users` command. Fields are optional on the wire so that a missing
/// field surfaces as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl Validatable<ScribeError> for CreateUser {
    fn validate(&self) -> Result<(), ScribeError> {
        let username = self.username.as_deref().unwrap_or_default();
        if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
            return Err(ScribeError::InvalidUsername);
        }

        let password = self.password.as_deref().unwrap_or_default();
        if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
            return Err(ScribeError::InvalidPassword);
        }

        if self.name.as_deref().unwrap_or_default().trim().is_empty() {
            return Err(ScribeError::InvalidName);
        }

        Ok(())
    }
}

/// `POST /login` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Validatable<ScribeError> for LoginUser {
    // The login surface never explains which part was wrong.
    fn validate(&self) -> Result<(), ScribeError> {
        if self.username.as_deref().unwrap_or_default().is_empty()
            || self.password.as_deref().unwrap_or_default().is_empty()
        {
            return Err(ScribeError::InvalidCredentials);
        }
        Ok(())
    }
}

/// User representation returned by `GET /users`, with the owned blogs
/// summarized. The password hash is not part of this type at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogSummary>,
}

/// Compact owner representation embedded in blog responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}
