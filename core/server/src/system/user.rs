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

use chrono::Utc;
use uuid::Uuid;

/// Persisted user document.
///
/// `password_hash` never leaves the process; the HTTP mappers only ever copy
/// the public fields. `blogs` is the owned-resource set and is mutated solely
/// through the store's atomic add/remove operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub blogs: Vec<Uuid>,
    pub created_at: i64,
}

impl User {
    pub fn new(username: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            name,
            password_hash,
            blogs: Vec::new(),
            created_at: Utc::now().timestamp(),
        }
    }
}
