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

/// Persisted blog document. `user_id` is the owner reference: set at
/// creation, never reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user_id: Uuid,
    pub created_at: i64,
}

impl Blog {
    pub fn new(
        title: String,
        author: Option<String>,
        url: String,
        likes: u64,
        user_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            title,
            author,
            url,
            likes,
            user_id,
            created_at: Utc::now().timestamp(),
        }
    }
}
