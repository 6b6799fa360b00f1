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

use serde::{Deserialize, Serialize};

/// Aggregate counters over both collections, returned by `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub users_count: u64,
    pub blogs_count: u64,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteBlog>,
}

/// The most-liked blog, if any blogs exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub likes: u64,
}
