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

use crate::storage::DocumentStore;
use crate::system::blog::Blog;
use crate::system::user::User;
use ahash::RandomState;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use scribe_common::ScribeError;
use uuid::Uuid;

/// In-memory document store.
///
/// Each map entry is guarded by its shard lock, so mutating a single user
/// document through `get_mut` is atomic with respect to concurrent writers;
/// that is what makes the owned-set operators safe under concurrent
/// creations by the same owner. The `usernames` index is the write-time
/// uniqueness guard: reservation happens through its entry lock before the
/// user document is inserted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: DashMap<Uuid, User, RandomState>,
    usernames: DashMap<String, Uuid, RandomState>,
    blogs: DashMap<Uuid, Blog, RandomState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_user(&self, user: User) -> Result<User, ScribeError> {
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(ScribeError::UserAlreadyExists),
            Entry::Vacant(entry) => {
                entry.insert(user.id);
                self.users.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, ScribeError> {
        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, ScribeError> {
        let Some(id) = self.usernames.get(username).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }

    async fn users(&self) -> Result<Vec<User>, ScribeError> {
        Ok(self.users.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn add_blog_to_user(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), ScribeError> {
        let mut user = self
            .users
            .get_mut(&user_id)
            .ok_or_else(|| ScribeError::ResourceNotFound(user_id.to_string()))?;
        if !user.blogs.contains(&blog_id) {
            user.blogs.push(blog_id);
        }
        Ok(())
    }

    async fn remove_blog_from_user(
        &self,
        user_id: Uuid,
        blog_id: Uuid,
    ) -> Result<(), ScribeError> {
        let mut user = self
            .users
            .get_mut(&user_id)
            .ok_or_else(|| ScribeError::ResourceNotFound(user_id.to_string()))?;
        user.blogs.retain(|id| *id != blog_id);
        Ok(())
    }

    async fn insert_blog(&self, blog: Blog) -> Result<Blog, ScribeError> {
        self.blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn blog_by_id(&self, id: Uuid) -> Result<Option<Blog>, ScribeError> {
        Ok(self.blogs.get(&id).map(|blog| blog.value().clone()))
    }

    async fn blogs(&self) -> Result<Vec<Blog>, ScribeError> {
        Ok(self.blogs.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn update_blog(&self, blog: Blog) -> Result<Blog, ScribeError> {
        let mut existing = self
            .blogs
            .get_mut(&blog.id)
            .ok_or_else(|| ScribeError::ResourceNotFound(blog.id.to_string()))?;
        *existing = blog.clone();
        Ok(blog)
    }

    async fn delete_blog(&self, id: Uuid) -> Result<bool, ScribeError> {
        Ok(self.blogs.remove(&id).is_some())
    }

    async fn clear(&self) -> Result<(), ScribeError> {
        self.users.clear();
        self.usernames.clear();
        self.blogs.clear();
        Ok(())
    }
}
