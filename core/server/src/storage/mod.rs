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

mod memory;

pub use memory::InMemoryStore;

use crate::system::blog::Blog;
use crate::system::user::User;
use async_trait::async_trait;
use scribe_common::ScribeError;
use uuid::Uuid;

/// Document-store contract the domain layer runs against.
///
/// Single-document operations are atomic. `add_blog_to_user` and
/// `remove_blog_from_user` are field-level set operators (the document-store
/// equivalents of `$addToSet`/`$pull`), so two concurrent creations by the
/// same owner cannot lose each other's link. Username uniqueness is enforced
/// by `insert_user` at write time, not by a read-then-write in the caller.
///
/// Cross-document consistency between a blog's owner reference and the
/// owner's set is NOT this layer's job; `system::integrity` maintains it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a user; fails with `UserAlreadyExists` when the username is
    /// taken.
    async fn insert_user(&self, user: User) -> Result<User, ScribeError>;
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, ScribeError>;
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, ScribeError>;
    async fn users(&self) -> Result<Vec<User>, ScribeError>;

    /// Atomically adds `blog_id` to the user's owned set (no duplicates).
    async fn add_blog_to_user(&self, user_id: Uuid, blog_id: Uuid) -> Result<(), ScribeError>;
    /// Atomically removes `blog_id` from the user's owned set.
    async fn remove_blog_from_user(&self, user_id: Uuid, blog_id: Uuid)
    -> Result<(), ScribeError>;

    async fn insert_blog(&self, blog: Blog) -> Result<Blog, ScribeError>;
    async fn blog_by_id(&self, id: Uuid) -> Result<Option<Blog>, ScribeError>;
    async fn blogs(&self) -> Result<Vec<Blog>, ScribeError>;
    /// Replaces the blog with the same id; fails with `ResourceNotFound` when
    /// it does not exist.
    async fn update_blog(&self, blog: Blog) -> Result<Blog, ScribeError>;
    /// Returns whether a blog was actually removed.
    async fn delete_blog(&self, id: Uuid) -> Result<bool, ScribeError>;

    /// Wipes both collections. Only reachable through the testing router.
    async fn clear(&self) -> Result<(), ScribeError>;
}
