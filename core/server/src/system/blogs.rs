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

use super::COMPONENT;
use crate::system::System;
use crate::system::auth::Actor;
use crate::system::blog::Blog;
use crate::system::ownership;
use scribe_common::{CreateBlog, ScribeError, UpdateBlog};
use tracing::{error, info};
use uuid::Uuid;

impl System {
    pub async fn get_blogs(&self) -> Result<Vec<Blog>, ScribeError> {
        self.store.blogs().await
    }

    pub async fn find_blog(&self, blog_id: Uuid) -> Result<Option<Blog>, ScribeError> {
        self.store.blog_by_id(blog_id).await
    }

    /// Creates a blog owned by the actor and links it into the owner's set.
    /// Any authenticated actor may create; the owner reference is fixed here
    /// and never reassigned afterwards.
    pub async fn create_blog(
        &self,
        actor: &Actor,
        command: &CreateBlog,
    ) -> Result<Blog, ScribeError> {
        let Some(owner) = self.store.user_by_id(actor.user_id()).await? else {
            // The token outlived its user.
            return Err(ScribeError::Unauthenticated);
        };

        let blog = Blog::new(
            command.title.clone().unwrap_or_default(),
            command.author.clone(),
            command.url.clone().unwrap_or_default(),
            command.likes.unwrap_or(0),
            owner.id,
        );
        let blog = self
            .store
            .insert_blog(blog)
            .await
            .inspect_err(|error| {
                error!("{COMPONENT} (error: {error}) - failed to create blog for user with ID: {}", owner.id);
            })?;

        self.link_blog_to_owner(owner.id, blog.id).await?;
        info!(
            "Created blog: {} with ID: {} for user with ID: {}.",
            blog.title, blog.id, owner.id
        );
        Ok(blog)
    }

    /// Edits a blog's content fields. Ownership is required, the owner
    /// reference and the owner's set stay untouched.
    pub async fn update_blog(
        &self,
        actor: &Actor,
        blog_id: Uuid,
        command: &UpdateBlog,
    ) -> Result<Blog, ScribeError> {
        let Some(blog) = self.store.blog_by_id(blog_id).await? else {
            return Err(ScribeError::ResourceNotFound(blog_id.to_string()));
        };
        ownership::ensure_blog_owner(actor, &blog)?;

        let updated = Blog {
            title: command.title.clone().unwrap_or_default(),
            author: command.author.clone(),
            url: command.url.clone().unwrap_or_default(),
            likes: command.likes.unwrap_or(blog.likes),
            ..blog
        };
        let updated = self.store.update_blog(updated).await?;
        info!("Updated blog with ID: {}.", updated.id);
        Ok(updated)
    }

    /// Deletes a blog. Only its owner may do so; afterwards the id is removed
    /// from the owner's set.
    pub async fn delete_blog(&self, actor: &Actor, blog_id: Uuid) -> Result<(), ScribeError> {
        let Some(blog) = self.store.blog_by_id(blog_id).await? else {
            return Err(ScribeError::ResourceNotFound(blog_id.to_string()));
        };
        ownership::ensure_blog_owner(actor, &blog)?;

        if !self.store.delete_blog(blog.id).await? {
            // Lost a race against a concurrent delete.
            return Err(ScribeError::ResourceNotFound(blog_id.to_string()));
        }

        self.unlink_blog_from_owner(blog.user_id, blog.id).await?;
        info!(
            "Deleted blog with ID: {} of user with ID: {}.",
            blog.id, blog.user_id
        );
        Ok(())
    }
}
