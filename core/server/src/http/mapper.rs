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

use crate::http::jwt::json_web_token::GeneratedToken;
use crate::system::blog::Blog;
use crate::system::user::User;
use ahash::AHashMap;
use scribe_common::{BlogInfo, BlogSummary, IdentityInfo, OwnerInfo, UserInfo};
use uuid::Uuid;

pub fn map_identity(user: &User, token: GeneratedToken) -> IdentityInfo {
    IdentityInfo {
        id: user.id,
        token: token.access_token,
        username: user.username.clone(),
        name: user.name.clone(),
    }
}

/// Maps a user with its owned blogs summarized, preserving the owned-set
/// order. Blogs not found in `blogs` are skipped rather than invented.
pub fn map_user(user: &User, blogs: &[Blog]) -> UserInfo {
    let blogs_by_id: AHashMap<Uuid, &Blog> = blogs.iter().map(|blog| (blog.id, blog)).collect();
    let summaries = user
        .blogs
        .iter()
        .filter_map(|blog_id| blogs_by_id.get(blog_id))
        .map(|blog| BlogSummary {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
        })
        .collect();
    UserInfo {
        id: user.id,
        username: user.username.clone(),
        name: user.name.clone(),
        blogs: summaries,
    }
}

pub fn map_users(users: &[User], blogs: &[Blog]) -> Vec<UserInfo> {
    let mut users_data: Vec<UserInfo> = users.iter().map(|user| map_user(user, blogs)).collect();
    users_data.sort_by(|a, b| a.id.cmp(&b.id));
    users_data
}

pub fn map_blog(blog: &Blog, owner: Option<&User>) -> BlogInfo {
    BlogInfo {
        id: blog.id,
        title: blog.title.clone(),
        author: blog.author.clone(),
        url: blog.url.clone(),
        likes: blog.likes,
        user: owner.map(|user| OwnerInfo {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }),
    }
}

pub fn map_blogs(blogs: &[Blog], users: &[User]) -> Vec<BlogInfo> {
    let users_by_id: AHashMap<Uuid, &User> = users.iter().map(|user| (user.id, user)).collect();
    let mut blogs_data: Vec<BlogInfo> = blogs
        .iter()
        .map(|blog| map_blog(blog, users_by_id.get(&blog.user_id).copied()))
        .collect();
    blogs_data.sort_by(|a, b| a.id.cmp(&b.id));
    blogs_data
}
