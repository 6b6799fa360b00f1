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

use crate::system::System;
use crate::system::blog::Blog;
use scribe_common::{FavoriteBlog, PlatformStats, ScribeError};

impl System {
    pub async fn stats(&self) -> Result<PlatformStats, ScribeError> {
        let users_count = self.store.users().await?.len() as u64;
        let blogs = self.store.blogs().await?;
        Ok(PlatformStats {
            users_count,
            blogs_count: blogs.len() as u64,
            total_likes: total_likes(&blogs),
            favorite_blog: favorite_blog(&blogs).map(|blog| FavoriteBlog {
                title: blog.title.clone(),
                author: blog.author.clone(),
                likes: blog.likes,
            }),
        })
    }
}

pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().max_by_key(|blog| blog.likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn blog(title: &str, likes: u64) -> Blog {
        Blog::new(
            title.to_string(),
            Some("A. Writer".to_string()),
            format!("http://example.com/{title}"),
            likes,
            Uuid::now_v7(),
        )
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_of_single_blog_equals_its_likes() {
        assert_eq!(total_likes(&[blog("only", 5)]), 5);
    }

    #[test]
    fn total_likes_of_bigger_list_is_the_sum() {
        let blogs = vec![blog("a", 7), blog("b", 5), blog("c", 12)];
        assert_eq!(total_likes(&blogs), 24);
    }

    #[test]
    fn favorite_blog_is_the_most_liked_one() {
        let blogs = vec![blog("a", 7), blog("b", 12), blog("c", 5)];
        assert_eq!(favorite_blog(&blogs).unwrap().title, "b");
    }

    #[test]
    fn favorite_blog_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }
}
