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
use crate::types::users::OwnerInfo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `POST /blogs` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl Validatable<ScribeError> for CreateBlog {
    fn validate(&self) -> Result<(), ScribeError> {
        if self.title.as_deref().unwrap_or_default().is_empty()
            || self.url.as_deref().unwrap_or_default().is_empty()
        {
            return Err(ScribeError::InvalidBlogFields);
        }
        Ok(())
    }
}

/// `PUT /blogs/{id}` command. The owner reference is not part of the wire
/// surface; only content fields and the like counter are mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl Validatable<ScribeError> for UpdateBlog {
    fn validate(&self) -> Result<(), ScribeError> {
        if self.title.as_deref().unwrap_or_default().is_empty()
            || self.url.as_deref().unwrap_or_default().is_empty()
        {
            return Err(ScribeError::InvalidBlogFields);
        }
        Ok(())
    }
}

/// Blog representation returned by the `/blogs` routes, with the owner
/// populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogInfo {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<OwnerInfo>,
}

/// Compact blog representation embedded in user responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_blog_should_be_valid() {
        let command = CreateBlog {
            title: Some("On writing".to_string()),
            author: Some("A. Writer".to_string()),
            url: Some("http://example.com/on-writing".to_string()),
            likes: None,
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn create_blog_without_title_should_fail() {
        let command = CreateBlog {
            title: None,
            author: None,
            url: Some("http://example.com".to_string()),
            likes: None,
        };
        assert_eq!(command.validate(), Err(ScribeError::InvalidBlogFields));
    }

    #[test]
    fn create_blog_without_url_should_fail() {
        let command = CreateBlog {
            title: Some("On writing".to_string()),
            author: None,
            url: Some(String::new()),
            likes: None,
        };
        assert_eq!(command.validate(), Err(ScribeError::InvalidBlogFields));
    }
}
