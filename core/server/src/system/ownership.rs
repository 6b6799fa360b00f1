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

use crate::system::auth::Actor;
use crate::system::blog::Blog;
use scribe_common::ScribeError;
use tracing::warn;

/// Ownership rule for mutating an existing blog: the actor must be the blog's
/// owner. Both sides are canonical `Uuid` values, so the comparison cannot be
/// defeated by differing string representations of the same identifier.
pub fn ensure_blog_owner(actor: &Actor, blog: &Blog) -> Result<(), ScribeError> {
    if blog.user_id != actor.user_id() {
        warn!(
            "User with ID: {} is not the owner of blog with ID: {}.",
            actor.user_id(),
            blog.id
        );
        return Err(ScribeError::Forbidden);
    }
    Ok(())
}
