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

//! Keeps the blog-side owner reference and the user-side owned set mutually
//! consistent. Creating and deleting a blog are two separate writes against
//! two documents; the second write is retried a bounded number of times and,
//! on the create path, compensated by deleting the just-created blog. The one
//! state that cannot be repaired in-line is logged at ERROR and picked up by
//! the startup reconciliation scan.

use super::COMPONENT;
use crate::system::System;
use ahash::{AHashMap, AHashSet};
use scribe_common::ScribeError;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

const LINK_ATTEMPTS: u32 = 3;

/// Outcome of a reconciliation scan.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReconcileReport {
    /// Blogs whose owner's set was missing their id.
    pub relinked: u64,
    /// Owned-set entries pointing at blogs that no longer exist.
    pub unlinked: u64,
    /// Blogs whose owner no longer exists; removed.
    pub orphaned_blogs: u64,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.relinked == 0 && self.unlinked == 0 && self.orphaned_blogs == 0
    }
}

impl System {
    /// Second phase of blog creation: add the blog id to the owner's set.
    /// On persistent failure the blog insert is rolled back so that no blog
    /// exists outside its owner's set.
    pub(crate) async fn link_blog_to_owner(
        &self,
        owner_id: Uuid,
        blog_id: Uuid,
    ) -> Result<(), ScribeError> {
        let mut last_error = ScribeError::IntegrityFault(blog_id.to_string());
        for attempt in 1..=LINK_ATTEMPTS {
            match self.store.add_blog_to_user(owner_id, blog_id).await {
                Ok(()) => return Ok(()),
                Err(error @ ScribeError::ResourceNotFound(_)) => {
                    // The owner vanished between the two phases; retrying
                    // cannot succeed.
                    warn!(
                        "Owner with ID: {owner_id} disappeared before blog with ID: {blog_id} was linked."
                    );
                    last_error = error;
                    break;
                }
                Err(error) => {
                    warn!(
                        "{COMPONENT} (error: {error}) - failed to link blog with ID: {blog_id} to user with ID: {owner_id}, attempt: {attempt}/{LINK_ATTEMPTS}."
                    );
                    last_error = error;
                }
            }
        }

        match self.store.delete_blog(blog_id).await {
            Ok(_) => {
                warn!(
                    "Rolled back creation of blog with ID: {blog_id} after failing to link it to user with ID: {owner_id}."
                );
                if matches!(last_error, ScribeError::ResourceNotFound(_)) {
                    // The creator no longer exists; surface it as an
                    // authentication problem, not a missing blog.
                    Err(ScribeError::Unauthenticated)
                } else {
                    Err(last_error)
                }
            }
            Err(error) => {
                error!(
                    "{COMPONENT} (error: {error}) - blog with ID: {blog_id} is not in the set of user with ID: {owner_id} and could not be rolled back; reconciliation required."
                );
                Err(ScribeError::IntegrityFault(blog_id.to_string()))
            }
        }
    }

    /// Second phase of blog deletion: remove the blog id from the owner's
    /// set. The blog itself is already gone, so a persistent failure leaves a
    /// dangling set entry; it is logged for the reconciliation scan.
    pub(crate) async fn unlink_blog_from_owner(
        &self,
        owner_id: Uuid,
        blog_id: Uuid,
    ) -> Result<(), ScribeError> {
        for attempt in 1..=LINK_ATTEMPTS {
            match self.store.remove_blog_from_user(owner_id, blog_id).await {
                Ok(()) => return Ok(()),
                Err(ScribeError::ResourceNotFound(_)) => {
                    // Owner already deleted; its set is gone with it.
                    return Ok(());
                }
                Err(error) => {
                    warn!(
                        "{COMPONENT} (error: {error}) - failed to unlink blog with ID: {blog_id} from user with ID: {owner_id}, attempt: {attempt}/{LINK_ATTEMPTS}."
                    );
                }
            }
        }

        error!(
            "Set of user with ID: {owner_id} still references deleted blog with ID: {blog_id}; reconciliation required."
        );
        Err(ScribeError::IntegrityFault(blog_id.to_string()))
    }

    /// Full scan repairing any divergence between owner references and owned
    /// sets, in both directions. Run at startup; a crash between the two
    /// write phases cannot leave the collections permanently inconsistent.
    pub async fn reconcile(&self) -> Result<ReconcileReport, ScribeError> {
        let users = self.store.users().await?;
        let blogs = self.store.blogs().await?;

        let users_by_id: AHashMap<Uuid, &crate::system::user::User> =
            users.iter().map(|user| (user.id, user)).collect();
        let blog_ids: AHashSet<Uuid> = blogs.iter().map(|blog| blog.id).collect();

        let mut report = ReconcileReport::default();

        for blog in &blogs {
            match users_by_id.get(&blog.user_id) {
                None => {
                    warn!(
                        "Blog with ID: {} references missing user with ID: {}; removing it.",
                        blog.id, blog.user_id
                    );
                    self.store.delete_blog(blog.id).await?;
                    report.orphaned_blogs += 1;
                }
                Some(owner) if !owner.blogs.contains(&blog.id) => {
                    warn!(
                        "Blog with ID: {} was missing from the set of user with ID: {}; relinking it.",
                        blog.id, blog.user_id
                    );
                    self.store.add_blog_to_user(blog.user_id, blog.id).await?;
                    report.relinked += 1;
                }
                Some(_) => {}
            }
        }

        for user in &users {
            for blog_id in &user.blogs {
                if !blog_ids.contains(blog_id) {
                    warn!(
                        "Set of user with ID: {} references missing blog with ID: {blog_id}; unlinking it.",
                        user.id
                    );
                    self.store.remove_blog_from_user(user.id, *blog_id).await?;
                    report.unlinked += 1;
                }
            }
        }

        if report.is_clean() {
            info!("Collections are consistent.");
        } else {
            info!(
                "Reconciled collections: relinked: {}, unlinked: {}, orphaned blogs removed: {}.",
                report.relinked, report.unlinked, report.orphaned_blogs
            );
        }
        Ok(report)
    }
}
