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
use crate::system::crypto;
use crate::system::user::User;
use scribe_common::ScribeError;
use tracing::{error, info, warn};
use uuid::Uuid;

impl System {
    /// Creates a user. Validation of field shape happens at the boundary;
    /// username uniqueness is enforced here, at write time, by the store's
    /// insert.
    pub async fn create_user(
        &self,
        username: &str,
        name: &str,
        password: &str,
    ) -> Result<User, ScribeError> {
        let password_hash = crypto::hash_password(password)?;
        let user = User::new(username.to_string(), name.to_string(), password_hash);
        let user = self
            .store
            .insert_user(user)
            .await
            .inspect_err(|error| match error {
                ScribeError::UserAlreadyExists => {
                    warn!("User: {username} already exists.");
                }
                _ => {
                    error!("{COMPONENT} (error: {error}) - failed to create user: {username}");
                }
            })?;
        info!(
            "Created user: {} with ID: {}.",
            user.username, user.id
        );
        Ok(user)
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ScribeError> {
        self.store.users().await
    }

    pub async fn find_user(&self, user_id: Uuid) -> Result<Option<User>, ScribeError> {
        self.store.user_by_id(user_id).await
    }

    /// Verifies a username/password pair and returns the user on success.
    /// Unknown username and wrong password are indistinguishable to the
    /// caller.
    pub async fn login_user(&self, username: &str, password: &str) -> Result<User, ScribeError> {
        let Some(user) = self.store.user_by_username(username).await? else {
            warn!("Cannot login user: {username} (not found).");
            return Err(ScribeError::InvalidCredentials);
        };

        if !crypto::verify_password(password, &user.password_hash) {
            warn!(
                "Invalid password for user: {username} with ID: {}.",
                user.id
            );
            return Err(ScribeError::InvalidCredentials);
        }

        info!("User: {username} with ID: {} has logged in.", user.id);
        Ok(user)
    }

    /// Wipes both collections. Only reachable through the testing router.
    pub async fn reset(&self) -> Result<(), ScribeError> {
        warn!("Resetting all collections...");
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::InMemoryStore;
    use crate::system::System;
    use scribe_common::ScribeError;
    use std::sync::Arc;

    fn system() -> System {
        System::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn created_user_should_have_hashed_password() {
        let system = system();
        let user = system
            .create_user("alice", "Alice Doe", "secretpw")
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "secretpw");
        assert!(user.blogs.is_empty());
    }

    #[tokio::test]
    async fn second_user_with_same_username_should_fail() {
        let system = system();
        system
            .create_user("alice", "Alice Doe", "secretpw")
            .await
            .unwrap();

        let result = system.create_user("alice", "Other Alice", "otherpw").await;

        assert_eq!(result, Err(ScribeError::UserAlreadyExists));
        assert_eq!(system.get_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn login_should_succeed_with_valid_credentials() {
        let system = system();
        let created = system
            .create_user("alice", "Alice Doe", "secretpw")
            .await
            .unwrap();

        let user = system.login_user("alice", "secretpw").await.unwrap();

        assert_eq!(user.id, created.id);
    }

    #[tokio::test]
    async fn login_should_fail_uniformly_for_bad_credentials() {
        let system = system();
        system
            .create_user("alice", "Alice Doe", "secretpw")
            .await
            .unwrap();

        let wrong_password = system.login_user("alice", "wrongpw").await;
        let unknown_user = system.login_user("nobody", "secretpw").await;

        assert_eq!(wrong_password, Err(ScribeError::InvalidCredentials));
        assert_eq!(unknown_user, Err(ScribeError::InvalidCredentials));
    }
}
