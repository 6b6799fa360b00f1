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

//! Type-safe authentication proof using the proof-carrying code pattern.
//!
//! An [`Actor`] can only be constructed by the identity-resolution path,
//! so any code holding one has passed authentication.

use uuid::Uuid;

/// Proof of successful authentication.
///
/// # Invariants
/// - `user_id` referred to a live user at resolution time
#[derive(Clone, Copy, Debug)]
pub struct Actor {
    user_id: Uuid,
    // Private field prevents external construction.
    _sealed: (),
}

impl Actor {
    /// Only call after the identity has been resolved to a live user.
    #[inline]
    pub(crate) fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            _sealed: (),
        }
    }

    #[inline]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }
}
