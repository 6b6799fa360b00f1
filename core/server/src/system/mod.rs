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

pub mod auth;
pub mod blog;
pub mod blogs;
pub mod crypto;
pub mod integrity;
pub mod ownership;
pub mod stats;
pub mod user;
pub mod users;

use crate::storage::DocumentStore;
use std::sync::Arc;

pub const COMPONENT: &str = "SYSTEM";

/// Domain facade: every operation on users and blogs goes through here.
/// Handlers never touch the store directly.
pub struct System {
    pub(crate) store: Arc<dyn DocumentStore>,
}

impl System {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}
