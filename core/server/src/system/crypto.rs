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

use bcrypt::{DEFAULT_COST, hash, verify};
use scribe_common::ScribeError;
use tracing::error;

pub fn hash_password(password: &str) -> Result<String, ScribeError> {
    hash(password, DEFAULT_COST).map_err(|error| {
        error!("Cannot hash password. Error: {error}");
        ScribeError::StorageFailure("password hashing failed".to_string())
    })
}

/// Constant-time verification; any bcrypt error counts as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}
