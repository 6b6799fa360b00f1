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
use scribe_common::ScribeError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token. Validity is determined entirely by the
/// signature and `exp`; storage state is not consulted at verification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub jti: String,
    pub sub: String,
    pub username: String,
    pub iat: u64,
    pub exp: u64,
}

/// A freshly issued access token.
#[derive(Debug, Clone)]
pub struct GeneratedToken {
    pub user_id: Uuid,
    pub access_token: String,
    pub expiry: u64,
}

/// The request's resolved identity, inserted as a typed extension by the
/// identity middleware and threaded through handlers. Request metadata is
/// never mutated ad hoc.
#[derive(Debug, Clone)]
pub enum Identity {
    /// No token was presented. A valid state: reads are public.
    Anonymous,
    /// A verified token referring to a live user.
    User(ResolvedUser),
}

#[derive(Debug, Clone)]
pub struct ResolvedUser {
    pub user_id: Uuid,
    pub username: String,
}

impl Identity {
    /// Returns the authentication proof, or fails for anonymous requests.
    pub fn require_authenticated(&self) -> Result<Actor, ScribeError> {
        match self {
            Identity::User(user) => Ok(Actor::new(user.user_id)),
            Identity::Anonymous => Err(ScribeError::Unauthenticated),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::User(_))
    }
}
