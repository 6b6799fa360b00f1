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

pub mod blogs;
pub mod error;
pub mod http_server;
pub mod jwt;
pub mod login;
pub mod mapper;
pub mod shared;
pub mod system;
pub mod testing;
pub mod users;

use scribe_common::ScribeError;
use uuid::Uuid;

pub const COMPONENT: &str = "HTTP_API";

/// Parses a path identifier into its canonical form. All identifier
/// comparisons downstream happen on `Uuid` values, never raw strings.
pub(crate) fn parse_identifier(value: &str) -> Result<Uuid, ScribeError> {
    Uuid::parse_str(value.trim()).map_err(|_| ScribeError::InvalidIdentifier(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_should_parse_case_insensitively() {
        let id = Uuid::now_v7();
        let parsed = parse_identifier(&id.to_string().to_uppercase()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_identifier_should_be_rejected() {
        assert_eq!(
            parse_identifier("not-an-id"),
            Err(ScribeError::InvalidIdentifier("not-an-id".to_string()))
        );
    }
}
