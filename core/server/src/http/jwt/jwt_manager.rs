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

use crate::configs::http::HttpJwtConfig;
use crate::http::jwt::json_web_token::{GeneratedToken, JwtClaims};
use crate::server_error::ServerError;
use crate::system::user::User;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use scribe_common::ScribeError;
use tracing::{debug, error};
use uuid::Uuid;

pub struct IssuerOptions {
    pub token_lifetime_secs: u64,
    pub key: EncodingKey,
    pub algorithm: Algorithm,
}

pub struct ValidatorOptions {
    pub clock_skew_secs: u64,
    pub key: DecodingKey,
}

/// Issues and validates access tokens. Constructed once at startup from an
/// injected configuration; the codec never reaches into the process
/// environment, which also makes it testable with a fixture secret.
pub struct JwtManager {
    issuer: IssuerOptions,
    validator: ValidatorOptions,
    validation: Validation,
}

impl JwtManager {
    pub fn new(issuer: IssuerOptions, validator: ValidatorOptions) -> Self {
        let validation = Self::create_validation(issuer.algorithm, validator.clock_skew_secs);
        Self {
            issuer,
            validator,
            validation,
        }
    }

    pub fn from_config(config: &HttpJwtConfig) -> Result<Self, ServerError> {
        if config.secret.is_empty() {
            return Err(ServerError::MissingJwtSecret);
        }
        let issuer = IssuerOptions {
            token_lifetime_secs: config.token_lifetime_secs,
            key: EncodingKey::from_secret(config.secret.as_bytes()),
            algorithm: Algorithm::HS256,
        };
        let validator = ValidatorOptions {
            clock_skew_secs: config.clock_skew_secs,
            key: DecodingKey::from_secret(config.secret.as_bytes()),
        };
        Ok(JwtManager::new(issuer, validator))
    }

    fn create_validation(algorithm: Algorithm, clock_skew_secs: u64) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = clock_skew_secs;
        validation
    }

    pub fn generate(&self, user: &User) -> Result<GeneratedToken, ScribeError> {
        let header = Header::new(self.issuer.algorithm);
        let iat = Utc::now().timestamp() as u64;
        let exp = iat + self.issuer.token_lifetime_secs;
        let claims = JwtClaims {
            jti: Uuid::now_v7().to_string(),
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat,
            exp,
        };

        match encode::<JwtClaims>(&header, &claims, &self.issuer.key) {
            Ok(access_token) => Ok(GeneratedToken {
                user_id: user.id,
                access_token,
                expiry: exp,
            }),
            Err(error) => {
                error!("Cannot generate access token. Error: {error}");
                Err(ScribeError::CannotGenerateToken)
            }
        }
    }

    /// Checks signature integrity and expiry. Expiry is reported distinctly;
    /// every other failure collapses into "invalid".
    pub fn decode(&self, token: &str) -> Result<JwtClaims, ScribeError> {
        decode::<JwtClaims>(token, &self.validator.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => {
                    debug!("Access token expired.");
                    ScribeError::AccessTokenExpired
                }
                _ => {
                    debug!("Invalid access token. Error: {error}");
                    ScribeError::InvalidAccessToken
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_SECRET: &str = "top_secret$ecretaBc&123!@#$%";

    fn test_manager() -> JwtManager {
        JwtManager::from_config(&HttpJwtConfig {
            secret: FIXTURE_SECRET.to_string(),
            token_lifetime_secs: 3600,
            clock_skew_secs: 0,
        })
        .unwrap()
    }

    fn test_user() -> User {
        User::new(
            "alice".to_string(),
            "Alice Doe".to_string(),
            "hash".to_string(),
        )
    }

    #[test]
    fn empty_secret_should_be_rejected() {
        let result = JwtManager::from_config(&HttpJwtConfig::default());
        assert!(matches!(result, Err(ServerError::MissingJwtSecret)));
    }

    #[test]
    fn token_round_trip_should_preserve_identity_claims() {
        let manager = test_manager();
        let user = test_user();

        let token = manager.generate(&user).unwrap();
        let claims = manager.decode(&token.access_token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.exp, claims.iat + 3600);
        assert_eq!(token.expiry, claims.exp);
    }

    #[test]
    fn expired_token_should_be_reported_distinctly() {
        let manager = test_manager();
        let user = test_user();

        let iat = Utc::now().timestamp() as u64 - 7200;
        let claims = JwtClaims {
            jti: Uuid::now_v7().to_string(),
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat,
            exp: iat + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(FIXTURE_SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            manager.decode(&token),
            Err(ScribeError::AccessTokenExpired)
        );
    }

    #[test]
    fn token_signed_with_other_secret_should_be_invalid() {
        let manager = test_manager();
        let other = JwtManager::from_config(&HttpJwtConfig {
            secret: "an_entirely_different_secret".to_string(),
            token_lifetime_secs: 3600,
            clock_skew_secs: 0,
        })
        .unwrap();

        let token = other.generate(&test_user()).unwrap();

        assert_eq!(
            manager.decode(&token.access_token),
            Err(ScribeError::InvalidAccessToken)
        );
    }

    #[test]
    fn malformed_token_should_be_invalid() {
        let manager = test_manager();
        assert_eq!(
            manager.decode("not.a.token"),
            Err(ScribeError::InvalidAccessToken)
        );
    }
}
