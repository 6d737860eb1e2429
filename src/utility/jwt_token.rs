// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! JWT Token Creation Utility
//!
//! This module builds the claims of an issued token and signs them with
//! HMAC-SHA256 using the shared secret.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::IssuerConfig;
use crate::error::TokenCreationError;
use crate::utility::secret_file::load_secret;

/// Value of the `updated_at` claim
///
/// This is a fixed millisecond timestamp (2008-03-06) rather than anything
/// derived from the clock. It looks like a leftover placeholder, but
/// consumers may compare against it so it is kept as is.
pub const UPDATED_AT: i64 = 1204824961000;

/// Claims carried by an issued token
///
/// Field order is the serialized key order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// JWT ID, fresh for every token
    pub jti: Uuid,

    /// Issued at timestamp
    ///
    /// Unix time (seconds since 1970-01-01T00:00:00Z UTC).
    pub iat: i64,

    /// Fixed [`UPDATED_AT`] value
    pub updated_at: i64,

    /// Subject (the user id the token is generated for)
    pub sub: String,

    /// Issuer (the id of the cluster the token is generated for)
    pub iss: String,
}

impl TokenClaims {
    /// Claims for `subject` and `issuer`, issued now
    pub fn new(subject: &str, issuer: &str) -> Self {
        Self {
            jti: Uuid::new_v4(),
            iat: Utc::now().timestamp(),
            updated_at: UPDATED_AT,
            sub: subject.to_string(),
            iss: issuer.to_string(),
        }
    }
}

/// Result of a successful JWT token creation operation
#[derive(Debug)]
pub struct TokenCreationResult {
    /// Compact serialized token
    pub token: String,
    /// Claims embedded in the token
    pub claims: TokenClaims,
}

/// HS256 token creator
///
/// Holds the HMAC key for the lifetime of the issuance.
///
/// # Examples
///
/// ```
/// use token_issuer::utility::jwt_token::TokenCreator;
///
/// let creator = TokenCreator::new(b"secretkey");
/// let result = creator.create_token("user-42", "cluster-1").unwrap();
///
/// assert_eq!(result.claims.sub, "user-42");
/// assert_eq!(result.token.split('.').count(), 3);
/// ```
pub struct TokenCreator {
    signing_key: EncodingKey,
}

impl TokenCreator {
    /// Creates a token creator keyed with the decoded secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            signing_key: EncodingKey::from_secret(secret),
        }
    }

    /// Creates and signs a token for `subject` issued by `issuer`
    pub fn create_token(
        &self,
        subject: &str,
        issuer: &str,
    ) -> Result<TokenCreationResult, TokenCreationError> {
        let claims = TokenClaims::new(subject, issuer);
        let token = self.sign(&claims)?;

        Ok(TokenCreationResult { token, claims })
    }

    /// Signs prepared claims
    pub fn sign(&self, claims: &TokenClaims) -> Result<String, TokenCreationError> {
        let header = Header::new(Algorithm::HS256);
        let token = encode(&header, claims, &self.signing_key)?;
        debug!("Signed token {} issued at {}", claims.jti, claims.iat);
        Ok(token)
    }
}

/// Runs the whole pipeline for `config`: read and decode the secret, then
/// issue one token
pub fn issue_token(config: &IssuerConfig) -> Result<TokenCreationResult, TokenCreationError> {
    let secret = load_secret(config.secret_file())?;
    let creator = TokenCreator::new(&secret);
    creator.create_token(config.subject(), config.issuer())
}
