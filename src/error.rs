// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error type shared by every stage of token creation

use std::path::PathBuf;
use thiserror::Error;

/// Specific errors for token creation
///
/// Every failure of the issuing pipeline ends up here and is handed back to
/// the caller; the binary turns it into a message and an exit status.
#[derive(Error, Debug)]
pub enum TokenCreationError {
    #[error("missing required subject (-s) option")]
    MissingSubject,

    #[error("missing required issuer (-i) option")]
    MissingIssuer,

    #[error("Unable to open secret file {}: {source}", path.display())]
    SecretFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed while reading secret file {}: {source}", path.display())]
    SecretFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read secret from file: {}", path.display())]
    NoSecretInFile { path: PathBuf },

    #[error("Failed to decode secret from base64url: {source}")]
    SecretDecoding {
        #[from]
        source: base64::DecodeError,
    },

    #[error("Decoded secret is empty")]
    EmptySecret,

    #[error("JWT token signing failed: {source}")]
    TokenSigning {
        #[from]
        source: jsonwebtoken::errors::Error,
    },
}

impl TokenCreationError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TokenCreationError::MissingSubject | TokenCreationError::MissingIssuer => 2,
            TokenCreationError::SecretFileUnreadable { .. } => 3,
            TokenCreationError::SecretFileRead { .. } => 4,
            TokenCreationError::NoSecretInFile { .. } => 5,
            TokenCreationError::SecretDecoding { .. } | TokenCreationError::EmptySecret => 6,
            TokenCreationError::TokenSigning { .. } => 7,
        }
    }

    /// Whether the command usage should be shown alongside this error
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            TokenCreationError::MissingSubject
                | TokenCreationError::MissingIssuer
                | TokenCreationError::SecretFileUnreadable { .. }
        )
    }
}
