// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Issuer Configuration
//!
//! The issuer takes all of its settings from the command line. They are
//! validated once and frozen into an [`IssuerConfig`] that is handed to each
//! stage of the pipeline.
//!
//! ## Usage
//!
//! ```
//! use token_issuer::config::IssuerConfig;
//!
//! let config = IssuerConfig::new("user-42", "cluster-1", None).unwrap();
//! assert_eq!(config.secret_file().to_str(), Some("secret.dat"));
//!
//! // Empty identities are rejected before any file is touched
//! assert!(IssuerConfig::new("", "cluster-1", None).is_err());
//! ```

use log::debug;
use std::path::{Path, PathBuf};

use crate::error::TokenCreationError;

/// Secret file read when `-f` is not given
pub const DEFAULT_SECRET_FILE: &str = "secret.dat";

/// Validated settings for one token issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    subject: String,
    issuer: String,
    secret_file: PathBuf,
}

impl IssuerConfig {
    /// Build a configuration, rejecting an empty subject or issuer
    ///
    /// The subject is checked first, so a command line missing both reports
    /// the subject.
    pub fn new(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        secret_file: Option<PathBuf>,
    ) -> Result<Self, TokenCreationError> {
        let subject = subject.into();
        let issuer = issuer.into();

        if subject.is_empty() {
            return Err(TokenCreationError::MissingSubject);
        }
        if issuer.is_empty() {
            return Err(TokenCreationError::MissingIssuer);
        }

        let secret_file = secret_file.unwrap_or_else(|| PathBuf::from(DEFAULT_SECRET_FILE));
        debug!(
            "Issuer configuration: subject={}, issuer={}, secret file={}",
            subject,
            issuer,
            secret_file.display()
        );

        Ok(Self {
            subject,
            issuer,
            secret_file,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn secret_file(&self) -> &Path {
        &self.secret_file
    }
}
