// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Token issuer library
//!
//! Issues HS256 signed JWT tokens for a subject and an issuer, keyed with a
//! base64url shared secret read from a file.

pub mod config;
pub mod error;
pub mod utility;

pub use config::IssuerConfig;
pub use error::TokenCreationError;
