// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Utility module for secret handling and token signing

pub mod jwt_token;
pub mod secret_file;

// Re-exports for use in other modules
pub use jwt_token::{issue_token, TokenClaims, TokenCreationResult, TokenCreator};
pub use secret_file::{decode_secret, load_secret, read_secret};
