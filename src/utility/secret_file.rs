// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Shared secret loading
//!
//! The secret lives in a plain text file as a base64url string. The first
//! line whose trimmed length is greater than one byte is taken as the secret,
//! everything after it is ignored.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::TokenCreationError;

/// base64url engine for the secret: padding optional, trailing bits tolerated
const SECRET_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Read the raw, still encoded, secret from `path`
///
/// # Errors
///
/// * [`TokenCreationError::SecretFileUnreadable`] if the file cannot be opened
/// * [`TokenCreationError::SecretFileRead`] if reading fails part way
/// * [`TokenCreationError::NoSecretInFile`] if no line qualifies
pub fn read_secret<P: AsRef<Path>>(path: P) -> Result<String, TokenCreationError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TokenCreationError::SecretFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Reading secret from {}", path.display());

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| TokenCreationError::SecretFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        // Lines of a single character are skipped as well as blank ones
        let trimmed = line.trim();
        if trimmed.len() > 1 {
            return Ok(trimmed.to_string());
        }
    }

    Err(TokenCreationError::NoSecretInFile {
        path: path.to_path_buf(),
    })
}

/// Decode a base64url secret into the HMAC key bytes
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, TokenCreationError> {
    let secret = SECRET_ENGINE.decode(encoded)?;
    if secret.is_empty() {
        return Err(TokenCreationError::EmptySecret);
    }
    Ok(secret)
}

/// Read and decode the secret stored in `path`
pub fn load_secret<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, TokenCreationError> {
    let encoded = read_secret(path)?;
    decode_secret(&encoded)
}
