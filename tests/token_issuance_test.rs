// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;
use std::fs;
use std::sync::Once;
use tempfile::TempDir;
use token_issuer::utility::jwt_token::{TokenClaims, UPDATED_AT};
use token_issuer::utility::issue_token;
use token_issuer::{IssuerConfig, TokenCreationError};

static INIT: Once = Once::new();

/// Setup logger for tests
fn setup() {
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .init();
    });
}

/// Writes a secret file in a fresh temporary directory
fn config_with_secret(content: &str) -> (TempDir, IssuerConfig) {
    let temp_dir = TempDir::new().unwrap();
    let secret_path = temp_dir.path().join("secret.dat");
    fs::write(&secret_path, content).unwrap();
    let config = IssuerConfig::new("user-42", "cluster-1", Some(secret_path)).unwrap();
    (temp_dir, config)
}

fn segment_json(segment: &str) -> Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_issue_token_verifies_and_carries_claims() {
    setup();
    let (_temp_dir, config) = config_with_secret("c2VjcmV0a2V5\n");

    let result = issue_token(&config).unwrap();

    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.set_issuer(&["cluster-1"]);

    let decoded = decode::<TokenClaims>(
        &result.token,
        &DecodingKey::from_secret(b"secretkey"),
        &validation,
    )
    .unwrap();

    assert_eq!(decoded.claims.sub, "user-42");
    assert_eq!(decoded.claims.iss, "cluster-1");
    assert_eq!(decoded.claims.updated_at, UPDATED_AT);
    assert_eq!(decoded.claims.jti, result.claims.jti);
}

#[test]
fn test_token_segments_round_trip() {
    setup();
    let (_temp_dir, config) = config_with_secret("# \n\nc2VjcmV0a2V5\n");

    let result = issue_token(&config).unwrap();
    let segments: Vec<&str> = result.token.split('.').collect();
    assert_eq!(segments.len(), 3);

    let header = segment_json(segments[0]);
    assert_eq!(header["alg"], "HS256");
    assert_eq!(header["typ"], "JWT");

    let payload = segment_json(segments[1]);
    let object = payload.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["iat", "iss", "jti", "sub", "updated_at"]);

    assert!(uuid::Uuid::parse_str(payload["jti"].as_str().unwrap()).is_ok());
    assert!(payload["iat"].is_i64());
    assert_eq!(payload["updated_at"].as_i64(), Some(1204824961000));
    assert_eq!(payload["sub"], "user-42");
    assert_eq!(payload["iss"], "cluster-1");
}

#[test]
fn test_jti_differs_between_issuances() {
    setup();
    let (_temp_dir, config) = config_with_secret("c2VjcmV0a2V5\n");

    let first = issue_token(&config).unwrap();
    let second = issue_token(&config).unwrap();
    assert_ne!(first.claims.jti, second.claims.jti);
    assert_ne!(first.token, second.token);
}

#[test]
fn test_secret_file_without_qualifying_line() {
    setup();
    let (_temp_dir, config) = config_with_secret("\n \na\n\t\n");

    let err = issue_token(&config).unwrap_err();
    assert!(matches!(err, TokenCreationError::NoSecretInFile { .. }));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_secret_not_base64url() {
    setup();
    let (_temp_dir, config) = config_with_secret("c2Vjc!V0a2V5\n");

    let err = issue_token(&config).unwrap_err();
    assert!(matches!(err, TokenCreationError::SecretDecoding { .. }));
}

#[test]
fn test_missing_secret_file() {
    setup();
    let temp_dir = TempDir::new().unwrap();
    let config =
        IssuerConfig::new("user-42", "cluster-1", Some(temp_dir.path().join("absent.dat")))
            .unwrap();

    let err = issue_token(&config).unwrap_err();
    assert!(matches!(err, TokenCreationError::SecretFileUnreadable { .. }));
    assert!(err.shows_usage());
}
