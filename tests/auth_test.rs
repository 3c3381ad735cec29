//! Tests for the Supabase JWT claim helpers.
//!
//! Signature validation goes through the live JWKS endpoint and is not
//! exercised here; these tests cover the claim extraction logic the auth
//! middleware depends on.
//!
//! Run with: `cargo test --test auth_test`

use uuid::Uuid;

use creatorlink_backend::auth::jwt::{Claims, UserMetadata};

fn base_claims(sub: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        exp: 2_000_000_000,
        iat: Some(1_900_000_000),
        iss: Some("https://example.supabase.co/auth/v1".to_string()),
        email: None,
        role: Some("authenticated".to_string()),
        user_metadata: None,
    }
}

#[test]
fn test_user_id_parses_sub_claim() {
    let user_id = Uuid::new_v4();
    let claims = base_claims(&user_id.to_string());

    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn test_user_id_rejects_malformed_sub() {
    let claims = base_claims("not-a-uuid");

    let err = claims.user_id().unwrap_err();
    assert!(err.contains("Invalid UUID"));
}

#[test]
fn test_email_prefers_top_level_claim() {
    let mut claims = base_claims(&Uuid::new_v4().to_string());
    claims.email = Some("top@example.com".to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: None,
        name: None,
        email: Some("meta@example.com".to_string()),
        email_verified: Some(true),
    });

    assert_eq!(claims.user_email().unwrap(), "top@example.com");
}

#[test]
fn test_email_falls_back_to_metadata() {
    let mut claims = base_claims(&Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: None,
        name: None,
        email: Some("meta@example.com".to_string()),
        email_verified: Some(true),
    });

    assert_eq!(claims.user_email().unwrap(), "meta@example.com");
}

#[test]
fn test_full_name_prefers_full_name_over_name() {
    let mut claims = base_claims(&Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: Some("Alice Smith".to_string()),
        name: Some("alice".to_string()),
        email: None,
        email_verified: None,
    });

    assert_eq!(claims.full_name().unwrap(), "Alice Smith");
}

#[test]
fn test_full_name_falls_back_to_name() {
    let mut claims = base_claims(&Uuid::new_v4().to_string());
    claims.user_metadata = Some(UserMetadata {
        full_name: None,
        name: Some("alice".to_string()),
        email: None,
        email_verified: None,
    });

    assert_eq!(claims.full_name().unwrap(), "alice");
}

#[test]
fn test_helpers_with_missing_metadata() {
    let mut claims = base_claims(&Uuid::new_v4().to_string());
    claims.email = Some("bare@example.com".to_string());

    // Should fall back to top-level email.
    assert_eq!(claims.user_email().unwrap(), "bare@example.com");
    // No metadata → None.
    assert!(claims.full_name().is_none());
}

#[test]
fn test_no_email_anywhere_is_none() {
    let claims = base_claims(&Uuid::new_v4().to_string());
    assert!(claims.user_email().is_none());
}
