use super::*;
use time::macros::datetime;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_decodes_table_row() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ana@x.com",
        "first_name": "Ana",
        "last_name": "Lopez",
        "created_at": "2024-05-01T10:00:00Z",
        "role": "hr"
    }))
    .unwrap();

    assert_eq!(profile.id, "u1");
    assert_eq!(profile.first_name, "Ana");
    assert_eq!(profile.created_at, datetime!(2024-05-01 10:00 UTC));
    assert_eq!(profile.role, UserRole::Hr);
    assert_eq!(profile.full_name(), "Ana Lopez");
}

#[test]
fn user_profile_accepts_fractional_offset_timestamps() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ana@x.com",
        "first_name": "Ana",
        "last_name": "",
        "created_at": "2024-05-01T10:00:00.123456+00:00",
        "role": "admin"
    }))
    .unwrap();

    assert_eq!(profile.created_at.date(), datetime!(2024-05-01 0:00 UTC).date());
    assert_eq!(profile.full_name(), "Ana");
}

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_accepts_legacy_misspelling() {
    let role: UserRole = serde_json::from_str("\"emplyee\"").unwrap();
    assert_eq!(role, UserRole::Employee);
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"employee\"");
}

#[test]
fn user_role_rejects_unknown_values() {
    assert!(serde_json::from_str::<UserRole>("\"manager\"").is_err());
    assert!(serde_json::from_str::<UserRole>("\"Admin\"").is_err());
}

#[test]
fn user_role_as_str_matches_wire_name() {
    for role in [UserRole::Employee, UserRole::Hr, UserRole::Admin] {
        assert_eq!(serde_json::to_string(&role).unwrap(), format!("\"{}\"", role.as_str()));
    }
}

// =============================================================
// Claims
// =============================================================

#[test]
fn auth_user_converts_to_claims() {
    let user: AuthUser = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ana@x.com",
        "role": "authenticated",
        "aud": "authenticated"
    }))
    .unwrap();

    let claims = SessionClaims::from(user);
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.email.as_deref(), Some("ana@x.com"));
    assert_eq!(claims.role.as_deref(), Some("authenticated"));
}

#[test]
fn session_claims_tolerate_missing_optional_fields() {
    let claims: SessionClaims = serde_json::from_str(r#"{"sub":"u1"}"#).unwrap();
    assert_eq!(claims, SessionClaims { sub: "u1".to_owned(), email: None, role: None });
}
