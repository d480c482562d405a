use super::*;
use crate::net::fake::{FakeSession, claims};

fn labels(variant: SessionVariant) -> [&'static str; 2] {
    variant.actions().map(|a| a.label)
}

// =============================================================
// Variant selection
// =============================================================

#[test]
fn claims_present_selects_authenticated() {
    assert_eq!(SessionVariant::from_claims(&Ok(Some(claims("u1")))), SessionVariant::Authenticated);
}

#[test]
fn claims_absent_or_failed_selects_anonymous() {
    assert_eq!(SessionVariant::from_claims(&Ok(None)), SessionVariant::Anonymous);
    assert_eq!(SessionVariant::from_claims(&Err(ServiceError::Status(500))), SessionVariant::Anonymous);
}

#[test]
fn authenticated_actions_link_dashboard_and_demo() {
    let actions = SessionVariant::Authenticated.actions();
    assert_eq!(labels(SessionVariant::Authenticated), ["Go dashboard", "Request a demo"]);
    assert_eq!(actions[0].href, "/dashboard");
    assert_eq!(actions[0].variant, ButtonVariant::Outline);
    assert_eq!(actions[1].href, "/");
    assert_eq!(actions[1].variant, ButtonVariant::Default);
}

#[test]
fn anonymous_actions_link_login_and_demo() {
    let actions = SessionVariant::Anonymous.actions();
    assert_eq!(labels(SessionVariant::Anonymous), ["Sign in", "Request a demo"]);
    assert_eq!(actions[0].href, "/auth/login");
    assert_eq!(actions[1].href, "/");
}

#[tokio::test]
async fn resolve_uses_claims_from_service() {
    let session = FakeSession::signed_in("u1");
    assert_eq!(resolve_session_variant(&session).await, SessionVariant::Authenticated);

    let session = FakeSession::anonymous();
    assert_eq!(resolve_session_variant(&session).await, SessionVariant::Anonymous);
}

#[tokio::test]
async fn resolve_fails_open_to_anonymous() {
    let session = FakeSession::failing(ServiceError::Network("offline".to_owned()));
    assert_eq!(resolve_session_variant(&session).await, SessionVariant::Anonymous);
}

// =============================================================
// Logout
// =============================================================

#[tokio::test]
async fn logout_signs_out_then_navigates_to_login() {
    let session = FakeSession::signed_in("u1");
    let mut visited = Vec::new();

    let outcome = logout(&session, |path: &str| visited.push(path.to_owned())).await;

    assert_eq!(outcome, Ok(()));
    assert_eq!(session.sign_out_calls(), 1);
    assert_eq!(visited, vec!["/auth/login".to_owned()]);
}

#[tokio::test]
async fn logout_navigates_even_when_sign_out_rejects() {
    let session = FakeSession::failing(ServiceError::Status(503));
    let mut visited = Vec::new();

    let outcome = logout(&session, |path: &str| visited.push(path.to_owned())).await;

    assert_eq!(outcome, Err(ServiceError::Status(503)));
    assert_eq!(session.sign_out_calls(), 1);
    assert_eq!(visited, vec!["/auth/login".to_owned()]);
}

#[test]
fn closures_act_as_navigators() {
    let mut visited = None;
    (|path: &str| visited = Some(path.to_owned())).navigate_to(routes::DASHBOARD);
    assert_eq!(visited.as_deref(), Some("/dashboard"));
}
