//! Gate behavior through the full router.

use http::StatusCode;
use uuid::Uuid;

use recruitflow_entity::profile::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_anonymous_public_page_is_allowed() {
    let app = TestApp::new();

    let response = app.get("/jobs/42", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], "job");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_anonymous_protected_path_redirects_to_login() {
    let app = TestApp::new();

    let response = app.get("/app/applicant/profile", None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location.as_deref(),
        Some("/login?next=%2Fapp%2Fapplicant%2Fprofile")
    );
}

#[tokio::test]
async fn test_active_user_passes_through_with_gate_context() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Applicant, true, user_id);

    let response = app.get("/app/applicant", Some(user_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "applicant");
    assert_eq!(response.body["user_id"], user_id.to_string());
}

#[tokio::test]
async fn test_active_user_is_bounced_from_entry_points() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Employer, true, user_id);

    let response = app.get("/", Some(user_id)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/app/org/employer"));
}

#[tokio::test]
async fn test_cross_role_access_redirects_to_own_dashboard() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Employer, true, user_id);

    let response = app.get("/app/org/recruiter", Some(user_id)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/app/org/employer"));
}

#[tokio::test]
async fn test_onboarding_user_is_funneled_to_setup() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Applicant, false, user_id);

    let response = app.get("/app/org", Some(user_id)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/app/setup/applicant"));
}

#[tokio::test]
async fn test_onboarding_user_reaches_own_setup_page() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Applicant, false, user_id);

    let response = app.get("/app/setup/applicant", Some(user_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], "applicant_setup");
}

#[tokio::test]
async fn test_org_family_shares_role_selection() {
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Recruiter, false, user_id);

    let response = app.get("/app/org/select", Some(user_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], "role_selection");
}

#[tokio::test]
async fn test_profile_less_user_with_hint_routes_to_setup() {
    let app = TestApp::new();

    let response = app
        .get_with_hint("/app/applicant", Some(Uuid::new_v4()), Some(Role::Applicant))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/app/setup/applicant"));
}

#[tokio::test]
async fn test_profile_less_user_without_hint_is_sent_to_login() {
    let app = TestApp::new();

    let response = app.get("/app/applicant", Some(Uuid::new_v4())).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location.as_deref(),
        Some("/login?next=%2Fapp%2Fapplicant")
    );
}

#[tokio::test]
async fn test_lookup_failure_fails_closed() {
    let app = TestApp::with_failing_lookup();

    let response = app.get("/app/admin", Some(Uuid::new_v4())).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location.as_deref(),
        Some("/login?next=%2Fapp%2Fadmin")
    );
}

#[tokio::test]
async fn test_lookup_failure_still_allows_public_pages() {
    let app = TestApp::with_failing_lookup();

    let response = app.get("/login", Some(Uuid::new_v4())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], "login");
}

#[tokio::test]
async fn test_redirect_target_is_allowed_on_follow() {
    // Following the cross-role redirect must land on an allowed page.
    let user_id = Uuid::new_v4();
    let app = TestApp::new().add_profile(Role::Admin, true, user_id);

    let first = app.get("/app/org/employer", Some(user_id)).await;
    assert_eq!(first.status, StatusCode::TEMPORARY_REDIRECT);
    let target = first.location.expect("redirect target");

    let second = app.get(&target, Some(user_id)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["page"], "admin_dashboard");
}

#[tokio::test]
async fn test_unclassified_path_denied_for_anonymous() {
    let app = TestApp::new();

    let response = app.get("/internal/metrics", None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location.as_deref(),
        Some("/login?next=%2Finternal%2Fmetrics")
    );
}
