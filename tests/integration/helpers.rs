//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use recruitflow_api::AppState;
use recruitflow_auth::identity::{Identity, IdentityOutcome, IdentityResolver};
use recruitflow_auth::profile::ProfileLookup;
use recruitflow_core::config::AppConfig;
use recruitflow_core::error::AppError;
use recruitflow_core::result::AppResult;
use recruitflow_entity::profile::{Profile, Role};

/// Identity resolver that trusts `x-test-user` / `x-test-role-hint`
/// headers, standing in for the external token provider.
pub struct TestIdentityResolver;

impl IdentityResolver for TestIdentityResolver {
    fn resolve(&self, headers: &HeaderMap) -> IdentityOutcome {
        let Some(user_id) = headers
            .get("x-test-user")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
        else {
            return IdentityOutcome::Anonymous;
        };

        let role_hint = headers
            .get("x-test-role-hint")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<Role>().ok());

        IdentityOutcome::Authenticated(Identity { user_id, role_hint })
    }
}

/// In-memory profile store; `failing` makes every lookup error.
pub struct FakeProfileLookup {
    profiles: HashMap<Uuid, Profile>,
    failing: bool,
}

#[async_trait]
impl ProfileLookup for FakeProfileLookup {
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        if self.failing {
            return Err(AppError::database("profile store unavailable"));
        }
        Ok(self.profiles.get(&user_id).cloned())
    }
}

/// Build the app around a real identity resolver and a fixed profile set.
pub fn build_app_with_resolver(
    resolver: Arc<dyn IdentityResolver>,
    profiles: HashMap<Uuid, Profile>,
) -> Router {
    let state = AppState::new(
        Arc::new(AppConfig::default()),
        resolver,
        Arc::new(FakeProfileLookup {
            profiles,
            failing: false,
        }),
    );
    recruitflow_api::app::build_app(state)
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    profiles: HashMap<Uuid, Profile>,
    failing: bool,
}

/// A decoded test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with an empty profile store.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            profiles: HashMap::new(),
            failing: false,
        }
        .rebuild()
    }

    /// Create a test application whose profile store always errors.
    pub fn with_failing_lookup() -> Self {
        Self {
            router: Router::new(),
            profiles: HashMap::new(),
            failing: true,
        }
        .rebuild()
    }

    /// Register a profile and return its user id.
    pub fn add_profile(mut self, role: Role, onboarding_completed: bool, user_id: Uuid) -> Self {
        self.profiles.insert(
            user_id,
            Profile {
                id: user_id,
                role,
                onboarding_completed,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        );
        self.rebuild()
    }

    fn rebuild(mut self) -> Self {
        let state = AppState::new(
            Arc::new(AppConfig::default()),
            Arc::new(TestIdentityResolver),
            Arc::new(FakeProfileLookup {
                profiles: self.profiles.clone(),
                failing: self.failing,
            }),
        );
        self.router = recruitflow_api::app::build_app(state);
        self
    }

    /// Issue a GET request, optionally as the given test user.
    pub async fn get(&self, path: &str, user: Option<Uuid>) -> TestResponse {
        self.get_with_hint(path, user, None).await
    }

    /// Issue a GET request with an explicit signup role hint.
    pub async fn get_with_hint(
        &self,
        path: &str,
        user: Option<Uuid>,
        role_hint: Option<Role>,
    ) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(user_id) = user {
            builder = builder.header("x-test-user", user_id.to_string());
        }
        if let Some(role) = role_hint {
            builder = builder.header("x-test-role-hint", role.as_str());
        }
        let request = builder.body(Body::empty()).expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            location,
            body,
        }
    }
}
