use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use membership::auth::token::TokenIssuer;
use membership::contract::model::{NewMember, Role};
use membership::domain::service::MembershipService;
use membership::infra::storage::migrations::Migrator;
use membership::infra::storage::SeaOrmMembersRepository;

/// Create a fresh test database for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

async fn create_test_service() -> Arc<MembershipService> {
    let db = create_test_db().await;
    let repo = Arc::new(SeaOrmMembersRepository::new(db));
    let tokens = TokenIssuer::new("integration-secret", Duration::from_secs(3600));
    Arc::new(MembershipService::new(repo, tokens))
}

fn new_member(email: &str, role: &str) -> NewMember {
    NewMember {
        name: "Test Member".to_string(),
        email: email.to_string(),
        phone: "01000000000".to_string(),
        password: "longenough".to_string(),
        role: role.to_string(),
        department: "technical".to_string(),
    }
}

#[tokio::test]
async fn test_signup_and_login() -> Result<()> {
    let service = create_test_service().await;

    let session = service.signup(new_member("head@branch.org", "head")).await?;
    assert_eq!(session.member.role, Role::Head);
    assert_eq!(session.member.role_history.len(), 1);
    assert!(!session.token.is_empty());
    // stored hash is never the plaintext
    assert_ne!(session.member.password_hash, "longenough");

    let login = service.login("head@branch.org", "longenough").await?;
    assert_eq!(login.member.id, session.member.id);

    let claims = service.verify_token(&login.token)?;
    assert_eq!(claims.sub, session.member.id);
    assert_eq!(claims.role, "head");

    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_without_insert() -> Result<()> {
    let service = create_test_service().await;

    let first = service.signup(new_member("dup@branch.org", "volunteer")).await?;

    let result = service.signup(new_member("dup@branch.org", "head")).await;
    assert!(matches!(
        result,
        Err(membership::contract::error::MembershipError::EmailAlreadyExists { .. })
    ));

    // the original document is untouched
    let member = service.get_member(first.member.id).await?;
    assert_eq!(member.role, Role::Volunteer);

    Ok(())
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() -> Result<()> {
    let service = create_test_service().await;
    service.signup(new_member("v@branch.org", "volunteer")).await?;

    let result = service.login("v@branch.org", "wrong-password").await;
    assert!(matches!(
        result,
        Err(membership::contract::error::MembershipError::InvalidCredentials)
    ));

    let result = service.login("nobody@branch.org", "longenough").await;
    assert!(matches!(
        result,
        Err(membership::contract::error::MembershipError::InvalidCredentials)
    ));

    Ok(())
}

#[tokio::test]
async fn test_role_change_appends_history() -> Result<()> {
    let service = create_test_service().await;
    let session = service.signup(new_member("rise@branch.org", "volunteer")).await?;

    let member = service.change_role(session.member.id, Role::Head).await?;
    assert_eq!(member.role, Role::Head);
    assert_eq!(member.role_history.len(), 2);
    assert_eq!(member.role_history[0].role, Role::Volunteer);
    assert_eq!(member.role_history[1].role, Role::Head);

    // no-op change does not grow history
    let member = service.change_role(session.member.id, Role::Head).await?;
    assert_eq!(member.role_history.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_record_leave_is_idempotent() -> Result<()> {
    let service = create_test_service().await;
    let session = service.signup(new_member("leaver@branch.org", "volunteer")).await?;

    let left = service.record_leave(session.member.id).await?;
    let first_leave = left.left_at.expect("leave date set");

    let left_again = service.record_leave(session.member.id).await?;
    assert_eq!(left_again.left_at, Some(first_leave));

    Ok(())
}

// --- REST surface ---

async fn create_test_router() -> axum::Router {
    let service = create_test_service().await;
    membership::api::rest::routes::router(service)
}

#[tokio::test]
async fn test_rest_signup_returns_token() -> Result<()> {
    let router = create_test_router().await;

    let body = serde_json::json!({
        "name": "Rest User",
        "email": "rest@branch.org",
        "phoneNo": "0100",
        "password": "longenough",
        "role": "chairman",
        "department": "board"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/signup")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(json["success"], true);
    assert_eq!(json["role"], "chairman");
    assert!(json["userId"].is_string());
    assert!(json["token"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_rest_duplicate_signup_body() -> Result<()> {
    let router = create_test_router().await;

    let body = serde_json::json!({
        "name": "Dup",
        "email": "dup@branch.org",
        "phoneNo": "0100",
        "password": "longenough",
        "role": "head",
        "department": "technical"
    });
    let request = |b: &serde_json::Value| {
        Request::builder()
            .method("POST")
            .uri("/signup")
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap()
    };

    let response = router.clone().oneshot(request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router.oneshot(request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "email already exist");

    Ok(())
}

#[tokio::test]
async fn test_rest_login_and_me() -> Result<()> {
    let router = create_test_router().await;

    let signup = serde_json::json!({
        "name": "Me",
        "email": "me@branch.org",
        "phoneNo": "0100",
        "password": "longenough",
        "role": "head",
        "department": "technical"
    });
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signup")
                .header("content-type", "application/json")
                .body(Body::from(signup.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let login = serde_json::json!({"email": "me@branch.org", "password": "longenough"});
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(login.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)?;
    let token = json["token"].as_str().unwrap().to_string();

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/me")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(json["email"], "me@branch.org");
    assert_eq!(json["role"], "head");

    Ok(())
}

#[tokio::test]
async fn test_rest_bad_login_is_401() -> Result<()> {
    let router = create_test_router().await;

    let login = serde_json::json!({"email": "ghost@branch.org", "password": "whatever1"});
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(login.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
