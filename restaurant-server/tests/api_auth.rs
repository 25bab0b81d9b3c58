mod common;

use chrono::Utc;
use common::TestApp;
use http::{Method, StatusCode};
use restaurant_server::auth::Claims;
use serde_json::json;

#[tokio::test]
async fn test_sign_up_returns_tokens_without_password() {
    let app = TestApp::new().await;
    let body = app.sign_up("grace@example.com", "555-0100").await;

    assert_eq!(body["email"], "grace@example.com");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["refresh_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body.get("password").is_none());
    assert_eq!(body["_id"], body["user_id"]);
}

#[tokio::test]
async fn test_duplicate_email_and_phone_rejected() {
    let app = TestApp::new().await;
    let first = app.sign_up("grace@example.com", "555-0100").await;
    let token = first["token"].as_str().unwrap();

    let (status, body) = app
        .request(
            Method::POST,
            "/users/signup",
            None,
            Some(json!({
                "first_name": "Other",
                "last_name": "Person",
                "email": "grace@example.com",
                "password": "another1",
                "phone": "555-0199",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2001);

    let (status, body) = app
        .request(
            Method::POST,
            "/users/signup",
            None,
            Some(json!({
                "first_name": "Other",
                "last_name": "Person",
                "email": "other@example.com",
                "password": "another1",
                "phone": "555-0100",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2002);

    let (status, body) = app.get("/users", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_sign_up_validation_lists_fields() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/users/signup",
            None,
            Some(json!({"first_name": "G", "email": "nope", "password": "1"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    let fields = body["details"]["fields"].as_array().unwrap();
    for field in ["email", "first_name", "last_name", "password", "phone"] {
        assert!(fields.iter().any(|f| f == field), "missing {field}");
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.sign_up("grace@example.com", "555-0100").await;

    let (wrong_status, wrong_body) = app
        .request(
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "grace@example.com", "password": "fortran"})),
        )
        .await;
    let (unknown_status, unknown_body) = app
        .request(
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "nobody@example.com", "password": "cobol1959"})),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["message"], "login or password is incorrect");
}

#[tokio::test]
async fn test_login_rejects_empty_credentials() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "", "password": ""})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["fields"], json!(["email", "password"]));
}

#[tokio::test]
async fn test_login_rotates_stored_tokens() {
    let app = TestApp::new().await;
    let signed_up = app.sign_up("grace@example.com", "555-0100").await;

    // Token timestamps have second resolution
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let (status, body) = app
        .request(
            Method::POST,
            "/users/login",
            None,
            Some(json!({"email": "grace@example.com", "password": "cobol1959"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["token"], signed_up["token"]);
    assert_eq!(body["user_id"], signed_up["user_id"]);

    let (status, _) = app.get("/foods", body["token"].as_str().unwrap()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token() {
    let app = TestApp::new().await;
    let (status, body) = app.request(Method::GET, "/foods", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "no authorization header provided");
}

#[tokio::test]
async fn test_garbage_token() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/menus", "not.a.token").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
    assert_eq!(body["message"], "token invalid");
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::new().await;
    let past = Utc::now().timestamp() - 60;
    let token = app
        .state
        .jwt_service()
        .sign(&Claims {
            email: "grace@example.com".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            uid: "u1".into(),
            token_type: "access".into(),
            exp: past,
            iat: past - 3600,
        })
        .unwrap();

    let (status, body) = app.get("/tables", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1003);
    assert_eq!(body["message"], "token is expired");
}

#[tokio::test]
async fn test_refresh_token_cannot_authenticate() {
    let app = TestApp::new().await;
    let body = app.sign_up("grace@example.com", "555-0100").await;
    let refresh = body["refresh_token"].as_str().unwrap();

    let (status, body) = app.get("/orders", refresh).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn test_token_signed_with_other_secret() {
    let app = TestApp::new().await;
    let foreign = restaurant_server::JwtService::with_config(
        restaurant_server::auth::JwtConfig::with_secret("some-other-secret"),
    );
    let pair = foreign
        .issue_tokens(&restaurant_server::auth::TokenSubject {
            email: "grace@example.com",
            first_name: "Grace",
            last_name: "Hopper",
            uid: "u1",
        })
        .unwrap();

    let (status, body) = app.get("/notes", &pair.token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn test_public_user_reads_hide_credentials() {
    let app = TestApp::new().await;
    let body = app.sign_up("grace@example.com", "555-0100").await;
    let user_id = body["user_id"].as_str().unwrap();
    let token = body["token"].as_str().unwrap();

    let (status, user) = app
        .request(Method::GET, &format!("/users/{user_id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "grace@example.com");
    assert!(user.get("password").is_none());
    assert!(user.get("token").is_none());

    let (status, list) = app.get("/users", token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list["data"][0].get("password").is_none());
    assert!(list["data"][0].get("refresh_token").is_none());
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(Method::GET, "/users/0000000000000000", None, None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_logout() {
    let app = TestApp::new().await;
    let token = app.token().await;

    let (status, body) = app
        .request(Method::POST, "/users/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully logged out");

    let (status, _) = app.request(Method::POST, "/users/logout", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;
    let (status, body) = app.request(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
