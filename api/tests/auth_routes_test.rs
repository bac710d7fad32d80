//! End-to-end tests for the authentication routes

mod common;

use actix_web::test;
use sancho_api::create_app;
use sancho_core::{Role, SessionRepository};
use serde_json::json;

use common::{bearer, context, context_with, ADMIN_LOGIN, PASSWORD, WORKER_LOGIN};

#[actix_web::test]
async fn test_health_carries_request_id() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let request_id = resp.headers().get("x-request-id").expect("request id header");
    assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
}

#[actix_web::test]
async fn test_admin_register_then_login() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/register")
        .set_json(json!({"login": ADMIN_LOGIN, "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let user_id = body["userId"].as_str().unwrap().to_owned();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/login")
        .set_json(json!({"login": ADMIN_LOGIN, "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let refresh_token = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "refresh-token")
        .map(|cookie| cookie.value().to_owned())
        .expect("refresh cookie");
    let body: serde_json::Value = test::read_body_json(resp).await;
    let identity = ctx
        .tokens
        .validate(body["accessToken"].as_str().unwrap())
        .unwrap();
    assert_eq!(identity.user_id, user_id);
    assert_eq!(identity.role, Role::Admin);

    let session = ctx.sessions.find_by_user_id(&user_id).await.unwrap().unwrap();
    assert_eq!(session.refresh_token, refresh_token);
}

#[actix_web::test]
async fn test_admin_registration_disabled() {
    let ctx = context_with(|config| config.allow_admin_registration = false);
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/register")
        .set_json(json!({"login": ADMIN_LOGIN, "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 403);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "REGISTRATION_DISABLED");
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_login() {
    let ctx = context();
    ctx.admin_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/login")
        .set_json(json!({"login": ADMIN_LOGIN, "password": "wrong-password"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/login")
        .set_json(json!({"login": "nobody", "password": PASSWORD}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    // An admin cannot use the worker login
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/worker/login")
        .set_json(json!({"login": ADMIN_LOGIN, "password": PASSWORD}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_invalid_body_is_bad_request() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/login")
        .set_json(json!({"login": ADMIN_LOGIN, "password": "123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/admin/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_worker_registration_requires_admin() {
    let ctx = context();
    let admin = ctx.admin_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let payload = json!({"login": WORKER_LOGIN, "password": PASSWORD, "name": "Cook"});

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/worker/register")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/worker/register")
        .insert_header(bearer(&admin.access_token))
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/worker/login")
        .set_json(json!({"login": WORKER_LOGIN, "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let identity = ctx.tokens.validate(body["accessToken"].as_str().unwrap()).unwrap();
    assert_eq!(identity.role, Role::Worker);

    // A worker may not create further workers
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/worker/register")
        .insert_header(bearer(body["accessToken"].as_str().unwrap()))
        .set_json(json!({"login": "helper", "password": PASSWORD, "name": "Helper"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn test_duplicate_worker_login_conflicts() {
    let ctx = context();
    let admin = ctx.admin_tokens().await;
    ctx.worker_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/worker/register")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"login": WORKER_LOGIN, "password": PASSWORD, "name": "Other"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "USER_ALREADY_EXISTS");
}

#[actix_web::test]
async fn test_customer_register_and_duplicate_phone() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/customer/register")
        .set_json(json!({"phoneNumber": "+79990001122", "name": "Anna"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["userId"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/customer/register")
        .set_json(json!({"phoneNumber": "+79990001122"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/customer/register")
        .set_json(json!({"phoneNumber": "+7 999 000 11"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_me_and_logout() {
    let ctx = context();
    let pair = ctx.worker_tokens().await;
    let user_id = ctx.user_id_of(WORKER_LOGIN).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer(&pair.access_token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"userId": user_id, "role": "worker"}));

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&pair.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let cleared = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "refresh-token")
        .expect("removal cookie");
    assert_eq!(cleared.value(), "");

    assert!(ctx.sessions.find_by_user_id(&user_id).await.unwrap().is_none());

    // The old refresh token no longer yields a session
    let err = ctx
        .state
        .auth_service
        .refresh(&user_id, &pair.refresh_token)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "session not found");
}

#[actix_web::test]
async fn test_logout_rejects_unknown_role() {
    let ctx = context();
    let token = ctx
        .tokens
        .generate_pair(&sancho_core::UserIdentity::new("ghost", Role::Unknown))
        .unwrap()
        .access_token;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn test_me_for_customer() {
    let ctx = context();
    let (_, customer_token) = ctx.customer_token().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer(&customer_token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["role"], "customer");
}
