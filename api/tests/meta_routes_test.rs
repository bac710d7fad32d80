//! Tests for the business meta endpoints

mod common;

use actix_web::test;
use sancho_api::create_app;
use sancho_core::services::apply_delivery_punishment;
use serde_json::json;

use common::{bearer, context};

#[actix_web::test]
async fn test_worker_reads_seeded_meta() {
    let ctx = context();
    let worker = ctx.worker_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/meta")
        .insert_header(bearer(&worker.access_token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({"deliveryPunishmentThreshold": 400, "deliveryPunishmentValue": 100})
    );
}

#[actix_web::test]
async fn test_customer_cannot_read_meta() {
    let ctx = context();
    let (_, customer_token) = ctx.customer_token().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/meta")
        .insert_header(bearer(&customer_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn test_admin_replaces_meta() {
    let ctx = context();
    let admin = ctx.admin_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/meta")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"deliveryPunishmentThreshold": 1000, "deliveryPunishmentValue": 250}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let meta = ctx.state.meta_cache.get();
    assert_eq!(meta.delivery_punishment_threshold, 1000);
    assert_eq!(meta.delivery_punishment_value, 250);

    // Pricing reads the published value
    let total = apply_delivery_punishment(&ctx.state.meta_cache, 1500, 1400).unwrap();
    assert_eq!(total, 1650);
}

#[actix_web::test]
async fn test_worker_cannot_replace_meta() {
    let ctx = context();
    let worker = ctx.worker_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/meta")
        .insert_header(bearer(&worker.access_token))
        .set_json(json!({"deliveryPunishmentThreshold": 0, "deliveryPunishmentValue": 0}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
    assert_eq!(ctx.state.meta_cache.get().delivery_punishment_threshold, 400);
}

#[actix_web::test]
async fn test_negative_values_are_rejected() {
    let ctx = context();
    let admin = ctx.admin_tokens().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/meta")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({"deliveryPunishmentThreshold": -1, "deliveryPunishmentValue": 100}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}
