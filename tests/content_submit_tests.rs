// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Submit flows: local validation, payload shapes, and one mutation at a
//! time.

mod common;

use std::time::Duration;

use axum::http::Method;
use common::{signed_in_app, spawn_mock_api};
use dignemi_admin::builder::{BlockUpdate, RouteBuilder};
use dignemi_admin::error::AppError;
use dignemi_admin::forms::{
    ActivityForm, RouteCreateForm, RouteMetadataForm, Tracked, SYNCED_LABEL, UNSAVED_LABEL,
};
use dignemi_admin::models::route::{BlockType, StepType};
use dignemi_admin::navigation::{Navigator, ACTIVITIES_PATH, ROUTES_PATH};
use serde_json::json;

fn filled_create_form() -> RouteCreateForm {
    let mut form = RouteCreateForm {
        title: "Camino hacia la Confianza".into(),
        topic: "ansiedad".into(),
        intro: "Una ruta de siete días para reconocer tus fortalezas.".into(),
        sources: vec!["https://example.org".into()],
        ..Default::default()
    };
    form.steps[0].title = "Reconociendo tus Fortalezas".into();
    form.steps[0].step_type = StepType::ReflectionExercise;
    form.steps[0].content.instruction = Some("Escribe tres cosas que haces bien.".into());
    form
}

fn metadata() -> RouteMetadataForm {
    RouteMetadataForm {
        title: "Ruta del Buen Dormir".into(),
        slug: "ruta-del-buen-dormir".into(),
        topic: "sueno".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_route_create_posts_exactly_once() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);

    let created = app
        .content
        .submit_route_form(&filled_create_form())
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("c-1"));

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/content");

    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["type"], "route");
    assert_eq!(body["body"]["steps"].as_array().unwrap().len(), 1);
    assert_eq!(body["body"]["version"], "1.0");
    assert_eq!(body["title"], "Camino hacia la Confianza");
    assert_eq!(body["topic"], "ansiedad");
    assert_eq!(body["sources"], json!(["https://example.org"]));
    assert_eq!(body["body"]["steps"][0]["type"], "reflection_exercise");
    assert_eq!(app.navigator.current_path(), ROUTES_PATH);
}

#[tokio::test]
async fn test_empty_sources_never_reach_network() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);

    let mut form = filled_create_form();
    form.sources.clear();
    let err = app.content.submit_route_form(&form).await.unwrap_err();

    match &err {
        AppError::Validation(report) => assert!(report.has("sources")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(err.is_local());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_blank_source_row_fails_validation() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);

    let mut form = filled_create_form();
    form.add_source();
    // A blank row fails validation outright
    assert!(app.content.submit_route_form(&form).await.is_err());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_second_submit_while_pending_is_refused() {
    let api = spawn_mock_api().await;
    api.delay(Duration::from_millis(200));
    let (app, _storage) = signed_in_app(&api.base_url);
    let form = filled_create_form();

    let (first, second) = tokio::join!(
        app.content.submit_route_form(&form),
        app.content.submit_route_form(&form)
    );
    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::SubmitPending)));
    assert_eq!(api.requests().len(), 1);

    // Gate re-opens after completion
    assert!(!app.content.gate().is_pending());
    app.content.submit_route_form(&form).await.unwrap();
    assert_eq!(api.requests().len(), 2);
}

#[tokio::test]
async fn test_gate_reopens_after_failure() {
    let api = spawn_mock_api().await;
    api.force_status(500, json!({ "message": "boom" }));
    let (app, _storage) = signed_in_app(&api.base_url);

    let err = app
        .content
        .submit_route_form(&filled_create_form())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Api { status: 500, .. }));
    assert!(!app.content.gate().is_pending());
}

#[tokio::test]
async fn test_save_program_creates_then_patches() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);

    let mut builder = RouteBuilder::new();
    builder.add_block(BlockType::Lesson);
    builder.add_day();
    builder.add_block(BlockType::Activity);
    assert!(builder.is_dirty());

    let form = metadata();
    app.content.save_program(None, &form, &mut builder).await.unwrap();
    assert!(!builder.is_dirty());

    builder.rename_active_day("Práctica nocturna");
    app.content
        .save_program(Some("r-9"), &form, &mut builder)
        .await
        .unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::POST);
    let created = requests[0].body.as_ref().unwrap();
    assert_eq!(created["type"], "route");
    assert_eq!(created["body"]["days"][1]["day_number"], 2);
    assert_eq!(created["body"]["days"][1]["blocks"][0]["type"], "activity");

    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].path, "/content/r-9");
    let patch = requests[1].body.as_ref().unwrap();
    assert_eq!(patch["body"]["days"][1]["title"], "Práctica nocturna");
    assert!(patch.get("type").is_none());
}

#[tokio::test]
async fn test_invalid_program_focuses_day_without_request() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);

    let mut builder = RouteBuilder::new();
    builder.add_day();
    let id = builder.add_block(BlockType::Reflection);
    builder.update_block(&id, BlockUpdate::Title(String::new()));
    builder.select_day(0);

    let err = app
        .content
        .save_program(None, &metadata(), &mut builder)
        .await
        .unwrap_err();
    match err {
        AppError::Validation(report) => assert!(report.has("days[1].blocks[0].title")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(builder.active_index(), 1);
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_save_activity_posts_exercise() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);

    let mut form = Tracked::new(ActivityForm::default());
    {
        let draft = form.get_mut();
        draft.title = "Respiración Cuadrada".into();
        draft.slug = "respiracion-cuadrada".into();
        draft.intro_text = "Respira en cuatro tiempos para calmarte.".into();
    }
    assert_eq!(form.status_label(), UNSAVED_LABEL);

    app.content.save_activity(&mut form).await.unwrap();

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["type"], "exercise");
    assert_eq!(body["title"], "Respiración Cuadrada");
    assert_eq!(app.navigator.current_path(), ACTIVITIES_PATH);
    assert!(!form.is_dirty());
    assert_eq!(form.status_label(), SYNCED_LABEL);
}

#[tokio::test]
async fn test_rejected_activity_save_stays_dirty() {
    let api = spawn_mock_api().await;
    let (app, _storage) = signed_in_app(&api.base_url);
    api.force_status(409, json!({ "message": "Slug duplicado" }));

    let mut form = Tracked::new(ActivityForm::default());
    {
        let draft = form.get_mut();
        draft.title = "Respiración Cuadrada".into();
        draft.slug = "respiracion-cuadrada".into();
        draft.intro_text = "Respira en cuatro tiempos para calmarte.".into();
    }

    let err = app.content.save_activity(&mut form).await.unwrap_err();
    assert_eq!(err.alert_message(), "Slug duplicado");
    assert!(form.is_dirty());
}

#[tokio::test]
async fn test_load_program_rejects_step_routes() {
    let api = spawn_mock_api().await;
    api.respond(
        "GET /content/routes/r-1",
        json!({
            "id": "r-1",
            "type": "route",
            "title": "Camino hacia la Confianza",
            "body": {
                "version": "1.0",
                "intro": "Introducción de la ruta",
                "steps": []
            }
        }),
    );
    let (app, _storage) = signed_in_app(&api.base_url);

    let err = app.content.load_program("r-1").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
