//! End-to-end tests for the Usuario endpoint set, driving the router over an
//! in-memory SQLite database.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::Service;

use usuarios::config::AppConfig;
use usuarios::infrastructure::database::migrator::Migrator;
use usuarios::server::build_router;
use usuarios::{init_database, DatabaseConfig};

async fn app() -> Router {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    build_router(db, &AppConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let mut svc = app.clone().into_service();
    svc.call(req).await.unwrap()
}

async fn body_json(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, nombre: &str, apellidos: &str) -> Value {
    let resp = send(
        app,
        "POST",
        "/api/usuario",
        Some(json!({"nombre": nombre, "apellidos": apellidos})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn create_then_retrieve_returns_equivalent_record() {
    let app = app().await;
    let created = create(&app, "Ana", "García López").await;

    assert_eq!(created["nombre"], "Ana");
    assert_eq!(created["apellidos"], "García López");

    let id = created["id"].as_i64().unwrap();
    let resp = send(&app, "GET", &format!("/api/usuario/{}", id), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn list_returns_every_persisted_record() {
    let app = app().await;

    let resp = send(&app, "GET", "/api/usuario", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    let a = create(&app, "Ana", "García").await;
    let b = create(&app, "Luis", "Pérez").await;

    let resp = send(&app, "GET", "/api/usuario/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([a, b]));
}

#[tokio::test]
async fn delete_then_retrieve_is_not_found() {
    let app = app().await;
    let created = create(&app, "Ana", "García").await;
    let uri = format!("/api/usuario/{}", created["id"]);

    let resp = send(&app, "DELETE", &uri, None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, "GET", &uri, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"detail": "Not found."}));

    let resp = send(&app, "DELETE", &uri, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_is_idempotent() {
    let app = app().await;
    let created = create(&app, "Ana", "García").await;
    let uri = format!("/api/usuario/{}/", created["id"]);
    let payload = json!({"id": created["id"], "nombre": "Ana María", "apellidos": "García Ruiz"});

    let first = send(&app, "PUT", &uri, Some(payload.clone())).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first = body_json(first).await;

    let second = send(&app, "PUT", &uri, Some(payload)).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await, first);

    let stored = send(&app, "GET", &uri, None).await;
    assert_eq!(body_json(stored).await, first);
    assert_eq!(first["nombre"], "Ana María");
}

#[tokio::test]
async fn patch_changes_only_given_fields() {
    let app = app().await;
    let created = create(&app, "Ana", "García").await;
    let uri = format!("/api/usuario/{}", created["id"]);

    let resp = send(&app, "PATCH", &uri, Some(json!({"apellidos": "Ruiz"}))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["nombre"], "Ana");
    assert_eq!(json["apellidos"], "Ruiz");
}

#[tokio::test]
async fn create_ignores_client_supplied_id_and_trims() {
    let app = app().await;
    let resp = send(
        &app,
        "POST",
        "/api/usuario",
        Some(json!({"id": "", "nombre": "  Ana ", "apellidos": "García "})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["nombre"], "Ana");
    assert_eq!(json["apellidos"], "García");
}

#[tokio::test]
async fn invalid_payloads_are_rejected() {
    let app = app().await;

    let resp = send(&app, "POST", "/api/usuario", Some(json!({"nombre": "Ana"}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["detail"], "Invalid input.");
    assert_eq!(json["errors"]["apellidos"], json!(["This field is required."]));
    assert!(json["errors"]["nombre"].is_null());

    let resp = send(
        &app,
        "POST",
        "/api/usuario",
        Some(json!({"nombre": null, "apellidos": "García"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["errors"]["nombre"], json!(["This field may not be null."]));

    let resp = send(
        &app,
        "POST",
        "/api/usuario",
        Some(json!({"nombre": " ", "apellidos": "x".repeat(151)})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["errors"]["nombre"], json!(["This field may not be blank."]));
    assert_eq!(
        json["errors"]["apellidos"],
        json!(["Ensure this field has no more than 150 characters."])
    );

    let resp = send(&app, "GET", "/api/usuario", None).await;
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn missing_or_malformed_ids_are_not_found() {
    let app = app().await;

    let resp = send(&app, "GET", "/api/usuario/999", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, "GET", "/api/usuario/abc", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(
        &app,
        "PUT",
        "/api/usuario/999",
        Some(json!({"nombre": "Ana", "apellidos": "García"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_record_wins_over_invalid_body() {
    let app = app().await;

    for (method, uri, body) in [
        ("PUT", "/api/usuario/999", json!({})),
        ("PUT", "/api/usuario/abc", json!({})),
        ("PATCH", "/api/usuario/999", json!({"nombre": ""})),
        ("PATCH", "/api/usuario/999/", json!({"nombre": null})),
    ] {
        let resp = send(&app, method, uri, Some(body)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body_json(resp).await, json!({"detail": "Not found."}));
    }
}

#[tokio::test]
async fn invalid_body_on_existing_record_is_rejected() {
    let app = app().await;
    let created = create(&app, "Ana", "G").await;
    let uri = format!("/api/usuario/{}", created["id"]);

    let resp = send(&app, "PUT", &uri, Some(json!({}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["errors"]["nombre"], json!(["This field is required."]));
    assert_eq!(json["errors"]["apellidos"], json!(["This field is required."]));

    let resp = send(&app, "PATCH", &uri, Some(json!({"nombre": null}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["errors"]["nombre"], json!(["This field may not be null."]));

    let stored = send(&app, "GET", &uri, None).await;
    assert_eq!(body_json(stored).await, created);
}

#[tokio::test]
async fn health_reports_database_and_request_id_is_echoed() {
    let app = app().await;

    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let mut svc = app.clone().into_service();
    let resp = svc.call(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-request-id"], "abc-123");

    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"]["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_usuario_paths() {
    let app = app().await;
    let resp = send(&app, "GET", "/api-doc/openapi.json", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["paths"]["/api/usuario"].is_object());
    assert!(json["paths"]["/api/usuario/{id}"]["patch"].is_object());
}
