//! API integration tests, run in-process against the router

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use elibrary_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{Services, SnapshotStore},
    AppState,
};

/// Router over fresh, empty registries with snapshots in a temp directory
fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let services = Services::new(Repository::new(), SnapshotStore::new(dir.path()));
    let state = AppState::new(AppConfig::default(), services);
    (api::create_router(state), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
}

fn book(id: i32, title: &str) -> Value {
    json!({
        "id": id,
        "titulo": title,
        "autor": "Epicteto",
        "genero": "Filosofía"
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_landing_pages() {
    let (app, _dir) = test_app();
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).starts_with("Bienvenido"));

    let response = app
        .oneshot(Request::get("/away").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_book_lookup_by_id() {
    let (app, _dir) = test_app();
    let (status, created) = post(
        &app,
        "/api/v1/books",
        json!({
            "id": 1,
            "titulo": "Cartas de un Estoico",
            "autor": "Lucio A. Séneca",
            "genero": "Filosofía"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["titulo"], "Cartas de un Estoico");

    let (status, found) = get(&app, "/api/v1/books/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    let (status, body) = get(&app, "/api/v1/books/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_invalid_administrator_is_rejected() {
    let (app, _dir) = test_app();
    let (_, before) = get(&app, "/api/v1/administrators").await;

    let (status, body) = post(
        &app,
        "/api/v1/administrators",
        json!({ "id": 0, "nombre": "", "mail": "", "contrasena": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid administrator data");

    let (_, after) = get(&app, "/api/v1/administrators").await;
    assert_eq!(before, after);
    assert_eq!(after.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_search_by_title_returns_every_match_in_order() {
    let (app, _dir) = test_app();
    post(&app, "/api/v1/books", book(3, "Manual de Epicteto")).await;
    post(&app, "/api/v1/books", book(4, "Meditaciones")).await;
    post(&app, "/api/v1/books", book(8, "Manual de Epicteto")).await;

    let (status, body) = get(&app, "/api/v1/books/search?title=Manual%20de%20Epicteto").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 8]);

    let (status, _) = get(&app, "/api/v1/books/search?titulo=manual%20de%20epicteto").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_book_id_first_wins() {
    let (app, _dir) = test_app();
    post(&app, "/api/v1/books", book(5, "Meditaciones")).await;
    let (status, _) = post(&app, "/api/v1/books", book(5, "Otro libro")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, found) = get(&app, "/api/v1/books/5").await;
    assert_eq!(found["titulo"], "Meditaciones");
    let (_, all) = get(&app, "/api/v1/books").await;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_role_permissions() {
    let (app, _dir) = test_app();

    let (status, body) = get(&app, "/api/v1/permissions/Administrador").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "can_lend": true, "can_return": true, "can_administer_users": true })
    );

    let (_, body) = get(&app, "/api/v1/permissions/Usuario").await;
    assert_eq!(body["can_administer_users"], false);

    let (status, body) = get(&app, "/api/v1/permissions/Bibliotecario").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRole");
}

#[tokio::test]
async fn test_account_permissions_and_secret_hidden() {
    let (app, _dir) = test_app();
    let (status, created) = post(
        &app,
        "/api/v1/users",
        json!({
            "id": 1,
            "nombre": "Juan Perez",
            "mail": "juan.perez@correo.com",
            "contrasena": "librosjuan1"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rol"], "Usuario");
    assert!(created.get("contrasena").is_none());

    let (_, perms) = get(&app, "/api/v1/users/1/permissions").await;
    assert_eq!(perms["can_lend"], true);
    assert_eq!(perms["can_administer_users"], false);

    post(
        &app,
        "/api/v1/administrators",
        json!({
            "id": 100,
            "nombre": "Kevin Lopez",
            "mail": "kevin.lopez@correo.com",
            "contrasena": "contrasena100"
        }),
    )
    .await;
    let (_, perms) = get(&app, "/api/v1/administrators/100/permissions").await;
    assert_eq!(perms["can_administer_users"], true);

    let (status, _) = get(&app, "/api/v1/users/9/permissions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_loans_do_not_check_references() {
    let (app, _dir) = test_app();
    let (status, loan) = post(
        &app,
        "/api/v1/loans",
        json!({
            "id": 1,
            "libro_id": 77,
            "usuario_id": 88,
            "fecha_reserva": "2024-11-18T10:00:00Z",
            "fecha_devolucion": "2024-11-23T10:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(loan["fecha_devolucion"], "2024-11-23T10:00:00Z");

    let (_, user_loans) = get(&app, "/api/v1/users/88/loans").await;
    assert_eq!(user_loans.as_array().map(Vec::len), Some(1));

    let (status, _) = post(
        &app,
        "/api/v1/loans",
        json!({
            "id": 2,
            "libro_id": 0,
            "usuario_id": 88,
            "fecha_devolucion": "2024-11-23T10:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inventory_and_availability() {
    let (app, _dir) = test_app();
    let (status, _) = post(
        &app,
        "/api/v1/inventory",
        json!({ "id": 1, "libro_id": 3, "disponible": false }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, records) = get(&app, "/api/v1/books/3/availability").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records[0]["disponible"], false);

    let (status, _) = get(&app, "/api/v1/books/4/availability").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, legacy) = get(&app, "/visualizar-inv").await;
    assert_eq!(legacy.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_snapshot_endpoint_writes_files() {
    let (app, dir) = test_app();
    post(&app, "/api/v1/books", book(1, "Manual de Epicteto")).await;

    let (status, report) = send(
        &app,
        Request::post("/api/v1/snapshot").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["libros"], 1);

    let written = std::fs::read_to_string(dir.path().join("libros.json")).unwrap();
    let books: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(books[0]["titulo"], "Manual de Epicteto");
}

#[tokio::test]
async fn test_malformed_body_uses_error_response() {
    let (app, _dir) = test_app();
    let (status, body) = post(
        &app,
        "/api/v1/books",
        json!({ "id": 1, "titulo": "Meditaciones" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].as_str().unwrap().contains("autor"));

    let (status, body) = send(
        &app,
        Request::post("/api/v1/loans")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (_, all) = get(&app, "/api/v1/books").await;
    assert_eq!(all.as_array().map(Vec::len), Some(0));
}
