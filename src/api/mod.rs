//! API handlers for the eLibrary REST endpoints

pub mod administrators;
pub mod books;
pub mod health;
pub mod inventory;
pub mod loans;
pub mod openapi;
pub mod permissions;
pub mod snapshot;
pub mod users;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejection is an `AppError`, so malformed
/// payloads get the same error body as validator failures
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Administrators
        .route(
            "/administrators",
            get(administrators::list_administrators).post(administrators::create_administrator),
        )
        .route("/administrators/:id", get(administrators::get_administrator))
        .route(
            "/administrators/:id/permissions",
            get(administrators::get_administrator_permissions),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/permissions", get(users::get_user_permissions))
        .route("/users/:id/loans", get(users::get_user_loans))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/search", get(books::search_books))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id/availability", get(books::get_availability))
        // Inventory
        .route(
            "/inventory",
            get(inventory::list_inventory).post(inventory::create_inventory_record),
        )
        .route("/inventory/:id", get(inventory::get_inventory_record))
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::create_loan))
        .route("/loans/:id", get(loans::get_loan))
        // Permissions
        .route("/permissions/:role", get(permissions::resolve_role))
        // Snapshot
        .route("/snapshot", post(snapshot::write_snapshot))
        .with_state(state.clone());

    // Landing pages and the read-only paths of the first web version
    let pages = Router::new()
        .route("/", get(health::home_page))
        .route("/away", get(health::away_page))
        .route("/visualizar-admin", get(administrators::list_administrators))
        .route("/visualizar-user", get(users::list_users))
        .route("/visualizar-libro", get(books::list_books))
        .route("/visualizar-inv", get(inventory::list_inventory))
        .route("/visualizar-pres", get(loans::list_loans))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(pages)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
