//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    api::JsonBody,
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        inventory::InventoryRecord,
    },
    AppState,
};

/// Title search parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TitleQuery {
    /// Exact, case-sensitive title
    #[serde(alias = "titulo")]
    pub title: String,
}

/// List every book in admission order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books())
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id)?;
    Ok(Json(book))
}

/// Search books by exact title
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(TitleQuery),
    responses(
        (status = 200, description = "Every book with this title", body = Vec<Book>),
        (status = 404, description = "No book with this title")
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search_by_title(&query.title)?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid book data")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(book): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(book)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Inventory records held for a book
#[utoipa::path(
    get,
    path = "/books/{id}/availability",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Inventory records of the book", body = Vec<InventoryRecord>),
        (status = 404, description = "No inventory record for this book")
    )
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<InventoryRecord>>> {
    let records = state.services.inventory.availability(id)?;
    Ok(Json(records))
}
