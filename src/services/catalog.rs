//! Catalog management service

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook},
        Entity,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and admit a new book
    pub fn create_book(&self, request: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.admit(Book::try_from(request)?)?;
        tracing::info!("Catalog: admitted book id={} '{}'", book.id(), book.title());
        Ok(book)
    }

    /// All books in admission order
    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.export()
    }

    /// Get a book by id (first admitted match)
    pub fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.find_by_id(id)
    }

    /// Exact, case-sensitive title search
    pub fn search_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        self.repository.books.find_by_title(title)
    }
}
