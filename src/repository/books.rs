//! Book lookups over the book registry

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::registry::Registry;

impl Registry<Book> {
    /// Every book whose title equals `title` exactly (case-sensitive), in
    /// admission order. An empty result is reported as not found.
    pub fn find_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let books = self.filter(|book| book.title() == title);
        if books.is_empty() {
            return Err(AppError::NotFound(format!(
                "No book titled '{}' found",
                title
            )));
        }
        Ok(books)
    }
}
