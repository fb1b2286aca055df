//! Book (catalog entry) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{required, Entity};
use crate::error::{AppError, AppResult};

/// Book as stored in the registry and in snapshots.
///
/// `id` is the unique lookup key and `title` the (non-unique) search key.
/// The publication date is free text, e.g. "2024-09-21" or "c. 65 d.C.".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    #[validate(range(min = 1))]
    id: i32,
    #[serde(rename = "titulo")]
    #[validate(length(min = 1))]
    title: String,
    #[serde(rename = "autor")]
    #[validate(length(min = 1))]
    author: String,
    #[serde(rename = "fecha_publicacion", default)]
    publication_date: String,
    #[serde(rename = "genero", default)]
    genre: String,
    #[serde(default)]
    url: String,
}

impl Entity for Book {
    const KIND: &'static str = "book";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Book {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
        genre: impl Into<String>,
        url: impl Into<String>,
    ) -> AppResult<Self> {
        let book = Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_date: publication_date.into(),
            genre: genre.into(),
            url: url.into(),
        };
        book.check()?;
        Ok(book)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> AppResult<()> {
        self.title = required::<Self>(title)?;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> AppResult<()> {
        self.author = required::<Self>(author)?;
        Ok(())
    }

    pub fn set_publication_date(&mut self, date: impl Into<String>) {
        self.publication_date = date.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub id: i32,
    pub titulo: String,
    pub autor: String,
    #[serde(default)]
    pub fecha_publicacion: String,
    #[serde(default)]
    pub genero: String,
    #[serde(default)]
    pub url: String,
}

impl TryFrom<CreateBook> for Book {
    type Error = AppError;

    fn try_from(req: CreateBook) -> AppResult<Self> {
        Book::new(
            req.id,
            req.titulo,
            req.autor,
            req.fecha_publicacion,
            req.genero,
            req.url,
        )
    }
}
