//! Default catalog admitted on a first start with no snapshot

use chrono::{Duration, Utc};

use crate::{
    error::AppResult,
    models::{Administrator, Book, InventoryRecord, Loan, Role, User},
    repository::Repository,
};

/// Loan period applied to the default loans only
pub const DEFAULT_LOAN_DAYS: i64 = 5;

const ADMINISTRATORS: [(i32, &str, &str, &str); 2] = [
    (100, "Kevin Lopez", "kevin.lopez@correo.com", "contrasena100"),
    (200, "Jazmin Chillagana", "jazmin.chillagana@correo.com", "contrasena200"),
];

const USERS: [(i32, &str, &str, &str); 5] = [
    (1, "Juan Perez", "juan.perez@correo.com", "librosjuan1"),
    (2, "Maria Enriquez", "maria.enriquez@correo.com", "mislibros123"),
    (3, "Pedro Alvarez", "pedro.alvarez@correo.com", "miperro5"),
    (4, "Pablo Hernandez", "pablo.hernandez@correo.com", "contra123"),
    (5, "Samantha Rivera", "samy.rivera@correo.com", "riosol159"),
];

// id, title, author, publication date, url slug
const BOOKS: [(i32, &str, &str, &str, &str); 5] = [
    (1, "Cartas de un Estoico", "Lucio A. Séneca", "2024-09-21", "cartas_estoico"),
    (2, "Los Discursos de Epicteto", "Epicteto", "2024-09-21", "discursos_epicteto"),
    (3, "Manual de Epicteto", "Epicteto", "1980-05-20", "manual_epicteto"),
    (4, "Meditaciones", "Marco Aurelio", "2023-10-20", "meditaciones"),
    (5, "Sobre la brevedad de la vida", "Lucio A. Séneca", "2024-09-21", "brevedad_vida"),
];

/// Admit the default dataset: every book is in stock and lent to the user
/// with the same position, due in five days.
pub fn load(repository: &Repository) -> AppResult<()> {
    for (id, name, email, secret) in ADMINISTRATORS {
        repository
            .administrators
            .admit(Administrator::new(id, name, email, secret, Role::ADMINISTRATOR_TAG)?)?;
    }

    for (id, name, email, secret) in USERS {
        repository
            .users
            .admit(User::new(id, name, email, secret, Role::USER_TAG)?)?;
    }

    let now = Utc::now();
    for ((id, title, author, published, slug), (user_id, ..)) in BOOKS.into_iter().zip(USERS) {
        let url = format!("www.libros.com/{}", slug);
        repository
            .books
            .admit(Book::new(id, title, author, published, "Filosofía", url)?)?;
        repository
            .inventory
            .admit(InventoryRecord::new(id, id, true)?)?;
        repository.loans.admit(Loan::new(
            id,
            id,
            user_id,
            now,
            now + Duration::days(DEFAULT_LOAN_DAYS),
        )?)?;
    }

    Ok(())
}
