//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{administrators, books, health, inventory, loans, permissions, snapshot, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "eLibrary API",
        version = "0.1.0",
        description = "Electronic library catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Administrators
        administrators::list_administrators,
        administrators::get_administrator,
        administrators::create_administrator,
        administrators::get_administrator_permissions,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::get_user_permissions,
        users::get_user_loans,
        // Books
        books::list_books,
        books::get_book,
        books::search_books,
        books::create_book,
        books::get_availability,
        // Inventory
        inventory::list_inventory,
        inventory::get_inventory_record,
        inventory::create_inventory_record,
        // Loans
        loans::list_loans,
        loans::get_loan,
        loans::create_loan,
        // Permissions
        permissions::resolve_role,
        // Snapshot
        snapshot::write_snapshot,
    ),
    components(
        schemas(
            // Accounts
            crate::models::administrator::AdministratorShort,
            crate::models::administrator::CreateAdministrator,
            crate::models::user::UserShort,
            crate::models::user::CreateUser,
            crate::models::role::Role,
            crate::models::role::Permissions,
            // Catalog
            crate::models::book::Book,
            crate::models::book::CreateBook,
            books::TitleQuery,
            crate::models::inventory::InventoryRecord,
            crate::models::inventory::CreateInventoryRecord,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            // Snapshot
            crate::services::snapshot::SnapshotReport,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "administrators", description = "Administrator accounts"),
        (name = "users", description = "User accounts"),
        (name = "books", description = "Catalog and title search"),
        (name = "inventory", description = "Per-book availability"),
        (name = "loans", description = "Loan management"),
        (name = "permissions", description = "Role capabilities"),
        (name = "snapshot", description = "JSON snapshot persistence")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
