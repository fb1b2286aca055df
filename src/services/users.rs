//! Account service: administrators, users and their permissions

use crate::{
    error::AppResult,
    models::{
        administrator::{Administrator, CreateAdministrator},
        role::{self, Permissions},
        user::{CreateUser, User},
        Entity,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn create_administrator(&self, request: CreateAdministrator) -> AppResult<Administrator> {
        let admin = self
            .repository
            .administrators
            .admit(Administrator::try_from(request)?)?;
        tracing::info!("Accounts: admitted administrator id={}", admin.id());
        Ok(admin)
    }

    pub fn list_administrators(&self) -> Vec<Administrator> {
        self.repository.administrators.export()
    }

    pub fn get_administrator(&self, id: i32) -> AppResult<Administrator> {
        self.repository.administrators.find_by_id(id)
    }

    pub fn create_user(&self, request: CreateUser) -> AppResult<User> {
        let user = self.repository.users.admit(User::try_from(request)?)?;
        tracing::info!("Accounts: admitted user id={}", user.id());
        Ok(user)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.repository.users.export()
    }

    pub fn get_user(&self, id: i32) -> AppResult<User> {
        self.repository.users.find_by_id(id)
    }

    /// Resolve a bare role tag
    pub fn resolve_role(&self, tag: &str) -> AppResult<Permissions> {
        role::resolve(tag)
    }

    /// Permissions granted by a stored administrator's role tag
    pub fn administrator_permissions(&self, id: i32) -> AppResult<Permissions> {
        let admin = self.get_administrator(id)?;
        role::resolve(admin.role_tag())
    }

    /// Permissions granted by a stored user's role tag
    pub fn user_permissions(&self, id: i32) -> AppResult<Permissions> {
        let user = self.get_user(id)?;
        role::resolve(user.role_tag())
    }
}
