//! Library user (borrower) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{required, role::Role, Entity};
use crate::error::{AppError, AppResult};

/// User account as stored in the registry and in snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    #[validate(range(min = 1))]
    id: i32,
    #[serde(rename = "nombre")]
    #[validate(length(min = 1))]
    name: String,
    #[serde(rename = "mail")]
    #[validate(length(min = 1))]
    email: String,
    #[serde(rename = "contrasena")]
    #[validate(length(min = 1))]
    secret: String,
    #[serde(rename = "rol")]
    role: String,
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> i32 {
        self.id
    }
}

impl User {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        role: impl Into<String>,
    ) -> AppResult<Self> {
        let user = Self {
            id,
            name: name.into(),
            email: email.into(),
            secret: secret.into(),
            role: role.into(),
        };
        user.check()?;
        Ok(user)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn role_tag(&self) -> &str {
        &self.role
    }

    pub fn role(&self) -> AppResult<Role> {
        self.role.parse()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        self.name = required::<Self>(name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> AppResult<()> {
        self.email = required::<Self>(email)?;
        Ok(())
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }
}

/// User view without the secret
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserShort {
    pub id: i32,
    pub nombre: String,
    pub mail: String,
    pub rol: String,
}

impl From<&User> for UserShort {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nombre: user.name.clone(),
            mail: user.email.clone(),
            rol: user.role.clone(),
        }
    }
}

/// Create user request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    pub id: i32,
    pub nombre: String,
    pub mail: String,
    pub contrasena: String,
    /// Defaults to "Usuario"
    pub rol: Option<String>,
}

impl TryFrom<CreateUser> for User {
    type Error = AppError;

    fn try_from(req: CreateUser) -> AppResult<Self> {
        User::new(
            req.id,
            req.nombre,
            req.mail,
            req.contrasena,
            req.rol.unwrap_or_else(|| Role::USER_TAG.to_string()),
        )
    }
}
