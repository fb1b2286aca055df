//! Administrator account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{required, role::Role, Entity};
use crate::error::{AppError, AppResult};

/// Administrator account as stored in the registry and in snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Administrator {
    #[validate(range(min = 1))]
    id: i32,
    #[serde(rename = "nombre")]
    #[validate(length(min = 1))]
    name: String,
    #[serde(rename = "mail")]
    #[validate(length(min = 1))]
    email: String,
    /// Stored as given; hashing is out of scope
    #[serde(rename = "contrasena")]
    #[validate(length(min = 1))]
    secret: String,
    #[serde(rename = "rol")]
    role: String,
    #[serde(rename = "fecha_creacion")]
    created_at: DateTime<Utc>,
    #[serde(rename = "ultimo_acceso")]
    last_access: DateTime<Utc>,
}

impl Entity for Administrator {
    const KIND: &'static str = "administrator";

    fn id(&self) -> i32 {
        self.id
    }
}

impl Administrator {
    /// Build a validated administrator. Creation and last-access times are
    /// both stamped with the current instant.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        secret: impl Into<String>,
        role: impl Into<String>,
    ) -> AppResult<Self> {
        let now = Utc::now();
        let admin = Self {
            id,
            name: name.into(),
            email: email.into(),
            secret: secret.into(),
            role: role.into(),
            created_at: now,
            last_access: now,
        };
        admin.check()?;
        Ok(admin)
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

    /// Parse the stored role tag
    pub fn role(&self) -> AppResult<Role> {
        self.role.parse()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_access(&self) -> DateTime<Utc> {
        self.last_access
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

    pub fn set_last_access(&mut self, at: DateTime<Utc>) {
        self.last_access = at;
    }

    /// Record an access now
    pub fn touch(&mut self) {
        self.last_access = Utc::now();
    }
}

/// Administrator view without the secret
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdministratorShort {
    pub id: i32,
    pub nombre: String,
    pub mail: String,
    pub rol: String,
    pub fecha_creacion: DateTime<Utc>,
    pub ultimo_acceso: DateTime<Utc>,
}

impl From<&Administrator> for AdministratorShort {
    fn from(admin: &Administrator) -> Self {
        Self {
            id: admin.id,
            nombre: admin.name.clone(),
            mail: admin.email.clone(),
            rol: admin.role.clone(),
            fecha_creacion: admin.created_at,
            ultimo_acceso: admin.last_access,
        }
    }
}

/// Create administrator request. Timestamps are never taken from the caller.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAdministrator {
    pub id: i32,
    pub nombre: String,
    pub mail: String,
    pub contrasena: String,
    /// Defaults to "Administrador"
    pub rol: Option<String>,
}

impl TryFrom<CreateAdministrator> for Administrator {
    type Error = AppError;

    fn try_from(req: CreateAdministrator) -> AppResult<Self> {
        Administrator::new(
            req.id,
            req.nombre,
            req.mail,
            req.contrasena,
            req.rol.unwrap_or_else(|| Role::ADMINISTRATOR_TAG.to_string()),
        )
    }
}
