//! Roles and the capabilities they grant

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Account role. The tag strings are the ones stored in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Administrator,
    #[serde(rename = "Usuario")]
    User,
}

/// Capability flags resolved from a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Permissions {
    pub can_lend: bool,
    pub can_return: bool,
    pub can_administer_users: bool,
}

impl Role {
    pub const ADMINISTRATOR_TAG: &'static str = "Administrador";
    pub const USER_TAG: &'static str = "Usuario";

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => Self::ADMINISTRATOR_TAG,
            Role::User => Self::USER_TAG,
        }
    }

    /// Lending and returning are universal; only administrators manage accounts.
    pub fn permissions(self) -> Permissions {
        match self {
            Role::Administrator => Permissions {
                can_lend: true,
                can_return: true,
                can_administer_users: true,
            },
            Role::User => Permissions {
                can_lend: true,
                can_return: true,
                can_administer_users: false,
            },
        }
    }

    pub fn can_lend(self) -> bool {
        self.permissions().can_lend
    }

    pub fn can_return(self) -> bool {
        self.permissions().can_return
    }

    pub fn can_administer_users(self) -> bool {
        self.permissions().can_administer_users
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = AppError;

    /// Tags are matched exactly; there is no fallback role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ADMINISTRATOR_TAG => Ok(Role::Administrator),
            Self::USER_TAG => Ok(Role::User),
            other => Err(AppError::InvalidRole(format!(
                "Unknown role tag '{}', expected '{}' or '{}'",
                other,
                Self::ADMINISTRATOR_TAG,
                Self::USER_TAG
            ))),
        }
    }
}

/// Resolve the capability set for a role tag
pub fn resolve(tag: &str) -> AppResult<Permissions> {
    tag.parse::<Role>().map(Role::permissions)
}
