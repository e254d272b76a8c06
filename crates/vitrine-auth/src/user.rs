//! User types.

use serde::{Deserialize, Serialize};
use vitrine_commerce::ids::UserId;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
    /// Any role this client does not know about.
    #[serde(other)]
    Other,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Other => "other",
        }
    }

    /// Check if this role grants admin access.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The current user, as the profile endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if this user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
