//! User Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::response::Pagination;

/// Privilege level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl UserRole {
    /// Super-admins manage other users and see every cart
    pub fn is_superadmin(&self) -> bool {
        matches!(self, Self::Superadmin)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }
}

/// The authenticated principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Create admin payload (super-admin screen)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: UserRole,
}

/// Update own profile payload
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: Option<String>,
}

/// Query string for GET /users/search
#[derive(Debug, Clone, Serialize)]
pub struct UserSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    pub page: u32,
    pub limit: u32,
}

impl Default for UserSearch {
    fn default() -> Self {
        Self {
            q: None,
            role: None,
            page: 1,
            limit: 10,
        }
    }
}

/// `{ users, pagination }` envelope from the list and search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub pagination: Pagination,
}

/// `{ user }` envelope from GET /users/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{ user, message }` envelope from create-admin and profile update
#[derive(Debug, Clone, Deserialize)]
pub struct UserSaved {
    pub user: User,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate as _;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::Superadmin).unwrap(),
            r#""superadmin""#
        );
        let role: UserRole = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_role_privileges() {
        assert!(UserRole::Superadmin.is_admin());
        assert!(UserRole::Superadmin.is_superadmin());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Admin.is_superadmin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_user_create_validation() {
        let mut payload = UserCreate {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            role: UserRole::Admin,
        };
        assert!(payload.validate().is_ok());

        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());

        payload.email = "ana@example.com".to_string();
        payload.password = "short".to_string();
        assert!(payload.validate().is_err());
    }
}
