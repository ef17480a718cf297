//! User entity - a registered account with a single active session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Role attached to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Database / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse a role string; anything unrecognized is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// User entity
///
/// `session_token` holds the single currently-valid token; overwriting
/// it on login (or clearing it on logout) invalidates every other
/// holder of an older token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    /// Stored lowercased; uniqueness is case-insensitive
    pub email: String,
    pub role: UserRole,
    pub session_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, name: String, email: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email: email.to_lowercase(),
            role,
            session_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check whether a presented token matches the stored session token
    pub fn token_matches(&self, token: &str) -> bool {
        self.session_token.as_deref() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_lowercased_on_creation() {
        let user = User::new(
            Snowflake::new(1),
            "Test".to_string(),
            "Test@Example.COM".to_string(),
            UserRole::User,
        );
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::parse("user"), Some(UserRole::User));
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("superuser"), None);
    }

    #[test]
    fn test_token_matches() {
        let mut user = User::new(
            Snowflake::new(1),
            "Test".to_string(),
            "t@e.com".to_string(),
            UserRole::User,
        );
        assert!(!user.token_matches("abc"));

        user.session_token = Some("abc".to_string());
        assert!(user.token_matches("abc"));
        assert!(!user.token_matches("xyz"));
    }
}
