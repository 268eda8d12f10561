use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tag selecting which specialized view (Admin/Trainer/Member)
/// applies to a `users` row.
///
/// All person-like entities share one physical table; the role is the only
/// thing that distinguishes an admin from a trainer from a member. Queries
/// issued by role-scoped repositories always filter on this value, so a
/// row created under one role is invisible to the other roles' views.
///
/// # Examples
///
/// ```
/// use gymdesk_storage::models::Role;
///
/// assert_eq!(Role::parse("trainer"), Some(Role::Trainer));
/// assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
/// assert_eq!(Role::parse("janitor"), None);
/// assert_eq!(Role::Member.as_str(), "Member");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Role {
    /// Staff account with full management menus
    Admin,
    /// Runs workout classes; owns `workout_classes` rows
    Trainer,
    /// Gym customer; owns `memberships` rows
    Member,
}

impl Role {
    /// Parse a user-supplied role string, normalizing case and whitespace.
    ///
    /// Returns `None` for anything that is not one of the three known
    /// roles; the stored value is always the canonical capitalized form.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "trainer" => Some(Self::Trainer),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Canonical string form, exactly as stored in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Trainer => "Trainer",
            Self::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User entity representing a person with credentials and a role.
///
/// # Fields
///
/// * `id` - Auto-increment primary key, assigned by the store on insert
/// * `username` - Login name, required
/// * `email` - Contact email; unique across all roles
/// * `phone` - Phone number (free-form text)
/// * `address` - Postal address (free-form text)
/// * `role` - Role tag; immutable business-wise once chosen
/// * `password_hash` - Bcrypt hash; never a plaintext password
/// * `created_at` - Record creation timestamp
/// * `updated_at` - Record last modification timestamp
///
/// # Database Schema
///
/// Maps to the `users` table. The `role` column carries a CHECK constraint
/// limiting it to the three canonical values, and `email` has a unique
/// index.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Auto-increment primary key
    pub id: i64,

    /// Login name
    pub username: String,

    /// Contact email (unique)
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Postal address
    pub address: String,

    /// Role tag distinguishing Admin/Trainer/Member views
    pub role: Role,

    /// Bcrypt password hash
    pub password_hash: String,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Record last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user record ready for insertion (id 0 until the store
    /// assigns one).
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        role: Role,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            role,
            password_hash: password_hash.into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Some(Role::Admin))]
    #[case("Admin", Some(Role::Admin))]
    #[case("ADMIN", Some(Role::Admin))]
    #[case(" trainer ", Some(Role::Trainer))]
    #[case("member", Some(Role::Member))]
    #[case("Owner", None)]
    #[case("", None)]
    fn test_role_parse_normalizes(#[case] input: &str, #[case] expected: Option<Role>) {
        assert_eq!(Role::parse(input), expected);
    }

    #[test]
    fn test_role_display_matches_stored_form() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Role::Trainer.to_string(), "Trainer");
        assert_eq!(Role::Member.to_string(), "Member");
    }

    #[test]
    fn test_new_user_has_no_id_yet() {
        let user = User::new(
            "alice",
            "a@test.com",
            "5551234",
            "1 Main St",
            Role::Member,
            "$2b$04$fakehash",
        );

        assert_eq!(user.id, 0);
        assert_eq!(user.role, Role::Member);
        assert_eq!(user.email, "a@test.com");
    }
}
