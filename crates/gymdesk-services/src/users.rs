//! User registration, authentication, and role-scoped user management.

use gymdesk_core::password;
use gymdesk_storage::models::{Role, User};
use gymdesk_storage::repositories::{
    RoleUserRepository, SqliteRoleUserRepository, SqliteUserRepository, UserRepository,
};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};

/// Input for registering a new user of any role.
///
/// `role` is the raw string collected at the console; it is normalized
/// during registration. `password` is plaintext and is hashed before any
/// row is written.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: String,
    pub password: String,
}

/// Service for user-related operations: registration, login, lookups, and
/// the role-scoped management views used by the admin menus.
pub struct UserService {
    users: SqliteUserRepository,
    admins: SqliteRoleUserRepository,
    trainers: SqliteRoleUserRepository,
    members: SqliteRoleUserRepository,
}

impl UserService {
    /// Create a user service over the given pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: SqliteUserRepository::new(pool.clone()),
            admins: SqliteRoleUserRepository::admins(pool.clone()),
            trainers: SqliteRoleUserRepository::trainers(pool.clone()),
            members: SqliteRoleUserRepository::members(pool),
        }
    }

    /// Register a new user: normalize the role, hash the password, insert
    /// through the matching role-scoped repository.
    ///
    /// Trainer registration treats an email that already belongs to a
    /// trainer as success-without-insert and returns the existing row.
    /// This soft dedup applies to trainers ONLY; every other role surfaces
    /// a conflict from the unique email index.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRole`] for unknown role strings,
    /// plus any password hashing or storage failure.
    pub async fn register(&self, input: Registration) -> ServiceResult<User> {
        let role = Role::parse(&input.role)
            .ok_or_else(|| ServiceError::InvalidRole(input.role.clone()))?;

        let hash = password::hash(&input.password)?;
        let mut user = User::new(
            input.username,
            input.email,
            input.phone,
            input.address,
            role,
            hash,
        );

        let repo = self.role_repo(role);

        if role == Role::Trainer
            && let Some(existing) = repo.find_by_email(&user.email).await?
        {
            warn!(
                email = %user.email,
                id = existing.id,
                "trainer already registered, treating as success"
            );
            return Ok(existing);
        }

        user.id = repo.create(&user).await?;
        info!(username = %user.username, role = %role, id = user.id, "user registered");

        Ok(user)
    }

    /// Authenticate a user by username and password.
    ///
    /// Returns `Ok(None)` when the username is unknown or the password
    /// does not match. A stored hash that is not bcrypt-shaped is an
    /// error, not a failed login.
    pub async fn login(&self, username: &str, plain: &str) -> ServiceResult<Option<User>> {
        let Some(user) = self.users.find_by_username(username).await? else {
            info!(username, "login failed: unknown username");
            return Ok(None);
        };

        if password::verify(plain, &user.password_hash)? {
            info!(username = %user.username, id = user.id, "login successful");
            Ok(Some(user))
        } else {
            info!(username, "login failed: wrong password");
            Ok(None)
        }
    }

    /// Get all users regardless of role
    pub async fn all_users(&self) -> ServiceResult<Vec<User>> {
        let users = self.users.find_all().await?;
        info!(count = users.len(), "retrieved users");
        Ok(users)
    }

    /// Find any user by id
    pub async fn user_by_id(&self, id: i64) -> ServiceResult<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Update a user (full field set, any role). The password hash must
    /// already be hashed by the caller via the registration/update flows.
    pub async fn update_user(&self, user: &User) -> ServiceResult<()> {
        self.users.update(user).await?;
        info!(id = user.id, "user updated");
        Ok(())
    }

    /// Delete a user of any role by id
    pub async fn delete_user(&self, id: i64) -> ServiceResult<()> {
        self.users.delete(id).await?;
        info!(id, "user deleted");
        Ok(())
    }

    /// Find a user by id under one role's view only
    pub async fn user_by_id_with_role(&self, id: i64, role: Role) -> ServiceResult<Option<User>> {
        Ok(self.role_repo(role).find_by_id(id).await?)
    }

    /// All users carrying the given role
    pub async fn users_with_role(&self, role: Role) -> ServiceResult<Vec<User>> {
        Ok(self.role_repo(role).find_all().await?)
    }

    /// Update a user under one role's view; rows of other roles are
    /// invisible to this call and report not-found.
    pub async fn update_with_role(&self, user: &User, role: Role) -> ServiceResult<()> {
        self.role_repo(role).update(user).await?;
        info!(id = user.id, role = %role, "user updated");
        Ok(())
    }

    /// Delete a user under one role's view
    pub async fn delete_with_role(&self, id: i64, role: Role) -> ServiceResult<()> {
        self.role_repo(role).delete(id).await?;
        info!(id, role = %role, "user deleted");
        Ok(())
    }

    /// Re-hash a password for an update flow.
    ///
    /// Exposed so menus never touch the hashing module directly.
    pub fn hash_password(&self, plain: &str) -> ServiceResult<String> {
        Ok(password::hash(plain)?)
    }

    fn role_repo(&self, role: Role) -> &SqliteRoleUserRepository {
        match role {
            Role::Admin => &self.admins,
            Role::Trainer => &self.trainers,
            Role::Member => &self.members,
        }
    }
}
