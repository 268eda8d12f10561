#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use crate::models::{Role, User};
use sqlx::SqlitePool;

/// Repository trait for User entity operations
///
/// This trait defines the contract for user data access, enabling
/// testability through mock implementations and separation of concerns.
///
/// # Implementation Note
///
/// This trait uses native async trait methods (Edition 2024 feature),
/// eliminating the need for the async-trait crate while maintaining
/// full async/await support in trait methods.
pub trait UserRepository: Send + Sync {
    /// Create a new user, returning the store-assigned id
    async fn create(&self, user: &User) -> StorageResult<i64>;

    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<User>>;

    /// Find a user by login name
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// Get all users regardless of role
    async fn find_all(&self) -> StorageResult<Vec<User>>;

    /// Update an existing user (full field set, including role)
    async fn update(&self, user: &User) -> StorageResult<()>;

    /// Delete a user by id
    async fn delete(&self, id: i64) -> StorageResult<()>;
}

const USER_COLUMNS: &str = "id, username, email, phone, address, role, password_hash, \
                            created_at, updated_at";

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SQLite user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, phone, address, role, password_hash)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(user.role)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "User", "email", &user.email))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> StorageResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, user: &User) -> StorageResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?, email = ?, phone = ?, address = ?, role = ?,
                password_hash = ?, updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(user.role)
        .bind(&user.password_hash)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "User", "email", &user.email))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "User".to_string(),
                field: "id".to_string(),
                value: user.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "User".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

/// Repository trait for role-scoped user operations
///
/// Same contract as [`UserRepository`], pre-filtered to a single role.
/// Four logical entities (plain User plus Admin/Trainer/Member) share one
/// physical table; a role-scoped repository can only see and touch rows
/// carrying its own role tag.
pub trait RoleUserRepository: Send + Sync {
    /// The role this repository is scoped to
    fn role(&self) -> Role;

    /// Create a new user under the scoped role, returning the new id
    async fn create(&self, user: &User) -> StorageResult<i64>;

    /// Find a user of the scoped role by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<User>>;

    /// Find a user of the scoped role by email
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// Get all users of the scoped role
    async fn find_all(&self) -> StorageResult<Vec<User>>;

    /// Update a user of the scoped role (the role itself is not updatable)
    async fn update(&self, user: &User) -> StorageResult<()>;

    /// Delete a user of the scoped role by id
    async fn delete(&self, id: i64) -> StorageResult<()>;
}

/// SQLite implementation of a role-scoped user repository
///
/// Every query carries an `AND role = ?` filter; `create` stamps the
/// scoped role onto the inserted row no matter what the passed record
/// says.
pub struct SqliteRoleUserRepository {
    pool: SqlitePool,
    role: Role,
}

impl SqliteRoleUserRepository {
    /// Create a repository scoped to the given role
    pub fn new(pool: SqlitePool, role: Role) -> Self {
        Self { pool, role }
    }

    /// Repository over users with the Admin role
    pub fn admins(pool: SqlitePool) -> Self {
        Self::new(pool, Role::Admin)
    }

    /// Repository over users with the Trainer role
    pub fn trainers(pool: SqlitePool) -> Self {
        Self::new(pool, Role::Trainer)
    }

    /// Repository over users with the Member role
    pub fn members(pool: SqlitePool) -> Self {
        Self::new(pool, Role::Member)
    }
}

impl RoleUserRepository for SqliteRoleUserRepository {
    fn role(&self) -> Role {
        self.role
    }

    async fn create(&self, user: &User) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, phone, address, role, password_hash)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(self.role)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, self.role.as_str(), "email", &user.email))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ? AND role = ?"
        ))
        .bind(id)
        .bind(self.role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ? AND role = ?"
        ))
        .bind(email)
        .bind(self.role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> StorageResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = ? ORDER BY id"
        ))
        .bind(self.role)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, user: &User) -> StorageResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?, email = ?, phone = ?, address = ?,
                password_hash = ?, updated_at = datetime('now')
            WHERE id = ? AND role = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(&user.password_hash)
        .bind(user.id)
        .bind(self.role)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, self.role.as_str(), "email", &user.email))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: self.role.as_str().to_string(),
                field: "id".to_string(),
                value: user.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND role = ?")
            .bind(id)
            .bind(self.role)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: self.role.as_str().to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Database;

    async fn setup_test_db() -> Database {
        Database::in_memory().await.unwrap()
    }

    fn create_test_user(username: &str, email: &str, role: Role) -> User {
        User::new(
            username,
            email,
            "5550100",
            "1 Gym Way",
            role,
            "$2b$04$testhashtesthashtesthash",
        )
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = setup_test_db().await;
        let repo = SqliteUserRepository::new(db.pool().clone());

        let user = create_test_user("alice", "alice@test.com", Role::Member);
        let id = repo.create(&user).await.unwrap();
        assert!(id > 0);

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert_eq!(found.email, "alice@test.com");
        assert_eq!(found.role, Role::Member);
        assert_eq!(found.phone, "5550100");
        assert_eq!(found.address, "1 Gym Way");
    }

    #[tokio::test]
    async fn test_find_by_username_and_email() {
        let db = setup_test_db().await;
        let repo = SqliteUserRepository::new(db.pool().clone());

        repo.create(&create_test_user("bob", "bob@test.com", Role::Trainer))
            .await
            .unwrap();

        assert!(repo.find_by_username("bob").await.unwrap().is_some());
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
        assert!(repo.find_by_email("bob@test.com").await.unwrap().is_some());
        assert!(repo.find_by_email("x@test.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let db = setup_test_db().await;
        let repo = SqliteUserRepository::new(db.pool().clone());

        repo.create(&create_test_user("carol", "carol@test.com", Role::Member))
            .await
            .unwrap();

        let err = repo
            .create(&create_test_user("carol2", "carol@test.com", Role::Admin))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_user_roundtrip() {
        let db = setup_test_db().await;
        let repo = SqliteUserRepository::new(db.pool().clone());

        let id = repo
            .create(&create_test_user("dave", "dave@test.com", Role::Member))
            .await
            .unwrap();

        let mut user = repo.find_by_id(id).await.unwrap().unwrap();
        user.username = "david".to_string();
        user.address = "2 New Ave".to_string();
        repo.update(&user).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.username, "david");
        assert_eq!(found.address, "2 New Ave");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = setup_test_db().await;
        let repo = SqliteUserRepository::new(db.pool().clone());

        let mut ghost = create_test_user("ghost", "ghost@test.com", Role::Member);
        ghost.id = 9999;

        let err = repo.update(&ghost).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let db = setup_test_db().await;
        let repo = SqliteUserRepository::new(db.pool().clone());

        let id = repo
            .create(&create_test_user("erin", "erin@test.com", Role::Admin))
            .await
            .unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        let err = repo.delete(id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_role_scope_hides_other_roles() {
        let db = setup_test_db().await;
        let users = SqliteUserRepository::new(db.pool().clone());
        let trainers = SqliteRoleUserRepository::trainers(db.pool().clone());
        let members = SqliteRoleUserRepository::members(db.pool().clone());

        let member_id = users
            .create(&create_test_user("fay", "fay@test.com", Role::Member))
            .await
            .unwrap();

        // The row exists, but not under the trainer view.
        assert!(trainers.find_by_id(member_id).await.unwrap().is_none());
        assert!(members.find_by_id(member_id).await.unwrap().is_some());
        assert!(trainers.find_all().await.unwrap().is_empty());
        assert_eq!(members.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_role_scoped_create_stamps_role() {
        let db = setup_test_db().await;
        let trainers = SqliteRoleUserRepository::trainers(db.pool().clone());

        // Record claims to be a member; the trainer repository wins.
        let id = trainers
            .create(&create_test_user("gus", "gus@test.com", Role::Member))
            .await
            .unwrap();

        let found = trainers.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.role, Role::Trainer);
    }

    #[tokio::test]
    async fn test_role_scoped_delete_ignores_other_roles() {
        let db = setup_test_db().await;
        let users = SqliteUserRepository::new(db.pool().clone());
        let trainers = SqliteRoleUserRepository::trainers(db.pool().clone());

        let member_id = users
            .create(&create_test_user("hana", "hana@test.com", Role::Member))
            .await
            .unwrap();

        let err = trainers.delete(member_id).await.unwrap_err();
        assert!(err.is_not_found());

        // Still there under the unscoped view.
        assert!(users.find_by_id(member_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_role_scoped_update_ignores_other_roles() {
        let db = setup_test_db().await;
        let users = SqliteUserRepository::new(db.pool().clone());
        let admins = SqliteRoleUserRepository::admins(db.pool().clone());

        let member_id = users
            .create(&create_test_user("iris", "iris@test.com", Role::Member))
            .await
            .unwrap();

        let mut row = users.find_by_id(member_id).await.unwrap().unwrap();
        row.username = "hijacked".to_string();

        let err = admins.update(&row).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
