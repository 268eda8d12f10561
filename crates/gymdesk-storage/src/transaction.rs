//! Transaction-aware repository operations for atomic multistep operations.
//!
//! These functions accept a SQLite transaction reference, allowing multiple
//! repository operations to be grouped into a single atomic transaction.
//! The plan purchase flow depends on this: reading the catalog entry and
//! inserting the resulting membership must either both happen or neither.
//!
//! # Usage Pattern
//!
//! ```no_run
//! use gymdesk_storage::{Database, DatabaseConfig, transaction};
//! use gymdesk_storage::models::Membership;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(DatabaseConfig::new("gymdesk.db")).await?;
//!
//! let mut tx = db.pool().begin().await?;
//!
//! let plan = transaction::find_plan(&mut tx, 1)
//!     .await?
//!     .ok_or("plan missing from catalog")?;
//! let membership = Membership::from_plan(&plan, 42);
//! transaction::create_membership(&mut tx, &membership).await?;
//!
//! // Commit - catalog read and insert succeed or fail together
//! tx.commit().await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{StorageError, StorageResult};
use crate::models::{Membership, MembershipPlan, User};
use sqlx::{Sqlite, Transaction};

/// Create a new user within a transaction
///
/// # Arguments
///
/// * `tx` - Mutable reference to an active SQLite transaction
/// * `user` - User entity to create
///
/// # Returns
///
/// Returns the auto-generated user id on success
///
/// # Errors
///
/// Returns error if:
/// - Unique constraint violation (duplicate email)
/// - Transaction is already committed or rolled back
pub async fn create_user(tx: &mut Transaction<'_, Sqlite>, user: &User) -> StorageResult<i64> {
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
    .execute(&mut **tx)
    .await
    .map_err(|e| StorageError::from_write(e, "User", "email", &user.email))?;

    Ok(result.last_insert_rowid())
}

/// Create a new membership within a transaction
///
/// # Errors
///
/// Returns error if:
/// - Foreign key constraint violation (missing member row)
/// - Transaction is already committed or rolled back
pub async fn create_membership(
    tx: &mut Transaction<'_, Sqlite>,
    membership: &Membership,
) -> StorageResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO memberships (membership_type, description, cost, member_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&membership.membership_type)
    .bind(&membership.description)
    .bind(membership.cost)
    .bind(membership.member_id)
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        StorageError::from_write(e, "Membership", "member_id", &membership.member_id.to_string())
    })?;

    Ok(result.last_insert_rowid())
}

/// Look up a catalog plan within a transaction
pub async fn find_plan(
    tx: &mut Transaction<'_, Sqlite>,
    plan_id: i64,
) -> StorageResult<Option<MembershipPlan>> {
    let plan = sqlx::query_as::<_, MembershipPlan>(
        "SELECT id, plan_type, description, price FROM membership_plans WHERE id = ?",
    )
    .bind(plan_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Database;
    use crate::models::Role;

    async fn setup_test_db() -> Database {
        Database::in_memory().await.unwrap()
    }

    fn test_user(email: &str) -> User {
        User::new(
            "tx-user",
            email,
            "5550100",
            "1 Gym Way",
            Role::Member,
            "$2b$04$testhashtesthashtesthash",
        )
    }

    #[tokio::test]
    async fn test_transaction_commit() {
        let db = setup_test_db().await;
        let mut tx = db.pool().begin().await.unwrap();

        let user_id = create_user(&mut tx, &test_user("tx1@test.com")).await.unwrap();
        assert!(user_id > 0);

        tx.commit().await.unwrap();

        let found: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = 'tx1@test.com'")
                .fetch_optional(db.pool())
                .await
                .unwrap();

        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_transaction_rollback() {
        let db = setup_test_db().await;
        let mut tx = db.pool().begin().await.unwrap();

        create_user(&mut tx, &test_user("tx2@test.com")).await.unwrap();

        tx.rollback().await.unwrap();

        let found: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = 'tx2@test.com'")
                .fetch_optional(db.pool())
                .await
                .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_purchase_flow_is_atomic() {
        let db = setup_test_db().await;
        let mut tx = db.pool().begin().await.unwrap();

        let member_id = create_user(&mut tx, &test_user("tx3@test.com")).await.unwrap();

        let plan = find_plan(&mut tx, 1).await.unwrap().unwrap();
        let membership = Membership::from_plan(&plan, member_id);
        let membership_id = create_membership(&mut tx, &membership).await.unwrap();
        assert!(membership_id > 0);

        tx.commit().await.unwrap();

        let cost: (f64,) = sqlx::query_as("SELECT cost FROM memberships WHERE id = ?")
            .bind(membership_id)
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(cost.0, plan.price);
    }

    #[tokio::test]
    async fn test_dropped_transaction_discards_writes() {
        let db = setup_test_db().await;

        {
            let mut tx = db.pool().begin().await.unwrap();
            create_user(&mut tx, &test_user("tx4@test.com")).await.unwrap();
            // Dropped without commit
        }

        let found: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = 'tx4@test.com'")
                .fetch_optional(db.pool())
                .await
                .unwrap();

        assert!(found.is_none());
    }
}
