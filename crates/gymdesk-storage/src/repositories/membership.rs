#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use crate::models::Membership;
use sqlx::SqlitePool;

/// Repository trait for Membership entity operations
pub trait MembershipRepository: Send + Sync {
    /// Create a new membership, returning the store-assigned id
    async fn create(&self, membership: &Membership) -> StorageResult<i64>;

    /// Find a membership by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Membership>>;

    /// Get all memberships
    async fn find_all(&self) -> StorageResult<Vec<Membership>>;

    /// Get all memberships owned by one member
    async fn find_by_member(&self, member_id: i64) -> StorageResult<Vec<Membership>>;

    /// Update an existing membership
    async fn update(&self, membership: &Membership) -> StorageResult<()>;

    /// Delete a membership by id
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Sum of cost over all memberships; 0.0 when there are none
    async fn total_revenue(&self) -> StorageResult<f64>;

    /// Sum of cost over one member's memberships; 0.0 when there are none
    async fn expenses_for_member(&self, member_id: i64) -> StorageResult<f64>;
}

const MEMBERSHIP_COLUMNS: &str =
    "id, membership_type, description, cost, member_id, created_at, updated_at";

/// SQLite implementation of MembershipRepository
pub struct SqliteMembershipRepository {
    pool: SqlitePool,
}

impl SqliteMembershipRepository {
    /// Create a new SQLite membership repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MembershipRepository for SqliteMembershipRepository {
    async fn create(&self, membership: &Membership) -> StorageResult<i64> {
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
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::from_write(e, "Membership", "member_id", &membership.member_id.to_string())
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Membership>> {
        let membership = sqlx::query_as::<_, Membership>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(membership)
    }

    async fn find_all(&self) -> StorageResult<Vec<Membership>> {
        let memberships = sqlx::query_as::<_, Membership>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(memberships)
    }

    async fn find_by_member(&self, member_id: i64) -> StorageResult<Vec<Membership>> {
        let memberships = sqlx::query_as::<_, Membership>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships WHERE member_id = ? ORDER BY id"
        ))
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(memberships)
    }

    async fn update(&self, membership: &Membership) -> StorageResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE memberships
            SET membership_type = ?, description = ?, cost = ?, member_id = ?,
                updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&membership.membership_type)
        .bind(&membership.description)
        .bind(membership.cost)
        .bind(membership.member_id)
        .bind(membership.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::from_write(e, "Membership", "member_id", &membership.member_id.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "Membership".to_string(),
                field: "id".to_string(),
                value: membership.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM memberships WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "Membership".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            });
        }

        Ok(())
    }

    async fn total_revenue(&self) -> StorageResult<f64> {
        let result: (f64,) = sqlx::query_as("SELECT COALESCE(SUM(cost), 0.0) FROM memberships")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn expenses_for_member(&self, member_id: i64) -> StorageResult<f64> {
        let result: (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(cost), 0.0) FROM memberships WHERE member_id = ?",
        )
        .bind(member_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
