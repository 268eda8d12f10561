#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use crate::models::GymMerch;
use sqlx::SqlitePool;

/// Repository trait for GymMerch entity operations
pub trait MerchRepository: Send + Sync {
    /// Create a new merchandise item, returning the store-assigned id
    async fn create(&self, merch: &GymMerch) -> StorageResult<i64>;

    /// Find a merchandise item by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<GymMerch>>;

    /// Get all merchandise items
    async fn find_all(&self) -> StorageResult<Vec<GymMerch>>;

    /// Update an existing merchandise item
    async fn update(&self, merch: &GymMerch) -> StorageResult<()>;

    /// Delete a merchandise item by id
    async fn delete(&self, id: i64) -> StorageResult<()>;
}

const MERCH_COLUMNS: &str =
    "id, name, category, unit_price, quantity_in_stock, created_at, updated_at";

/// SQLite implementation of MerchRepository
pub struct SqliteMerchRepository {
    pool: SqlitePool,
}

impl SqliteMerchRepository {
    /// Create a new SQLite merchandise repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MerchRepository for SqliteMerchRepository {
    async fn create(&self, merch: &GymMerch) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO gym_merch (name, category, unit_price, quantity_in_stock)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&merch.name)
        .bind(&merch.category)
        .bind(merch.unit_price)
        .bind(merch.quantity_in_stock)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<GymMerch>> {
        let merch = sqlx::query_as::<_, GymMerch>(&format!(
            "SELECT {MERCH_COLUMNS} FROM gym_merch WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(merch)
    }

    async fn find_all(&self) -> StorageResult<Vec<GymMerch>> {
        let merch = sqlx::query_as::<_, GymMerch>(&format!(
            "SELECT {MERCH_COLUMNS} FROM gym_merch ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(merch)
    }

    async fn update(&self, merch: &GymMerch) -> StorageResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE gym_merch
            SET name = ?, category = ?, unit_price = ?, quantity_in_stock = ?,
                updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&merch.name)
        .bind(&merch.category)
        .bind(merch.unit_price)
        .bind(merch.quantity_in_stock)
        .bind(merch.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "GymMerch".to_string(),
                field: "id".to_string(),
                value: merch.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM gym_merch WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "GymMerch".to_string(),
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

    #[tokio::test]
    async fn test_create_and_find_merch() {
        let db = setup_test_db().await;
        let repo = SqliteMerchRepository::new(db.pool().clone());

        let merch = GymMerch::new("Protein Powder", "Supplements", 29.99, 50);
        let id = repo.create(&merch).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Protein Powder");
        assert_eq!(found.category, "Supplements");
        assert_eq!(found.unit_price, 29.99);
        assert_eq!(found.quantity_in_stock, 50);
    }

    #[tokio::test]
    async fn test_update_merch_roundtrip() {
        let db = setup_test_db().await;
        let repo = SqliteMerchRepository::new(db.pool().clone());

        let id = repo
            .create(&GymMerch::new("T-Shirt", "Apparel", 19.99, 100))
            .await
            .unwrap();

        let mut merch = repo.find_by_id(id).await.unwrap().unwrap();
        merch.unit_price = 24.99;
        merch.quantity_in_stock = 80;
        repo.update(&merch).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.unit_price, 24.99);
        assert_eq!(found.quantity_in_stock, 80);
    }

    #[tokio::test]
    async fn test_delete_merch() {
        let db = setup_test_db().await;
        let repo = SqliteMerchRepository::new(db.pool().clone());

        let id = repo
            .create(&GymMerch::new("Towel", "Accessories", 12.50, 30))
            .await
            .unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        let err = repo.delete(id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_all_empty_is_empty_vec() {
        let db = setup_test_db().await;
        let repo = SqliteMerchRepository::new(db.pool().clone());

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
