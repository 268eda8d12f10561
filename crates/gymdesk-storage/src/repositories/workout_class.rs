#![allow(async_fn_in_trait)]

use crate::error::{StorageError, StorageResult};
use crate::models::WorkoutClass;
use sqlx::SqlitePool;

/// Repository trait for WorkoutClass entity operations
pub trait WorkoutClassRepository: Send + Sync {
    /// Create a new workout class, returning the store-assigned id
    async fn create(&self, class: &WorkoutClass) -> StorageResult<i64>;

    /// Find a workout class by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<WorkoutClass>>;

    /// Get all workout classes
    async fn find_all(&self) -> StorageResult<Vec<WorkoutClass>>;

    /// Get all classes run by one trainer
    async fn find_by_trainer(&self, trainer_id: i64) -> StorageResult<Vec<WorkoutClass>>;

    /// Update an existing workout class
    async fn update(&self, class: &WorkoutClass) -> StorageResult<()>;

    /// Delete a workout class by id
    async fn delete(&self, id: i64) -> StorageResult<()>;
}

const CLASS_COLUMNS: &str = "id, class_type, description, trainer_id, created_at, updated_at";

/// SQLite implementation of WorkoutClassRepository
pub struct SqliteWorkoutClassRepository {
    pool: SqlitePool,
}

impl SqliteWorkoutClassRepository {
    /// Create a new SQLite workout class repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl WorkoutClassRepository for SqliteWorkoutClassRepository {
    async fn create(&self, class: &WorkoutClass) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO workout_classes (class_type, description, trainer_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&class.class_type)
        .bind(&class.description)
        .bind(class.trainer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::from_write(e, "WorkoutClass", "trainer_id", &class.trainer_id.to_string())
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<WorkoutClass>> {
        let class = sqlx::query_as::<_, WorkoutClass>(&format!(
            "SELECT {CLASS_COLUMNS} FROM workout_classes WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(class)
    }

    async fn find_all(&self) -> StorageResult<Vec<WorkoutClass>> {
        let classes = sqlx::query_as::<_, WorkoutClass>(&format!(
            "SELECT {CLASS_COLUMNS} FROM workout_classes ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(classes)
    }

    async fn find_by_trainer(&self, trainer_id: i64) -> StorageResult<Vec<WorkoutClass>> {
        let classes = sqlx::query_as::<_, WorkoutClass>(&format!(
            "SELECT {CLASS_COLUMNS} FROM workout_classes WHERE trainer_id = ? ORDER BY id"
        ))
        .bind(trainer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(classes)
    }

    async fn update(&self, class: &WorkoutClass) -> StorageResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE workout_classes
            SET class_type = ?, description = ?, trainer_id = ?, updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&class.class_type)
        .bind(&class.description)
        .bind(class.trainer_id)
        .bind(class.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::from_write(e, "WorkoutClass", "trainer_id", &class.trainer_id.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "WorkoutClass".to_string(),
                field: "id".to_string(),
                value: class.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM workout_classes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound {
                entity_type: "WorkoutClass".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
