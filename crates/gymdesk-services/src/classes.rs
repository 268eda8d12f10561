//! Workout class management.

use gymdesk_storage::models::WorkoutClass;
use gymdesk_storage::repositories::{SqliteWorkoutClassRepository, WorkoutClassRepository};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::ServiceResult;

/// Service for workout class operations.
pub struct WorkoutClassService {
    classes: SqliteWorkoutClassRepository,
}

impl WorkoutClassService {
    /// Create a workout class service over the given pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            classes: SqliteWorkoutClassRepository::new(pool),
        }
    }

    /// Add a workout class
    pub async fn add(&self, class: &WorkoutClass) -> ServiceResult<WorkoutClass> {
        let mut created = class.clone();
        created.id = self.classes.create(class).await?;
        info!(class_type = %created.class_type, id = created.id, "workout class added");
        Ok(created)
    }

    /// Get a workout class by id
    pub async fn get(&self, id: i64) -> ServiceResult<Option<WorkoutClass>> {
        let class = self.classes.find_by_id(id).await?;
        if class.is_none() {
            warn!(id, "workout class not found");
        }
        Ok(class)
    }

    /// Get all workout classes
    pub async fn all(&self) -> ServiceResult<Vec<WorkoutClass>> {
        Ok(self.classes.find_all().await?)
    }

    /// Get all classes run by one trainer
    pub async fn for_trainer(&self, trainer_id: i64) -> ServiceResult<Vec<WorkoutClass>> {
        Ok(self.classes.find_by_trainer(trainer_id).await?)
    }

    /// Update a workout class (full field set)
    pub async fn update(&self, class: &WorkoutClass) -> ServiceResult<()> {
        self.classes.update(class).await?;
        info!(id = class.id, "workout class updated");
        Ok(())
    }

    /// Delete a workout class by id
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.classes.delete(id).await?;
        info!(id, "workout class deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{Registration, UserService};
    use gymdesk_storage::connection::Database;

    async fn setup() -> (Database, WorkoutClassService, i64) {
        let db = Database::in_memory().await.unwrap();
        let users = UserService::new(db.pool().clone());
        let trainer = users
            .register(Registration {
                username: "trainer".to_string(),
                email: "trainer@test.com".to_string(),
                phone: "5550100".to_string(),
                address: "1 Gym Way".to_string(),
                role: "Trainer".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        let service = WorkoutClassService::new(db.pool().clone());
        (db, service, trainer.id)
    }

    #[tokio::test]
    async fn test_add_and_list_for_trainer() {
        let (_db, service, trainer_id) = setup().await;

        let created = service
            .add(&WorkoutClass::new("Yoga", "Morning yoga", trainer_id))
            .await
            .unwrap();
        assert!(created.id > 0);

        let mine = service.for_trainer(trainer_id).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].class_type, "Yoga");

        assert!(service.for_trainer(9999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (_db, service, trainer_id) = setup().await;

        let created = service
            .add(&WorkoutClass::new("Spin", "", trainer_id))
            .await
            .unwrap();

        let mut class = service.get(created.id).await.unwrap().unwrap();
        class.description = "Evening spin".to_string();
        service.update(&class).await.unwrap();

        let found = service.get(created.id).await.unwrap().unwrap();
        assert_eq!(found.description, "Evening spin");

        service.delete(created.id).await.unwrap();
        assert!(service.get(created.id).await.unwrap().is_none());
    }
}
