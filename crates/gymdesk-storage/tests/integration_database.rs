//! Integration tests for database connection and pooling
//!
//! These tests run against an in-memory SQLite database and validate
//! migrations, concurrent pool access, and cross-repository behavior.
//!
//! Run with: cargo test --package gymdesk-storage --test integration_database

use std::sync::Arc;
use tokio::sync::Barrier;

use gymdesk_storage::connection::Database;
use gymdesk_storage::models::{Membership, Role, User, WorkoutClass};
use gymdesk_storage::repositories::{
    MembershipRepository, PlanRepository, SqliteMembershipRepository, SqlitePlanRepository,
    SqliteUserRepository, SqliteWorkoutClassRepository, UserRepository, WorkoutClassRepository,
};

fn person(username: &str, email: &str, role: Role) -> User {
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
async fn test_in_memory_database() {
    let db = Database::in_memory().await.unwrap();
    db.health_check().await.unwrap();
    db.close().await;
}

#[tokio::test]
async fn test_migration_idempotency() {
    let db = Database::in_memory().await.unwrap();

    db.migrate().await.unwrap();
    db.migrate().await.unwrap();

    let result: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='users'")
            .fetch_one(db.pool())
            .await
            .unwrap();

    assert_eq!(result.0, 1);

    // Seed migration must not duplicate the plan catalog either.
    let plans = SqlitePlanRepository::new(db.pool().clone())
        .find_all()
        .await
        .unwrap();
    assert_eq!(plans.len(), 3);

    db.close().await;
}

#[tokio::test]
async fn test_concurrent_pool_access() {
    let db = Database::in_memory().await.unwrap();

    const NUM_CONCURRENT_TASKS: usize = 10;
    let barrier = Arc::new(Barrier::new(NUM_CONCURRENT_TASKS));

    let mut handles = vec![];

    for i in 0..NUM_CONCURRENT_TASKS {
        let db_clone = db.clone();
        let barrier_clone = barrier.clone();

        let handle = tokio::spawn(async move {
            barrier_clone.wait().await;

            let result: Result<(i64,), sqlx::Error> = sqlx::query_as("SELECT ?")
                .bind(i as i64)
                .fetch_one(db_clone.pool())
                .await;

            result.unwrap()
        });

        handles.push(handle);
    }

    let results: Vec<_> = futures::future::join_all(handles).await;

    assert_eq!(results.len(), NUM_CONCURRENT_TASKS);
    for (i, result) in results.into_iter().enumerate() {
        let value = result.unwrap();
        assert_eq!(value.0, i as i64);
    }

    db.close().await;
}

/// Full entity lifecycle across repositories on one shared table:
/// role-scoped visibility plus cascade behavior on user deletion.
#[tokio::test]
async fn test_cross_entity_lifecycle() {
    let db = Database::in_memory().await.unwrap();
    let users = SqliteUserRepository::new(db.pool().clone());
    let memberships = SqliteMembershipRepository::new(db.pool().clone());
    let classes = SqliteWorkoutClassRepository::new(db.pool().clone());

    let trainer_id = users
        .create(&person("cora", "cora@test.com", Role::Trainer))
        .await
        .unwrap();
    let member_id = users
        .create(&person("drew", "drew@test.com", Role::Member))
        .await
        .unwrap();

    classes
        .create(&WorkoutClass::new("Spin", "Evening spin", trainer_id))
        .await
        .unwrap();
    memberships
        .create(&Membership::new("Standard", "Basic", 49.99, member_id))
        .await
        .unwrap();

    assert_eq!(users.find_all().await.unwrap().len(), 2);
    assert_eq!(classes.find_by_trainer(trainer_id).await.unwrap().len(), 1);
    assert!((memberships.total_revenue().await.unwrap() - 49.99).abs() < 1e-9);

    // Deleting the trainer cascades their classes but leaves the member's data.
    users.delete(trainer_id).await.unwrap();
    assert!(classes.find_all().await.unwrap().is_empty());
    assert_eq!(memberships.find_all().await.unwrap().len(), 1);

    db.close().await;
}
