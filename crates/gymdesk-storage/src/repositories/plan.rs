#![allow(async_fn_in_trait)]

use crate::error::StorageResult;
use crate::models::MembershipPlan;
use sqlx::SqlitePool;

/// Repository trait for the read-mostly membership plan catalog
///
/// Plans are seeded by migration and only ever read at purchase time, so
/// there is no write surface here.
pub trait PlanRepository: Send + Sync {
    /// Get all plans in the catalog
    async fn find_all(&self) -> StorageResult<Vec<MembershipPlan>>;

    /// Find a plan by id
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<MembershipPlan>>;
}

/// SQLite implementation of PlanRepository
pub struct SqlitePlanRepository {
    pool: SqlitePool,
}

impl SqlitePlanRepository {
    /// Create a new SQLite plan repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlanRepository for SqlitePlanRepository {
    async fn find_all(&self) -> StorageResult<Vec<MembershipPlan>> {
        let plans = sqlx::query_as::<_, MembershipPlan>(
            "SELECT id, plan_type, description, price FROM membership_plans ORDER BY price",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<MembershipPlan>> {
        let plan = sqlx::query_as::<_, MembershipPlan>(
            "SELECT id, plan_type, description, price FROM membership_plans WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Database;

    #[tokio::test]
    async fn test_seeded_catalog_is_present() {
        let db = Database::in_memory().await.unwrap();
        let repo = SqlitePlanRepository::new(db.pool().clone());

        let plans = repo.find_all().await.unwrap();
        assert_eq!(plans.len(), 3);

        let types: Vec<&str> = plans.iter().map(|p| p.plan_type.as_str()).collect();
        assert_eq!(types, vec!["Standard", "Premium", "VIP"]);

        let standard = plans.iter().find(|p| p.plan_type == "Standard").unwrap();
        assert_eq!(standard.price, 49.99);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let db = Database::in_memory().await.unwrap();
        let repo = SqlitePlanRepository::new(db.pool().clone());

        let plans = repo.find_all().await.unwrap();
        let first = &plans[0];

        let found = repo.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(found.plan_type, first.plan_type);

        assert!(repo.find_by_id(9999).await.unwrap().is_none());
    }
}
