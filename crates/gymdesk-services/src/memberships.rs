//! Membership management: CRUD pass-throughs, plan purchase, and the
//! revenue/expense reports derived from membership costs.

use gymdesk_storage::models::{Membership, MembershipPlan};
use gymdesk_storage::repositories::{
    MembershipRepository, PlanRepository, SqliteMembershipRepository, SqlitePlanRepository,
};
use gymdesk_storage::{StorageError, transaction};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};

/// Service for membership operations.
///
/// Holds the pool directly so the purchase flow can group the catalog read
/// and the membership insert into one transaction.
pub struct MembershipService {
    pool: SqlitePool,
    memberships: SqliteMembershipRepository,
    plans: SqlitePlanRepository,
}

impl MembershipService {
    /// Create a membership service over the given pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            memberships: SqliteMembershipRepository::new(pool.clone()),
            plans: SqlitePlanRepository::new(pool.clone()),
            pool,
        }
    }

    /// All plans currently in the catalog
    pub async fn available_plans(&self) -> ServiceResult<Vec<MembershipPlan>> {
        Ok(self.plans.find_all().await?)
    }

    /// Purchase the given plan for the given member.
    ///
    /// The catalog read and the membership insert run in a single
    /// transaction: either the member ends up with the membership priced
    /// exactly as the plan said, or nothing is written at all.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PlanNotFound`] if the plan id is not in the
    /// catalog; storage failures (including a missing member row) roll the
    /// transaction back.
    pub async fn purchase_plan(&self, plan_id: i64, member_id: i64) -> ServiceResult<Membership> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let Some(plan) = transaction::find_plan(&mut tx, plan_id).await? else {
            warn!(plan_id, "requested plan not found");
            return Err(ServiceError::PlanNotFound(plan_id));
        };

        let mut membership = Membership::from_plan(&plan, member_id);
        membership.id = transaction::create_membership(&mut tx, &membership).await?;

        tx.commit().await.map_err(StorageError::from)?;

        info!(
            plan = %plan.plan_type,
            member_id,
            id = membership.id,
            "membership purchased"
        );
        Ok(membership)
    }

    /// Add a membership with explicitly supplied fields
    pub async fn add(&self, membership: &Membership) -> ServiceResult<Membership> {
        let mut created = membership.clone();
        created.id = self.memberships.create(membership).await?;
        info!(membership_type = %created.membership_type, id = created.id, "membership added");
        Ok(created)
    }

    /// Get a membership by id
    pub async fn get(&self, id: i64) -> ServiceResult<Option<Membership>> {
        let membership = self.memberships.find_by_id(id).await?;
        if membership.is_none() {
            warn!(id, "membership not found");
        }
        Ok(membership)
    }

    /// Get all memberships
    pub async fn all(&self) -> ServiceResult<Vec<Membership>> {
        let memberships = self.memberships.find_all().await?;
        info!(count = memberships.len(), "retrieved memberships");
        Ok(memberships)
    }

    /// Get all memberships owned by one member
    pub async fn for_member(&self, member_id: i64) -> ServiceResult<Vec<Membership>> {
        Ok(self.memberships.find_by_member(member_id).await?)
    }

    /// Update a membership (full field set)
    pub async fn update(&self, membership: &Membership) -> ServiceResult<()> {
        self.memberships.update(membership).await?;
        info!(id = membership.id, "membership updated");
        Ok(())
    }

    /// Delete a membership by id
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.memberships.delete(id).await?;
        info!(id, "membership deleted");
        Ok(())
    }

    /// Total revenue: sum of cost over all memberships, recomputed from
    /// scratch on each call. 0.0 when there are none.
    pub async fn total_revenue(&self) -> ServiceResult<f64> {
        Ok(self.memberships.total_revenue().await?)
    }

    /// One member's total membership expenses. 0.0 when they have none.
    pub async fn member_expenses(&self, member_id: i64) -> ServiceResult<f64> {
        Ok(self.memberships.expenses_for_member(member_id).await?)
    }
}
