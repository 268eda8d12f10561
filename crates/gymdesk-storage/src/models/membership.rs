use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MembershipPlan;

/// Membership entity: a purchased (or manually created) subscription owned
/// by one member.
///
/// # Fields
///
/// * `id` - Auto-increment primary key
/// * `membership_type` - Tier label (e.g. "Standard", "Premium", "VIP")
/// * `description` - Human-readable description of what the tier includes
/// * `cost` - Price paid, in dollars; summed by the revenue report
/// * `member_id` - Owning `users` row; by convention a row with role Member
/// * `created_at` - Record creation timestamp
/// * `updated_at` - Record last modification timestamp
///
/// # Database Schema
///
/// Maps to the `memberships` table. `member_id` is a real foreign key to
/// `users` (cascade on delete), but nothing enforces that the referenced
/// row has the Member role; that remains a convention of the menus.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membership {
    /// Auto-increment primary key
    pub id: i64,

    /// Tier label
    pub membership_type: String,

    /// What the tier includes
    pub description: String,

    /// Price paid in dollars
    pub cost: f64,

    /// Owning users row
    pub member_id: i64,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Record last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    /// Build a membership record ready for insertion.
    pub fn new(
        membership_type: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
        member_id: i64,
    ) -> Self {
        Self {
            id: 0,
            membership_type: membership_type.into(),
            description: description.into(),
            cost,
            member_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Instantiate a membership from a catalog plan for the given member.
    ///
    /// The plan's type, description and price are copied at purchase time;
    /// later edits to the catalog do not retroactively change purchases.
    pub fn from_plan(plan: &MembershipPlan, member_id: i64) -> Self {
        Self::new(
            plan.plan_type.clone(),
            plan.description.clone(),
            plan.price,
            member_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plan_copies_catalog_fields() {
        let plan = MembershipPlan {
            id: 3,
            plan_type: "VIP".to_string(),
            description: "All access".to_string(),
            price: 99.99,
        };

        let membership = Membership::from_plan(&plan, 42);

        assert_eq!(membership.id, 0);
        assert_eq!(membership.membership_type, "VIP");
        assert_eq!(membership.description, "All access");
        assert_eq!(membership.cost, 99.99);
        assert_eq!(membership.member_id, 42);
    }
}
