use serde::{Deserialize, Serialize};

/// Catalog template from which a purchased membership is instantiated.
///
/// Plans are read-mostly: the catalog is seeded by migration and browsed
/// by the purchase flow, which copies the plan's fields into a new
/// `Membership` row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MembershipPlan {
    /// Auto-increment primary key
    pub id: i64,

    /// Tier label offered to buyers
    pub plan_type: String,

    /// What the tier includes
    pub description: String,

    /// Purchase price in dollars
    pub price: f64,
}
